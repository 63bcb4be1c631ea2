use nav_core::model::{Locale, NavigationStatus};

/// UI-ready summary of the road currently being travelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentRoadVm {
    pub name: String,
    pub shield: Option<ShieldBadgeVm>,
    pub image_base_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShieldBadgeVm {
    pub label: String,
    pub sprite: String,
    pub text_color: String,
    pub base_url: String,
}

#[must_use]
pub fn map_current_road(status: &NavigationStatus, locale: &Locale) -> CurrentRoadVm {
    let image = status.route_shield_representation();
    CurrentRoadVm {
        name: status.localized_road_name(locale),
        shield: image.shield.map(|shield| ShieldBadgeVm {
            label: shield.text,
            sprite: shield.name,
            text_color: shield.text_color,
            base_url: shield.base_url.to_string(),
        }),
        image_base_url: image.image_base_url.map(|url| url.to_string()),
    }
}
