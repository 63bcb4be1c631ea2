use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::instruction::{ImageRepresentation, ShieldRepresentation};
use crate::model::locale::Locale;

/// Entry separating the same road's name in different scripts.
pub const NAME_DELIMITER: &str = "/";

/// Shield metadata attached to a road name by the navigation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadShield {
    /// Sprite endpoint; unparsed, may be malformed.
    pub base_url: String,
    pub name: String,
    pub display_ref: String,
    pub text_color: String,
}

/// One per-language name of the road currently being travelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadName {
    pub text: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub shield: Option<RoadShield>,
    #[serde(default)]
    pub image_base_url: Option<String>,
}

impl RoadName {
    #[must_use]
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            shield: None,
            image_base_url: None,
        }
    }

    #[must_use]
    pub fn delimiter() -> Self {
        Self::new(NAME_DELIMITER, "")
    }

    #[must_use]
    pub fn is_delimiter(&self) -> bool {
        self.text == NAME_DELIMITER
    }
}

/// Status snapshot pushed by the navigation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationStatus {
    #[serde(default)]
    pub roads: Vec<RoadName>,
}

impl NavigationStatus {
    #[must_use]
    pub fn new(roads: Vec<RoadName>) -> Self {
        Self { roads }
    }

    /// Default-locale road name: every entry before the first delimiter, space-joined.
    #[must_use]
    pub fn road_name(&self) -> String {
        self.roads
            .iter()
            .take_while(|road| !road.is_delimiter())
            .map(|road| road.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The entry matching `locale`'s language, falling back to [`Self::road_name`].
    #[must_use]
    pub fn localized_road_name(&self, locale: &Locale) -> String {
        self.roads
            .iter()
            .find(|road| road.language == locale.language_code())
            .map_or_else(|| self.road_name(), |road| road.text.clone())
    }

    /// Image sources for the current road's shield.
    ///
    /// Malformed URLs are treated as absent.
    #[must_use]
    pub fn route_shield_representation(&self) -> ImageRepresentation {
        let shield = self
            .roads
            .iter()
            .find_map(|road| road.shield.as_ref())
            .and_then(|shield| match Url::parse(&shield.base_url) {
                Ok(base_url) => Some(ShieldRepresentation {
                    base_url,
                    name: shield.name.clone(),
                    text_color: shield.text_color.clone(),
                    text: shield.display_ref.clone(),
                }),
                Err(err) => {
                    log::debug!("ignoring shield with malformed base url {:?}: {err}", shield.base_url);
                    None
                }
            });

        let image_base_url = self
            .roads
            .iter()
            .filter_map(|road| road.image_base_url.as_deref())
            .find(|raw| !raw.is_empty())
            .and_then(|raw| match Url::parse(raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    log::debug!("ignoring malformed image base url {raw:?}: {err}");
                    None
                }
            });

        ImageRepresentation {
            image_base_url,
            shield,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shield(base_url: &str) -> RoadShield {
        RoadShield {
            base_url: base_url.to_owned(),
            name: "us-interstate".to_owned(),
            display_ref: "95".to_owned(),
            text_color: "white".to_owned(),
        }
    }

    fn multilingual() -> NavigationStatus {
        NavigationStatus::new(vec![
            RoadName::new("Main St", "en"),
            RoadName::delimiter(),
            RoadName::new("主街", "zh"),
        ])
    }

    #[test]
    fn road_name_stops_at_delimiter() {
        assert_eq!(multilingual().road_name(), "Main St");
    }

    #[test]
    fn road_name_joins_segments_with_space() {
        let status = NavigationStatus::new(vec![
            RoadName::new("I-95", "en"),
            RoadName::new("North", "en"),
        ]);
        assert_eq!(status.road_name(), "I-95 North");
    }

    #[test]
    fn localized_road_name_prefers_language_match() {
        let status = multilingual();
        assert_eq!(status.localized_road_name(&Locale::parse("zh-Hans").unwrap()), "主街");
        assert_eq!(status.localized_road_name(&Locale::parse("en_GB").unwrap()), "Main St");
    }

    #[test]
    fn localized_road_name_falls_back_to_default_name() {
        let status = multilingual();
        assert_eq!(status.localized_road_name(&Locale::parse("fr").unwrap()), "Main St");
    }

    #[test]
    fn empty_status_has_empty_name_and_no_images() {
        let status = NavigationStatus::default();
        assert_eq!(status.road_name(), "");
        assert!(status.route_shield_representation().is_empty());
    }

    #[test]
    fn shield_from_first_road_with_metadata() {
        let mut first = RoadName::new("I-95", "en");
        first.shield = Some(shield("https://api.example.com/shields/v1/streets"));
        let mut second = RoadName::new("Other", "en");
        second.shield = Some(shield("https://other.example.com/"));
        let status = NavigationStatus::new(vec![first, second]);

        let image = status.route_shield_representation();
        let shield = image.shield.unwrap();
        assert_eq!(shield.base_url.host_str(), Some("api.example.com"));
        assert_eq!(shield.text, "95");
        assert_eq!(shield.name, "us-interstate");
        assert!(image.image_base_url.is_none());
    }

    #[test]
    fn malformed_shield_url_is_absent_but_image_url_survives() {
        let mut road = RoadName::new("I-95", "en");
        road.shield = Some(shield("not a url"));
        let mut other = RoadName::new("I-95", "en");
        other.image_base_url = Some(String::new());
        let mut third = RoadName::new("I-95", "en");
        third.image_base_url = Some("https://img.example.com/i95".to_owned());
        let status = NavigationStatus::new(vec![road, other, third]);

        let image = status.route_shield_representation();
        assert!(image.shield.is_none());
        assert_eq!(
            image.image_base_url.map(|url| url.to_string()),
            Some("https://img.example.com/i95".to_owned())
        );
    }

    #[test]
    fn malformed_image_url_is_absent() {
        let mut road = RoadName::new("I-95", "en");
        road.image_base_url = Some("::::".to_owned());
        let status = NavigationStatus::new(vec![road]);
        assert!(status.route_shield_representation().image_base_url.is_none());
    }

    proptest! {
        #[test]
        fn road_name_never_reaches_past_delimiter(
            before in prop::collection::vec("[a-zA-Z ]{1,8}", 0..4),
            after in prop::collection::vec("[a-zA-Z]{1,8}", 1..4),
        ) {
            let mut roads: Vec<RoadName> = before.iter().map(|t| RoadName::new(t.clone(), "en")).collect();
            roads.push(RoadName::delimiter());
            roads.extend(after.iter().map(|t| RoadName::new(format!("zz{t}"), "xx")));
            let name = NavigationStatus::new(roads).road_name();
            prop_assert_eq!(name, before.join(" "));
        }
    }
}
