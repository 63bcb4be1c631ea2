use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::use_feed;
use crate::vm::{CurrentRoadVm, map_current_road};

#[component]
pub fn CurrentRoadBanner() -> Element {
    let ctx = use_context::<AppContext>();
    let locale = ctx.config().locale.clone();
    let initial_locale = locale.clone();
    let mut road = use_signal(|| map_current_road(&ctx.current_status(), &initial_locale));

    use_feed(ctx.status_feed(), move |status| {
        let next = map_current_road(&status, &locale);
        if *road.peek() != next {
            road.set(next);
        }
    });

    let CurrentRoadVm {
        name,
        shield,
        image_base_url,
    } = road();

    rsx! {
        div { class: "current-road",
            if let Some(shield) = shield {
                span {
                    class: "shield",
                    "data-sprite": "{shield.sprite}",
                    "data-base-url": "{shield.base_url}",
                    style: "color: {shield.text_color}",
                    "{shield.label}"
                }
            } else if let Some(url) = image_base_url {
                img { class: "shield-image", src: "{url}", alt: "{name}" }
            }
            span { class: "road-name", "{name}" }
        }
    }
}
