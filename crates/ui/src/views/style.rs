use dioxus::prelude::*;

use crate::context::AppContext;

/// Style expressions handed to the map surface for the route line layer.
#[component]
pub fn RouteLineStyleView() -> Element {
    let ctx = use_context::<AppContext>();
    let config = ctx.config();
    let width = config.route_line_width().to_string();
    let gradient = config.route_line_gradient().to_string();

    rsx! {
        div { class: "page",
            h2 { "Route line" }
            h3 { "line-width" }
            pre { class: "expression", "{width}" }
            h3 { "line-gradient" }
            pre { class: "expression", "{gradient}" }
        }
    }
}
