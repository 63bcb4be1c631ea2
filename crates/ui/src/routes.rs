use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::strings::TURN_BY_TURN_LIST_TITLE;

use crate::context::AppContext;
use crate::views::{CurrentRoadBanner, RouteLineStyleView, StepListView};
use crate::vm::StepSelection;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StepsPage)] Steps {},
        #[route("/route-line", RouteLineStyleView)] RouteLine {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "nav-header",
                CurrentRoadBanner {}
                nav {
                    Link { to: Route::Steps {}, "Steps" }
                    Link { to: Route::RouteLine {}, "Route line" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn StepsPage() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.strings().lookup(TURN_BY_TURN_LIST_TITLE).to_owned();
    let mut selected = use_signal(|| None::<StepSelection>);
    let selected_label = selected().map(|selection| {
        format!(
            "Leg {}, step {}",
            selection.leg_index + 1,
            selection.step_index + 1
        )
    });

    rsx! {
        div { class: "page",
            h2 { class: "step-list-title", "{title}" }
            if let Some(label) = selected_label {
                p { class: "step-selected", "{label}" }
            }
            StepListView {
                on_step_selected: move |selection: StepSelection| {
                    log::info!(
                        "step selected: leg {} step {}",
                        selection.leg_index,
                        selection.step_index
                    );
                    selected.set(Some(selection));
                }
            }
        }
    }
}
