use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::Header;
use crate::pages::{Dashboard, Forecast, History, Prediction};
use crate::settings;
use crate::storage::default_store;
use crate::theme::{use_theme, use_theme_provider};
use crate::{FAVICON, MAIN_CSS, TAILWIND_CDN};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Dashboard {},
        #[route("/prediction")]
        Prediction {},
        #[route("/forecast")]
        Forecast {},
        #[route("/history")]
        History {},
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_theme_provider(default_store);
    use_context_provider(|| ApiClient::new(settings::get().api_base_url.clone()));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Script { src: "{TAILWIND_CDN}" }
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        Router::<Route> {}
    }
}

/// Page chrome shared by every route.
#[allow(non_snake_case)]
#[component]
fn Shell() -> Element {
    let theme = use_theme().theme();

    rsx! {
        div { class: "{theme.page_class()}",
            Header {}
            main { class: "container mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
        }
    }
}
