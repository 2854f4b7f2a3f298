use dioxus::prelude::*;

use crate::app::Route;
use crate::theme::use_theme;

#[allow(non_snake_case)]
#[component]
pub fn Header() -> Element {
    let theme = use_theme();
    let current = theme.theme();

    rsx! {
        div { class: "gradient-ring",
            div { class: "container mx-auto px-4 py-4 flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "w-8 h-8 rounded-full bg-indigo-500/30 ring-1 ring-indigo-400/40" }
                    span { class: "text-lg font-semibold text-indigo-200", "Hotel AI" }
                }
                nav { class: "flex items-center gap-3",
                    Link { to: Route::Dashboard {}, class: "text-slate-300 hover:text-white", "Dashboard" }
                    Link { to: Route::Prediction {}, class: "text-slate-300 hover:text-white", "Prediction" }
                    Link { to: Route::Forecast {}, class: "text-slate-300 hover:text-white", "Forecast" }
                    Link { to: Route::History {}, class: "text-slate-300 hover:text-white", "History" }
                    button {
                        class: "glass px-3 py-1 rounded-md text-sm border-indigo-400/20 hover:border-indigo-400/40",
                        onclick: move |_| theme.toggle(),
                        "{current.label()}"
                    }
                }
            }
        }
    }
}
