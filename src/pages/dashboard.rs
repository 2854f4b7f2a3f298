use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::app::Route;
use crate::fetch::{use_fetch, FetchState};

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let api = use_context::<ApiClient>();
    let base_url = api.base_url().to_string();
    let status = use_fetch("Failed to reach the prediction service", move || {
        let api = api.clone();
        async move { api.health().await }
    });

    rsx! {
        div { class: "grid md:grid-cols-2 gap-6",
            section { class: "glass rounded-xl p-6",
                h2 { class: "text-xl font-semibold text-indigo-200", "Welcome" }
                p { class: "text-slate-300 mt-2",
                    "Explore predictions and 12-week forecasts. Use the top navigation to access pages."
                }
            }
            section { class: "glass rounded-xl p-6",
                h2 { class: "text-xl font-semibold text-indigo-200", "Quick Links" }
                div { class: "mt-4 flex flex-wrap gap-3",
                    Link { to: Route::Prediction {}, class: "glass px-4 py-2 rounded border border-indigo-400/30", "Prediction" }
                    Link { to: Route::Forecast {}, class: "glass px-4 py-2 rounded border border-indigo-400/30", "Forecast" }
                    Link { to: Route::History {}, class: "glass px-4 py-2 rounded border border-indigo-400/30", "History" }
                }
            }
            section { class: "glass rounded-xl p-6 md:col-span-2",
                h2 { class: "text-xl font-semibold text-indigo-200", "Service" }
                div { class: "mt-2 text-xs text-slate-400", "{base_url}" }
                {
                    match status {
                        FetchState::Loading => rsx! {
                            div { class: "animate-pulse mt-3 h-4 w-56 bg-slate-800 rounded" }
                        },
                        FetchState::Error { message } => rsx! {
                            p { class: "mt-3 text-red-300", "{message}" }
                        },
                        FetchState::Success(health) => rsx! {
                            p { class: "mt-3 text-emerald-400", "{health.message}" }
                        },
                    }
                }
            }
        }
    }
}
