use dioxus::prelude::*;

use crate::api::{ApiClient, HISTORY_LIMIT};
use crate::components::pending_view;
use crate::fetch::use_fetch;
use crate::utils::format::{format_local, format_probability};

#[allow(non_snake_case)]
#[component]
pub fn History() -> Element {
    let api = use_context::<ApiClient>();
    let state = use_fetch("Failed to load history", move || {
        let api = api.clone();
        async move { api.history(HISTORY_LIMIT).await }
    });
    if let Some(placeholder) = pending_view(&state, "Loading history...") {
        return placeholder;
    }
    let Some(data) = state.data() else {
        return rsx! {};
    };
    let shown = data.items.len();
    let total = data.count.unwrap_or(shown);

    rsx! {
        div { class: "glass rounded-xl p-6",
            div { class: "flex items-end justify-between mb-4",
                div { class: "text-indigo-200 font-semibold", "Recent Predictions" }
                div { class: "text-xs text-slate-400", "{shown} of {total}" }
            }
            if data.items.is_empty() {
                p { class: "text-slate-300", "No predictions yet" }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "min-w-full text-sm",
                        thead {
                            tr { class: "text-slate-300",
                                th { class: "text-left p-2", "Timestamp" }
                                th { class: "text-left p-2", "Risk" }
                                th { class: "text-left p-2", "Prediction" }
                                th { class: "text-left p-2", "Lead Time" }
                                th { class: "text-left p-2", "Room Type" }
                            }
                        }
                        tbody {
                            for (i, it) in data.items.iter().enumerate() {
                                tr { key: "{i}", class: "border-t border-indigo-400/10",
                                    td { class: "p-2 text-slate-300",
                                        time { datetime: "{it.timestamp}", "{format_local(&it.timestamp)}" }
                                    }
                                    td { class: "p-2 tabular-nums", "{format_probability(it.probability)}" }
                                    td { class: "p-2", "{it.prediction}" }
                                    td { class: "p-2 tabular-nums", "{it.payload.lead_time}" }
                                    td { class: "p-2", "{it.payload.room_type_reserved}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
