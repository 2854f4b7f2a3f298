use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{pending_view, ForecastChart};
use crate::fetch::use_fetch;
use crate::utils::format::format_bookings;

#[allow(non_snake_case)]
#[component]
pub fn Forecast() -> Element {
    let api = use_context::<ApiClient>();
    let state = use_fetch("Failed to load forecast", move || {
        let api = api.clone();
        async move { api.forecast().await }
    });
    if let Some(placeholder) = pending_view(&state, "Loading forecast...") {
        return placeholder;
    }
    let Some(data) = state.data().cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "glass rounded-xl p-6",
            div { class: "flex items-end justify-between mb-4",
                div { class: "text-indigo-200 font-semibold", "12-Week Booking Outlook" }
                if let Some(trend) = data.current_trend {
                    div { class: "text-xs text-slate-400", "Last week: {format_bookings(trend)} bookings" }
                }
            }
            ForecastChart {
                observed: data.observed,
                forecast: data.forecast,
                ci: data.confidence_intervals,
            }
        }
    }
}
