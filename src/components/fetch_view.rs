use dioxus::prelude::*;

use crate::fetch::FetchState;

/// Placeholder card for a view that is still loading or has failed.
#[allow(non_snake_case)]
#[component]
pub fn FetchStatus(text: String, failed: bool) -> Element {
    if failed {
        return rsx! {
            div { class: "glass rounded-xl p-6 text-red-300", "{text}" }
        };
    }
    rsx! {
        div { class: "glass rounded-xl p-6 space-y-3",
            p { class: "text-slate-300", "{text}" }
            div { class: "animate-pulse space-y-3",
                div { class: "h-5 w-48 bg-slate-800 rounded" }
                div { class: "h-3 w-40 bg-slate-800 rounded" }
            }
        }
    }
}

/// `Some(placeholder)` unless the fetch succeeded, so views can return early.
pub fn pending_view<T>(state: &FetchState<T>, loading_text: &str) -> Option<Element> {
    if state.is_loading() {
        return Some(rsx! {
            FetchStatus { text: loading_text.to_string(), failed: false }
        });
    }
    state.error().map(|message| {
        rsx! {
            FetchStatus { text: message.to_string(), failed: true }
        }
    })
}
