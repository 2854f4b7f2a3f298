use dioxus::prelude::*;

use crate::components::PredictionForm;

#[allow(non_snake_case)]
#[component]
pub fn Prediction() -> Element {
    rsx! {
        div { class: "max-w-3xl mx-auto",
            PredictionForm {}
        }
    }
}
