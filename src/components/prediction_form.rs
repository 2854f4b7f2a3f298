use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::components::RiskGauge;
use crate::shared::fields::{BookingField, FieldInput};
use crate::shared::types::{PredictionRequest, PredictionResult};

pub const STEP_TITLES: [&str; 3] = ["Stay", "Room", "Guest"];

/// Fields shown on each wizard step. Together they cover the whole record.
pub fn step_fields(step: usize) -> &'static [BookingField] {
    use BookingField::*;
    match step {
        0 => &[
            LeadTime,
            AvgPricePerRoom,
            ArrivalYear,
            ArrivalMonth,
            ArrivalDate,
            NoOfWeekendNights,
            NoOfWeekNights,
        ],
        1 => &[
            RoomTypeReserved,
            TypeOfMealPlan,
            RequiredCarParkingSpace,
            NoOfAdults,
            NoOfChildren,
        ],
        _ => &[
            NoOfSpecialRequests,
            MarketSegmentType,
            RepeatedGuest,
            NoOfPreviousCancellations,
            NoOfPreviousBookingsNotCanceled,
        ],
    }
}

/// State of the three-step prediction wizard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    step: usize,
    pub form: PredictionRequest,
    loading: bool,
    result: Option<PredictionResult>,
}

impl Wizard {
    pub const LAST_STEP: usize = STEP_TITLES.len() - 1;

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step == Self::LAST_STEP
    }

    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    pub fn next(&mut self) {
        self.step = (self.step + 1).min(Self::LAST_STEP);
    }

    pub fn edit(&mut self, field: BookingField, raw: &str) -> bool {
        field.apply(&mut self.form, raw)
    }

    /// Marks a submission in flight and hands out the full record. `None` if
    /// one is already running.
    pub fn begin_submit(&mut self) -> Option<PredictionRequest> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.form.clone())
    }

    /// Applies the outcome. On failure the previous result stays as it was.
    pub fn finish_submit(
        &mut self,
        outcome: Result<PredictionResult, ApiError>,
    ) -> Result<(), ApiError> {
        self.loading = false;
        let res = outcome?;
        self.result = Some(res);
        Ok(())
    }
}

#[allow(non_snake_case)]
#[component]
pub fn PredictionForm() -> Element {
    let api = use_context::<ApiClient>();
    let mut wizard = use_signal(Wizard::default);

    let onpredict = move |_| {
        let Some(payload) = wizard.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        // Scoped to this component; dropped if the form unmounts first
        spawn(async move {
            let outcome = api.predict(&payload).await;
            if let Ok(r) = &outcome {
                info!("[predict] {} ({:.1})", r.prediction, r.risk_score);
            }
            if let Err(e) = wizard.write().finish_submit(outcome) {
                error!("[predict] {e}");
                let _ = document::eval(r#"alert("Prediction failed")"#);
            }
        });
    };

    let w = wizard.read();
    let step = w.step();
    let fields = step_fields(step);
    let title = STEP_TITLES[step];

    rsx! {
        div { class: "glass rounded-xl p-6",
            div { class: "flex items-center justify-between mb-4",
                div { class: "text-indigo-200 font-semibold", "Prediction Form" }
                div { class: "text-xs text-slate-400", "Step {step + 1} of {STEP_TITLES.len()}: {title}" }
            }
            for field in fields.iter().copied() {
                FieldRow { key: "{field.name()}", field, wizard }
            }
            div { class: "mt-4 flex justify-between",
                button {
                    class: "glass px-4 py-2 rounded border border-indigo-400/30 disabled:opacity-40",
                    disabled: !w.can_go_back(),
                    onclick: move |_| wizard.write().back(),
                    "Back"
                }
                if w.is_last_step() {
                    button {
                        class: "glass px-4 py-2 rounded border border-indigo-400/30 disabled:opacity-40",
                        disabled: w.is_loading(),
                        onclick: onpredict,
                        if w.is_loading() { "Predicting..." } else { "Predict" }
                    }
                } else {
                    button {
                        class: "glass px-4 py-2 rounded border border-indigo-400/30",
                        onclick: move |_| wizard.write().next(),
                        "Next"
                    }
                }
            }
            if let Some(res) = w.result() {
                div { class: "mt-6 grid md:grid-cols-2 gap-4",
                    RiskGauge { score: res.risk_score }
                    div { class: "glass rounded-xl p-6",
                        div { class: "text-slate-300", "Prediction" }
                        div { class: "text-2xl font-semibold text-indigo-200", "{res.prediction}" }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn FieldRow(field: BookingField, wizard: Signal<Wizard>) -> Element {
    let mut wizard = wizard;
    let value = field.value(&wizard.read().form);
    let name = field.name();
    let input_class = "glass w-full rounded px-3 py-2";
    let step_attr = if field.input() == FieldInput::Decimal { "any" } else { "1" };

    rsx! {
        div { class: "mb-4",
            div { class: "flex items-center justify-between",
                label { class: "text-slate-200", r#for: "{name}", "{name}" }
                if let Some(hint) = field.hint() {
                    span { class: "tooltip text-xs text-slate-400", "{hint}" }
                }
            }
            {match field.input() {
                FieldInput::Choice(options) => rsx! {
                    select {
                        id: "{name}",
                        class: input_class,
                        value: "{value}",
                        onchange: move |evt: FormEvent| {
                            wizard.write().edit(field, &evt.value());
                        },
                        for opt in options.iter() {
                            option { key: "{opt}", value: "{opt}", selected: *opt == value, "{opt}" }
                        }
                    }
                },
                FieldInput::Integer | FieldInput::Decimal => rsx! {
                    input {
                        id: "{name}",
                        r#type: "number",
                        step: step_attr,
                        class: input_class,
                        value: "{value}",
                        oninput: move |evt: FormEvent| {
                            wizard.write().edit(field, &evt.value());
                        },
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ok_result(score: f64, prediction: &str) -> Result<PredictionResult, ApiError> {
        Ok(PredictionResult {
            risk_score: score,
            prediction: prediction.into(),
            cancellation_probability: None,
        })
    }

    fn failure() -> Result<PredictionResult, ApiError> {
        Err(ApiError::Status {
            method: "POST".into(),
            url: "http://localhost:8000/predict".into(),
            status: 500,
        })
    }

    #[test]
    fn steps_cover_every_field_once() {
        let mut seen = HashSet::new();
        for step in 0..=Wizard::LAST_STEP {
            for f in step_fields(step) {
                assert!(seen.insert(*f), "{} listed twice", f.name());
            }
        }
        assert_eq!(seen.len(), BookingField::ALL.len());
    }

    #[test]
    fn back_at_first_step_is_noop() {
        let mut w = Wizard::default();
        assert!(!w.can_go_back());
        w.back();
        assert_eq!(w.step(), 0);
    }

    #[test]
    fn next_stops_at_last_step() {
        let mut w = Wizard::default();
        w.next();
        w.next();
        assert!(w.is_last_step());
        w.next();
        assert_eq!(w.step(), Wizard::LAST_STEP);
        w.back();
        assert_eq!(w.step(), 1);
    }

    #[test]
    fn submit_sends_fields_from_every_step() {
        let mut w = Wizard::default();
        assert!(w.edit(BookingField::LeadTime, "120"));
        w.next();
        assert!(w.edit(BookingField::RoomTypeReserved, "Room_Type 6"));
        w.next();
        assert!(w.edit(BookingField::MarketSegmentType, "Corporate"));

        let sent = w.begin_submit().unwrap();
        assert_eq!(sent.lead_time, 120);
        assert_eq!(sent.room_type_reserved, "Room_Type 6");
        assert_eq!(sent.market_segment_type, "Corporate");
        assert_eq!(sent.no_of_adults, 2);
    }

    #[test]
    fn no_second_submission_while_in_flight() {
        let mut w = Wizard::default();
        assert!(w.begin_submit().is_some());
        assert!(w.is_loading());
        assert!(w.begin_submit().is_none());
        w.finish_submit(ok_result(10.0, "Not_Canceled")).unwrap();
        assert!(!w.is_loading());
        assert!(w.begin_submit().is_some());
    }

    #[test]
    fn default_form_prediction_is_stored() {
        let mut w = Wizard::default();
        w.begin_submit();
        w.finish_submit(ok_result(72.3, "Canceled")).unwrap();
        let r = w.result().unwrap();
        assert_eq!(r.risk_score, 72.3);
        assert_eq!(r.prediction, "Canceled");
    }

    #[test]
    fn failure_keeps_previous_state() {
        let mut w = Wizard::default();
        w.next();
        w.next();
        w.begin_submit();
        w.finish_submit(ok_result(35.0, "Not_Canceled")).unwrap();
        let before = w.clone();

        w.begin_submit();
        assert!(w.finish_submit(failure()).is_err());
        assert_eq!(w, before);
    }
}
