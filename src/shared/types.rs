use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },
    #[error("{series} point at {date} has type {kind:?}")]
    MislabeledPoint {
        series: &'static str,
        date: String,
        kind: SeriesKind,
    },
    #[error("confidence interval at {date} has lower {lower} above upper {upper}")]
    InvertedBand { date: String, lower: f64, upper: f64 },
}

/// Checks a decoded payload before it is handed to the views.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn finite(field: &'static str, v: f64) -> Result<(), ValidationError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub no_of_adults: i32,
    pub no_of_children: i32,
    pub no_of_weekend_nights: i32,
    pub no_of_week_nights: i32,
    pub type_of_meal_plan: String,
    pub required_car_parking_space: i32,
    pub room_type_reserved: String,
    pub lead_time: i32,
    pub arrival_year: i32,
    pub arrival_month: i32,
    pub arrival_date: i32,
    pub market_segment_type: String,
    pub repeated_guest: i32,
    pub no_of_previous_cancellations: i32,
    pub no_of_previous_bookings_not_canceled: i32,
    pub avg_price_per_room: f64,
    pub no_of_special_requests: i32,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            no_of_adults: 2,
            no_of_children: 0,
            no_of_weekend_nights: 1,
            no_of_week_nights: 2,
            type_of_meal_plan: "Meal Plan 1".into(),
            required_car_parking_space: 0,
            room_type_reserved: "Room_Type 1".into(),
            lead_time: 30,
            arrival_year: 2018,
            arrival_month: 8,
            arrival_date: 12,
            market_segment_type: "Online".into(),
            repeated_guest: 0,
            no_of_previous_cancellations: 0,
            no_of_previous_bookings_not_canceled: 0,
            avg_price_per_room: 100.0,
            no_of_special_requests: 0,
        }
    }
}

impl Validate for PredictionRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        finite("avg_price_per_room", self.avg_price_per_room)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk_score: f64,
    pub prediction: String,
    #[serde(default)]
    pub cancellation_probability: Option<f64>,
}

impl Validate for PredictionResult {
    fn validate(&self) -> Result<(), ValidationError> {
        finite("risk_score", self.risk_score)?;
        if let Some(p) = self.cancellation_probability {
            finite("cancellation_probability", p)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Observed,
    Forecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String, // yyyy-mm-dd, as sent by the service
    pub bookings: f64,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub date: String,
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub observed: Vec<ForecastPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub confidence_intervals: Vec<ConfidenceInterval>,
    #[serde(default)]
    pub current_trend: Option<f64>,
}

impl Validate for ForecastResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        let series = [
            ("observed", SeriesKind::Observed, &self.observed),
            ("forecast", SeriesKind::Forecast, &self.forecast),
        ];
        for (name, kind, points) in series {
            for p in points.iter() {
                if p.kind != kind {
                    return Err(ValidationError::MislabeledPoint {
                        series: name,
                        date: p.date.clone(),
                        kind: p.kind,
                    });
                }
                finite("bookings", p.bookings)?;
            }
        }
        for ci in self.confidence_intervals.iter() {
            finite("lower", ci.lower)?;
            finite("upper", ci.upper)?;
            if ci.lower > ci.upper {
                return Err(ValidationError::InvertedBand {
                    date: ci.date.clone(),
                    lower: ci.lower,
                    upper: ci.upper,
                });
            }
        }
        if let Some(t) = self.current_trend {
            finite("current_trend", t)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub timestamp: String, // ISO-8601 from the service
    pub probability: f64,  // 0..1
    pub prediction: String,
    pub payload: PredictionRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub items: Vec<HistoryItem>,
    #[serde(default)]
    pub count: Option<usize>,
}

impl Validate for HistoryResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        for it in self.items.iter() {
            finite("probability", it.probability)?;
            it.payload.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl Validate for HealthResponse {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_serializes_all_seventeen_fields() {
        let v = serde_json::to_value(PredictionRequest::default()).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 17);
        assert_eq!(obj["type_of_meal_plan"], "Meal Plan 1");
        assert_eq!(obj["avg_price_per_room"], 100.0);
        assert_eq!(obj["arrival_year"], 2018);
    }

    #[test]
    fn forecast_point_uses_type_key() {
        let p: ForecastPoint =
            serde_json::from_str(r#"{"date":"2024-01-01","bookings":10,"type":"observed"}"#)
                .unwrap();
        assert_eq!(p.kind, SeriesKind::Observed);
        assert_eq!(p.bookings, 10.0);
    }

    #[test]
    fn forecast_rejects_inverted_band() {
        let resp = ForecastResponse {
            observed: vec![],
            forecast: vec![],
            confidence_intervals: vec![ConfidenceInterval {
                date: "2024-01-08".into(),
                lower: 15.0,
                upper: 9.0,
            }],
            current_trend: None,
        };
        assert!(matches!(
            resp.validate(),
            Err(ValidationError::InvertedBand { lower, upper, .. }) if lower == 15.0 && upper == 9.0
        ));
    }

    #[test]
    fn forecast_rejects_mislabeled_series() {
        let resp = ForecastResponse {
            observed: vec![ForecastPoint {
                date: "2024-01-01".into(),
                bookings: 3.0,
                kind: SeriesKind::Forecast,
            }],
            forecast: vec![],
            confidence_intervals: vec![],
            current_trend: None,
        };
        let err = resp.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MislabeledPoint {
                series: "observed",
                date: "2024-01-01".into(),
                kind: SeriesKind::Forecast,
            }
        );
        assert!(err.to_string().starts_with("observed point at 2024-01-01"));
    }

    #[test]
    fn history_item_requires_payload() {
        let res: Result<HistoryItem, _> = serde_json::from_str(
            r#"{"timestamp":"2024-01-01T00:00:00","probability":0.4,"prediction":"Not_Canceled"}"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn prediction_result_tolerates_missing_probability() {
        let r: PredictionResult =
            serde_json::from_str(r#"{"risk_score":72.3,"prediction":"Canceled"}"#).unwrap();
        assert_eq!(r.cancellation_probability, None);
        assert!(r.validate().is_ok());
    }

    #[test]
    fn non_finite_score_names_the_field() {
        let r = PredictionResult {
            risk_score: f64::NAN,
            prediction: "Canceled".into(),
            cancellation_probability: None,
        };
        assert_eq!(
            r.validate(),
            Err(ValidationError::NotFinite { field: "risk_score" })
        );
    }
}
