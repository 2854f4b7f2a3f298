pub mod fetch_view;
pub mod forecast_chart;
pub mod gauge;
pub mod header;
pub mod prediction_form;

pub use fetch_view::pending_view;
pub use forecast_chart::ForecastChart;
pub use gauge::RiskGauge;
pub use header::Header;
pub use prediction_form::PredictionForm;
