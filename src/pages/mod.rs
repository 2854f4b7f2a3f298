pub mod dashboard;
pub mod forecast;
pub mod history;
pub mod prediction;

pub use dashboard::Dashboard;
pub use forecast::Forecast;
pub use history::History;
pub use prediction::Prediction;
