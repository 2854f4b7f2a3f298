use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use std::future::Future;

use crate::api::ApiError;

/// Lifecycle of a fetch-on-mount view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error { message: String },
    Success(T),
}

impl<T> FetchState<T> {
    /// Settles a finished request. The detailed error only goes to the log;
    /// views get the static `failure_message`.
    pub fn settle(result: Result<T, ApiError>, failure_message: &str) -> Self {
        match result {
            Ok(data) => FetchState::Success(data),
            Err(e) => {
                error!("[fetch] {failure_message}: {e}");
                FetchState::Error {
                    message: failure_message.to_string(),
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(d) => Some(d),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Runs `fetcher` once when the calling component mounts. The request is
/// owned by the component scope, so a response that lands after unmount is
/// dropped with it.
pub fn use_fetch<T, F, Fut>(failure_message: &'static str, mut fetcher: F) -> FetchState<T>
where
    T: Clone + 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let resource = use_resource(move || {
        let fut = fetcher();
        async move { FetchState::settle(fut.await, failure_message) }
    });
    let state = resource.read_unchecked().clone();
    state.unwrap_or(FetchState::Loading)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_err() -> ApiError {
        ApiError::Status {
            method: "GET".into(),
            url: "http://localhost:8000/forecast".into(),
            status: 503,
        }
    }

    #[test]
    fn failure_never_stays_loading() {
        let s: FetchState<u8> = FetchState::settle(Err(status_err()), "Failed to load forecast");
        assert!(!s.is_loading());
        assert_eq!(s.error(), Some("Failed to load forecast"));
        assert!(s.data().is_none());
    }

    #[test]
    fn success_carries_data_only() {
        let s = FetchState::settle(Ok(7u8), "Failed to load history");
        assert!(!s.is_loading());
        assert_eq!(s.data(), Some(&7));
        assert!(s.error().is_none());
    }

    #[test]
    fn message_hides_error_details() {
        let s: FetchState<()> = FetchState::settle(Err(status_err()), "Failed to load forecast");
        let msg = s.error().unwrap();
        assert!(!msg.contains("503"));
        assert!(!msg.contains("localhost"));
    }
}
