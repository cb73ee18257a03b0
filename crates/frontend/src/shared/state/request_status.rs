use crate::shared::error::ApiError;
use leptos::prelude::*;
use std::future::Future;

/// Outcome of the latest request of a store.
///
/// Starting a request moves to `Loading` and so drops any previous error;
/// `Failed` only ever holds the error of the request that just settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(ApiError),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            RequestStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Status signal of one store plus the bookkeeping every action shares.
///
/// Overlapping actions keep the status at `Loading` until the last one
/// settles; that one decides between `Succeeded` and `Failed`.
#[derive(Debug, Clone, Copy)]
pub struct RequestTracker {
    status: RwSignal<RequestStatus>,
    in_flight: StoredValue<usize>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(RequestStatus::Idle),
            in_flight: StoredValue::new(0),
        }
    }

    pub fn status(&self) -> RwSignal<RequestStatus> {
        self.status
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.with(RequestStatus::is_loading))
    }

    pub fn last_error(&self) -> Signal<Option<ApiError>> {
        let status = self.status;
        Signal::derive(move || status.with(|s| s.error().cloned()))
    }

    /// Run one store action: `Loading` while `request` (or any other
    /// tracked action) is pending, then `Succeeded` or `Failed`. The result
    /// is handed back untouched so the caller decides whether a failure
    /// propagates.
    pub async fn track<T, F>(&self, action: &'static str, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.in_flight.update_value(|n| *n += 1);
        self.status.set(RequestStatus::Loading);
        let result = request.await;
        if let Err(err) = &result {
            log::error!("{} failed: {}", action, err);
        }

        self.in_flight.update_value(|n| *n = n.saturating_sub(1));
        if self.in_flight.get_value() > 0 {
            return result;
        }
        match &result {
            Ok(_) => self.status.set(RequestStatus::Succeeded),
            Err(err) => self.status.set(RequestStatus::Failed(err.clone())),
        }
        result
    }
}
