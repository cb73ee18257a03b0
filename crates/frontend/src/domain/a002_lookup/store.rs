//! Category and addon options for the product forms.
//!
//! Lookup failures never reach the caller: the form keeps whatever
//! options it had and the error is only logged and kept in the status.

use crate::domain::a001_product::api::ProductApi;
use crate::shared::error::ApiError;
use crate::shared::state::{RequestStatus, RequestTracker};
use contracts::domain::a002_lookup::{lookup_options, LookupOption};
use leptos::prelude::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct MetaStore {
    api: Arc<dyn ProductApi>,
    tracker: RequestTracker,

    pub categories: RwSignal<Vec<LookupOption>>,
    pub addons: RwSignal<Vec<LookupOption>>,
}

impl MetaStore {
    pub fn new(api: Arc<dyn ProductApi>) -> Self {
        Self {
            api,
            tracker: RequestTracker::new(),
            categories: RwSignal::new(Vec::new()),
            addons: RwSignal::new(Vec::new()),
        }
    }

    pub fn status(&self) -> RwSignal<RequestStatus> {
        self.tracker.status()
    }

    pub fn is_loading(&self) -> Signal<bool> {
        self.tracker.is_loading()
    }

    pub fn last_error(&self) -> Signal<Option<ApiError>> {
        self.tracker.last_error()
    }

    pub async fn load_categories(&self) {
        if let Ok(envelope) = self
            .tracker
            .track("load categories", self.api.list_categories())
            .await
        {
            self.categories.set(lookup_options(&envelope));
        }
    }

    pub async fn load_addons(&self) {
        if let Ok(envelope) = self
            .tracker
            .track("load addons", self.api.list_addons())
            .await
        {
            self.addons.set(lookup_options(&envelope));
        }
    }
}

/// Lookup store provided by [`crate::app::App`].
pub fn use_meta_store() -> MetaStore {
    use_context::<MetaStore>().expect("MetaStore not found in context")
}
