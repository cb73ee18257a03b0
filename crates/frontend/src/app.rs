use crate::domain::a001_product::api::{HttpProductApi, ProductApi};
use crate::domain::a001_product::store::ProductStore;
use crate::domain::a002_lookup::store::MetaStore;
use crate::routes::routes::AppRoutes;
use crate::shared::config::ApiConfig;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = Arc::new(ApiConfig::from_env());
    log::info!("product API at {}", config.host);

    // Both stores share one client; each keeps its own status.
    let api: Arc<dyn ProductApi> = Arc::new(HttpProductApi::new(config.clone()));
    provide_context(ProductStore::new(api.clone(), config.display_zone));
    provide_context(MetaStore::new(api));

    view! {
        <AppRoutes />
    }
}
