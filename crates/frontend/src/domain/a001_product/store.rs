//! Product store: list, detail and mutations behind one status.
//!
//! Overlapping calls are not sequenced. If two `fetch_list` calls are in
//! flight, whichever response settles last is what the list shows, even
//! when it belongs to the older request.

use super::api::ProductApi;
use crate::shared::error::ApiError;
use crate::shared::state::{RequestStatus, RequestTracker};
use contracts::domain::a001_product::{
    normalize_detail, normalize_list, ProductForm, ProductId, ProductListQuery, ProductRow,
};
use contracts::domain::a002_lookup::{lookup_options, LookupOption};
use contracts::shared::date_format::DisplayZone;
use leptos::prelude::*;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductStore {
    api: Arc<dyn ProductApi>,
    zone: DisplayZone,
    tracker: RequestTracker,

    pub products: RwSignal<Vec<ProductRow>>,
    pub total_items: RwSignal<u64>,
    pub selected: RwSignal<Option<ProductRow>>,
    pub addons: RwSignal<Vec<LookupOption>>,
    pub categories: RwSignal<Vec<LookupOption>>,
}

impl ProductStore {
    pub fn new(api: Arc<dyn ProductApi>, zone: DisplayZone) -> Self {
        Self {
            api,
            zone,
            tracker: RequestTracker::new(),
            products: RwSignal::new(Vec::new()),
            total_items: RwSignal::new(0),
            selected: RwSignal::new(None),
            addons: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
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

    /// Load one page of products. Failures are recorded in the status and
    /// leave the current list in place.
    pub async fn fetch_list(&self, query: ProductListQuery) {
        let result = self
            .tracker
            .track("fetch products", self.api.list_products(&query))
            .await;
        let Ok(envelope) = result else {
            return;
        };

        let page = normalize_list(&envelope, self.zone);
        log::debug!(
            "fetched {} products (page {}, total {})",
            page.items.len(),
            query.page,
            page.total
        );
        self.products.set(page.items);
        self.total_items.set(page.total);
    }

    /// Load one product for the edit form. A failure is recorded and also
    /// returned.
    pub async fn fetch_detail(&self, id: ProductId) -> Result<Option<ProductRow>, ApiError> {
        let envelope = self
            .tracker
            .track("fetch product detail", self.api.get_product_detail(id))
            .await?;
        let product = normalize_detail(&envelope, self.zone);
        self.selected.set(product.clone());
        Ok(product)
    }

    /// Create a product; returns the vendor's response body.
    pub async fn create(&self, form: ProductForm) -> Result<Value, ApiError> {
        self.tracker
            .track("create product", self.api.create_product(&form))
            .await
    }

    /// Update product `id`; the id is added to the form when missing.
    pub async fn update(&self, id: ProductId, form: ProductForm) -> Result<Value, ApiError> {
        let form = form.with_product_id(id);
        self.tracker
            .track("update product", self.api.update_product(&form))
            .await
    }

    pub async fn remove(&self, id: ProductId) -> Result<Value, ApiError> {
        self.tracker
            .track("delete product", self.api.delete_product(id))
            .await
    }

    /// Load addon options. Errors are logged and swallowed; the previous
    /// options stay.
    pub async fn fetch_addons(&self) -> Vec<LookupOption> {
        if let Ok(envelope) = self
            .tracker
            .track("fetch addons", self.api.list_addons())
            .await
        {
            self.addons.set(lookup_options(&envelope));
        }
        self.addons.get_untracked()
    }

    /// Load category options. Errors are logged and swallowed; the previous
    /// options stay.
    pub async fn fetch_categories(&self) -> Vec<LookupOption> {
        if let Ok(envelope) = self
            .tracker
            .track("fetch categories", self.api.list_categories())
            .await
        {
            self.categories.set(lookup_options(&envelope));
        }
        self.categories.get_untracked()
    }
}

/// Product store provided by [`crate::app::App`].
pub fn use_product_store() -> ProductStore {
    use_context::<ProductStore>().expect("ProductStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{http_error, FakeApi};
    use serde_json::json;

    fn store(api: &Arc<FakeApi>) -> (Owner, ProductStore) {
        let owner = Owner::new();
        owner.set();
        (owner, ProductStore::new(api.clone(), DisplayZone::utc()))
    }

    fn page(ids: &[i64], total: Option<u64>) -> Value {
        let data: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "id": id, "name": format!("p{id}"), "category": "Snacks" }))
            .collect();
        match total {
            Some(total) => json!({ "data": { "data": data, "total": total } }),
            None => json!({ "data": { "data": data } }),
        }
    }

    fn ids(store: &ProductStore) -> Vec<i64> {
        store
            .products
            .get_untracked()
            .iter()
            .filter_map(|r| r.id().map(|id| id.value()))
            .collect()
    }

    #[tokio::test]
    async fn fetch_list_replaces_items_and_total() {
        let api = Arc::new(FakeApi::new());
        api.reply("list", Ok(page(&[1, 2], Some(40))));
        api.reply("list", Ok(page(&[3], None)));
        let (_owner, store) = store(&api);

        store.fetch_list(ProductListQuery::default()).await;
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.total_items.get_untracked(), 40);
        assert_eq!(store.products.get_untracked()[0].category_name, "Snacks");
        assert_eq!(store.status().get_untracked(), RequestStatus::Succeeded);

        store.fetch_list(ProductListQuery::default().with_page(2)).await;
        assert_eq!(ids(&store), vec![3]);
        assert_eq!(store.total_items.get_untracked(), 1);
        assert_eq!(api.calls(), vec!["list page=1", "list page=2"]);
    }

    #[tokio::test]
    async fn failed_list_keeps_previous_items() {
        let api = Arc::new(FakeApi::new());
        api.reply("list", Ok(page(&[1], Some(1))));
        api.reply("list", Err(ApiError::Transport("offline".into())));
        let (_owner, store) = store(&api);

        store.fetch_list(ProductListQuery::default()).await;
        store.fetch_list(ProductListQuery::default()).await;

        assert_eq!(ids(&store), vec![1]);
        assert!(!store.is_loading().get_untracked());
        assert_eq!(
            store.last_error().get_untracked(),
            Some(ApiError::Transport("offline".into()))
        );
    }

    #[tokio::test]
    async fn failed_create_is_recorded_and_propagated() {
        let api = Arc::new(FakeApi::new());
        api.reply("create", Err(http_error(422)));
        let (_owner, store) = store(&api);

        let result = store.create(ProductForm::new().text("name", "Kopi")).await;

        assert_eq!(result, Err(http_error(422)));
        let status = store.status().get_untracked();
        assert!(!status.is_loading());
        assert_eq!(status.error(), Some(&http_error(422)));
        assert_eq!(api.calls(), vec!["create Kopi"]);
    }

    #[tokio::test]
    async fn update_names_the_product() {
        let api = Arc::new(FakeApi::new());
        api.reply("update", Ok(json!({ "status": true })));
        let (_owner, store) = store(&api);

        let body = store
            .update(ProductId::new(8), ProductForm::new().text("name", "Teh"))
            .await
            .unwrap();

        assert_eq!(body, json!({ "status": true }));
        assert_eq!(api.calls(), vec!["update 8"]);
    }

    #[tokio::test]
    async fn failed_remove_is_propagated() {
        let api = Arc::new(FakeApi::new());
        api.reply("delete", Err(http_error(404)));
        let (_owner, store) = store(&api);

        assert!(store.remove(ProductId::new(3)).await.is_err());
        assert!(store.last_error().get_untracked().is_some());
        assert_eq!(api.calls(), vec!["delete 3"]);
    }

    #[tokio::test]
    async fn detail_is_normalized_and_selected() {
        let api = Arc::new(FakeApi::new());
        api.reply(
            "detail",
            Ok(json!({ "data": { "id": 5, "name": "Kopi", "sub_name": "Hitam" } })),
        );
        let (_owner, store) = store(&api);

        let product = store.fetch_detail(ProductId::new(5)).await.unwrap().unwrap();
        assert_eq!(product.sub_name, "Hitam");
        assert_eq!(store.selected.get_untracked(), Some(product));
    }

    #[tokio::test]
    async fn failed_detail_propagates_and_clears_loading() {
        let api = Arc::new(FakeApi::new());
        api.reply("detail", Err(http_error(500)));
        let (_owner, store) = store(&api);

        assert_eq!(store.fetch_detail(ProductId::new(5)).await, Err(http_error(500)));
        assert!(!store.is_loading().get_untracked());
        assert_eq!(store.selected.get_untracked(), None);
    }

    #[tokio::test]
    async fn lookup_failures_are_swallowed() {
        let api = Arc::new(FakeApi::new());
        api.reply("addons", Ok(json!({ "data": [ { "id": 1, "name": "Es" } ] })));
        api.reply("addons", Err(http_error(500)));
        api.reply("categories", Err(ApiError::Transport("offline".into())));
        let (_owner, store) = store(&api);

        assert_eq!(store.fetch_addons().await.len(), 1);
        let kept = store.fetch_addons().await;
        assert_eq!(kept[0].label_text(), "Es");
        assert!(store.fetch_categories().await.is_empty());
        assert!(!store.is_loading().get_untracked());
    }

    #[tokio::test]
    async fn racing_list_fetches_last_settled_wins() {
        let api = Arc::new(FakeApi::new());
        let first = api.gate("list page=1");
        let second = api.gate("list page=2");
        let (_owner, store) = store(&api);

        let page_one = store.fetch_list(ProductListQuery::default().with_page(1));
        let page_two = store.fetch_list(ProductListQuery::default().with_page(2));
        let settle = async {
            // The later request answers first; the older one lands last.
            second.send(Ok(page(&[20, 21], Some(4)))).unwrap();
            for _ in 0..100 {
                if ids(&store) == vec![20, 21] {
                    break;
                }
                tokio::task::yield_now().await;
            }
            first.send(Ok(page(&[10, 11], Some(4)))).unwrap();
        };
        tokio::join!(page_one, page_two, settle);

        assert_eq!(ids(&store), vec![10, 11]);
        assert_eq!(store.total_items.get_untracked(), 4);
        assert_eq!(store.status().get_untracked(), RequestStatus::Succeeded);
    }
}
