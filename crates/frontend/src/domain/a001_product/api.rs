//! Product management endpoints.
//!
//! Every call is a POST. Reads and deletes send JSON, create/edit send
//! multipart so images can ride along. The category list is only served
//! by the older `v1` surface.

use crate::shared::api_utils::{ApiRequest, ApiVersion, RequestBody};
use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_product::{
    DeleteRequest, DetailRequest, ProductForm, ProductId, ProductListQuery,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Raw access to the product API. Every method returns the response
/// envelope as received; reshaping is the stores' job.
#[async_trait(?Send)]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self, query: &ProductListQuery) -> Result<Value, ApiError>;
    async fn get_product_detail(&self, id: ProductId) -> Result<Value, ApiError>;
    async fn create_product(&self, form: &ProductForm) -> Result<Value, ApiError>;
    async fn update_product(&self, form: &ProductForm) -> Result<Value, ApiError>;
    async fn delete_product(&self, id: ProductId) -> Result<Value, ApiError>;
    async fn list_categories(&self) -> Result<Value, ApiError>;
    async fn list_addons(&self) -> Result<Value, ApiError>;
}

/// Request descriptions for each endpoint.
#[derive(Debug, Clone)]
pub struct ProductEndpoints {
    config: Arc<ApiConfig>,
}

impl ProductEndpoints {
    pub fn new(config: Arc<ApiConfig>) -> Self {
        Self { config }
    }

    pub fn list_products(&self, query: &ProductListQuery) -> Result<ApiRequest, ApiError> {
        let query = query.clone().normalized();
        ApiRequest::json(&self.config, ApiVersion::V2, "/item/list", &query)
    }

    pub fn get_product_detail(&self, id: ProductId) -> Result<ApiRequest, ApiError> {
        ApiRequest::json(
            &self.config,
            ApiVersion::V2,
            "/item/detail",
            &DetailRequest { id_barang: id },
        )
    }

    pub fn create_product(&self, form: &ProductForm) -> ApiRequest {
        self.multipart("/item/add", form)
    }

    pub fn update_product(&self, form: &ProductForm) -> ApiRequest {
        self.multipart("/item/edit", form)
    }

    pub fn delete_product(&self, id: ProductId) -> Result<ApiRequest, ApiError> {
        ApiRequest::json(
            &self.config,
            ApiVersion::V2,
            "/item/delete",
            &DeleteRequest { item: id },
        )
    }

    pub fn list_categories(&self) -> ApiRequest {
        ApiRequest::post(
            &self.config,
            ApiVersion::V1,
            "/item/category",
            RequestBody::Json(json!({})),
        )
    }

    pub fn list_addons(&self) -> ApiRequest {
        ApiRequest::post(&self.config, ApiVersion::V2, "/item/addonlist", RequestBody::Empty)
    }

    fn multipart(&self, path: &str, form: &ProductForm) -> ApiRequest {
        ApiRequest::post(
            &self.config,
            ApiVersion::V2,
            path,
            RequestBody::Multipart(form.clone()),
        )
    }
}

/// [`ProductApi`] over the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    endpoints: ProductEndpoints,
}

impl HttpProductApi {
    pub fn new(config: Arc<ApiConfig>) -> Self {
        Self {
            endpoints: ProductEndpoints::new(config),
        }
    }
}

#[async_trait(?Send)]
impl ProductApi for HttpProductApi {
    async fn list_products(&self, query: &ProductListQuery) -> Result<Value, ApiError> {
        self.endpoints.list_products(query)?.send().await
    }

    async fn get_product_detail(&self, id: ProductId) -> Result<Value, ApiError> {
        self.endpoints.get_product_detail(id)?.send().await
    }

    async fn create_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        self.endpoints.create_product(form).send().await
    }

    async fn update_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        self.endpoints.update_product(form).send().await
    }

    async fn delete_product(&self, id: ProductId) -> Result<Value, ApiError> {
        self.endpoints.delete_product(id)?.send().await
    }

    async fn list_categories(&self) -> Result<Value, ApiError> {
        self.endpoints.list_categories().send().await
    }

    async fn list_addons(&self) -> Result<Value, ApiError> {
        self.endpoints.list_addons().send().await
    }
}
