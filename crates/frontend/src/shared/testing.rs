//! In-memory [`ProductApi`] for store tests.

use crate::domain::a001_product::api::ProductApi;
use crate::shared::error::ApiError;
use async_trait::async_trait;
use contracts::domain::a001_product::{ProductForm, ProductId, ProductListQuery};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::oneshot;

pub enum Reply {
    Ready(Result<Value, ApiError>),
    /// Settles when the paired sender fires.
    Gated(oneshot::Receiver<Result<Value, ApiError>>),
}

/// Queued replies per operation; an operation without a queued reply
/// answers `{}`. List replies can also be queued per page under
/// `"list page=N"`, which wins over the plain `"list"` queue.
#[derive(Default)]
pub struct FakeApi {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, op: &str, result: Result<Value, ApiError>) -> &Self {
        self.push(op, Reply::Ready(result));
        self
    }

    pub fn gate(&self, op: &str) -> oneshot::Sender<Result<Value, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.push(op, Reply::Gated(rx));
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, op: &str, reply: Reply) {
        self.replies
            .lock()
            .unwrap()
            .entry(op.to_string())
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, ops: &[&str]) -> Option<Reply> {
        let mut replies = self.replies.lock().unwrap();
        ops.iter()
            .find_map(|op| replies.get_mut(*op).and_then(VecDeque::pop_front))
    }

    async fn answer(&self, ops: &[&str], call: String) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(call);
        let next = self.next_reply(ops);
        match next {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".into()))),
            None => Ok(json!({})),
        }
    }
}

#[async_trait(?Send)]
impl ProductApi for FakeApi {
    async fn list_products(&self, query: &ProductListQuery) -> Result<Value, ApiError> {
        let call = format!("list page={}", query.page);
        self.answer(&[call.as_str(), "list"], call.clone()).await
    }

    async fn get_product_detail(&self, id: ProductId) -> Result<Value, ApiError> {
        self.answer(&["detail"], format!("detail {}", id.value())).await
    }

    async fn create_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        let name = form.get("name").unwrap_or_default().to_string();
        self.answer(&["create"], format!("create {name}")).await
    }

    async fn update_product(&self, form: &ProductForm) -> Result<Value, ApiError> {
        let id = form.get("id_barang").unwrap_or_default().to_string();
        self.answer(&["update"], format!("update {id}")).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<Value, ApiError> {
        self.answer(&["delete"], format!("delete {}", id.value())).await
    }

    async fn list_categories(&self) -> Result<Value, ApiError> {
        self.answer(&["categories"], "categories".into()).await
    }

    async fn list_addons(&self) -> Result<Value, ApiError> {
        self.answer(&["addons"], "addons".into()).await
    }
}

pub fn http_error(status: u16) -> ApiError {
    ApiError::Http {
        status,
        message: "rejected".into(),
    }
}
