//! API utilities for talking to the vendor REST API
//!
//! Requests are first described as plain [`ApiRequest`] values (URL,
//! authorization, body) and only then handed to the browser transport, so
//! everything except the actual network call can be checked natively.

use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use contracts::domain::a001_product::{Attachment, ProductForm};
use serde_json::Value;

/// API surface version. Categories still live on `v1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

/// Base URL of the product management API for `version`.
///
/// # Example
/// ```ignore
/// // "https://api.sandbox.kasheer.id/api/v2/management/product"
/// let base = api_base(&config, ApiVersion::V2);
/// ```
pub fn api_base(config: &ApiConfig, version: ApiVersion) -> String {
    format!("{}/api/{}/management/product", config.host, version.as_str())
}

/// Build a full API URL from a path relative to the product base.
pub fn api_url(config: &ApiConfig, version: ApiVersion, path: &str) -> String {
    format!("{}{}", api_base(config, version), path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// Sent as `FormData`; the browser writes the content type and boundary.
    Multipart(ProductForm),
}

/// Fully described POST request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub authorization: String,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn post(config: &ApiConfig, version: ApiVersion, path: &str, body: RequestBody) -> Self {
        Self {
            url: api_url(config, version, path),
            authorization: config.authorization(),
            body,
        }
    }

    pub fn json<T: serde::Serialize>(
        config: &ApiConfig,
        version: ApiVersion,
        path: &str,
        body: &T,
    ) -> Result<Self, ApiError> {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?;
        Ok(Self::post(config, version, path, RequestBody::Json(json)))
    }

    /// Send the request and decode the JSON body.
    ///
    /// Non-2xx answers become [`ApiError::Http`]; an empty 2xx body decodes
    /// to `null`.
    pub async fn send(self) -> Result<Value, ApiError> {
        use gloo_net::http::Request;

        let builder = Request::post(&self.url).header("Authorization", &self.authorization);
        let request = match &self.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder.json(json),
            RequestBody::Multipart(form) => builder.body(to_form_data(form)?),
        }
        .map_err(|e| ApiError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_response(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn to_form_data(form: &ProductForm) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{e:?}"));

    let data = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in form.fields() {
        data.append_with_str(name, value).map_err(js_err)?;
    }
    for attachment in form.attachments() {
        let blob = to_blob(attachment).map_err(js_err)?;
        data.append_with_blob_and_filename(&attachment.field, &blob, &attachment.file_name)
            .map_err(js_err)?;
    }
    Ok(data)
}

fn to_blob(attachment: &Attachment) -> Result<web_sys::Blob, wasm_bindgen::JsValue> {
    let bytes = js_sys::Uint8Array::from(attachment.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&attachment.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn versions_share_host() {
        let cfg = ApiConfig::from_values(Some("https://h.test"), Some("t"), None);
        assert_eq!(
            api_url(&cfg, ApiVersion::V2, "/item/list"),
            "https://h.test/api/v2/management/product/item/list"
        );
        assert_eq!(
            api_url(&cfg, ApiVersion::V1, "/item/category"),
            "https://h.test/api/v1/management/product/item/category"
        );
    }

    #[test]
    fn json_request_carries_bearer() {
        let cfg = ApiConfig::from_values(Some("https://h.test"), Some("secret"), None);
        let req = ApiRequest::json(&cfg, ApiVersion::V2, "/item/delete", &json!({ "item": 1 }))
            .unwrap();
        assert_eq!(req.authorization, "Bearer secret");
        assert_eq!(req.body, RequestBody::Json(json!({ "item": 1 })));
    }
}
