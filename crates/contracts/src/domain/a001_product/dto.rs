use super::aggregate::ProductId;
use crate::domain::common::AggregateId;
use serde::{Serialize, Serializer};

/// Form field the vendor uses for the product id on detail and edit.
pub const PRODUCT_ID_FIELD: &str = "id_barang";

/// Body of `item/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListQuery {
    pub search: String,
    /// Page size.
    pub page_count: u32,
    /// Sent as `1`/`0`.
    #[serde(serialize_with = "bool_as_int")]
    pub active: bool,
    /// 1-based.
    pub page: u32,
}

impl Default for ProductListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page_count: 5,
            active: true,
            page: 1,
        }
    }
}

impl ProductListQuery {
    /// Clamp page and page size to at least 1.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            page_count: self.page_count.max(1),
            ..self
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Body of `item/detail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailRequest {
    pub id_barang: ProductId,
}

/// Body of `item/delete`. The vendor names the id `item` here and nowhere
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub item: ProductId,
}

/// File part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload of `item/add` and `item/edit`.
///
/// Text fields keep insertion order; setting an existing field replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    fields: Vec<(String, String)>,
    attachments: Vec<Attachment>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn attach(&mut self, attachment: Attachment) {
        self.attachments.retain(|a| a.field != attachment.field);
        self.attachments.push(attachment);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Make sure the edit body names the product it changes.
    pub fn with_product_id(mut self, id: ProductId) -> Self {
        if !self.has(PRODUCT_ID_FIELD) {
            self.fields
                .push((PRODUCT_ID_FIELD.to_string(), id.as_string()));
        }
        self
    }
}
