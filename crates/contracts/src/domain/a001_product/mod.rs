pub mod aggregate;
pub mod dto;

pub use aggregate::{normalize_detail, normalize_list, ProductId, ProductRow};
pub use dto::{
    Attachment, DeleteRequest, DetailRequest, ProductForm, ProductListQuery, PRODUCT_ID_FIELD,
};
