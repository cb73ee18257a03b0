//! Product add/edit form
//!
//! - view_model.rs: form state, prefill, validation and submit
//! - view.rs: Leptos component (pure UI)
//! - page.rs: the `/products/add` page

mod page;
mod view;
mod view_model;

pub use page::ProductAddPage;
pub use view::ProductDetails;
pub use view_model::{ProductDetailsViewModel, ProductFormDto};
