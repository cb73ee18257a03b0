//! Navigation table paths.

use contracts::domain::a001_product::ProductId;
use contracts::domain::common::AggregateId;

pub const PRODUCTS: &str = "/products";
pub const PRODUCT_ADD: &str = "/products/add";
/// Pattern of the edit route; `:id` is the product id.
pub const PRODUCT_EDIT: &str = "/products/edit/:id";

pub fn product_edit(id: ProductId) -> String {
    PRODUCT_EDIT.replace(":id", &id.as_string())
}
