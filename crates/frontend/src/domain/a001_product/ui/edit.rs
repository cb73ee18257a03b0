//! `/products/edit/:id`, split out of the main bundle.

use super::details::ProductDetails;
use crate::routes::paths;
use contracts::domain::a001_product::ProductId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::{lazy_route, LazyRoute};
use std::rc::Rc;

/// Raw `:id` segment and its parsed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEditRoute {
    raw_id: String,
    id: Result<ProductId, String>,
}

impl ProductEditRoute {
    pub fn from_param(raw_id: Option<String>) -> Self {
        let raw_id = raw_id.unwrap_or_default();
        let id = ProductId::from_string(&raw_id);
        Self { raw_id, id }
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id.as_ref().ok().copied()
    }
}

#[lazy_route]
impl LazyRoute for ProductEditRoute {
    fn data() -> Self {
        let params = use_params_map();
        Self::from_param(params.get_untracked().get("id"))
    }

    fn view(this: Self) -> AnyView {
        let navigate = use_navigate();
        let back: Rc<dyn Fn(())> =
            Rc::new(move |_| navigate(paths::PRODUCTS, Default::default()));

        match this.id {
            Ok(id) => view! {
                <div class="page" id="a001_product--edit">
                    <ProductDetails id=Some(id) on_saved=back.clone() on_cancel=back />
                </div>
            }
            .into_any(),
            Err(e) => {
                log::warn!("bad product id {:?}: {}", this.raw_id, e);
                view! {
                    <div class="page" id="a001_product--edit">
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__text">
                                {format!("Produk \"{}\" tidak valid", this.raw_id)}
                            </span>
                        </div>
                        <a class="button button--secondary" href=paths::PRODUCTS>"Kembali"</a>
                    </div>
                }
                .into_any()
            }
        }
    }
}
