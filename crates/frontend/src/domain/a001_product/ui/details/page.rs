use super::view::ProductDetails;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn ProductAddPage() -> impl IntoView {
    let navigate = use_navigate();
    let back: Rc<dyn Fn(())> = Rc::new(move |_| navigate(paths::PRODUCTS, Default::default()));

    view! {
        <div class="page" id="a001_product--add">
            <ProductDetails id=None on_saved=back.clone() on_cancel=back />
        </div>
    }
}
