use crate::domain::a001_product::ui::details::ProductAddPage;
use crate::domain::a001_product::ui::edit::ProductEditRoute;
use crate::domain::a001_product::ui::list::ProductList;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::{path, Lazy};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Halaman tidak ditemukan"</h1>
            <a href=paths::PRODUCTS>"Ke daftar produk"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=paths::PRODUCTS /> } />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/add") view=ProductAddPage />
                    <Route path=path!("/products/edit/:id") view={Lazy::<ProductEditRoute>::new()} />
                </Routes>
            </main>
        </Router>
    }
}
