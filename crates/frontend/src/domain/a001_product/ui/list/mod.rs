pub mod state;

use self::state::{create_state, PAGE_SIZE_OPTIONS};
use crate::domain::a001_product::store::use_product_store;
use crate::routes::paths;
use crate::shared::components::PaginationControls;
use contracts::domain::a001_product::ProductId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let store = StoredValue::new(use_product_store());
    let state = create_state();
    let products = store.with_value(|s| s.products);
    let total_items = store.with_value(|s| s.total_items);
    let loading = store.with_value(|s| s.is_loading());
    let last_error = store.with_value(|s| s.last_error());

    let search = RwSignal::new(String::new());
    let active_only = RwSignal::new(true);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let load = move || {
        let store = store.get_value();
        let query = state.get_untracked().query();
        spawn_local(async move { store.fetch_list(query).await });
    };

    let apply_filters = move || {
        state.update(|s| {
            s.search = search.get_untracked();
            s.active_only = active_only.get_untracked();
            s.page = 0;
        });
        load();
    };

    let on_page_change = Callback::new(move |page: usize| {
        state.update(|s| s.page = page);
        load();
    });

    let on_page_size_change = Callback::new(move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 0;
        });
        load();
    });

    let delete = move |id: ProductId, name: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus produk \"{}\"?", name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let store = store.get_value();
        spawn_local(async move {
            match store.remove(id).await {
                Ok(_) => {
                    set_notice.set(None);
                    load();
                }
                Err(e) => set_notice.set(Some(format!("Gagal menghapus: {}", e.user_message()))),
            }
        });
    };

    load();

    view! {
        <div class="page" id="a001_product--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Produk"</h1>
                </div>
                <div class="header__actions">
                    <a class="button button--primary" href=paths::PRODUCT_ADD>
                        "+ Tambah produk"
                    </a>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        "Muat ulang"
                    </Button>
                </div>
            </div>

            <div class="filter-panel">
                <div style="width: 320px;">
                    <Input value=search placeholder="Cari nama produk..." />
                </div>
                <Checkbox checked=active_only label="Hanya aktif" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_filters()>
                    "Cari"
                </Button>
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </div>

            {move || notice.get().map(|msg| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{msg}</span>
                </div>
            })}

            {move || last_error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e.user_message()}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Sub nama"</th>
                            <th class="table__header-cell">"Kategori"</th>
                            <th class="table__header-cell">"Diperbarui"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || products.get().into_iter().map(|row| {
                            let id = row.id();
                            let name = row.name().to_string();
                            let name_cell = name.clone();
                            let edit_href = id.map(paths::product_edit).unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{name_cell}</td>
                                    <td class="table__cell">{row.sub_name}</td>
                                    <td class="table__cell">{row.category_name}</td>
                                    <td class="table__cell">{row.updated_at_formatted}</td>
                                    <td class="table__cell table__cell--actions">
                                        <a class="button button--secondary" href=edit_href>"Ubah"</a>
                                        <button
                                            class="button button--danger"
                                            disabled=id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    delete(id, name.clone());
                                                }
                                            }
                                        >
                                            "Hapus"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                total_pages=Signal::derive(move || state.get().total_pages(total_items.get()))
                total_count=total_items
                page_size=Signal::derive(move || state.get().page_size)
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
            />
        </div>
    }
}
