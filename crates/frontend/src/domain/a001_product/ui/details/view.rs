use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_product::store::use_product_store;
use crate::domain::a002_lookup::store::use_meta_store;
use crate::domain::a002_lookup::ui::LookupSelect;
use contracts::domain::a001_product::{Attachment, ProductId};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

const IMAGE_FIELD: &str = "image";

#[component]
pub fn ProductDetails(
    id: Option<ProductId>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(id, use_product_store(), use_meta_store());
    vm.load_if_needed();

    let form = vm.form;
    let image = vm.image;
    let error = vm.error;
    let saving = vm.saving;
    let categories = vm.meta().categories;
    let addons = vm.meta().addons;
    let edit_mode = vm.is_edit_mode();

    let on_file = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            image.set(None);
            return;
        };
        leptos::task::spawn_local(async move {
            match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => image.set(Some(Attachment {
                    field: IMAGE_FIELD.to_string(),
                    file_name: file.name(),
                    content_type: file.type_(),
                    bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
                })),
                Err(e) => {
                    log::error!("failed to read {}: {:?}", file.name(), e);
                    error.set(Some("Gagal membaca berkas gambar".to_string()));
                }
            }
        });
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{if edit_mode { "Ubah produk" } else { "Produk baru" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Nama"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Nama produk"
                    />
                </div>

                <div class="form-group">
                    <label for="sub_name">{"Sub nama"}</label>
                    <input
                        type="text"
                        id="sub_name"
                        prop:value=move || form.get().sub_name
                        on:input=move |ev| form.update(|f| f.sub_name = event_target_value(&ev))
                        placeholder="Varian atau keterangan singkat"
                    />
                </div>

                <div class="form-group">
                    <label for="price">{"Harga"}</label>
                    <input
                        type="text"
                        id="price"
                        inputmode="decimal"
                        prop:value=move || form.get().price
                        on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                        placeholder="0"
                    />
                </div>

                <LookupSelect
                    id="category_id"
                    label="Kategori"
                    options=categories
                    value=Signal::derive(move || form.get().category_id)
                    on_change=Callback::new(move |v: String| form.update(|f| f.category_id = v))
                />

                <LookupSelect
                    id="addon_id"
                    label="Addon"
                    options=addons
                    value=Signal::derive(move || form.get().addon_id)
                    on_change=Callback::new(move |v: String| form.update(|f| f.addon_id = v))
                />

                <div class="form-group">
                    <label for="image">{"Gambar"}</label>
                    <input type="file" id="image" accept="image/*" on:change=on_file />
                    {move || image.get().map(|a| view! {
                        <span class="form-hint">{format!("{} ({} byte)", a.file_name, a.bytes.len())}</span>
                    })}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled=move || saving.get() || form.get().name.trim().is_empty()
                >
                    {move || if saving.get() { "Menyimpan..." } else if edit_mode { "Simpan" } else { "Buat" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| (on_cancel)(())>
                    {"Batal"}
                </button>
            </div>
        </div>
    }
}
