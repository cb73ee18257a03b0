use crate::domain::a001_product::store::ProductStore;
use crate::domain::a002_lookup::store::MetaStore;
use contracts::domain::a001_product::{Attachment, ProductForm, ProductId, ProductRow};
use leptos::prelude::*;
use std::rc::Rc;

/// Text fields of the add/edit form, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFormDto {
    pub name: String,
    pub sub_name: String,
    pub price: String,
    pub category_id: String,
    pub addon_id: String,
}

impl ProductFormDto {
    /// Prefill from a loaded product. Lookup ids are read from the flat
    /// `*_id` field first, then from the nested object.
    pub fn from_row(row: &ProductRow) -> Self {
        Self {
            name: row.name().to_string(),
            sub_name: row.sub_name.clone(),
            price: row.field_text("price"),
            category_id: nested_id(row, "category_id", "category"),
            addon_id: nested_id(row, "addon_id", "addon"),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Nama produk wajib diisi".to_string());
        }
        let price = self.price.trim();
        if !price.is_empty() && price.parse::<f64>().is_err() {
            return Err("Harga harus berupa angka".to_string());
        }
        Ok(())
    }

    /// Multipart body for `item/add` / `item/edit`. Empty lookups are left out.
    pub fn to_form(&self, image: Option<Attachment>) -> ProductForm {
        let mut form = ProductForm::new()
            .text("name", self.name.trim())
            .text("sub_name", self.sub_name.trim())
            .text("price", self.price.trim());
        for (field, value) in [("category_id", &self.category_id), ("addon_id", &self.addon_id)] {
            if !value.trim().is_empty() {
                form.set_text(field, value.trim());
            }
        }
        if let Some(image) = image {
            form.attach(image);
        }
        form
    }
}

fn nested_id(row: &ProductRow, flat: &str, object: &str) -> String {
    let direct = row.field_text(flat);
    if !direct.is_empty() {
        return direct;
    }
    row.raw
        .get(object)
        .and_then(|o| o.get("id"))
        .map(contracts::shared::envelope::display_text)
        .unwrap_or_default()
}

/// ViewModel for the product add/edit form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub id: Option<ProductId>,
    pub form: RwSignal<ProductFormDto>,
    pub image: RwSignal<Option<Attachment>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    store: ProductStore,
    meta: MetaStore,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<ProductId>, store: ProductStore, meta: MetaStore) -> Self {
        Self {
            id,
            form: RwSignal::new(ProductFormDto::default()),
            image: RwSignal::new(None),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            store,
            meta,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    /// Fill lookups and, in edit mode, the form itself.
    pub async fn load(&self) {
        self.meta.load_categories().await;
        self.meta.load_addons().await;

        let Some(id) = self.id else {
            return;
        };
        match self.store.fetch_detail(id).await {
            Ok(Some(row)) => self.form.set(ProductFormDto::from_row(&row)),
            Ok(None) => self.error.set(Some("Produk tidak ditemukan".to_string())),
            Err(e) => self
                .error
                .set(Some(format!("Gagal memuat produk: {}", e.user_message()))),
        }
    }

    pub fn load_if_needed(&self) {
        let vm = self.clone();
        leptos::task::spawn_local(async move { vm.load().await });
    }

    /// Validate and submit. `Err` carries the message shown above the form.
    pub async fn save(&self) -> Result<(), String> {
        let current = self.form.get_untracked();
        current.validate()?;

        let form = current.to_form(self.image.get_untracked());
        self.saving.set(true);
        let result = match self.id {
            Some(id) => self.store.update(id, form).await,
            None => self.store.create(form).await,
        };
        self.saving.set(false);

        result
            .map(|_| ())
            .map_err(|e| format!("Gagal menyimpan: {}", e.user_message()))
    }

    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        self.error.set(None);
        let vm = self.clone();
        leptos::task::spawn_local(async move {
            match vm.save().await {
                Ok(()) => (on_saved)(()),
                Err(e) => vm.error.set(Some(e)),
            }
        });
    }
}
