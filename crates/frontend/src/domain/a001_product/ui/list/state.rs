use contracts::domain::a001_product::ProductListQuery;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

#[derive(Clone, Debug, PartialEq)]
pub struct ProductListState {
    // filters
    pub search: String,
    pub active_only: bool,

    // pagination (0-indexed here, 1-indexed on the wire)
    pub page: usize,
    pub page_size: usize,
}

impl Default for ProductListState {
    fn default() -> Self {
        let query = ProductListQuery::default();
        Self {
            search: query.search,
            active_only: query.active,
            page: 0,
            page_size: query.page_count as usize,
        }
    }
}

impl ProductListState {
    pub fn query(&self) -> ProductListQuery {
        ProductListQuery {
            search: self.search.trim().to_string(),
            page_count: u32::try_from(self.page_size).unwrap_or(u32::MAX),
            active: self.active_only,
            page: u32::try_from(self.page + 1).unwrap_or(u32::MAX),
        }
        .normalized()
    }

    pub fn total_pages(&self, total_count: u64) -> usize {
        let size = self.page_size.max(1) as u64;
        total_count.div_ceil(size) as usize
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}
