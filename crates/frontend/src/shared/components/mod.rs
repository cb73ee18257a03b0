pub mod pagination_controls;

pub use pagination_controls::PaginationControls;
