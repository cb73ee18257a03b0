pub mod picker;

pub use picker::LookupSelect;
