pub mod aggregate;

pub use aggregate::{lookup_options, LookupOption};
