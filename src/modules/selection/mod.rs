mod policy;

pub use policy::{default_index, SourceSelection, FALLBACK_ACCENT};
