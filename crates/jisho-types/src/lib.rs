mod types;

pub use types::{DisplayItem, LookupRecord, Orthography, Sense};
