pub mod error;
pub mod formatter;
pub mod pipeline;
pub mod query;
pub mod source;

pub use error::{FetchError, FormatError};
pub use formatter::Formatter;
pub use pipeline::Lookup;
pub use query::QueryValidator;
pub use source::{LookupSource, SourceMetadata};
