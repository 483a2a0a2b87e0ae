use jisho_types::LookupRecord;

use crate::error::FetchError;

/// Dictionary search backend
#[async_trait::async_trait]
pub trait LookupSource: Send + Sync {
    /// Records matching `keyword`, in the backend's own order
    async fn search(&self, keyword: &str) -> Result<Vec<LookupRecord>, FetchError>;

    /// Backend metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    /// Page to open for a canonical term
    pub lookup_url: String,
}

impl SourceMetadata {
    /// Link for the follow-up action on a term, with the term as one
    /// percent-encoded path segment. `None` if `lookup_url` is not a base URL.
    pub fn lookup_link(&self, term: &str) -> Option<String> {
        let mut url = reqwest::Url::parse(&self.lookup_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(term);
        Some(url.into())
    }
}
