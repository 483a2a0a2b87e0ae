/// Queries that are only a stray quotation mark, as typed when the launcher
/// keyword is followed by an opening quote
const LONE_QUOTES: [&str; 2] = ["'", "\""];

/// Pre-filter run before any network call
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryValidator;

impl QueryValidator {
    pub fn new() -> Self {
        Self
    }

    /// Trimmed query if it is worth sending, `None` otherwise
    pub fn sanitize<'a>(&self, query: Option<&'a str>) -> Option<&'a str> {
        let query = query?.trim();

        if query.is_empty() || LONE_QUOTES.contains(&query) {
            return None;
        }

        Some(query)
    }

    pub fn is_valid(&self, query: Option<&str>) -> bool {
        self.sanitize(query).is_some()
    }
}
