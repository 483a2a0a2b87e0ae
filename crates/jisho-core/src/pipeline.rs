use jisho_types::{DisplayItem, LookupRecord};

use crate::error::FetchError;
use crate::formatter::Formatter;
use crate::query::QueryValidator;
use crate::source::LookupSource;

/// One validate -> fetch -> format run against a source
pub struct Lookup<'a, S: LookupSource + ?Sized> {
    source: &'a S,
    validator: QueryValidator,
    formatter: Formatter,
    max_results: usize,
}

impl<'a, S: LookupSource + ?Sized> Lookup<'a, S> {
    pub fn new(source: &'a S, max_results: usize) -> Self {
        Self {
            source,
            validator: QueryValidator::new(),
            formatter: Formatter::new(),
            max_results,
        }
    }

    /// Display items for `query`.
    ///
    /// An absent or degenerate query yields no items and never reaches the
    /// source. Fetch failures abort the whole run.
    pub async fn run(&self, query: Option<&str>) -> Result<Vec<DisplayItem>, FetchError> {
        let Some(keyword) = self.validator.sanitize(query) else {
            tracing::debug!("Ignoring invalid query: {:?}", query);
            return Ok(Vec::new());
        };

        let source = self.source.metadata().name;
        tracing::info!("Searching {} for '{}'", source, keyword);

        let records = self.source.search(keyword).await.inspect_err(|e| {
            tracing::error!("Search on {} failed: {}", source, e);
        })?;
        tracing::debug!("{} returned {} records", source, records.len());

        Ok(format_records(&self.formatter, &records, self.max_results))
    }
}

/// Formats the first `max_results` records, keeping their order.
///
/// Records that break the orthography invariants are skipped.
pub fn format_records(
    formatter: &Formatter,
    records: &[LookupRecord],
    max_results: usize,
) -> Vec<DisplayItem> {
    records
        .iter()
        .take(max_results)
        .enumerate()
        .filter_map(|(position, record)| match formatter.format(record) {
            Ok(item) => {
                tracing::debug!("Record {}: '{}'", position, item.title);
                Some(item)
            }
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed record {} ({:?}): {}",
                    position,
                    record.slug,
                    e
                );
                None
            }
        })
        .collect()
}
