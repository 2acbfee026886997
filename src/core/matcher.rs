use crate::domain::model::{
    Record, Source, DIGIKEY_PART_NUMBER, LCSC_PART_NUMBER, MANUFACTURER_PART_NUMBER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Lcsc,
    Manufacturer,
    DigiKey,
}

/// Drops a trailing run of `*` so `C1234*` becomes the prefix `C1234`.
fn wildcard_prefix(query: &str) -> &str {
    query.trim_end_matches('*')
}

fn part_number_matches(part_number: &str, query: &str) -> bool {
    part_number == query || part_number.starts_with(wildcard_prefix(query))
}

impl SearchMode {
    pub fn matches(&self, record: &Record, query: &str) -> bool {
        match self {
            SearchMode::Lcsc => {
                record.source == Source::Lcsc
                    && record
                        .get(LCSC_PART_NUMBER)
                        .is_some_and(|pn| part_number_matches(pn, query))
            }
            SearchMode::DigiKey => {
                record.source == Source::DigiKey
                    && record
                        .get(DIGIKEY_PART_NUMBER)
                        .is_some_and(|pn| part_number_matches(pn, query))
            }
            SearchMode::Manufacturer => record.get(MANUFACTURER_PART_NUMBER).is_some_and(|pn| {
                let pn = pn.to_lowercase();
                let query = query.to_lowercase();
                pn.contains(&query) || pn.starts_with(wildcard_prefix(&query))
            }),
        }
    }
}

/// Matching records in store order; empty when nothing matches.
pub fn find_matches<'a>(records: &'a [Record], query: &str, mode: SearchMode) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| mode.matches(record, query))
        .collect()
}
