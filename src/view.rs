use crate::{Record, codec, schema};

/// At most one predicate is active at a time. Applying a new one always
/// re-derives from the full catalogue, never from the previous filtered
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match on `Name`.
    NameContains(String),
    /// Case-insensitive exact membership in the comma-split `Pairings` field.
    PairsWith(String),
    /// Case-insensitive substring match on `Season/s`.
    SeasonContains(String),
    /// `Heirloom (Y/N)` matches the fixed truthy set.
    Heirloom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Type,
}

/// Derives the displayed subset and ordering of the catalogue. The result is
/// a list of indices into the full record sequence, recomputed in full on
/// every call; nothing here is incremental.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    filter: Option<Filter>,
    sort: Option<SortKey>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous predicate. A fresh filter starts from the full,
    /// unsorted catalogue order, so the active sort is dropped too.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = Some(filter);
        self.sort = None;
    }

    /// Sorts whatever the current filtered sequence is. Exclusive: a new key
    /// replaces the previous one.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(key);
    }

    /// Clears both the predicate and the sort, restoring full catalogue
    /// order.
    pub fn reset(&mut self) {
        self.filter = None;
        self.sort = None;
    }

    pub fn filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn rows(&self, records: &[Record]) -> Vec<usize> {
        let mut rows: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record))
            .map(|(i, _)| i)
            .collect();

        if let Some(key) = self.sort {
            let column = match key {
                SortKey::Name => schema::COL_NAME,
                SortKey::Type => schema::COL_TYPE,
            };
            rows.sort_by_cached_key(|&i| records[i].get(column).to_lowercase());
        }

        rows
    }

    fn matches(&self, record: &Record) -> bool {
        match &self.filter {
            None => true,
            Some(Filter::NameContains(query)) => record
                .get(schema::COL_NAME)
                .to_lowercase()
                .contains(&query.to_lowercase()),
            Some(Filter::PairsWith(token)) => {
                let token = token.trim();
                codec::decode_list(record.get(schema::COL_PAIRINGS))
                    .iter()
                    .any(|p| p.eq_ignore_ascii_case(token))
            }
            Some(Filter::SeasonContains(query)) => record
                .get(schema::COL_SEASONS)
                .to_lowercase()
                .contains(&query.trim().to_lowercase()),
            Some(Filter::Heirloom) => {
                schema::is_heirloom(record.get(schema::COL_HEIRLOOM))
            }
        }
    }
}
