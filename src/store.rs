use crate::{Record, schema};
use anyhow::Context;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures that are part of the store's API surface. IO and CSV problems
/// are wrapped so callers can report them without caring which layer broke.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a seed needs a name before it can be saved")]
    EmptyName,
    #[error("no seed named {0:?}")]
    NotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Inserted,
    Updated,
}

/// The catalogue: the authoritative in-memory record sequence plus the CSV
/// file backing it. Mutated only by whole-record upsert or delete; every
/// persist rewrites the full file (header + all rows), never appends.
#[derive(Debug, Clone)]
pub struct Catalogue {
    path: PathBuf,
    columns: Vec<String>,
    records: Vec<Record>,
    dirty: bool,
}

impl Catalogue {
    pub fn create_empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            columns: schema::COLUMNS.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
            dirty: false,
        }
    }

    /// Opens the catalogue at `path`. An absent file is created with just
    /// the schema header. A header that is a subset or superset of the
    /// declared schema must not fail: missing columns default to empty
    /// cells, extra file columns are kept after the declared ones.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            let catalogue = Self::create_empty(path);
            catalogue
                .write_to(path)
                .with_context(|| format!("creating {path:?}"))?;
            return Ok(catalogue);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening {path:?}"))?;
        let headers = reader
            .headers()
            .with_context(|| format!("reading header of {path:?}"))?
            .clone();

        // Schema reconciliation: declared columns first, in declared order,
        // then whatever extra columns the file carries, in file order.
        let mut columns: Vec<String> =
            schema::COLUMNS.iter().map(|c| c.to_string()).collect();
        for header in headers.iter() {
            if !header.is_empty() && !columns.iter().any(|c| c == header) {
                columns.push(header.to_string());
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.with_context(|| format!("reading rows of {path:?}"))?;
            let mut record = Record::new();
            for extra in &columns[schema::COLUMNS.len()..] {
                record.set(extra, "");
            }
            for (i, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                record.set(header, row.get(i).unwrap_or(""));
            }
            records.push(record);
        }

        Ok(Self {
            path: path.to_path_buf(),
            columns,
            records,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when an in-memory mutation has not yet reached the file.
    pub fn dirty(&self) -> bool {
        self.dirty
    }

    /// Exact, case-sensitive lookup by the primary key.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Insert-or-update keyed on `Name`. An existing record is replaced in
    /// place, keeping its position; a new name appends at the end.
    pub fn upsert(&mut self, record: Record) -> Result<Upserted, StoreError> {
        if record.name().trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let outcome = match self
            .records
            .iter()
            .position(|r| r.name() == record.name())
        {
            Some(idx) => {
                self.records[idx] = record;
                Upserted::Updated
            }
            None => {
                self.records.push(record);
                Upserted::Inserted
            }
        };
        self.dirty = true;
        Ok(outcome)
    }

    /// Removes the first record whose `Name` matches exactly.
    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        let Some(idx) = self.records.iter().position(|r| r.name() == name) else {
            return Err(StoreError::NotFound(name.to_string()));
        };
        self.records.remove(idx);
        self.dirty = true;
        Ok(())
    }

    /// Rewrites the whole backing file: header first, then every record in
    /// current order. A failed write leaves `dirty` set so it can't be
    /// mistaken for success.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        self.write_to(&self.path)?;
        self.dirty = false;
        Ok(())
    }

    /// Writes the full catalogue (ignoring any view filter) to another path
    /// without touching the backing path.
    pub fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        self.write_to(path)
    }

    /// Writes to a new path and makes it the backing file for subsequent
    /// saves.
    pub fn save_as(&mut self, path: &Path) -> Result<(), StoreError> {
        self.write_to(path)?;
        self.path = path.to_path_buf();
        self.dirty = false;
        Ok(())
    }

    // Full rewrite, no append mode. A crash mid-write can leave a truncated
    // file; small single-user datasets make that an accepted risk here.
    fn write_to(&self, path: &Path) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for record in &self.records {
            writer.write_record(self.columns.iter().map(|c| record.get(c)))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Distinct non-empty names, sorted, for the quick-edit picker.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|r| r.name().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Individual pairing tokens across all rows, deduplicated and sorted
    /// case-insensitively, for the pairing filter dropdown.
    pub fn pairing_options(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        for record in &self.records {
            for token in crate::codec::decode_list(record.get(schema::COL_PAIRINGS)) {
                if !tokens.contains(&token) {
                    tokens.push(token);
                }
            }
        }
        tokens.sort_by_key(|t| t.to_lowercase());
        tokens
    }

    /// Distinct non-empty Season/s cell values, sorted, for the season
    /// filter dropdown.
    pub fn season_options(&self) -> Vec<String> {
        let mut seasons: Vec<String> = self
            .records
            .iter()
            .map(|r| r.get(schema::COL_SEASONS).to_string())
            .filter(|s| !s.is_empty())
            .collect();
        seasons.sort();
        seasons.dedup();
        seasons
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalogue, StoreError, Upserted};
    use crate::{Record, schema};
    use std::path::Path;

    fn scratch() -> Catalogue {
        Catalogue::create_empty(Path::new("unused.csv"))
    }

    #[test]
    fn upsert_rejects_empty_and_whitespace_names() {
        let mut catalogue = scratch();
        assert!(matches!(
            catalogue.upsert(Record::new()),
            Err(StoreError::EmptyName)
        ));
        assert!(matches!(
            catalogue.upsert(Record::named("   ")),
            Err(StoreError::EmptyName)
        ));
        assert!(catalogue.is_empty());
        assert!(!catalogue.dirty());
    }

    #[test]
    fn upsert_updates_in_place_and_appends_new_names() {
        let mut catalogue = scratch();
        assert_eq!(
            catalogue.upsert(Record::named("Basil")).unwrap(),
            Upserted::Inserted
        );
        assert_eq!(
            catalogue.upsert(Record::named("Mint")).unwrap(),
            Upserted::Inserted
        );

        let mut update = Record::named("Basil");
        update.set(schema::COL_TYPE, "Herb");
        assert_eq!(catalogue.upsert(update).unwrap(), Upserted::Updated);

        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.records()[0].name(), "Basil");
        assert_eq!(catalogue.records()[0].get(schema::COL_TYPE), "Herb");
        assert_eq!(catalogue.records()[1].name(), "Mint");
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let mut catalogue = scratch();
        catalogue.upsert(Record::named("Basil")).unwrap();
        catalogue.upsert(Record::named("basil")).unwrap();
        assert_eq!(catalogue.len(), 2);
        assert!(catalogue.get("Basil").is_some());
        assert!(catalogue.get("BASIL").is_none());
    }

    #[test]
    fn delete_removes_first_match_or_reports_not_found() {
        let mut catalogue = scratch();
        catalogue.upsert(Record::named("Basil")).unwrap();
        catalogue.delete("Basil").unwrap();
        assert!(catalogue.is_empty());
        assert!(matches!(
            catalogue.delete("Basil"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn pairing_options_split_and_deduplicate_tokens() {
        let mut catalogue = scratch();
        let mut basil = Record::named("Basil");
        basil.set(schema::COL_PAIRINGS, "Tomato, Pepper");
        let mut carrot = Record::named("Carrot");
        carrot.set(schema::COL_PAIRINGS, "tomato, Onion");
        catalogue.upsert(basil).unwrap();
        catalogue.upsert(carrot).unwrap();

        // Case-sensitive dedup, case-insensitive ordering.
        assert_eq!(
            catalogue.pairing_options(),
            vec!["Onion", "Pepper", "Tomato", "tomato"]
        );
    }

    #[test]
    fn names_are_sorted_and_unique() {
        let mut catalogue = scratch();
        catalogue.upsert(Record::named("Mint")).unwrap();
        catalogue.upsert(Record::named("Basil")).unwrap();
        assert_eq!(catalogue.names(), vec!["Basil", "Mint"]);
    }
}
