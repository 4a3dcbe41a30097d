use crate::store::{Catalogue, StoreError, Upserted};
use crate::{Record, codec, schema};
use indexmap::IndexMap;

/// Binding state. `Empty` holds no record and nothing typed;
/// `EditingExisting` was populated from a stored record; `EditingNew` is a
/// blank form the user has started filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Empty,
    EditingExisting,
    EditingNew,
}

/// The two repeated-date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSlot {
    /// `Approximate Start Date`, mm/dd tokens.
    StartDate,
    /// `Seed Started Date`, mm/dd/yyyy tokens.
    SeedStarted,
}

/// The live form contents as a plain value object, independent of any widget
/// toolkit. The GUI renders these fields; everything below is testable
/// headless.
///
/// Structured columns get typed inputs; every other column is free text in
/// `text`, keyed by column name in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: FormMode,
    pub text: IndexMap<String, String>,
    pub life_cycle: String,
    pub heirloom: String,
    /// Parallel to `schema::SEASONS`; encoding follows canonical order, not
    /// selection order.
    pub seasons: [bool; 4],
    pub temp_min: String,
    pub temp_max: String,
    pub maturity_min: String,
    pub maturity_max: String,
    pub start_dates: Vec<String>,
    pub seed_started_dates: Vec<String>,
}

/// Columns that are neither structured nor single-choice; they render and
/// bind as plain text.
fn is_plain_text(column: &str) -> bool {
    !matches!(
        column,
        schema::COL_LIFE_CYCLE
            | schema::COL_HEIRLOOM
            | schema::COL_SEASONS
            | schema::COL_TEMPERATURE
            | schema::COL_MATURITY
            | schema::COL_START_DATE
            | schema::COL_SEED_STARTED
    )
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let mut text = IndexMap::new();
        for column in schema::COLUMNS {
            if is_plain_text(column) {
                text.insert(column.to_string(), String::new());
            }
        }
        Self {
            mode: FormMode::Empty,
            text,
            life_cycle: String::new(),
            heirloom: String::new(),
            seasons: [false; 4],
            temp_min: String::new(),
            temp_max: String::new(),
            maturity_min: String::new(),
            maturity_max: String::new(),
            start_dates: Vec::new(),
            seed_started_dates: Vec::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Explicit clear action: any state back to `Empty`, all fields blank.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Called by the GUI whenever the user changes any input. A blank form
    /// becomes `EditingNew`; the other modes keep their identity.
    pub fn mark_edited(&mut self) {
        if self.mode == FormMode::Empty {
            self.mode = FormMode::EditingNew;
        }
    }

    pub fn field_mut(&mut self, column: &str) -> &mut String {
        self.text.entry(column.to_string()).or_default()
    }

    pub fn field(&self, column: &str) -> &str {
        self.text.get(column).map(String::as_str).unwrap_or("")
    }

    /// The current Name input, trimmed. Submit keys the upsert on this
    /// value, bound identity or not.
    pub fn name(&self) -> &str {
        self.field(schema::COL_NAME).trim()
    }

    /// Populates every input from a stored record via the codec decode
    /// paths and binds to its identity.
    pub fn load_record(&mut self, record: &Record) {
        self.clear();

        for (column, value) in self.text.iter_mut() {
            *value = record.get(column).to_string();
        }
        self.life_cycle = record.get(schema::COL_LIFE_CYCLE).to_string();
        self.heirloom = record.get(schema::COL_HEIRLOOM).to_string();

        let selected = codec::decode_list(record.get(schema::COL_SEASONS));
        for (flag, season) in self.seasons.iter_mut().zip(schema::SEASONS) {
            *flag = selected.iter().any(|s| s == season);
        }

        let (min, max) = codec::decode_range(record.get(schema::COL_TEMPERATURE));
        self.temp_min = min;
        self.temp_max = max;
        let (min, max) = codec::decode_range(record.get(schema::COL_MATURITY));
        self.maturity_min = min;
        self.maturity_max = max;

        self.start_dates = codec::decode_list(record.get(schema::COL_START_DATE));
        self.seed_started_dates =
            codec::decode_list(record.get(schema::COL_SEED_STARTED));

        self.mode = FormMode::EditingExisting;
    }

    /// Appends a date token to the chosen list, suppressing exact
    /// duplicates. Returns whether anything was added.
    pub fn add_date(&mut self, slot: DateSlot, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        let list = match slot {
            DateSlot::StartDate => &mut self.start_dates,
            DateSlot::SeedStarted => &mut self.seed_started_dates,
        };
        if list.iter().any(|t| t == token) {
            return false;
        }
        list.push(token.to_string());
        self.mark_edited();
        true
    }

    pub fn clear_dates(&mut self, slot: DateSlot) {
        match slot {
            DateSlot::StartDate => self.start_dates.clear(),
            DateSlot::SeedStarted => self.seed_started_dates.clear(),
        }
        self.mark_edited();
    }

    /// Serializes every input back into a record via the codec encode
    /// paths. Plain text is trimmed; seasons encode in canonical order.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        for (column, value) in &self.text {
            record.set(column, value.trim());
        }
        record.set(schema::COL_LIFE_CYCLE, self.life_cycle.trim());
        record.set(schema::COL_HEIRLOOM, self.heirloom.trim());

        let selected = schema::SEASONS
            .iter()
            .zip(self.seasons)
            .filter(|(_, on)| *on)
            .map(|(season, _)| *season);
        record.set(schema::COL_SEASONS, codec::encode_list(selected));

        record.set(
            schema::COL_TEMPERATURE,
            codec::encode_range(&self.temp_min, &self.temp_max),
        );
        record.set(
            schema::COL_MATURITY,
            codec::encode_range(&self.maturity_min, &self.maturity_max),
        );
        record.set(
            schema::COL_START_DATE,
            codec::encode_list(self.start_dates.iter().map(String::as_str)),
        );
        record.set(
            schema::COL_SEED_STARTED,
            codec::encode_list(self.seed_started_dates.iter().map(String::as_str)),
        );
        record
    }

    /// Submit: upsert keyed on the current Name value, then persist, both
    /// before control returns. An empty Name is rejected with no state
    /// change and no write. On success the binding holds the submitted
    /// identity.
    pub fn submit(&mut self, catalogue: &mut Catalogue) -> Result<Upserted, StoreError> {
        let record = self.to_record();
        if record.name().is_empty() {
            return Err(StoreError::EmptyName);
        }
        let outcome = catalogue.upsert(record)?;
        catalogue.persist()?;
        self.mode = FormMode::EditingExisting;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::{DateSlot, FormMode, FormState};
    use crate::store::{Catalogue, StoreError, Upserted};
    use crate::{Record, schema};
    use std::path::Path;

    #[test]
    fn blank_form_becomes_editing_new_on_first_edit() {
        let mut form = FormState::new();
        assert_eq!(form.mode(), FormMode::Empty);
        form.field_mut(schema::COL_NAME).push_str("Basil");
        form.mark_edited();
        assert_eq!(form.mode(), FormMode::EditingNew);
        form.clear();
        assert_eq!(form.mode(), FormMode::Empty);
        assert_eq!(form.name(), "");
    }

    #[test]
    fn load_record_decodes_every_structured_field() {
        let mut record = Record::named("Tomato");
        record.set(schema::COL_TEMPERATURE, "40-75");
        record.set(schema::COL_MATURITY, "60");
        record.set(schema::COL_SEASONS, "Spring, Autumn");
        record.set(schema::COL_START_DATE, "05/01, 06/15");
        record.set(schema::COL_HEIRLOOM, "Yes");

        let mut form = FormState::new();
        form.load_record(&record);

        assert_eq!(form.mode(), FormMode::EditingExisting);
        assert_eq!(form.temp_min, "40");
        assert_eq!(form.temp_max, "75");
        assert_eq!(form.maturity_min, "60");
        assert_eq!(form.maturity_max, "");
        assert_eq!(form.seasons, [true, false, true, false]);
        assert_eq!(form.start_dates, vec!["05/01", "06/15"]);
        assert_eq!(form.heirloom, "Yes");
    }

    #[test]
    fn encode_decode_round_trip_reproduces_the_record() {
        let mut form = FormState::new();
        form.field_mut(schema::COL_NAME).push_str("Tomato");
        form.temp_min = "40".to_string();
        form.temp_max = "75".to_string();
        form.seasons = [true, true, false, false];
        form.add_date(DateSlot::StartDate, "05/01");
        form.add_date(DateSlot::SeedStarted, "03/12/2026");
        let encoded = form.to_record();

        let mut reloaded = FormState::new();
        reloaded.load_record(&encoded);
        assert_eq!(reloaded.to_record(), encoded);
    }

    #[test]
    fn duplicate_dates_are_suppressed() {
        let mut form = FormState::new();
        assert!(form.add_date(DateSlot::StartDate, "05/01"));
        assert!(!form.add_date(DateSlot::StartDate, "05/01"));
        assert!(!form.add_date(DateSlot::StartDate, "  "));
        assert_eq!(form.start_dates, vec!["05/01"]);
        assert_eq!(
            form.to_record().get(schema::COL_START_DATE),
            "05/01"
        );
    }

    #[test]
    fn seasons_encode_in_canonical_order() {
        let mut form = FormState::new();
        // Select winter first, then spring; encoding must not care.
        form.seasons[3] = true;
        form.seasons[0] = true;
        assert_eq!(
            form.to_record().get(schema::COL_SEASONS),
            "Spring, Winter"
        );
    }

    #[test]
    fn submit_with_empty_name_is_rejected_without_mutation() {
        let mut catalogue = Catalogue::create_empty(Path::new("unused.csv"));
        let mut form = FormState::new();
        form.field_mut(schema::COL_TYPE).push_str("Herb");
        form.mark_edited();

        let err = form.submit(&mut catalogue).unwrap_err();
        assert!(matches!(err, StoreError::EmptyName));
        assert!(catalogue.is_empty());
        assert!(!catalogue.dirty());
        assert_eq!(form.mode(), FormMode::EditingNew);
    }

    #[test]
    fn submitting_a_renamed_form_creates_a_second_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalogue = Catalogue::open(&dir.path().join("seeds.csv")).unwrap();
        catalogue.upsert(Record::named("Basil")).unwrap();

        let mut form = FormState::new();
        form.load_record(&catalogue.get("Basil").unwrap().clone());
        form.field_mut(schema::COL_NAME).clear();
        form.field_mut(schema::COL_NAME).push_str("Sweet Basil");
        form.mark_edited();

        // Submit keys on the current Name value: no rename, a new record.
        assert_eq!(form.submit(&mut catalogue).unwrap(), Upserted::Inserted);
        assert_eq!(catalogue.len(), 2);
        assert!(catalogue.get("Basil").is_some());
        assert!(catalogue.get("Sweet Basil").is_some());
    }
}
