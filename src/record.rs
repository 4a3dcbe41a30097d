use crate::schema;
use indexmap::IndexMap;

/// One seed entry: an ordered mapping from column name to string value.
/// Every declared schema column is always present (missing cells read as
/// empty); columns a loaded file carries beyond the schema follow in file
/// order. `Name` acts as the primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Record {
    pub fn new() -> Self {
        let mut fields = IndexMap::with_capacity(schema::COLUMNS.len());
        for column in schema::COLUMNS {
            fields.insert(column.to_string(), String::new());
        }
        Self { fields }
    }

    /// Convenience for tests and callers that only care about the key.
    pub fn named(name: &str) -> Self {
        let mut record = Self::new();
        record.set(schema::COL_NAME, name);
        record
    }

    pub fn name(&self) -> &str {
        self.get(schema::COL_NAME)
    }

    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_string(), value.into());
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
