//! The fixed seed-record schema: column names in declared order, canonical
//! option lists, and the heirloom flag vocabulary shared by the store, the
//! form binding, and the filters.

pub const COL_NAME: &str = "Name";
pub const COL_TYPE: &str = "Type";
pub const COL_LIFE_CYCLE: &str = "Life Cycle";
pub const COL_GERMINATION: &str = "Germination (days)";
pub const COL_SPACING: &str = "Seed Spacing (inches)";
pub const COL_TEMPERATURE: &str = "Temperature (F)";
pub const COL_DEPTH: &str = "Seed Depth (inches)";
pub const COL_START_DATE: &str = "Approximate Start Date";
pub const COL_TRANSPLANT_WEEKS: &str = "Transplant Timeframe (weeks)";
pub const COL_MATURITY: &str = "Time to Maturity";
pub const COL_HEIRLOOM: &str = "Heirloom (Y/N)";
pub const COL_SEASONS: &str = "Season/s";
pub const COL_BENEFITS: &str = "Benefits";
pub const COL_USES: &str = "Uses";
pub const COL_PAIRINGS: &str = "Pairings";
pub const COL_SEED_STARTED: &str = "Seed Started Date";
pub const COL_LOCATION: &str = "Location";
pub const COL_TRANSPLANT_DATE: &str = "Transplant Date";
pub const COL_HARVEST_DATE: &str = "Harvest Date";
pub const COL_ISSUES: &str = "Issues";
pub const COL_COMMENTS: &str = "Comments";

/// Declared column order. This is the CSV header and the field order of
/// every record; `Name` is the primary key.
pub const COLUMNS: [&str; 21] = [
    COL_NAME,
    COL_TYPE,
    COL_LIFE_CYCLE,
    COL_GERMINATION,
    COL_SPACING,
    COL_TEMPERATURE,
    COL_DEPTH,
    COL_START_DATE,
    COL_TRANSPLANT_WEEKS,
    COL_MATURITY,
    COL_HEIRLOOM,
    COL_SEASONS,
    COL_BENEFITS,
    COL_USES,
    COL_PAIRINGS,
    COL_SEED_STARTED,
    COL_LOCATION,
    COL_TRANSPLANT_DATE,
    COL_HARVEST_DATE,
    COL_ISSUES,
    COL_COMMENTS,
];

/// Canonical season order. Multi-select encodes in this order, never in
/// selection order.
pub const SEASONS: [&str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

pub const LIFE_CYCLES: [&str; 2] = ["Annual", "Perennial"];

pub const HEIRLOOM_CHOICES: [&str; 3] = ["Yes", "No", "Unknown"];

/// Columns whose values can run long; the table truncates these.
pub const LONG_TEXT_COLUMNS: [&str; 5] =
    [COL_COMMENTS, COL_BENEFITS, COL_USES, COL_ISSUES, COL_PAIRINGS];

pub fn is_long_text(column: &str) -> bool {
    LONG_TEXT_COLUMNS.contains(&column)
}

/// The fixed truthy set for the heirloom filter.
pub fn is_heirloom(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
