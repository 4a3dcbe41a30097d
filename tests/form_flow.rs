use pretty_assertions::assert_eq;
use sprout::{Catalogue, DateSlot, FormMode, FormState, StoreError, Upserted, schema};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn submit_inserts_persists_and_survives_reload() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("seeds.csv");
    let mut catalogue = Catalogue::open(&path)?;

    let mut form = FormState::new();
    form.field_mut(schema::COL_NAME).push_str("Basil");
    form.heirloom = "Yes".to_string();
    form.mark_edited();
    assert_eq!(form.mode(), FormMode::EditingNew);

    assert_eq!(form.submit(&mut catalogue)?, Upserted::Inserted);
    assert_eq!(form.mode(), FormMode::EditingExisting);
    assert_eq!(catalogue.len(), 1);
    assert!(!catalogue.dirty());

    let reloaded = Catalogue::open(&path)?;
    let basil = reloaded.get("Basil").expect("persisted");
    assert_eq!(basil.get(schema::COL_HEIRLOOM), "Yes");
    Ok(())
}

#[test]
fn select_edit_submit_updates_in_place() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("seeds.csv");
    let mut catalogue = Catalogue::open(&path)?;

    let mut form = FormState::new();
    form.field_mut(schema::COL_NAME).push_str("Basil");
    form.submit(&mut catalogue)?;
    form.clear();
    form.field_mut(schema::COL_NAME).push_str("Mint");
    form.submit(&mut catalogue)?;

    // Select Basil from the list, change one field, submit.
    let basil = catalogue.get("Basil").expect("stored").clone();
    form.load_record(&basil);
    assert_eq!(form.mode(), FormMode::EditingExisting);
    form.field_mut(schema::COL_TYPE).push_str("Herb");

    assert_eq!(form.submit(&mut catalogue)?, Upserted::Updated);
    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.records()[0].name(), "Basil");
    assert_eq!(catalogue.records()[0].get(schema::COL_TYPE), "Herb");
    assert_eq!(catalogue.records()[1].name(), "Mint");
    Ok(())
}

#[test]
fn empty_name_submit_is_rejected_without_a_write() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("seeds.csv");
    let mut catalogue = Catalogue::open(&path)?;
    let before = std::fs::read(&path)?;

    let mut form = FormState::new();
    form.field_mut(schema::COL_TYPE).push_str("Herb");
    form.mark_edited();

    let err = form.submit(&mut catalogue).unwrap_err();
    assert!(matches!(err, StoreError::EmptyName));
    assert_eq!(form.mode(), FormMode::EditingNew);
    assert!(catalogue.is_empty());
    assert_eq!(std::fs::read(&path)?, before);
    Ok(())
}

#[test]
fn structured_fields_round_trip_through_the_form() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("seeds.csv");
    let mut catalogue = Catalogue::open(&path)?;

    let mut form = FormState::new();
    form.field_mut(schema::COL_NAME).push_str("Tomato");
    form.temp_min = "40".to_string();
    form.temp_max = "75".to_string();
    form.maturity_min = "60".to_string();
    form.seasons = [true, true, false, false];
    form.add_date(DateSlot::StartDate, "05/01");
    form.add_date(DateSlot::StartDate, "05/01");
    form.add_date(DateSlot::SeedStarted, "03/12/2026");
    form.submit(&mut catalogue)?;

    let stored = Catalogue::open(&path)?;
    let tomato = stored.get("Tomato").expect("persisted").clone();
    assert_eq!(tomato.get(schema::COL_TEMPERATURE), "40-75");
    assert_eq!(tomato.get(schema::COL_MATURITY), "60");
    assert_eq!(tomato.get(schema::COL_SEASONS), "Spring, Summer");
    assert_eq!(tomato.get(schema::COL_START_DATE), "05/01");
    assert_eq!(tomato.get(schema::COL_SEED_STARTED), "03/12/2026");

    // Decode and re-encode reproduces the identical record.
    let mut reloaded = FormState::new();
    reloaded.load_record(&tomato);
    assert_eq!(reloaded.to_record(), tomato);
    Ok(())
}
