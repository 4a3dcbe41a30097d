// Central place for UI strings and other non-localized constants.
// Keep these out of gui.rs to reduce duplication and make tweaks safer.

// External links
pub const GITHUB_URL: &str = "https://github.com/sprout-app/sprout";

// Default backing file, created in the working directory on first run.
pub const DEFAULT_CATALOGUE_FILE: &str = "seed_list.csv";

// English UI strings (EN_ prefix to make future localization easier)
pub const EN_APP_TITLE: &str = "Sprout: Seed Catalogue";

pub const EN_BTN_OPEN: &str = "Open...";
pub const EN_BTN_SAVE: &str = "Save";
pub const EN_BTN_SAVE_AS: &str = "Save As...";
pub const EN_BTN_EXPORT: &str = "Export...";
pub const EN_BTN_ABOUT: &str = "About";
pub const EN_BTN_TOGGLE_THEME: &str = "Theme";

pub const EN_WINDOW_ABOUT: &str = "About";
pub const EN_ABOUT_HEADING: &str = "Sprout: Seed Catalogue";
pub const EN_ABOUT_VERSION: &str = "Version:";
pub const EN_ABOUT_BLURB: &str = "Organize, track, and grow your seed collection.";
pub const EN_PROJECT_REPO: &str = "GitHub Repo";

pub const EN_LABEL_EDIT: &str = "Edit:";
pub const EN_HINT_PICK_NAME: &str = "pick a seed";

pub const EN_LABEL_SEARCH: &str = "Search:";
pub const EN_HINT_SEARCH: &str = "name contains";
pub const EN_LABEL_PAIRING: &str = "Pairing:";
pub const EN_LABEL_SEASON: &str = "Season:";
pub const EN_HINT_ANY: &str = "any";
pub const EN_CHECK_HEIRLOOM_ONLY: &str = "Heirloom only";

pub const EN_LABEL_SORT: &str = "Sort:";
pub const EN_SORT_NAME: &str = "Name";
pub const EN_SORT_TYPE: &str = "Type";
pub const EN_BTN_RESET: &str = "Reset";

pub const EN_FORM_HEADING: &str = "Add / Edit Seed";
pub const EN_FORM_HINT: &str = "click a row to load it";

pub const EN_BTN_ADD_UPDATE: &str = "Add / Update";
pub const EN_BTN_DELETE: &str = "Delete";
pub const EN_BTN_CLEAR: &str = "Clear";
pub const EN_BTN_ADD_DATE: &str = "+";
pub const EN_BTN_CLEAR_DATES: &str = "x";

pub const EN_HINT_MONTH: &str = "mm";
pub const EN_HINT_DAY: &str = "dd";
pub const EN_HINT_YEAR: &str = "yyyy";
pub const EN_RANGE_DASH: &str = "\u{2013}";

pub const EN_WINDOW_CONFIRM_DELETE: &str = "Confirm Delete";
pub const EN_BTN_CONFIRM: &str = "Delete";
pub const EN_BTN_CANCEL: &str = "Cancel";

pub const EN_BTN_DISMISS: &str = "Dismiss";

pub const EN_ERR_SELECT_ROW_DELETE: &str = "Select a row to delete.";

pub const EN_BADGE_DIRTY: &str = "unsaved";
pub const EN_LABEL_SHOWING: &str = "showing";
pub const EN_LABEL_OF: &str = "of";

pub const EN_MODE_EMPTY: &str = "new entry";
pub const EN_MODE_EDITING_EXISTING: &str = "editing";
pub const EN_MODE_EDITING_NEW: &str = "adding";
