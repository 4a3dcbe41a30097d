//! Core library for Sprout, a desktop seed catalogue.
//! Provides the fixed record schema, the multi-value field codec, the
//! CSV-backed record store, the filter/sort view, and the headless form
//! binding that the egui shell renders.

pub mod codec;
mod form;
mod gui;
mod record;
pub mod schema;
pub mod statics;
mod store;
mod view;

pub use form::{DateSlot, FormMode, FormState};
pub use gui::run_gui;
pub use record::Record;
pub use store::{Catalogue, StoreError, Upserted};
pub use view::{Filter, ListView, SortKey};
