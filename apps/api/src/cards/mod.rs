// Card data: records, operator settings, printed-field resolution, and the
// helpers that turn spreadsheet rows and unit-tagged sizes into core inputs.

pub mod fields;
pub mod handlers;
pub mod mapping;
pub mod models;
pub mod units;

pub use models::AppSettings;
