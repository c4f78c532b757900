//! Spreadsheet export shared by the browser app and tests.

pub mod excel_core;

pub use excel_core::build_spreadsheet;
