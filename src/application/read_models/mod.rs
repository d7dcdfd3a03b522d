//! Read models for the two views
//!
//! These are render-ready, denormalized snapshots of view state handed to
//! the formatters.

pub mod detail_report;
pub mod table_row;

pub use detail_report::{
    DetailReport, FreeStyleView, HitListEntry, KbaView, ReportDetails, RichText,
};
pub use table_row::{TableColumn, TableReadModel, TableRow, COLUMNS};
