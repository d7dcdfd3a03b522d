//! View state
//!
//! Per-view-instance UI state (sort, search, selection, free-style input,
//! KBA enrichment). Created when a view opens and discarded when it closes.

pub mod content_table_view;
pub mod detail_view;

pub use content_table_view::ContentTableView;
pub use detail_view::{DetailView, KbaRequestId, NO_SELECTION};
