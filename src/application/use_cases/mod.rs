/// Use cases module containing application orchestration
mod kba_lookup;
mod preview_detail;
mod preview_table;

pub use kba_lookup::{lock_view, KbaLookup, SharedDetailView};
pub use preview_detail::PreviewDetailUseCase;
pub use preview_table::PreviewTableUseCase;
