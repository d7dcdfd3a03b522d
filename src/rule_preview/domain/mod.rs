pub mod hit;
pub mod kba;
pub mod label;
mod lenient;
pub mod rule;
pub mod rule_detail;
pub mod sort;

pub use hit::{HitCountMap, HitPayload};
pub use kba::KbaDocument;
pub use label::{Label, LabelColor};
pub use rule::{Rule, RuleStatus};
pub use rule_detail::{RuleDetail, Severity};
pub use sort::{SortDirection, SortKey, SortState};
