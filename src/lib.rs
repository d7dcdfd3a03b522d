//! content-preview - preview views for rule-based recommendation content
//!
//! This library provides the view models behind a content preview tool: a
//! sortable and searchable table of rules, a rule detail page that merges a
//! selected hit or a free-style JSON payload into the rule content, and a
//! best-effort knowledge-base article lookup. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`rule_preview`): Rule records and pure sort/filter/validate/project services
//! - **Application Layer** (`application`): View state, read models and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities, error types and logging
//!
//! # Example
//!
//! ```no_run
//! use content_preview::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let source = JsonContentSource::new(PathBuf::from("./content"))?;
//! let use_case = PreviewTableUseCase::new(source);
//!
//! let sort = SortState::new(SortKey::ErrorKey, SortDirection::Desc);
//! let model = use_case.execute(TableRequest::new(sort, "ceph"))?;
//!
//! let output = TextFormatter::new(false).format_table(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod rule_preview;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonContentSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{
        CachingKbaRepository, HydraKbaClient, KbaClientConfig,
    };
    pub use crate::application::dto::{DetailRequest, OutputFormat, TableRequest};
    pub use crate::application::read_models::{
        DetailReport, ReportDetails, TableReadModel, TableRow,
    };
    pub use crate::application::use_cases::{
        lock_view, KbaLookup, PreviewDetailUseCase, PreviewTableUseCase, SharedDetailView,
    };
    pub use crate::application::views::{ContentTableView, DetailView};
    pub use crate::ports::outbound::{
        ContentSource, KbaRepository, OutputPresenter, PreviewFormatter, ProgressReporter,
    };
    pub use crate::rule_preview::domain::{
        HitCountMap, HitPayload, KbaDocument, Rule, RuleDetail, SortDirection, SortKey, SortState,
    };
    pub use crate::rule_preview::services::{
        FreeStyleValidation, HitProjector, JsonValidator, TableEngine, ValidatedState,
    };
    pub use crate::shared::Result;
}
