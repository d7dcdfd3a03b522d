pub mod debounce;
pub mod hit_projector;
pub mod json_validator;
pub mod table_engine;

pub use debounce::Debouncer;
pub use hit_projector::HitProjector;
pub use json_validator::{FreeStyleValidation, JsonValidator, ValidatedState};
pub use table_engine::TableEngine;
