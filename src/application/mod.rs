/// Application layer - View state, use cases and DTOs
///
/// This layer holds the per-view UI state and orchestrates the domain
/// services through the ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod use_cases;
pub mod views;
