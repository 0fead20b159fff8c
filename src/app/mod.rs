//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ControlState, DerivedStyle, Settings, Messages)
//! - `controllers/` - Orchestration (StyleController, FontLoadController, NavController)
//! - `services/` - Business operations (font file fetching)
//! - `infrastructure/` - External integrations (widget seams, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{
    ControlState, DerivedStyle, FamilyChoice, FeatureTag, Message, SpecimenSettings, Subfamily,
};
pub use infrastructure::error::{AppError, Result};
pub use state::SpecimenState;
