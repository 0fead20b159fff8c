//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Control state and the derived preview style
//! - Specimen settings
//! - Message types for the event system

pub mod messages;
pub mod settings;
pub mod style;

pub use messages::Message;
pub use settings::{DefaultStyle, SizeRange, SpecimenSettings};
pub use style::{
    ControlState, DerivedStyle, FamilyChoice, FeatureSet, FeatureTag, Slant, StyleAxes,
    Subfamily, Weight,
};
