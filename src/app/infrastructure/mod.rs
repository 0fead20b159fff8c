//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Widget seams used by the controllers
//! - Error types

pub mod error;
pub mod surface;
