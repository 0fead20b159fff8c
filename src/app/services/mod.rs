//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Face file fetching for the preview fonts

pub mod font_loader;
