//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Preview style reconciliation
//! - Font loading state
//! - Navigation panel

pub mod font_load;
pub mod nav;
pub mod style;
