//! Seams between the controllers and the widgets they drive.

use crate::app::domain::style::{ControlState, DerivedStyle};

/// The preview text region plus the controls that edit it.
pub trait PreviewSurface {
    /// Write every derived property, including the size label when one exists.
    /// `state` is the control state `style` was derived from, for surfaces
    /// that pick faces by family and axes.
    fn apply_style(&mut self, state: &ControlState, style: &DerivedStyle);
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn set_controls_enabled(&mut self, enabled: bool);
}

/// Burger button and the panel it opens share one active flag.
pub trait NavSurface {
    fn set_nav_active(&mut self, active: bool);
}
