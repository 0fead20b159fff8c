use crate::app::infrastructure::surface::NavSurface;

/// Open/closed state of the navigation panel.
#[derive(Debug, Default)]
pub struct NavController {
    active: bool,
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn click_burger(&mut self, surface: &mut dyn NavSurface) -> bool {
        self.active = !self.active;
        surface.set_nav_active(self.active);
        self.active
    }

    /// Clicking outside the panel closes it. Returns true if anything changed.
    pub fn click_main(&mut self, surface: &mut dyn NavSurface) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        surface.set_nav_active(false);
        true
    }
}
