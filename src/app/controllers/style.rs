use log::debug;

use crate::app::domain::settings::{SizeRange, SpecimenSettings};
use crate::app::domain::style::{
    ControlState, DerivedStyle, FamilyChoice, Slant, Subfamily, Weight,
};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::surface::PreviewSurface;

/// Keeps the preview's derived style in step with the control state.
///
/// Every operation mutates `ControlState` and then re-derives the whole style
/// before writing it out, so the surface never holds a stale property.
pub struct StyleController {
    state: ControlState,
    size_range: SizeRange,
}

impl StyleController {
    pub fn new(state: ControlState, size_range: SizeRange) -> Self {
        Self { state, size_range }
    }

    pub fn from_settings(settings: &SpecimenSettings) -> Result<Self> {
        Ok(Self::new(settings.initial_control_state()?, settings.size_range))
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn size_range(&self) -> SizeRange {
        self.size_range
    }

    pub fn derived(&self) -> DerivedStyle {
        DerivedStyle::derive(&self.state)
    }

    /// Write the current style without changing anything.
    pub fn render(&self, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        self.commit(surface)
    }

    /// Set both axes in one step.
    pub fn set_subfamily(
        &mut self,
        subfamily: Subfamily,
        surface: &mut dyn PreviewSurface,
    ) -> DerivedStyle {
        self.state.axes = subfamily.axes();
        self.commit(surface)
    }

    pub fn set_bold(&mut self, bold: bool, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        self.state.axes.weight = Weight::from_bold(bold);
        self.commit(surface)
    }

    pub fn set_italic(&mut self, italic: bool, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        self.state.axes.slant = Slant::from_italic(italic);
        self.commit(surface)
    }

    pub fn set_family(
        &mut self,
        family: FamilyChoice,
        surface: &mut dyn PreviewSurface,
    ) -> DerivedStyle {
        self.state.family = family;
        self.commit(surface)
    }

    pub fn set_size(&mut self, px: u32, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        self.state.size_px = self.size_range.clamp(px);
        self.commit(surface)
    }

    pub fn set_ligatures(&mut self, enabled: bool, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        self.state.ligatures = enabled;
        self.commit(surface)
    }

    pub fn toggle_feature(
        &mut self,
        tag: &str,
        surface: &mut dyn PreviewSurface,
    ) -> Result<DerivedStyle> {
        let enabled = self.state.features.toggle(tag)?;
        debug!("feature {} -> {}", tag, enabled);
        Ok(self.commit(surface))
    }

    fn commit(&self, surface: &mut dyn PreviewSurface) -> DerivedStyle {
        let style = DerivedStyle::derive(&self.state);
        debug!("preview style: {}", style.to_css());
        surface.apply_style(&self.state, &style);
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;
    use crate::app::infrastructure::surface::testing::RecordingSurface;

    fn controller() -> StyleController {
        StyleController::from_settings(&SpecimenSettings::default()).unwrap()
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Sub(Subfamily),
        Bold(bool),
        Italic(bool),
        Family(FamilyChoice),
        Size(u32),
        Ligatures(bool),
        Feature(&'static str),
    }

    fn apply(ctrl: &mut StyleController, op: Op, surface: &mut RecordingSurface) {
        match op {
            Op::Sub(s) => {
                ctrl.set_subfamily(s, surface);
            }
            Op::Bold(b) => {
                ctrl.set_bold(b, surface);
            }
            Op::Italic(i) => {
                ctrl.set_italic(i, surface);
            }
            Op::Family(f) => {
                ctrl.set_family(f, surface);
            }
            Op::Size(px) => {
                ctrl.set_size(px, surface);
            }
            Op::Ligatures(on) => {
                ctrl.set_ligatures(on, surface);
            }
            Op::Feature(tag) => {
                ctrl.toggle_feature(tag, surface).unwrap();
            }
        }
    }

    #[test]
    fn test_style_matches_fresh_derivation_after_any_sequence() {
        let ops = [
            Op::Sub(Subfamily::BoldItalic),
            Op::Bold(false),
            Op::Italic(true),
            Op::Family(FamilyChoice::FirpleSlim),
            Op::Size(31),
            Op::Ligatures(false),
            Op::Feature("cv33"),
            Op::Feature("ss11"),
            Op::Sub(Subfamily::Regular),
            Op::Family(FamilyChoice::Firple),
        ];

        // Every rotation of the op list, applied in full.
        for start in 0..ops.len() {
            let mut ctrl = controller();
            let mut surface = RecordingSurface::default();
            for i in 0..ops.len() {
                apply(&mut ctrl, ops[(start + i) % ops.len()], &mut surface);
            }

            let fresh = StyleController::new(ctrl.state().clone(), ctrl.size_range());
            assert_eq!(surface.style.as_ref(), Some(&fresh.derived()));
            assert_eq!(surface.size_label, Some(fresh.derived().size_label()));
        }
    }

    #[test]
    fn test_feature_double_toggle_restores_string() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.toggle_feature("ss11", &mut surface).unwrap();
        let before = ctrl.derived().font_feature_settings;

        ctrl.toggle_feature("cv33", &mut surface).unwrap();
        ctrl.toggle_feature("cv33", &mut surface).unwrap();

        assert_eq!(ctrl.derived().font_feature_settings, before);
        assert_eq!(before, "\"ss11\" 1");
    }

    #[test]
    fn test_feature_toggle_order_does_not_matter() {
        let mut a = controller();
        let mut b = controller();
        let mut surface = RecordingSurface::default();

        a.toggle_feature("cv33", &mut surface).unwrap();
        let a_style = a.toggle_feature("ss11", &mut surface).unwrap();
        b.toggle_feature("ss11", &mut surface).unwrap();
        let b_style = b.toggle_feature("cv33", &mut surface).unwrap();

        assert_eq!(a_style.font_feature_settings, b_style.font_feature_settings);
        assert_eq!(a_style.font_feature_settings, "\"cv33\" 1, \"ss11\" 1");
    }

    #[test]
    fn test_disabling_last_feature_clears_property() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.toggle_feature("cv33", &mut surface).unwrap();
        let style = ctrl.toggle_feature("cv33", &mut surface).unwrap();

        assert_eq!(style.font_feature_settings, "");
        assert!(!style.to_css().contains("font-feature-settings"));
    }

    #[test]
    fn test_bold_italic_sets_both_axes() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        let style = ctrl.set_subfamily(Subfamily::BoldItalic, &mut surface);

        assert_eq!(style.font_weight, 700);
        assert_eq!(style.font_style, "italic");
        // One write for the whole change.
        assert_eq!(surface.applied, 1);
    }

    #[test]
    fn test_axes_do_not_reset_each_other() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.set_italic(true, &mut surface);
        ctrl.set_bold(true, &mut surface);
        assert_eq!(ctrl.state().subfamily(), Subfamily::BoldItalic);

        ctrl.set_bold(false, &mut surface);
        let style = surface.style.clone().unwrap();
        assert_eq!(style.font_style, "italic");
        assert_eq!(style.font_weight, 400);
    }

    #[test]
    fn test_family_independent_of_axes() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.set_subfamily(Subfamily::Bold, &mut surface);
        let style = ctrl.set_family(FamilyChoice::FirpleSlim, &mut surface);
        assert_eq!(style.font_family, "Firple Slim");
        assert_eq!(style.font_weight, 700);
    }

    #[test]
    fn test_unknown_subfamily_keeps_prior_style() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.set_subfamily(Subfamily::Bold, &mut surface);
        let before = ctrl.derived();

        let err = "heavy".parse::<Subfamily>().unwrap_err();
        assert!(matches!(err, AppError::UnknownSubfamily(_)));
        assert_eq!(ctrl.derived(), before);
        assert_eq!(surface.applied, 1);
    }

    #[test]
    fn test_surface_receives_typed_state() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.set_family(FamilyChoice::FirpleSlim, &mut surface);
        ctrl.set_italic(true, &mut surface);

        assert_eq!(surface.family, Some(FamilyChoice::FirpleSlim));
        assert_eq!(surface.subfamily, Some(Subfamily::Italic));

        ctrl.set_bold(true, &mut surface);
        assert_eq!(surface.subfamily, Some(Subfamily::BoldItalic));
    }

    #[test]
    fn test_unknown_feature_is_rejected() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        assert!(matches!(
            ctrl.toggle_feature("zero", &mut surface),
            Err(AppError::UnknownFeature(_))
        ));
        assert!(surface.style.is_none());
    }

    #[test]
    fn test_size_mirrors_label_and_clamps() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.set_size(28, &mut surface);
        assert_eq!(surface.size_label.as_deref(), Some("28px"));

        let style = ctrl.set_size(500, &mut surface);
        assert_eq!(style.font_size_px, 72);
        assert_eq!(surface.size_label.as_deref(), Some("72px"));
    }

    #[test]
    fn test_ligatures_two_states() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        assert_eq!(ctrl.set_ligatures(false, &mut surface).font_variant_ligatures, "none");
        assert_eq!(ctrl.set_ligatures(true, &mut surface).font_variant_ligatures, "normal");
    }

    #[test]
    fn test_render_uses_seeded_state() {
        let ctrl = controller();
        let mut surface = RecordingSurface::default();
        let style = ctrl.render(&mut surface);
        assert_eq!(style.font_size_px, 16);
        assert_eq!(surface.size_label.as_deref(), Some("16px"));
    }
}
