use log::{debug, info};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::SpecimenSettings;
use crate::app::infrastructure::surface::PreviewSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontLoadState {
    Idle,
    /// `captured` is the preview text to bring back once loading finishes.
    /// `None` means the preview never held real content.
    Loading { captured: Option<String> },
    Ready,
}

impl FontLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The controls are disabled while loading, and that holds for menu
    /// shortcuts too: locked messages are dropped until the faces are ready.
    pub fn accepts(&self, msg: &Message) -> bool {
        !(self.is_loading() && msg.locked_while_loading())
    }
}

/// Swaps the preview for a placeholder while the faces are being fetched.
pub struct FontLoadController {
    state: FontLoadState,
    sample_text: String,
    loading_text: String,
}

impl FontLoadController {
    pub fn new(sample_text: String, loading_text: String) -> Self {
        Self {
            state: FontLoadState::Idle,
            sample_text,
            loading_text,
        }
    }

    pub fn from_settings(settings: &SpecimenSettings) -> Self {
        Self::new(settings.sample_text.clone(), settings.loading_text.clone())
    }

    pub fn state(&self) -> &FontLoadState {
        &self.state
    }

    pub fn begin_loading(&mut self, surface: &mut dyn PreviewSurface) {
        let captured = match self.state {
            // The surface shows the placeholder; capturing it would lose the text.
            FontLoadState::Loading { .. } => {
                debug!("font loading already in progress");
                return;
            }
            FontLoadState::Idle => None,
            FontLoadState::Ready => Some(surface.text()),
        };

        info!("loading fonts");
        surface.set_controls_enabled(false);
        surface.set_text(&self.loading_text);
        self.state = FontLoadState::Loading { captured };
    }

    pub fn finish_loading(&mut self, surface: &mut dyn PreviewSurface) {
        let state = std::mem::replace(&mut self.state, FontLoadState::Ready);
        match state {
            FontLoadState::Ready => return,
            FontLoadState::Loading {
                captured: Some(text),
            } => surface.set_text(&text),
            FontLoadState::Idle | FontLoadState::Loading { captured: None } => {
                surface.set_text(&self.sample_text)
            }
        }
        surface.set_controls_enabled(true);
        info!("fonts ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::style::StyleController;
    use crate::app::domain::style::{FamilyChoice, Subfamily};
    use crate::app::infrastructure::surface::testing::RecordingSurface;

    fn controller() -> FontLoadController {
        FontLoadController::new("sample".to_string(), "loading...".to_string())
    }

    #[test]
    fn test_first_ready_populates_sample() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.finish_loading(&mut surface);

        assert_eq!(surface.text, "sample");
        assert!(surface.controls_enabled);
        assert_eq!(*ctrl.state(), FontLoadState::Ready);
    }

    #[test]
    fn test_initial_load_cycle_populates_sample() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();

        ctrl.begin_loading(&mut surface);
        assert_eq!(surface.text, "loading...");
        assert!(!surface.controls_enabled);
        assert_eq!(*ctrl.state(), FontLoadState::Loading { captured: None });

        ctrl.finish_loading(&mut surface);
        assert_eq!(surface.text, "sample");
        assert!(surface.controls_enabled);
    }

    #[test]
    fn test_reload_restores_text_verbatim() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.finish_loading(&mut surface);
        surface.text = "Hello".to_string();

        ctrl.begin_loading(&mut surface);
        assert!(ctrl.state().is_loading());
        assert_eq!(surface.text, "loading...");

        ctrl.finish_loading(&mut surface);
        assert_eq!(surface.text, "Hello");
        assert!(surface.controls_enabled);
    }

    #[test]
    fn test_repeated_loading_never_captures_placeholder() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.finish_loading(&mut surface);
        surface.text = "  keep\nthis  ".to_string();

        ctrl.begin_loading(&mut surface);
        ctrl.begin_loading(&mut surface);
        ctrl.finish_loading(&mut surface);

        assert_eq!(surface.text, "  keep\nthis  ");
    }

    #[test]
    fn test_ready_while_ready_is_noop() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        ctrl.finish_loading(&mut surface);
        surface.text = "edited".to_string();

        ctrl.finish_loading(&mut surface);
        assert_eq!(surface.text, "edited");
    }

    #[test]
    fn test_loading_locks_style_edits() {
        let mut ctrl = controller();
        let mut surface = RecordingSurface::default();
        let locked = [
            Message::SetFamily(FamilyChoice::FirpleSlim),
            Message::SetSubfamily(Subfamily::Bold),
            Message::SetBold(true),
            Message::SetItalic(true),
            Message::SetSize(30),
            Message::SetLigatures(false),
            Message::ToggleFeature("cv33".to_string()),
            Message::ReloadFonts,
            Message::OpenDefaults,
        ];

        assert!(locked.iter().all(|msg| ctrl.state().accepts(msg)));

        ctrl.begin_loading(&mut surface);
        assert!(locked.iter().all(|msg| !ctrl.state().accepts(msg)));
        assert!(ctrl.state().accepts(&Message::BurgerClicked));
        assert!(ctrl.state().accepts(&Message::FontsFetched(Default::default())));
        assert!(ctrl.state().accepts(&Message::Quit));

        ctrl.finish_loading(&mut surface);
        assert!(locked.iter().all(|msg| ctrl.state().accepts(msg)));
    }

    #[test]
    fn test_subfamily_shortcut_during_reload_keeps_style() {
        let mut ctrl = controller();
        let mut style = StyleController::from_settings(&SpecimenSettings::default()).unwrap();
        let mut surface = RecordingSurface::default();
        ctrl.finish_loading(&mut surface);
        style.render(&mut surface);
        ctrl.begin_loading(&mut surface);
        let before = style.derived();

        let msg = Message::SetSubfamily(Subfamily::Bold);
        if ctrl.state().accepts(&msg) {
            style.set_subfamily(Subfamily::Bold, &mut surface);
        }

        assert_eq!(style.derived(), before);
        assert_eq!(surface.style.as_ref(), Some(&before));
        assert_eq!(surface.applied, 1);
        assert!(!surface.controls_enabled);
    }
}
