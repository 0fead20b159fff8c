use std::collections::HashMap;

use fltk::{
    app,
    button::{Button, CheckButton, ToggleButton},
    enums::{Font, FrameType},
    frame::Frame,
    group::Flex,
    menu::Choice,
    prelude::*,
    text::{TextBuffer, TextEditor},
    valuator::HorNiceSlider,
};
use log::{info, warn};

use crate::app::domain::style::{
    ControlState, DerivedStyle, FamilyChoice, FeatureTag, Slant, Subfamily, Weight,
};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::surface::{NavSurface, PreviewSurface};
use crate::app::services::font_loader::{FetchReport, FetchedFace};

use super::main_window::{family_index, ids, NAV_PANEL_HEIGHT};

/// FLTK fonts registered for each face, with Courier standing in for
/// anything that failed to load.
#[derive(Debug, Default)]
pub struct FaceTable {
    faces: HashMap<(FamilyChoice, Subfamily), Font>,
}

impl FaceTable {
    /// Fetched faces that FLTK does not know yet.
    pub fn unregistered<'a>(
        &'a self,
        report: &'a FetchReport,
    ) -> impl Iterator<Item = &'a FetchedFace> + 'a {
        report
            .fetched
            .iter()
            .filter(|face| !self.faces.contains_key(&(face.family, face.subfamily)))
    }

    /// Register newly fetched faces with FLTK. Faces registered by an earlier
    /// load are kept as they are. Returns how many were added.
    pub fn register(&mut self, report: &FetchReport) -> usize {
        let pending: Vec<FetchedFace> = self.unregistered(report).cloned().collect();
        let mut registered = 0;
        for face in &pending {
            match Font::load_font(&face.path) {
                Ok(name) => {
                    self.faces.insert((face.family, face.subfamily), Font::by_name(&name));
                    registered += 1;
                }
                Err(e) => warn!("could not register {}: {:?}", face.path.display(), e),
            }
        }
        info!(
            "registered {} new faces, {} already loaded ({} missing)",
            registered,
            report.fetched.len() - pending.len(),
            report.missing.len()
        );
        registered
    }

    pub fn resolve(&self, family: FamilyChoice, subfamily: Subfamily) -> Font {
        self.faces
            .get(&(family, subfamily))
            .copied()
            .unwrap_or_else(|| fallback_font(subfamily))
    }
}

fn fallback_font(subfamily: Subfamily) -> Font {
    match subfamily {
        Subfamily::Regular => Font::Courier,
        Subfamily::Bold => Font::CourierBold,
        Subfamily::Italic => Font::CourierItalic,
        Subfamily::BoldItalic => Font::CourierBoldItalic,
    }
}

fn lookup<T: WidgetBase + Clone + 'static>(id: &str) -> Result<T> {
    app::widget_from_id::<T>(id).ok_or_else(|| AppError::MissingControl(id.to_string()))
}

/// The preview widgets, looked up by id once at startup.
pub struct FltkPreview {
    root: Flex,
    burger: Button,
    nav_panel: Flex,
    config: Flex,
    family_choice: Choice,
    bold_button: ToggleButton,
    italic_button: ToggleButton,
    subfamily_text: Frame,
    size_slider: HorNiceSlider,
    size_text: Frame,
    ligature_checkbox: CheckButton,
    feature_checkboxes: Vec<(FeatureTag, CheckButton)>,
    editor: TextEditor,
    buffer: TextBuffer,
    readout: Frame,
    faces: FaceTable,
}

impl FltkPreview {
    /// Find every control the preview needs. A missing one is a startup error.
    pub fn bind(features: &[FeatureTag]) -> Result<Self> {
        let editor: TextEditor = lookup(ids::PREVIEW_TEXT)?;
        let buffer = editor
            .buffer()
            .ok_or_else(|| AppError::MissingControl(format!("{} buffer", ids::PREVIEW_TEXT)))?;

        let feature_checkboxes = features
            .iter()
            .map(|tag| {
                lookup::<CheckButton>(&ids::feature_checkbox(tag.as_str()))
                    .map(|checkbox| (tag.clone(), checkbox))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            root: lookup(ids::ROOT)?,
            burger: lookup(ids::NAVBAR_BURGER)?,
            nav_panel: lookup(ids::NAV_PANEL)?,
            config: lookup(ids::PREVIEW_CONFIG)?,
            family_choice: lookup(ids::FAMILY_CHOICE)?,
            bold_button: lookup(ids::BOLD_BUTTON)?,
            italic_button: lookup(ids::ITALIC_BUTTON)?,
            subfamily_text: lookup(ids::SUBFAMILY_TEXT)?,
            size_slider: lookup(ids::SIZE_SLIDER)?,
            size_text: lookup(ids::SIZE_TEXT)?,
            ligature_checkbox: lookup(ids::LIGATURE_CHECKBOX)?,
            feature_checkboxes,
            editor,
            buffer,
            readout: lookup(ids::STYLE_READOUT)?,
            faces: FaceTable::default(),
        })
    }

    /// Make every control show the given state.
    pub fn sync_controls(&mut self, state: &ControlState) {
        self.family_choice.set_value(family_index(state.family));
        self.bold_button.set_value(state.axes.weight == Weight::Bold);
        self.italic_button.set_value(state.axes.slant == Slant::Italic);
        self.size_slider.set_value(state.size_px as f64);
        self.ligature_checkbox.set_value(state.ligatures);
        for (tag, checkbox) in &mut self.feature_checkboxes {
            checkbox.set_value(state.features.is_enabled(tag.as_str()));
        }
    }

    pub fn register_faces(&mut self, report: &FetchReport) -> usize {
        self.faces.register(report)
    }
}

impl PreviewSurface for FltkPreview {
    fn apply_style(&mut self, state: &ControlState, style: &DerivedStyle) {
        let subfamily = state.subfamily();

        self.editor.set_text_font(self.faces.resolve(state.family, subfamily));
        self.editor.set_text_size(style.font_size_px as i32);
        self.size_text.set_label(&style.size_label());
        self.subfamily_text.set_label(subfamily.display_name());
        self.readout.set_label(&style.to_css());

        self.editor.redraw();
        self.config.redraw();
        self.readout.redraw();
    }

    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        if enabled {
            self.config.activate();
            self.editor.activate();
        } else {
            self.config.deactivate();
            self.editor.deactivate();
        }
        self.config.redraw();
        self.editor.redraw();
    }
}

impl NavSurface for FltkPreview {
    fn set_nav_active(&mut self, active: bool) {
        if active {
            self.burger.set_frame(FrameType::DownBox);
            self.nav_panel.show();
            self.root.fixed(&self.nav_panel, NAV_PANEL_HEIGHT);
        } else {
            self.burger.set_frame(FrameType::UpBox);
            self.nav_panel.hide();
            self.root.fixed(&self.nav_panel, 0);
        }
        self.root.redraw();
    }
}
