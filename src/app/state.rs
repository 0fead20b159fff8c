use fltk::{app::Sender, dialog};
use log::{debug, info, warn};

use super::controllers::font_load::FontLoadController;
use super::controllers::nav::NavController;
use super::controllers::style::StyleController;
use super::domain::messages::Message;
use super::domain::settings::SpecimenSettings;
use super::domain::style::{FamilyChoice, Subfamily};
use super::infrastructure::error::Result;
use super::services::font_loader::{FetchReport, FontLoader};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::defaults_dialog::show_defaults_dialog;
use crate::ui::preview::FltkPreview;

pub struct SpecimenState {
    pub settings: SpecimenSettings,
    pub style: StyleController,
    pub font_load: FontLoadController,
    pub nav: NavController,
    pub preview: FltkPreview,
    pub loader: FontLoader,
}

impl SpecimenState {
    /// Bind the preview widgets and seed the controls from settings.
    /// Fails if a required control is missing or the settings are invalid.
    pub fn new(settings: SpecimenSettings, sender: Sender<Message>) -> Result<Self> {
        let style = StyleController::from_settings(&settings)?;
        let preview = FltkPreview::bind(&settings.features)?;
        let font_load = FontLoadController::from_settings(&settings);
        let loader = FontLoader::new(sender, settings.font_dir());

        Ok(Self {
            settings,
            style,
            font_load,
            nav: NavController::new(),
            preview,
            loader,
        })
    }

    /// Render the seeded style and start fetching fonts.
    pub fn start(&mut self) {
        self.preview.sync_controls(self.style.state());
        self.style.render(&mut self.preview);
        info!("loading faces from {}", self.loader.font_dir().display());
        self.loader.begin();
    }

    /// Dispatch one message. Returns false when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        if !self.font_load.state().accepts(&msg) {
            debug!("fonts loading, dropping {:?}", msg);
            return true;
        }

        match msg {
            Message::SetFamily(family) => self.set_family(family),
            Message::SetSubfamily(subfamily) => self.set_subfamily(subfamily),
            Message::SetBold(bold) => {
                self.style.set_bold(bold, &mut self.preview);
            }
            Message::SetItalic(italic) => {
                self.style.set_italic(italic, &mut self.preview);
            }
            Message::SetSize(px) => {
                self.style.set_size(px, &mut self.preview);
            }
            Message::SetLigatures(enabled) => {
                self.style.set_ligatures(enabled, &mut self.preview);
            }
            Message::ToggleFeature(tag) => self.toggle_feature(&tag),
            Message::BurgerClicked => {
                self.nav.click_burger(&mut self.preview);
            }
            Message::MainClicked => {
                self.nav.click_main(&mut self.preview);
            }
            Message::FontsLoading => self.font_load.begin_loading(&mut self.preview),
            Message::FontsFetched(report) => self.fonts_fetched(&report),
            Message::ReloadFonts => self.loader.begin(),
            Message::OpenDefaults => self.open_defaults(),
            Message::ShowAbout => show_about_dialog(),
            Message::Quit => return false,
        }
        true
    }

    fn set_family(&mut self, family: FamilyChoice) {
        self.style.set_family(family, &mut self.preview);
    }

    /// The combined selector moves both toggles, so resync them.
    fn set_subfamily(&mut self, subfamily: Subfamily) {
        self.style.set_subfamily(subfamily, &mut self.preview);
        self.preview.sync_controls(self.style.state());
    }

    fn toggle_feature(&mut self, tag: &str) {
        if let Err(e) = self.style.toggle_feature(tag, &mut self.preview) {
            warn!("ignoring feature toggle: {}", e);
            self.preview.sync_controls(self.style.state());
        }
    }

    fn fonts_fetched(&mut self, report: &FetchReport) {
        self.preview.register_faces(report);
        // Re-resolve the editor font now that real faces may exist.
        self.style.render(&mut self.preview);
        self.font_load.finish_loading(&mut self.preview);
    }

    fn open_defaults(&mut self) {
        if let Some(new_settings) = show_defaults_dialog(&self.settings) {
            if let Err(e) = new_settings.validate().and_then(|_| new_settings.save()) {
                dialog::alert_default(&format!("Failed to save settings: {}", e));
                return;
            }
            self.settings = new_settings;
        }
    }
}
