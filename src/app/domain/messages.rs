use crate::app::domain::style::{FamilyChoice, Subfamily};
use crate::app::services::font_loader::FetchReport;

/// All messages that can be sent through the FLTK channel.
/// Each control callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Preview controls
    SetFamily(FamilyChoice),
    SetSubfamily(Subfamily),
    SetBold(bool),
    SetItalic(bool),
    SetSize(u32),
    SetLigatures(bool),
    ToggleFeature(String),

    // Navigation
    BurgerClicked,
    MainClicked,

    // Font loading
    FontsLoading,
    FontsFetched(FetchReport),
    ReloadFonts,

    // Settings & Help
    OpenDefaults,
    ShowAbout,
    Quit,
}

impl Message {
    /// Messages that edit the style, the saved default style, or restart
    /// font loading. None of them may run while the faces are loading.
    pub fn locked_while_loading(&self) -> bool {
        matches!(
            self,
            Self::SetFamily(_)
                | Self::SetSubfamily(_)
                | Self::SetBold(_)
                | Self::SetItalic(_)
                | Self::SetSize(_)
                | Self::SetLigatures(_)
                | Self::ToggleFeature(_)
                | Self::ReloadFonts
                | Self::OpenDefaults
        )
    }
}
