use fltk::{
    app::Sender,
    button::{Button, CheckButton, ToggleButton},
    enums::{Align, Color, Event, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::{Choice, MenuBar},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::domain::messages::Message;
use crate::app::domain::settings::SpecimenSettings;
use crate::app::domain::style::{FAMILY_COPYRIGHT, FAMILY_VERSION, FamilyChoice};

/// Widget ids the preview binds to at startup.
pub mod ids {
    pub const ROOT: &str = "root";
    pub const NAVBAR_BURGER: &str = "navbar-burger";
    pub const NAV_PANEL: &str = "nav-panel";
    pub const MAIN: &str = "main";
    pub const PREVIEW_CONFIG: &str = "preview-config";
    pub const FAMILY_CHOICE: &str = "family-choice";
    pub const BOLD_BUTTON: &str = "bold-button";
    pub const ITALIC_BUTTON: &str = "italic-button";
    pub const SUBFAMILY_TEXT: &str = "subfamily-text";
    pub const SIZE_SLIDER: &str = "size-slider";
    pub const SIZE_TEXT: &str = "size-text";
    pub const LIGATURE_CHECKBOX: &str = "ligature-checkbox";
    pub const PREVIEW_TEXT: &str = "preview-text";
    pub const STYLE_READOUT: &str = "style-readout";

    pub fn feature_checkbox(tag: &str) -> String {
        format!("feature-{}", tag)
    }
}

pub const MENU_HEIGHT: i32 = 30;
pub const NAVBAR_HEIGHT: i32 = 40;
pub const NAV_PANEL_HEIGHT: i32 = 34;
const CONFIG_HEIGHT: i32 = 30;
const READOUT_HEIGHT: i32 = 44;
const FOOTER_HEIGHT: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
}

pub fn build_main_window(settings: &SpecimenSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 760, 560, "Firple Specimen");
    wind.set_xclass("FirpleSpecimen");

    let mut root = Flex::new(0, 0, 760, 560, None).with_id(ids::ROOT);
    root.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    root.fixed(&menu, MENU_HEIGHT);

    // Navigation bar
    let mut navbar = Flex::default();
    navbar.set_type(FlexType::Row);
    navbar.set_margin(4);
    let mut brand = Frame::default().with_label("Firple");
    brand.set_label_font(Font::HelveticaBold);
    brand.set_label_size(18);
    brand.set_align(Align::Left | Align::Inside);
    let mut burger = Button::default().with_label("@menu").with_id(ids::NAVBAR_BURGER);
    burger.set_tooltip("Navigation");
    burger.set_callback({ let s = *sender; move |_| s.send(Message::BurgerClicked) });
    navbar.fixed(&burger, 36);
    navbar.end();
    root.fixed(&navbar, NAVBAR_HEIGHT);

    // Navigation panel (hidden until the burger is clicked)
    let mut nav_panel = Flex::default().with_id(ids::NAV_PANEL);
    nav_panel.set_type(FlexType::Row);
    nav_panel.set_margin(2);
    nav_panel.set_frame(FrameType::FlatBox);
    nav_panel.set_color(Color::from_rgb(230, 230, 230));
    let mut about_link = Button::default().with_label("About");
    about_link.set_callback({ let s = *sender; move |_| s.send(Message::ShowAbout) });
    let mut reload_link = Button::default().with_label("Reload Fonts");
    reload_link.set_callback({ let s = *sender; move |_| s.send(Message::ReloadFonts) });
    let mut defaults_link = Button::default().with_label("Defaults...");
    defaults_link.set_callback({ let s = *sender; move |_| s.send(Message::OpenDefaults) });
    nav_panel.end();
    nav_panel.hide();
    root.fixed(&nav_panel, 0);

    // Main content
    let mut main = Flex::default().with_id(ids::MAIN);
    main.set_type(FlexType::Column);
    main.set_margin(8);
    main.set_pad(6);

    let mut config = Flex::default().with_id(ids::PREVIEW_CONFIG);
    config.set_type(FlexType::Row);
    config.set_pad(4);

    let mut family_choice = Choice::default().with_id(ids::FAMILY_CHOICE);
    for family in FamilyChoice::all() {
        family_choice.add_choice(family.family_name());
    }
    family_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Some(family) = index_to_family(c.value()) {
                s.send(Message::SetFamily(family));
            }
        }
    });
    config.fixed(&family_choice, 120);

    let mut bold_button = ToggleButton::default().with_label("B").with_id(ids::BOLD_BUTTON);
    bold_button.set_label_font(Font::HelveticaBold);
    bold_button.set_callback({ let s = *sender; move |b| s.send(Message::SetBold(b.value())) });
    config.fixed(&bold_button, 30);

    let mut italic_button = ToggleButton::default().with_label("I").with_id(ids::ITALIC_BUTTON);
    italic_button.set_label_font(Font::HelveticaItalic);
    italic_button.set_callback({ let s = *sender; move |b| s.send(Message::SetItalic(b.value())) });
    config.fixed(&italic_button, 30);

    let mut subfamily_text = Frame::default().with_id(ids::SUBFAMILY_TEXT);
    subfamily_text.set_label_size(12);
    config.fixed(&subfamily_text, 80);

    let range = settings.size_range;
    let mut size_slider = HorNiceSlider::default().with_id(ids::SIZE_SLIDER);
    size_slider.set_range(range.min as f64, range.max as f64);
    size_slider.set_step(1.0, 1);
    size_slider.set_callback({
        let s = *sender;
        move |v| s.send(Message::SetSize(v.value().round() as u32))
    });

    let mut size_text = Frame::default().with_id(ids::SIZE_TEXT);
    size_text.set_label_size(12);
    config.fixed(&size_text, 44);

    let mut ligature_checkbox = CheckButton::default()
        .with_label("Ligatures")
        .with_id(ids::LIGATURE_CHECKBOX);
    ligature_checkbox.set_callback({
        let s = *sender;
        move |c| s.send(Message::SetLigatures(c.value()))
    });
    config.fixed(&ligature_checkbox, 84);

    for tag in &settings.features {
        let id = ids::feature_checkbox(tag.as_str());
        let mut feature = CheckButton::default().with_label(tag.as_str()).with_id(&id);
        let tag = tag.to_string();
        feature.set_callback({
            let s = *sender;
            move |_| s.send(Message::ToggleFeature(tag.clone()))
        });
        config.fixed(&feature, 64);
    }
    config.end();
    main.fixed(&config, CONFIG_HEIGHT);

    let mut preview_text = TextEditor::default().with_id(ids::PREVIEW_TEXT);
    preview_text.set_buffer(TextBuffer::default());
    preview_text.wrap_mode(WrapMode::AtBounds, 0);

    let mut readout = Frame::default().with_id(ids::STYLE_READOUT);
    readout.set_label_size(11);
    readout.set_label_font(Font::Courier);
    readout.set_label_color(Color::from_rgb(90, 90, 90));
    readout.set_align(Align::Left | Align::Inside | Align::Wrap);
    main.fixed(&readout, READOUT_HEIGHT);

    main.end();

    // Clicking anywhere in the content dismisses the navigation panel.
    main.handle({
        let s = *sender;
        move |_, ev| {
            if ev == Event::Push {
                s.send(Message::MainClicked);
            }
            false
        }
    });

    let mut footer = Frame::default();
    footer.set_label(&format!("Firple {}  |  {}", FAMILY_VERSION, FAMILY_COPYRIGHT));
    footer.set_label_size(11);
    footer.set_label_color(Color::from_rgb(100, 100, 100));
    root.fixed(&footer, FOOTER_HEIGHT);

    root.end();
    wind.end();
    wind.resizable(&root);

    MainWidgets { wind, menu }
}

/// Convert dropdown index to FamilyChoice
fn index_to_family(index: i32) -> Option<FamilyChoice> {
    if index < 0 {
        return None;
    }
    FamilyChoice::all().get(index as usize).copied()
}

/// Convert FamilyChoice to dropdown index
pub fn family_index(family: FamilyChoice) -> i32 {
    FamilyChoice::all()
        .iter()
        .position(|f| *f == family)
        .map(|i| i as i32)
        .unwrap_or(0)
}
