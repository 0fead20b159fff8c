use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;
use crate::app::domain::style::Subfamily;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Default Style...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenDefaults) });
    menu.add("File/Reload Fonts", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ReloadFonts) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Style
    for (i, subfamily) in Subfamily::all().iter().enumerate() {
        let path = format!("Style/{}", subfamily.display_name());
        let key = char::from(b'1' + i as u8);
        let subfamily = *subfamily;
        menu.add(&path, Shortcut::Ctrl | key, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetSubfamily(subfamily)) });
    }

    // Help
    menu.add("Help/About Firple Specimen", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
