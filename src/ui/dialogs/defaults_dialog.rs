use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    enums::{Align, Color},
    frame::Frame,
    group::Group,
    menu::Choice,
    misc::Spinner,
    prelude::*,
    window::Window,
};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::domain::settings::{DefaultStyle, SpecimenSettings};
use crate::app::domain::style::{FamilyChoice, Subfamily};

/// Show the default-style dialog and return updated settings if user clicked Save.
/// New defaults seed the controls on the next start.
pub fn show_defaults_dialog(current_settings: &SpecimenSettings) -> Option<SpecimenSettings> {
    let feature_rows = current_settings.features.len() as i32;
    let height = 330 + feature_rows * 25;
    let mut dialog = Window::default()
        .with_size(350, height)
        .with_label("Default Style")
        .center_screen();
    dialog.make_modal(true);

    let defaults = &current_settings.default_style;

    // Family section
    Frame::default().with_pos(15, 15).with_size(320, 25).with_label("Family:").with_align(Align::Left | Align::Inside);
    let family_group = Group::default().with_pos(30, 45).with_size(280, 50);
    let mut family_regular = RadioRoundButton::default().with_pos(30, 45).with_size(280, 25).with_label(FamilyChoice::Firple.family_name());
    let mut family_slim = RadioRoundButton::default().with_pos(30, 70).with_size(280, 25).with_label(FamilyChoice::FirpleSlim.family_name());
    family_group.end();

    match defaults.family {
        FamilyChoice::Firple => family_regular.set_value(true),
        FamilyChoice::FirpleSlim => family_slim.set_value(true),
    }

    // Subfamily section
    Frame::default().with_pos(15, 105).with_size(320, 25).with_label("Subfamily:").with_align(Align::Left | Align::Inside);
    let mut subfamily_choice = Choice::default().with_pos(30, 130).with_size(280, 25);
    for subfamily in Subfamily::all() {
        subfamily_choice.add_choice(subfamily.display_name());
    }
    subfamily_choice.set_value(subfamily_index(defaults.subfamily));

    // Size section
    Frame::default().with_pos(15, 165).with_size(320, 25).with_label("Size (px):").with_align(Align::Left | Align::Inside);
    let mut size_spinner = Spinner::default().with_pos(30, 190).with_size(100, 25);
    let range = current_settings.size_range;
    size_spinner.set_range(range.min as f64, range.max as f64);
    size_spinner.set_step(1.0);
    size_spinner.set_value(range.clamp(defaults.size_px) as f64);

    // Ligatures and features
    Frame::default().with_pos(15, 225).with_size(320, 25).with_label("Features:").with_align(Align::Left | Align::Inside);
    let mut check_ligatures = CheckButton::default().with_pos(30, 250).with_size(280, 25).with_label("Ligatures");
    check_ligatures.set_value(defaults.ligatures);

    let mut feature_checks = Vec::new();
    for (i, tag) in current_settings.features.iter().enumerate() {
        let y = 275 + i as i32 * 25;
        let mut check = CheckButton::default().with_pos(30, y).with_size(280, 25).with_label(tag.as_str());
        check.set_value(defaults.features.contains(tag));
        feature_checks.push((tag.clone(), check));
    }

    let mut info_frame = Frame::default().with_pos(30, height - 55).with_size(120, 25);
    info_frame.set_label("Applied on next start.");
    info_frame.set_label_size(11);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(Align::Left | Align::Inside);

    // Buttons at bottom
    let mut save_btn = Button::default().with_pos(150, height - 40).with_size(90, 30).with_label("Save");
    let mut cancel_btn = Button::default().with_pos(250, height - 40).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();
    let result_cancel = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let new_settings = SpecimenSettings {
            default_style: DefaultStyle {
                family: if family_slim.value() {
                    FamilyChoice::FirpleSlim
                } else {
                    FamilyChoice::Firple
                },
                subfamily: index_to_subfamily(subfamily_choice.value())
                    .unwrap_or(current.default_style.subfamily),
                size_px: size_spinner.value().round() as u32,
                ligatures: check_ligatures.value(),
                features: feature_checks
                    .iter()
                    .filter(|(_, check)| check.value())
                    .map(|(tag, _)| tag.clone())
                    .collect(),
            },
            ..current.clone()
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        *result_cancel.borrow_mut() = None;
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    result.borrow().clone()
}

/// Convert Subfamily to dropdown index
fn subfamily_index(subfamily: Subfamily) -> i32 {
    Subfamily::all()
        .iter()
        .position(|s| *s == subfamily)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to Subfamily
fn index_to_subfamily(index: i32) -> Option<Subfamily> {
    if index < 0 {
        return None;
    }
    Subfamily::all().get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subfamily_index_round_trip() {
        for sub in Subfamily::all() {
            assert_eq!(index_to_subfamily(subfamily_index(*sub)), Some(*sub));
        }
        assert_eq!(index_to_subfamily(-1), None);
        assert_eq!(index_to_subfamily(4), None);
    }
}
