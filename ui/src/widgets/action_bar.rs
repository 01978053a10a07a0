use egui::{Button, Ui};
use quickqr_business::GeneratorState;

use crate::state::Action;

/// Buttons for every screen action. Returns the action clicked this frame.
///
/// "Share…" and "Copy image" are only enabled once an image exists.
pub fn action_bar(generator: &GeneratorState, ui: &mut Ui) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("Generate").clicked() {
            action = Some(Action::Generate);
        }
        if ui.button("Test").clicked() {
            action = Some(Action::Test);
        }
        if ui.button("New").clicked() {
            action = Some(Action::New);
        }

        ui.separator();

        let can_share = generator.can_share();
        if ui.add_enabled(can_share, Button::new("Share…")).clicked() {
            action = Some(Action::Share);
        }
        if ui.add_enabled(can_share, Button::new("Copy image")).clicked() {
            action = Some(Action::Copy);
        }
    });

    action
}
