use egui::{Align2, RichText, Window};
use quickqr_business::GeneratorState;

use crate::utils::colors::COLOR_RED;

/// Modal for the generator's pending error. "OK" dismisses it.
pub fn error_dialog(ctx: &egui::Context, generator: &mut GeneratorState) {
    let Some(err) = generator.error() else {
        return;
    };
    let title = err.title();
    let message = err.user_message();

    let mut dismissed = false;
    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.label(RichText::new(message).color(COLOR_RED));
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed {
        generator.dismiss_error();
    }
}
