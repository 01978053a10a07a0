use egui::Ui;
use quickqr_business::{GeneratorState, Mode};

/// Two-way selector between URL and Email payloads.
///
/// Picking a mode always drops the generated result, even when the same
/// mode is picked again.
pub fn mode_picker(generator: &mut GeneratorState, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.label("Type:");
        for mode in Mode::ALL {
            if ui
                .selectable_label(generator.mode() == mode, mode.label())
                .clicked()
            {
                generator.set_mode(mode);
            }
        }
    });
}
