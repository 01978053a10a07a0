use egui::Ui;

use crate::state::State;
use crate::widgets::{action_bar, mode_picker, payload_form, qr_view};

/// The single generator screen: mode, form, actions and result.
///
/// Actions clicked this frame are applied before returning, so the next
/// frame renders the new state.
pub fn generator_screen(state: &mut State, ui: &mut Ui) {
    mode_picker(&mut state.generator, ui);
    ui.add_space(8.0);
    payload_form(&mut state.generator, ui);
    ui.add_space(8.0);

    let action = action_bar(&state.generator, ui);
    ui.separator();

    let texture = state.qr_texture.sync(ui.ctx(), &state.generator);
    qr_view(texture, state.generator.payload(), ui);

    if let Some(action) = action {
        state.apply(action);
    }
}
