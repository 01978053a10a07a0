//! Input fields for the selected payload kind.

use egui::{TextEdit, Ui};
use quickqr_business::{Field, GeneratorState, Mode};

const FIELD_WIDTH: f32 = 260.0;

/// Shows the URL field or the three email fields, depending on the mode.
pub fn payload_form(generator: &mut GeneratorState, ui: &mut Ui) {
    egui::Grid::new("payload_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| match generator.mode() {
            Mode::Url => {
                text_field(generator, ui, Field::Url, "https://example.com", false);
            }
            Mode::Email => {
                text_field(generator, ui, Field::EmailTo, "name@example.com", false);
                text_field(generator, ui, Field::EmailSubject, "Optional", false);
                text_field(generator, ui, Field::EmailBody, "Optional", true);
            }
        });
}

fn text_field(generator: &mut GeneratorState, ui: &mut Ui, field: Field, hint: &str, multiline: bool) {
    let label = ui.label(format!("{}:", field.label()));

    // Edit a copy so the generator sees every change through `set_field`,
    // which drops a stale image.
    let mut value = generator.field(field).to_owned();
    let edit = if multiline {
        TextEdit::multiline(&mut value).desired_rows(3)
    } else {
        TextEdit::singleline(&mut value)
    };
    let response = ui
        .add(edit.desired_width(FIELD_WIDTH).hint_text(hint))
        .labelled_by(label.id);

    if response.changed() {
        generator.set_field(field, value);
    }
    ui.end_row();
}
