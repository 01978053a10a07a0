//! The generated QR code and its payload.

use egui::load::SizedTexture;
use egui::{Frame, Image, Label, Margin, RichText, TextureHandle, Ui, Vec2};

use crate::utils::colors::{COLOR_MUTED, QUIET_ZONE};

/// Logical size the code is drawn at, whatever the raster size.
pub const QR_DISPLAY_SIZE: f32 = 240.0;

/// Quiet zone around the code, in points.
const QUIET_ZONE_WIDTH: i8 = 16;

/// Shows the QR code on a white frame with the payload underneath, or a
/// placeholder when nothing has been generated.
pub fn qr_view(texture: Option<&TextureHandle>, payload: Option<&str>, ui: &mut Ui) {
    ui.vertical_centered(|ui| match (texture, payload) {
        (Some(texture), Some(payload)) => {
            Frame::NONE
                .fill(QUIET_ZONE)
                .inner_margin(Margin::same(QUIET_ZONE_WIDTH))
                .show(ui, |ui| {
                    let sized = SizedTexture::new(texture.id(), Vec2::splat(QR_DISPLAY_SIZE));
                    ui.add(Image::from_texture(sized).alt_text("QR code"));
                });
            ui.add_space(8.0);
            ui.add(Label::new(payload).selectable(true).wrap());
        }
        _ => {
            ui.add_space(QR_DISPLAY_SIZE / 2.0);
            ui.label(RichText::new("No QR code yet").color(COLOR_MUTED));
        }
    });
}
