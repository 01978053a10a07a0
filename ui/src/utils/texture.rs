//! Uploading the generated raster as an egui texture.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use quickqr_business::{GeneratorState, QrRaster};

/// Converts the grayscale raster into an egui image without resampling.
pub fn to_color_image(raster: &QrRaster) -> ColorImage {
    ColorImage::from_gray(
        [raster.width() as usize, raster.height() as usize],
        raster.pixels(),
    )
}

/// Texture of the current QR image, re-uploaded only when a new image is
/// generated.
#[derive(Default)]
pub struct QrTexture {
    generation: u64,
    handle: Option<TextureHandle>,
}

impl std::fmt::Debug for QrTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QrTexture")
            .field("generation", &self.generation)
            .field("loaded", &self.handle.is_some())
            .finish()
    }
}

impl QrTexture {
    /// Returns the texture for the generator's image, or `None` when there is
    /// no image. A stale texture is dropped as soon as the image goes away.
    pub fn sync(&mut self, ctx: &Context, generator: &GeneratorState) -> Option<&TextureHandle> {
        let Some(raster) = generator.image() else {
            self.handle = None;
            return None;
        };

        if self.handle.is_none() || self.generation != generator.generation() {
            // Nearest filtering keeps module edges sharp when the 240pt view
            // does not match the raster size.
            self.handle = Some(ctx.load_texture(
                "qr_code",
                to_color_image(raster),
                TextureOptions::NEAREST,
            ));
            self.generation = generator.generation();
        }

        self.handle.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use egui::Color32;
    use quickqr_business::{Field, Mode, QrSymbol, QrcodeEncoder, render};

    use super::*;

    #[test]
    fn test_color_image_matches_raster() {
        let symbol = QrSymbol::new(2, 1, vec![true, false, false, true]);
        let raster = render(&symbol, 3).unwrap();
        let image = to_color_image(&raster);

        assert_eq!(image.size, [6, 6]);
        assert_eq!(image.pixels[0], Color32::BLACK);
        assert_eq!(image.pixels[3], Color32::WHITE);
        assert_eq!(image.pixels[6 * 5 + 5], Color32::BLACK);
    }

    #[test]
    fn test_texture_follows_generator() {
        let ctx = Context::default();
        let mut texture = QrTexture::default();
        let mut generator = GeneratorState::new();

        assert!(texture.sync(&ctx, &generator).is_none());

        generator.set_field(Field::Url, "https://example.com");
        generator.generate(&QrcodeEncoder).unwrap();
        let first = texture.sync(&ctx, &generator).map(TextureHandle::id);
        assert!(first.is_some());
        assert_eq!(texture.sync(&ctx, &generator).map(TextureHandle::id), first);

        generator.generate(&QrcodeEncoder).unwrap();
        assert_ne!(texture.sync(&ctx, &generator).map(TextureHandle::id), first);

        generator.set_mode(Mode::Email);
        assert!(texture.sync(&ctx, &generator).is_none());
        assert!(!texture.is_loaded());
    }
}
