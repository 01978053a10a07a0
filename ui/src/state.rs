use quickqr_business::{AppConfig, GeneratorState, ImageSharer, LinkOpener, QrEncoder, QrcodeEncoder};

use crate::utils::texture::QrTexture;

/// Host services the generator is wired to.
pub struct Platform {
    pub encoder: Box<dyn QrEncoder>,
    pub opener: Box<dyn LinkOpener>,
    /// Target of the "Share…" action.
    pub sharer: Box<dyn ImageSharer>,
    /// Target of the "Copy image" action.
    pub clipboard: Box<dyn ImageSharer>,
}

impl Platform {
    /// Platform services for the running app.
    pub fn system(ctx: &egui::Context, config: &AppConfig) -> Self {
        use crate::utils::link_opener::EguiLinkOpener;

        #[cfg(not(target_arch = "wasm32"))]
        let (sharer, clipboard): (Box<dyn ImageSharer>, Box<dyn ImageSharer>) = {
            use crate::utils::share::{ClipboardSharer, FileDialogSharer};
            (
                Box::new(FileDialogSharer::new(config.share_dir())),
                Box::new(ClipboardSharer),
            )
        };

        #[cfg(target_arch = "wasm32")]
        let (sharer, clipboard): (Box<dyn ImageSharer>, Box<dyn ImageSharer>) = {
            use crate::utils::share::UnavailableSharer;
            (Box::new(UnavailableSharer), Box::new(UnavailableSharer))
        };

        Self {
            encoder: Box::new(QrcodeEncoder),
            opener: Box::new(EguiLinkOpener::new(ctx.clone(), config.clone())),
            sharer,
            clipboard,
        }
    }
}

/// A user action on the generator screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Test,
    New,
    Share,
    Copy,
}

/// The main application state.
pub struct State {
    pub generator: GeneratorState,
    pub config: AppConfig,
    pub platform: Platform,
    pub qr_texture: QrTexture,
}

impl State {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let platform = Platform::system(ctx, &config);
        Self::with_platform(config, platform)
    }

    /// State wired to caller-supplied services, for tests and embedding.
    pub fn with_platform(config: AppConfig, platform: Platform) -> Self {
        Self {
            generator: GeneratorState::new(),
            config,
            platform,
            qr_texture: QrTexture::default(),
        }
    }

    /// Runs `action` to completion. Failures are already recorded on the
    /// generator for the error dialog.
    pub fn apply(&mut self, action: Action) {
        log::debug!("Action: {action:?}");
        let result = match action {
            Action::Generate => self.generator.generate(self.platform.encoder.as_ref()),
            Action::Test => self.generator.test_link(self.platform.opener.as_ref()),
            Action::Share => self.generator.share(self.platform.sharer.as_ref()),
            Action::Copy => self.generator.share(self.platform.clipboard.as_ref()),
            Action::New => {
                self.generator.reset();
                Ok(())
            }
        };

        if let Err(err) = result {
            log::debug!("{action:?} ended with: {err}");
        }
    }
}
