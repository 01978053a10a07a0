//! Opening generated links through egui's platform integration.
//!
//! eframe forwards `open_url` to the OS handler on native targets and to
//! `window.open` on the web. Neither reports whether anything handled the
//! link, so support is decided up front by scheme.

use egui::{Context, OpenUrl};
use quickqr_business::{AppConfig, LinkOpener};

pub struct EguiLinkOpener {
    ctx: Context,
    config: AppConfig,
}

impl EguiLinkOpener {
    pub fn new(ctx: Context, config: AppConfig) -> Self {
        Self { ctx, config }
    }
}

impl LinkOpener for EguiLinkOpener {
    fn open_uri(&self, uri: &str) -> bool {
        if !self.config.allows_link(uri) {
            log::info!(
                "Refusing to open {uri}: scheme not in {:?}",
                self.config.link_schemes()
            );
            return false;
        }

        self.ctx.open_url(OpenUrl::new_tab(uri));
        true
    }
}
