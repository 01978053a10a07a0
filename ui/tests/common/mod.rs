use std::cell::RefCell;
use std::rc::Rc;

use egui_kittest::Harness;
use kittest::Queryable as _;
use quickqr_business::{AppConfig, ImageSharer, LinkOpener, QrRaster, QrcodeEncoder, ShareError};
use quickqr_ui::QuickQrApp;
use quickqr_ui::state::{Platform, State};

/// Frames to run after an input so the click is handled and the result drawn.
pub const UI_PROPAGATION_FRAMES: usize = 3;

/// Everything the fakes saw, shared with the test body.
#[derive(Default)]
pub struct Recorded {
    pub opened: RefCell<Vec<String>>,
    pub shared: RefCell<Vec<String>>,
    pub copied: RefCell<Vec<String>>,
}

struct RecordingOpener(Rc<Recorded>);

impl LinkOpener for RecordingOpener {
    fn open_uri(&self, uri: &str) -> bool {
        self.0.opened.borrow_mut().push(uri.to_owned());
        true
    }
}

struct RecordingSharer {
    recorded: Rc<Recorded>,
    clipboard: bool,
}

impl ImageSharer for RecordingSharer {
    fn share(&self, _image: &QrRaster, file_name: &str) -> Result<(), ShareError> {
        let target = if self.clipboard {
            &self.recorded.copied
        } else {
            &self.recorded.shared
        };
        target.borrow_mut().push(file_name.to_owned());
        Ok(())
    }
}

pub struct TestCtx<'a> {
    pub recorded: Rc<Recorded>,
    harness: Harness<'a, QuickQrApp>,
}

impl<'a> TestCtx<'a> {
    pub fn new_app() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let recorded = Rc::new(Recorded::default());
        let platform = Platform {
            encoder: Box::new(QrcodeEncoder),
            opener: Box::new(RecordingOpener(recorded.clone())),
            sharer: Box::new(RecordingSharer {
                recorded: recorded.clone(),
                clipboard: false,
            }),
            clipboard: Box::new(RecordingSharer {
                recorded: recorded.clone(),
                clipboard: true,
            }),
        };
        let app = QuickQrApp::new(State::with_platform(AppConfig::default(), platform));
        let harness = Harness::new_eframe(|_| app);

        Self { recorded, harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QuickQrApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, QuickQrApp> {
        &self.harness
    }

    /// Runs enough frames for pending input to take effect.
    pub fn settle(&mut self) {
        for _ in 0..UI_PROPAGATION_FRAMES {
            self.harness.step();
        }
    }

    /// Clicks the widget whose label is exactly `label`, then settles.
    pub fn click(&mut self, label: &str) {
        self.harness.get_by_label(label).click();
        self.settle();
    }
}
