use crate::ports::outbound::ProgressReporter;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting pagination progress on stderr
///
/// Draws an indicatif spinner with the running record count. The spinner is
/// added to the [`MultiProgress`] the logger writes through, so log lines
/// print above it. indicatif hides the spinner on its own when stderr is not
/// a terminal; `hidden()` suppresses it unconditionally.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    multi: Option<MultiProgress>,
}

impl StderrProgressReporter {
    pub fn new(multi: MultiProgress) -> Self {
        Self {
            progress_bar: RefCell::new(None),
            multi: Some(multi),
        }
    }

    /// A reporter that never draws anything
    pub fn hidden() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            multi: None,
        }
    }

    fn get_or_create_spinner(&self) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let pb = match &self.multi {
            Some(multi) => multi.add(ProgressBar::new_spinner()),
            None => ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
        };
        // the template is a literal; a parse failure would leave the default style
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(120));
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish(&self) {
        if let Some(pb) = self.progress_bar.borrow().as_ref() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report_progress(&self, fetched: usize, limit: usize, message: Option<&str>) {
        let pb = self.get_or_create_spinner();
        let text = match message {
            Some(msg) => format!("{} records fetched (limit {}) - {}", fetched, limit, msg),
            None => format!("{} records fetched (limit {})", fetched, limit),
        };
        pb.set_message(text);
    }

    fn report_error(&self, message: &str) {
        self.finish();
        log::debug!("Aborting after error: {}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish();
        log::info!("{}", message);
    }
}
