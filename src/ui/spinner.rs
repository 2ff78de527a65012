//! Progress spinners.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::output::Output;
use super::theme::NbenvTheme;

enum SpinnerMode {
    /// Animated unicode spinner on a TTY.
    Animated,
    /// Plain bracketed lines for non-TTY output.
    Plain,
    /// No output at all (quiet mode).
    Silent,
}

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
    mode: SpinnerMode,
}

impl ProgressSpinner {
    /// Create a new animated spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self {
            bar,
            mode: SpinnerMode::Animated,
        }
    }

    /// Create a spinner that prints plain lines instead of animating.
    pub fn plain(message: &str) -> Self {
        println!("[run] {}", message);
        Self {
            bar: ProgressBar::hidden(),
            mode: SpinnerMode::Plain,
        }
    }

    /// Create a spinner that shows nothing (quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            mode: SpinnerMode::Silent,
        }
    }

    /// Replace the spinner with a success line.
    pub fn finish_success(&mut self, msg: &str) {
        match self.mode {
            SpinnerMode::Animated => self.finish_with_icon(&format!(
                "{} {}",
                NbenvTheme::new().success.apply_to("✓"),
                msg
            )),
            SpinnerMode::Plain => println!("[ok] {}", msg),
            SpinnerMode::Silent => {}
        }
    }

    /// Replace the spinner with an error line.
    pub fn finish_error(&mut self, msg: &str) {
        match self.mode {
            SpinnerMode::Animated => self.finish_with_icon(&format!(
                "{} {}",
                NbenvTheme::new().error.apply_to("✗"),
                msg
            )),
            SpinnerMode::Plain => println!("[FAIL] {}", msg),
            SpinnerMode::Silent => {}
        }
    }

    fn finish_with_icon(&self, line: &str) {
        self.bar
            .set_style(ProgressStyle::default_spinner().template("{msg}").unwrap());
        self.bar.finish_with_message(line.to_string());
    }
}

/// Create a spinner appropriate for the given output settings.
///
/// Non-TTY output gets plain bracketed lines so logs stay free of
/// animation control sequences; quiet mode gets nothing.
pub fn step_spinner(output: &Output, message: &str) -> ProgressSpinner {
    if !output.mode().shows_spinners() {
        ProgressSpinner::hidden()
    } else if output.is_plain() {
        ProgressSpinner::plain(message)
    } else {
        ProgressSpinner::new(message)
    }
}
