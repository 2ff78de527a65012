//! Output mode and writer.

use std::str::FromStr;

use super::icons::StatusKind;
use super::theme::{should_use_colors, NbenvTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status lines plus every command being run.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show warnings, errors, and nothing else.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode echoes each command line before running it.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Output writer that respects output mode and color support.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: NbenvTheme,
    plain: bool,
}

impl Output {
    /// Create a new output writer, detecting color support.
    pub fn new(mode: OutputMode) -> Self {
        let plain = !should_use_colors();
        let theme = if plain {
            NbenvTheme::plain()
        } else {
            NbenvTheme::new()
        };
        Self { mode, theme, plain }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Get the active theme.
    pub fn theme(&self) -> &NbenvTheme {
        &self.theme
    }

    /// Whether styled unicode output is disabled.
    pub fn is_plain(&self) -> bool {
        self.plain
    }

    /// Write a line if the mode allows status messages.
    pub fn println(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a status line with the kind's icon.
    pub fn status(&self, kind: StatusKind, msg: &str) {
        if !self.mode.shows_status() {
            return;
        }
        if self.plain {
            println!("{}", kind.format_plain(msg));
        } else {
            println!("{}", kind.format(&self.theme, msg));
        }
    }

    /// Write a warning line. Shown in every mode.
    pub fn warning(&self, msg: &str) {
        if self.plain {
            println!("{}", StatusKind::Warning.format_plain(msg));
        } else {
            println!("{}", StatusKind::Warning.format(&self.theme, msg));
        }
    }

    /// Write an error line to stderr. Shown in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Echo a command line in verbose mode.
    pub fn command(&self, line: &str) {
        if self.mode.shows_commands() {
            println!("{}", self.theme.command.apply_to(format!("$ {}", line)));
        }
    }
}
