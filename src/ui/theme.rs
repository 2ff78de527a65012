//! Visual theme and styling.

use console::Style;

/// nbenv's visual theme.
#[derive(Debug, Clone)]
pub struct NbenvTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/running elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for banner borders (dim).
    pub border: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for NbenvTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NbenvTheme {
    /// Create the default nbenv theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            command: Style::new().dim().italic(),
            border: Style::new().dim(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            command: Style::new(),
            border: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Whether output should use colors.
///
/// Honors `NO_COLOR` before asking the terminal, so `--no-color` (which
/// sets the variable) wins even on a capable TTY.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}
