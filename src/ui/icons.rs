//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors used across all commands and display contexts.

use super::theme::NbenvTheme;

/// Canonical status kinds used across all nbenv output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Step completed successfully.
    Success,
    /// Step failed.
    Failed,
    /// Step was skipped.
    Skipped,
    /// Step is currently running.
    Running,
    /// Non-fatal warning.
    Warning,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Running => "◆",
            Self::Warning => "⚠",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Skipped => "[skip]",
            Self::Running => "[run]",
            Self::Warning => "[warn]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &NbenvTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
            Self::Running => theme.info.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &NbenvTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}
