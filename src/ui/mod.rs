//! Terminal output components.
//!
//! This module provides:
//! - [`Output`] mode-aware writer with a styled/plain split
//! - [`StatusKind`] unified status icon vocabulary
//! - [`NbenvTheme`] console styles with a colorless fallback
//! - [`ProgressSpinner`] for long-running steps

pub mod icons;
pub mod output;
pub mod spinner;
pub mod theme;

pub use icons::StatusKind;
pub use output::{Output, OutputMode};
pub use spinner::{step_spinner, ProgressSpinner};
pub use theme::{should_use_colors, NbenvTheme};
