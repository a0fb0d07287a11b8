//! Terminal capability detection and utilities

use std::sync::OnceLock;

use owo_colors::{OwoColorize, colors::css};
use startmenu::ColorChoice;

static COLOR: OnceLock<bool> = OnceLock::new();

/// Fixes whether output is coloured for the rest of the process.
///
/// Only the first call has an effect.
pub fn set_color_choice(choice: ColorChoice) {
    if COLOR.set(color_enabled(choice, detect_color)).is_err() {
        tracing::trace!("colour choice already set");
    }
}

fn color_enabled(choice: ColorChoice, detect: impl FnOnce() -> bool) -> bool {
    match choice {
        ColorChoice::Auto => detect(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

fn detect_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Whether coloured output is enabled
pub fn supports_color() -> bool {
    *COLOR.get_or_init(detect_color)
}

/// Detects terminal width, returning None if not available
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Check if terminal is narrow (< 60 columns)
pub fn is_narrow() -> bool {
    terminal_width().is_some_and(|w| w < 60)
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Color as info (blue)
    fn info(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
    /// Bold the text
    fn strong(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        paint(self.as_ref(), supports_color(), |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        paint(self.as_ref(), supports_color(), |s| s.fg::<css::Orange>().to_string())
    }

    fn info(&self) -> String {
        paint(self.as_ref(), supports_color(), |s| s.fg::<css::LightBlue>().to_string())
    }

    fn dim(&self) -> String {
        paint(self.as_ref(), supports_color(), |s| s.dimmed().to_string())
    }

    fn strong(&self) -> String {
        paint(self.as_ref(), supports_color(), |s| s.bold().to_string())
    }
}

fn paint(text: &str, enabled: bool, style: impl FnOnce(&str) -> String) -> String {
    if enabled {
        style(text)
    } else {
        text.to_string()
    }
}
