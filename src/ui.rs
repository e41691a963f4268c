//! UI module for fileswitcher - centralized styling and color detection.
//!
//! # No-color detection (in priority order):
//! 1. `--no-color` CLI flag (highest priority)
//! 2. `NO_COLOR` environment variable (any value)
//! 3. `TERM=dumb` environment variable
//! 4. Non-TTY stdout (detected via anstream)
//!
//! Everything, reported errors included, goes to stdout.

use anstream::println;
use anstyle::{AnsiColor, Color, Style};
use std::io::IsTerminal;

/// Marker printed in front of the active variant
pub const ACTIVE_MARKER: &str = " * ";
/// Padding printed in front of every other variant
pub const INACTIVE_MARKER: &str = "   ";

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Always emit ANSI colors
    Always,
    /// Emit colors only if TTY and not disabled
    #[default]
    Auto,
    /// Never emit ANSI colors
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// UI context holding resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    /// Whether colors are enabled
    pub color_enabled: bool,
}

impl Ui {
    /// Create a new UI context with color mode detection.
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let color_enabled = Self::resolve_color(mode, force_no_color);

        // Configure anstream's color choice globally
        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color_enabled }
    }

    fn resolve_color(mode: ColorMode, force_no_color: bool) -> bool {
        if force_no_color {
            return false;
        }

        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }

        if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
            return false;
        }

        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    fn style(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color)))
        } else {
            Style::new()
        }
    }

    /// Print a reported (non-fatal) error to stdout in red
    pub fn report(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Red);
        println!("{st}{}{st:#}", msg.as_ref());
    }

    /// Format one line of the variant listing
    pub fn variant_line(&self, name: &str, active: bool) -> String {
        if active {
            let mut st = self.style(AnsiColor::Green);
            if self.color_enabled {
                st = st.bold();
            }
            format!("{st}{ACTIVE_MARKER}{name}{st:#}")
        } else {
            format!("{INACTIVE_MARKER}{name}")
        }
    }

    /// Return a styled string (dimmed/gray) - for inline use
    pub fn dim(&self, s: impl AsRef<str>) -> String {
        let st = self.style(AnsiColor::BrightBlack);
        format!("{st}{}{st:#}", s.as_ref())
    }

    /// Print a line to stdout
    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }
}
