//! Colored diagnostics for the CLI.
//!
//! Uses `termcolor` for cross-platform colored terminal output.
//! Respects `NO_COLOR` environment variable and `--color` flag.

use clap::ValueEnum;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// `--color` flag values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve `ColorChoice` from CLI flag and environment.
///
/// Priority: `NO_COLOR` env > `--color` flag > auto-detect TTY.
pub fn resolve_color_choice(mode: ColorMode) -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Auto => ColorChoice::Auto,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    }
}

/// Styled writer for diagnostics on stderr.
pub struct StyledOutput {
    stderr: StandardStream,
}

impl StyledOutput {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stderr: StandardStream::stderr(choice),
        }
    }

    fn write_label(&mut self, label: &str, color: Color) {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color)).set_bold(true);
        let _ = self.stderr.set_color(&spec);
        let _ = write!(self.stderr, "{}", label);
        let _ = self.stderr.reset();
    }

    /// `error: <message>` followed by one `caused by:` line per source
    pub fn error_report(&mut self, err: &anyhow::Error) {
        self.write_label("error", Color::Red);
        let _ = writeln!(self.stderr, ": {}", err);
        for cause in err.chain().skip(1) {
            self.write_label("  caused by", Color::Yellow);
            let _ = writeln!(self.stderr, ": {}", cause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_flag() {
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        assert!(matches!(resolve_color_choice(ColorMode::Never), ColorChoice::Never));
        assert!(matches!(resolve_color_choice(ColorMode::Always), ColorChoice::Always));
        assert!(matches!(resolve_color_choice(ColorMode::Auto), ColorChoice::Auto));
    }

    #[test]
    fn test_color_flag_rejects_unknown_values() {
        assert_eq!(ColorMode::from_str("always", true), Ok(ColorMode::Always));
        assert!(ColorMode::from_str("alwyas", true).is_err());
    }
}
