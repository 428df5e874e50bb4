//! Terminal output for listings and usage messages.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use pcreate_core::{
    application::{ApplicationError, ports::OutputSink},
    error::PcreateResult,
};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Writes the command's own output (listings, usage messages) to stdout.
///
/// Logging goes to stderr through `tracing`; `--quiet` only affects logging
/// and the closing status line, never the lines emitted by the service.
#[derive(Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let term = Term::stdout();
        let no_color =
            args.no_color || config.output.no_color || !term.features().colors_supported();
        Self {
            quiet: args.quiet,
            no_color,
            term,
        }
    }

    /// Generic message.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`; suppressed in quiet mode.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

impl OutputSink for OutputManager {
    fn emit(&self, line: &str) -> PcreateResult<()> {
        self.print(line).map_err(|e| {
            ApplicationError::FilesystemError {
                path: "<stdout>".into(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            quiet,
            no_color,
            ..GlobalArgs::default()
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn emit_writes_line() {
        let out = make_manager(false, true);
        assert!(out.emit("Available scaffolds:").is_ok());
    }

    #[test]
    fn quiet_success_is_ok() {
        assert!(make_manager(true, true).success("done").is_ok());
    }

    #[test]
    fn no_color_flag_disables_color() {
        assert!(!make_manager(false, true).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&GlobalArgs::default(), &config);
        assert!(!out.supports_color());
    }
}
