//! Output configuration types

use std::io::IsTerminal;

use clap::ValueEnum;
use termcolor::{ColorChoice, StandardStream};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// The parts of the process environment that decide `ColorMode::Auto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorEnv {
    pub no_color: bool,
    pub force_color: bool,
    pub term_dumb: bool,
    pub stdout_is_terminal: bool,
}

impl ColorEnv {
    pub fn from_process() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            force_color: std::env::var_os("FORCE_COLOR").is_some(),
            term_dumb: std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false),
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }
}

/// Decide whether directory lines get colored.
pub fn should_use_color(mode: ColorMode, env: &ColorEnv) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if env.no_color {
                return false;
            }
            if env.force_color {
                return true;
            }
            if env.term_dumb {
                return false;
            }
            env.stdout_is_terminal
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_color: should_use_color(mode, &ColorEnv::from_process()),
        }
    }

    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }

    /// Standard output, decorated or plain depending on `use_color`.
    pub fn stdout(&self) -> StandardStream {
        StandardStream::stdout(self.color_choice())
    }
}
