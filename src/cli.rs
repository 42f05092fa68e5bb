//! CLI definitions for simpleterm
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles matching the prompt colors (cyan questions, red errors).
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "simpleterm")]
#[command(about = "Colored text, framed boxes and validated prompts for the terminal")]
#[command(
    long_about = "simpleterm - render colored text, rules and framed boxes, and run
validated interactive prompts over stdin.

Defaults (rule width, indent unit, locale, box style) come from
~/.config/simpleterm/config.toml or the file named by $SIMPLETERM_CONFIG.

QUICK START:
    simpleterm box --title Hello \"first line\" \"second line\"
    simpleterm rule --char = --width 40
    simpleterm palette                 Show the color tables
    simpleterm survey                  Try every prompt kind"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Read defaults from this config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the configured locale (e.g. en, de)
    #[arg(long, global = true, value_name = "TAG")]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw a framed box around text
    #[command(long_about = "Draw a framed box around text.

Each LINE argument becomes one row. Without LINE arguments the content is
read from stdin. The frame grows to fit the widest line or the title.

EXAMPLES:
    simpleterm box --title Status \"build ok\" \"tests ok\"
    simpleterm box --style double --indent 2 hello
    printf 'a\\nb\\n' | simpleterm box --style rounded")]
    Box {
        /// Title shown above a separator row
        #[arg(long, short)]
        title: Option<String>,
        /// Frame style: ascii, unicode, double, rounded, heavy, block, minimal
        #[arg(long, short)]
        style: Option<String>,
        /// Indentation level
        #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
        indent: i32,
        /// Content lines (stdin when omitted)
        lines: Vec<String>,
    },

    /// Draw a horizontal rule
    Rule {
        /// Character to repeat
        #[arg(long = "char", short = 'c', default_value_t = '-')]
        ch: char,
        /// Width in columns (configured rule width when omitted)
        #[arg(long, short)]
        width: Option<usize>,
        /// Indentation level
        #[arg(long, short, default_value_t = 0, allow_negative_numbers = true)]
        indent: i32,
    },

    /// Show the named colors and the 256-color palette
    Palette {
        /// Also show a 24-bit gradient
        #[arg(long)]
        truecolor: bool,
    },

    /// Show every text style
    Styles,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Interactive demo of every prompt kind
    #[command(long_about = "Ask a short series of questions and print the answers in a box.

Exercises text, pattern, integer, choice and yes/no prompts. Invalid
answers are reported and asked again; end of input aborts.")]
    Survey,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
