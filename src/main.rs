//! simpleterm - CLI entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simpleterm::cli::{Cli, Commands, ConfigCommands};

mod commands;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "SIMPLETERM_LOG";

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref(), cli.locale.as_deref())?;

    match cli.command {
        Commands::Box {
            title,
            style,
            indent,
            lines,
        } => commands::boxes::handle(&config, title.as_deref(), style.as_deref(), indent, &lines),
        Commands::Rule { ch, width, indent } => commands::rule::handle(&config, ch, width, indent),
        Commands::Palette { truecolor } => commands::palette::handle(&config, truecolor),
        Commands::Styles => commands::styles::handle(&config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => {
                commands::config::handle_path(&config, cli.config.as_deref())
            }
            ConfigCommands::Init { force } => {
                commands::config::handle_init(&config, cli.config.as_deref(), force)
            }
        },
        Commands::Survey => commands::survey::handle(&config),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Log to stderr so rendered output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
