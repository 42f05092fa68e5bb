//! xtask - Build tasks for simpleterm
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man pages, COMMANDS.md)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, Command, CommandFactory, Parser, Subcommand};

use simpleterm::cli::Cli;

/// Binary name used in generated file names and headings
const BIN: &str = "simpleterm";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for simpleterm")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            // If no specific format is specified, generate all
            let gen_all = !man && !markdown;

            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate man pages using clap_mangen, one per (nested) subcommand
fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let cmd = Cli::command();
    write_man_page(&man_dir, BIN, &cmd)?;

    for subcommand in visible(&cmd) {
        let name = format!("{}-{}", BIN, subcommand.get_name());
        write_man_page(&man_dir, &name, subcommand)?;

        for nested in visible(subcommand) {
            let nested_name = format!("{}-{}", name, nested.get_name());
            write_man_page(&man_dir, &nested_name, nested)?;
        }
    }

    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn write_man_page(dir: &Path, name: &str, cmd: &Command) -> Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());
    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# simpleterm Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("## Table of Contents\n\n");
    for subcommand in visible(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("- [{}](#{}-{})\n", name, BIN, name));
    }
    markdown.push_str("\n---\n\n");

    markdown.push_str(&format!("## {}\n\n", BIN));
    push_about(&mut markdown, &cmd);
    push_options(&mut markdown, &cmd, "### Global Options");

    for subcommand in visible(&cmd) {
        let name = subcommand.get_name();
        markdown.push_str(&format!("## {} {}\n\n", BIN, name));
        push_about(&mut markdown, subcommand);
        push_positionals(&mut markdown, subcommand);
        push_options(&mut markdown, subcommand, "### Options");

        for nested in visible(subcommand) {
            markdown.push_str(&format!("#### {} {} {}\n\n", BIN, name, nested.get_name()));
            push_about(&mut markdown, nested);
            push_positionals(&mut markdown, nested);
            push_options(&mut markdown, nested, "##### Options");
        }

        markdown.push_str("---\n\n");
    }

    markdown.push_str("\n*Generated by `cargo xtask gen-docs`*\n");

    let output_path = output.join("COMMANDS.md");
    fs::write(&output_path, markdown)?;
    println!("Generated: {}", output_path.display());

    Ok(())
}

fn visible(cmd: &Command) -> impl Iterator<Item = &Command> {
    cmd.get_subcommands().filter(|c| !c.is_hide_set())
}

fn is_builtin(arg: &Arg) -> bool {
    let id = arg.get_id().as_str();
    id == "help" || id == "version"
}

fn push_about(markdown: &mut String, cmd: &Command) {
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }
    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n\n");
    }
}

fn push_positionals(markdown: &mut String, cmd: &Command) {
    let positional: Vec<_> = cmd
        .get_arguments()
        .filter(|a| a.is_positional() && !is_builtin(a))
        .collect();
    if positional.is_empty() {
        return;
    }

    markdown.push_str("### Arguments\n\n");
    for arg in positional {
        markdown.push_str(&format!("- `<{}>`: ", arg.get_id().as_str().to_uppercase()));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&help.to_string());
        }
        markdown.push('\n');
    }
    markdown.push('\n');
}

fn push_options(markdown: &mut String, cmd: &Command, heading: &str) {
    let options: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_positional() && !is_builtin(a))
        .collect();
    if options.is_empty() {
        return;
    }

    markdown.push_str(&format!("{}\n\n", heading));
    for arg in options {
        let long = arg.get_long().map(|l| format!("--{}", l));
        let short = arg.get_short().map(|s| format!("-{}", s));
        let flag = match (long, short) {
            (Some(l), Some(s)) => format!("{}, {}", s, l),
            (Some(l), None) => l,
            (None, Some(s)) => s,
            _ => continue,
        };
        markdown.push_str(&format!("- `{}`: ", flag));
        if let Some(help) = arg.get_help() {
            markdown.push_str(&help.to_string());
        }
        markdown.push('\n');
    }
    markdown.push('\n');
}
