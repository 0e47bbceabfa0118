//! CLI 模块

pub mod config;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "A small terminal task list")]
pub struct Cli {
    /// Initial filter: all, pending or completed (other values show everything)
    #[arg(short, long, global = true)]
    pub filter: Option<String>,

    /// Theme for this run, overriding the config file (e.g. "Nord")
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive task list (default)
    Tui,
    /// Print the effective configuration and where it is read from
    Config,
}
