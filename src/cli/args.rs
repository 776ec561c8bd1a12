// src/cli/args.rs
use crate::domain::NoteTag;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the NoteHub API, overrides the config file
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, create, or delete)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List one page of notes
    List {
        /// Optional search term
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Notes per page (defaults to the config value)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        per_page: Option<u32>,

        /// Output the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Create {
        /// Note title (3-50 characters)
        #[arg(long)]
        title: String,

        /// Note content (up to 500 characters)
        #[arg(long, default_value = "")]
        content: String,

        /// One of Todo, Work, Personal, Meeting, Shopping
        #[arg(short, long, default_value = "Todo")]
        tag: NoteTag,

        /// Output the created note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output the deleted note as JSON
        #[arg(long)]
        json: bool,
    },
}
