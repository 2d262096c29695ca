//! Line commands understood by the shell.

use clap::{ColorChoice, Parser, Subcommand};
use shelf_core::ItemForm;

#[derive(Debug, Parser)]
#[command(
    name = "shelf",
    no_binary_name = true,
    disable_version_flag = true,
    color = ColorChoice::Never,
    about = "Manage the media catalog for this session"
)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Stage ratings (1-5) for the next item
    Rate {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Stage a song for the next CD
    Song {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Stage whether the next item starts checked out (yes/no)
    CheckedOut {
        #[arg(value_parser = parse_yes_no, action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Add a book, movie or cd using the staged ratings, songs and flag
    Add(AddArgs),
    /// Show every item with its kind, checked-out flag and average rating
    List,
    /// Show all titles on one line
    Titles,
    /// Remove the item at a position
    Remove { index: usize },
    /// Flip the checked-out flag of the item at a position
    Toggle { index: usize },
    /// Rate an item already in the catalog
    RateItem {
        index: usize,
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Pick a random song from the CD at a position
    Shuffle { index: usize },
    /// Show what is staged for the next item
    Draft,
    /// Discard everything staged for the next item
    Reset,
    /// Print the catalog as JSON
    Export,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq, clap::Args)]
pub struct AddArgs {
    /// book, movie or cd
    pub kind: String,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub pages: Option<u32>,
    #[arg(long)]
    pub director: Option<String>,
    #[arg(long = "runtime")]
    pub run_time: Option<u32>,
    #[arg(long)]
    pub artist: Option<String>,
}

impl From<AddArgs> for ItemForm {
    fn from(args: AddArgs) -> Self {
        ItemForm {
            kind: args.kind,
            title: args.title,
            author: args.author,
            pages: args.pages,
            director: args.director,
            run_time: args.run_time,
            artist: args.artist,
        }
    }
}

fn parse_yes_no(raw: &str) -> Result<bool, String> {
    crate::config::parse_bool(raw)
        .ok_or_else(|| format!("expected yes or no, got '{raw}'"))
}

/// Outcome of reading one input line
#[derive(Debug)]
pub enum Parsed {
    /// Blank line or `#` comment
    Empty,
    Command(ShellCommand),
    /// Help output or a parse error, already rendered as text
    Message(String),
}

pub fn parse_line(line: &str) -> Parsed {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Parsed::Empty;
    }

    let Some(words) = shlex::split(trimmed) else {
        return Parsed::Message("error: unbalanced quotes".to_string());
    };

    match CommandLine::try_parse_from(words) {
        Ok(parsed) => Parsed::Command(parsed.command),
        Err(err) => Parsed::Message(err.render().to_string()),
    }
}
