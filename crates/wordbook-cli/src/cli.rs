use std::num::NonZeroUsize;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use wordbook_core::VERSION;

/// Wordbook - record words and expressions with their explanations
#[derive(Parser)]
#[command(name = "wordbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the wordbook document (JSON)
    #[arg(short, long, global = true, env = "WORDBOOK_PATH")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the wordbook document should live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Word or expression
    #[arg(value_name = "WORD")]
    pub word: Option<String>,

    /// Explanation or translation
    #[arg(value_name = "EXPLANATION")]
    pub explanation: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results (at least 1)
    #[arg(long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in words and explanations (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Limit number of results (at least 1)
    #[arg(long, value_name = "N")]
    pub limit: Option<NonZeroUsize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry position as shown by `list`
    #[arg(value_name = "POSITION")]
    pub position: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry positions as shown by `list` or `search`
    #[arg(value_name = "POSITION", required = true, num_args = 1..)]
    pub positions: Vec<usize>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at the wordbook document
    Init(InitArgs),

    /// Add a word and its explanation
    Add(AddArgs),

    /// List all entries in the order they were added
    List(ListArgs),

    /// Search words and explanations
    Search(SearchArgs),

    /// Show one entry in full
    Show(ShowArgs),

    /// Delete entries by position
    Delete(DeleteArgs),

    /// Print the resolved document path
    Path,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
