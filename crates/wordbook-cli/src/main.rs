//! Wordbook CLI - record words and expressions with their explanations
//!
//! This is the command-line interface for Wordbook. It drives the entry
//! store in `wordbook-core` and renders its views for the terminal.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use wordbook_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, misc};
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx
            .ui_context(false, None)
            .unwrap_or_else(|_| UiContext::from_env(false, None, cli.no_color, cli.ascii));

        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);

        let code = e
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            entries::handle_add(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            entries::handle_list(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            entries::handle_search(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            entries::handle_show(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            entries::handle_delete(ctx, args)?;
        }
        Some(Commands::Path) => {
            misc::handle_path(ctx)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            println!("Wordbook v{}", VERSION);
            println!("\nQuickstart:");
            println!("  wordbook add \"Ciao\" \"Hello\"");
            println!("  wordbook list");
            println!("  wordbook search ciao");
            println!("  wordbook show 0");
            println!("  wordbook delete 0");
            println!("\nRun `wordbook --help` for full usage.");
        }
    }

    Ok(())
}
