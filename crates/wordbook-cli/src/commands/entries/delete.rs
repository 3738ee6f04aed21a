//! Delete entries by position.
//!
//! On a terminal the user confirms (default: no) unless `--yes` is given.
//! Without a terminal, or with `--no-input`, deleting requires `--yes`.

use std::collections::BTreeSet;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::constants::CONFIRM_DELETE_HINT;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, is_interactive, kv, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let interactive = is_interactive() && !args.no_input;
    let store = ctx.open_store()?;

    let positions: BTreeSet<usize> = args.positions.iter().copied().collect();
    let total = store.len();
    let (valid, skipped): (Vec<usize>, Vec<usize>) =
        positions.iter().partition(|&&position| position < total);

    if !valid.is_empty() && !args.yes {
        if !interactive {
            return Err(CliError::invalid_input(format!(
                "Refusing to delete without confirmation\n{}",
                CONFIRM_DELETE_HINT
            ))
            .into());
        }
        let words: Vec<String> = valid
            .iter()
            .filter_map(|&position| store.get(position))
            .map(|entry| format!("\"{}\"", entry.word))
            .collect();
        let prompt = format!("Delete {}?", words.join(", "));
        if !confirm(&prompt, false, interactive)? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    let removed = store.remove(&positions);

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            for entry in &removed {
                print(
                    &ui_ctx,
                    &badge(&ui_ctx, Badge::Ok, &format!("Deleted \"{}\"", entry.word)),
                );
            }
            for position in &skipped {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Warn,
                        &format!("No entry at position {}; skipped", position),
                    ),
                );
            }
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("{}", kv(&ui_ctx, "deleted", &removed.len().to_string()));
            for entry in &removed {
                println!("{}", kv(&ui_ctx, "deleted_id", &entry.id.to_string()));
            }
            for position in &skipped {
                println!("{}", kv(&ui_ctx, "skipped", &position.to_string()));
            }
        }
    }
    Ok(())
}
