//! Add entry command handler.

use wordbook_core::WordbookError;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::constants::FILL_BOTH_FIELDS;
use crate::errors::CliError;
use crate::helpers::{resolve_field, FieldPrompt};
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, blank_line, hint, is_interactive, kv, print, short_id, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let interactive = is_interactive() && !args.no_input;
    let needs_prompting = args.word.is_none() || args.explanation.is_none();

    if interactive && needs_prompting && ui_ctx.mode.is_pretty() {
        let title = styled("Wordbook", styles::bold(), ui_ctx.color);
        println!("{} \u{00B7} add\n", title);
    }

    let word = resolve_field(FieldPrompt::Word, args.word.as_deref(), interactive)?;
    let explanation = resolve_field(
        FieldPrompt::Explanation,
        args.explanation.as_deref(),
        interactive,
    )?;

    let store = ctx.open_store()?;
    let id = match store.add_entry(&word, &explanation) {
        Ok(id) => id,
        Err(WordbookError::Validation(reason)) => {
            tracing::debug!(%reason, "rejected entry");
            return Err(CliError::invalid_input(FILL_BOTH_FIELDS).into());
        }
        Err(err) => return Err(err.into()),
    };
    let position = store.len() - 1;

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Added \"{}\"", word)),
            );
            let context = format!(
                "#{}  \u{00B7}  ID: {}  \u{00B7}  {} entries",
                position,
                short_id(&id),
                store.len()
            );
            println!("{}", styled(&context, styles::dim(), ui_ctx.color));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    &format!("wordbook show {}  \u{00B7}  wordbook list", position),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("{}", kv(&ui_ctx, "entry_id", &id.to_string()));
            println!("{}", kv(&ui_ctx, "position", &position.to_string()));
        }
    }
    Ok(())
}
