use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::print_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None)?;
    let store = ctx.open_store()?;

    let entry = store.get(args.position).ok_or_else(|| {
        CliError::not_found(
            format!("No entry at position {}", args.position),
            "Hint: Run `wordbook list` to see positions.",
        )
    })?;

    print_entry(&ui_ctx, args.position, &entry)
}
