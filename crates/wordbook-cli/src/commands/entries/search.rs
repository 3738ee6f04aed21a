use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::print_entry_list;
use crate::ui::{header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;

    let mut entries = store.query_indexed(&args.query);
    if let Some(limit) = args.limit {
        entries.truncate(limit.get());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "search", Some(&args.query)));
        println!();
    }

    print_entry_list(&ui_ctx, &entries, ctx.quiet())
}
