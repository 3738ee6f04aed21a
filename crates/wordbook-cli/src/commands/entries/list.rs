use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::output::print_entry_list;
use crate::ui::{header, hint, print, OutputMode};

/// Row cap for `list`.
///
/// `--limit` applies in every mode. The configured and built-in defaults only
/// shorten the pretty table; JSON and plain output are uncapped unless
/// `--limit` is given.
fn effective_limit(
    flag: Option<usize>,
    configured: Option<usize>,
    mode: OutputMode,
) -> Option<usize> {
    match (flag, mode) {
        (Some(limit), _) => Some(limit),
        (None, OutputMode::Pretty) => {
            Some(configured.filter(|&l| l > 0).unwrap_or(DEFAULT_LIST_LIMIT))
        }
        (None, OutputMode::Plain | OutputMode::Json) => None,
    }
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;

    let limit = effective_limit(
        args.limit.map(|limit| limit.get()),
        ctx.list_limit()?,
        ui_ctx.mode,
    );
    let total = store.len();
    let entries: Vec<_> = store
        .get_all()
        .into_iter()
        .enumerate()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let context = format!("{} of {}", entries.len(), total);
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&context)));
        println!();
    }

    print_entry_list(&ui_ctx, &entries, ctx.quiet())?;

    if ui_ctx.mode.is_pretty() && !ctx.quiet() && entries.len() < total {
        println!();
        print(
            &ui_ctx,
            &hint(&ui_ctx, "Use `wordbook list --limit N` to see more"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_limit_applies_in_every_mode() {
        for mode in [OutputMode::Json, OutputMode::Plain, OutputMode::Pretty] {
            assert_eq!(effective_limit(Some(5), Some(50), mode), Some(5));
        }
    }

    #[test]
    fn test_defaults_only_cap_pretty_output() {
        assert_eq!(effective_limit(None, None, OutputMode::Json), None);
        assert_eq!(effective_limit(None, Some(10), OutputMode::Plain), None);
        assert_eq!(
            effective_limit(None, None, OutputMode::Pretty),
            Some(DEFAULT_LIST_LIMIT)
        );
        assert_eq!(effective_limit(None, Some(10), OutputMode::Pretty), Some(10));
    }

    #[test]
    fn test_zero_config_limit_falls_back_to_default() {
        assert_eq!(
            effective_limit(None, Some(0), OutputMode::Pretty),
            Some(DEFAULT_LIST_LIMIT)
        );
    }
}
