use std::path::PathBuf;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_document_path, write_config, WordbookConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, print, Badge, OutputMode};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let config_path = resolve_config_path()?;

    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nUse --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let document_path = match args
        .path
        .as_deref()
        .or(ctx.cli().file.as_deref())
        .filter(|p| !p.trim().is_empty())
    {
        Some(value) => PathBuf::from(value),
        None => default_document_path()?,
    };

    write_config(&config_path, &WordbookConfig::new(document_path.clone()))?;
    tracing::info!(
        config = %config_path.display(),
        document = %document_path.display(),
        "wrote config"
    );

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Config written to {}", config_path.display()),
                ),
            );
            if document_path.exists() {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Info,
                        &format!("Using existing wordbook at {}", document_path.display()),
                    ),
                );
            } else {
                print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Info,
                        &format!(
                            "Wordbook will be created at {} on first add",
                            document_path.display()
                        ),
                    ),
                );
            }
            println!();
            print(
                &ui_ctx,
                &hint(&ui_ctx, "wordbook add  \u{00B7}  wordbook list  \u{00B7}  wordbook --help"),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("document_path={}", document_path.display());
            println!("config_path={}", config_path.display());
        }
    }
    Ok(())
}
