use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::Cli;

pub fn handle_path(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", ctx.document_path()?.display());
    Ok(())
}

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "wordbook", &mut std::io::stdout());
    Ok(())
}
