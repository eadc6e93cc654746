mod atomic_writer;
mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("KANBAN_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "kanban", &mut std::io::stdout());
        return Ok(());
    }

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("a board FILE is required (or set KANBAN_FILE)"))?;
    let mut ctx = CliContext::load(&file_path)?;

    match cli.command {
        Commands::Column(column_cmd) => handlers::column::handle(&mut ctx, column_cmd.action)?,
        Commands::Card(card_cmd) => handlers::card::handle(&mut ctx, card_cmd.action)?,
        Commands::Export => handlers::export::handle_export(&ctx)?,
        Commands::Import(args) => handlers::export::handle_import(&mut ctx, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
