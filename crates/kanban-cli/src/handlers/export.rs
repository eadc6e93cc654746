use crate::cli::ImportArgs;
use crate::context::CliContext;
use crate::output;

pub fn handle_export(ctx: &CliContext) -> anyhow::Result<()> {
    let json = ctx.store.export_board()?;
    println!("{}", json);
    Ok(())
}

pub fn handle_import(ctx: &mut CliContext, args: ImportArgs) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(&args.input)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", args.input, e))?;
    if let Err(e) = ctx.store.import_board(&data) {
        output::output_error(&format!("Import rejected: {}", e));
    }
    ctx.save()?;

    let board = ctx.store.board();
    output::output_success(serde_json::json!({
        "file": ctx.path().display().to_string(),
        "columns": board.columns.len(),
        "cards": board.card_count(),
    }))
}
