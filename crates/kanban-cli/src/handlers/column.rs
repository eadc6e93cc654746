use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::output;
use kanban_domain::commands::AddColumn;

pub fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Add { title, color } => {
            let outcome = ctx.store.execute(&AddColumn::new(title).with_color(color))?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;

            let board = ctx.store.board();
            match outcome.created_id().and_then(|id| board.column(id)) {
                Some(column) => output::output_success(column)?,
                None => output::output_error("column was not created"),
            }
        }
        ColumnAction::Remove { id } => {
            let removed_cards = ctx.store.board().column(&id).map_or(0, |c| c.len());
            let outcome = ctx.store.remove_column(id.as_str())?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;
            output::output_success(serde_json::json!({
                "deleted": id,
                "deleted_cards": removed_cards,
            }))?;
        }
        ColumnAction::List => {
            let board = ctx.store.board();
            output::output_list(board.columns.iter().collect())?;
        }
    }
    Ok(())
}
