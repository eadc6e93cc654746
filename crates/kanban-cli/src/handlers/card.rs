use crate::cli::{CardAction, CardAddArgs, CardUpdateArgs, DropKind};
use crate::context::CliContext;
use crate::output;
use kanban_domain::commands::MoveCard;
use kanban_domain::{CardDraft, CardUpdate, DragSource, DropTarget, FieldUpdate};

pub fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Add(args) => {
            let column_id = args.column.clone();
            let outcome = ctx.store.add_card(column_id, build_draft(args))?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;

            let board = ctx.store.board();
            match outcome.created_id().and_then(|id| board.card(id)) {
                Some(card) => output::output_success(card)?,
                None => output::output_error("card was not created"),
            }
        }
        CardAction::Update(args) => {
            let id = args.id.clone();
            let outcome = ctx.store.update_card(id.as_str(), build_card_update(args))?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;
            output_card(ctx, &id)?;
        }
        CardAction::Remove { id } => {
            let outcome = ctx.store.remove_card(id.as_str())?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;
            output::output_success(serde_json::json!({"deleted": id}))?;
        }
        CardAction::Move {
            id,
            from,
            to,
            index,
        } => {
            let outcome = ctx.store.move_card(MoveCard {
                card_id: id.clone(),
                from_column_id: from,
                to_column_id: to,
                to_index: index,
            })?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;
            output_position(ctx, &id)?;
        }
        CardAction::Drop {
            id,
            from,
            target,
            over,
            column,
        } => {
            let source = DragSource {
                card_id: id.clone(),
                column_id: from,
            };
            let target = match target {
                DropKind::Card => DropTarget::Card {
                    card_id: over,
                    column_id: column.unwrap_or_default(),
                },
                DropKind::Column => DropTarget::Column { column_id: over },
                DropKind::Unknown => DropTarget::Unknown { id: over },
            };
            let outcome = ctx.store.drop_card(&source, &target)?;
            output::require_effect(&outcome);
            ctx.save_if_changed(&outcome)?;
            output_position(ctx, &id)?;
        }
        CardAction::Get { id } => output_card(ctx, &id)?,
        CardAction::List { column } => {
            let board = ctx.store.board();
            match column {
                Some(column_id) => {
                    if !board.contains_column(&column_id) {
                        output::output_error(&format!("column not found: {}", column_id));
                    }
                    output::output_list(board.cards_in(&column_id))?;
                }
                None => output::output_list(board.cards.values().collect())?,
            }
        }
    }
    Ok(())
}

fn output_card(ctx: &CliContext, card_id: &str) -> anyhow::Result<()> {
    let board = ctx.store.board();
    match board.card(card_id) {
        Some(card) => output::output_success(card),
        None => output::output_error(&format!("card not found: {}", card_id)),
    }
}

fn output_position(ctx: &CliContext, card_id: &str) -> anyhow::Result<()> {
    let board = ctx.store.board();
    match board.position_of(card_id) {
        Some((column_id, index)) => output::output_success(serde_json::json!({
            "id": card_id,
            "columnId": column_id,
            "index": index,
        })),
        None => output::output_error(&format!("card not found: {}", card_id)),
    }
}

fn build_draft(args: CardAddArgs) -> CardDraft {
    CardDraft {
        title: args.title,
        description: args.description,
        image: args.image,
        due_date: args.due_date,
        labels: args.labels,
    }
}

fn clearable<T>(value: Option<T>, clear: bool) -> FieldUpdate<T> {
    match (value, clear) {
        (_, true) => FieldUpdate::Clear,
        (Some(value), false) => FieldUpdate::Set(value),
        (None, false) => FieldUpdate::NoChange,
    }
}

fn build_card_update(args: CardUpdateArgs) -> CardUpdate {
    CardUpdate {
        title: args.title,
        description: clearable(args.description, args.clear_description),
        image: clearable(args.image, args.clear_image),
        due_date: clearable(args.due_date, args.clear_due_date),
        labels: clearable(args.labels, args.clear_labels),
    }
}
