//! Structural guarantees that must hold after any sequence of commands.

use kanban_domain::commands::{AddCard, AddColumn, MoveCard, RemoveCard, RemoveColumn};
use kanban_domain::{
    Board, BoardExporter, BoardImporter, CardDraft, Command, IdGenerator, SequentialIdGenerator,
};
use std::collections::HashSet;

/// Three columns holding 3, 2 and 0 cards.
fn populated() -> (Board, SequentialIdGenerator) {
    let mut ids = SequentialIdGenerator::new();
    let mut board = Board::seeded(&["Todo", "Doing", "Done"], &mut ids).unwrap();
    let plan = [("col-1", 3), ("col-2", 2)];
    for (column_id, count) in plan {
        for n in 0..count {
            board = run(
                &board,
                &AddCard {
                    column_id: column_id.into(),
                    draft: CardDraft::new(format!("{} #{}", column_id, n)),
                },
                &mut ids,
            );
        }
    }
    (board, ids)
}

fn run(board: &Board, command: &dyn Command, ids: &mut dyn IdGenerator) -> Board {
    command.apply(board, ids).unwrap().0
}

fn assert_well_formed(board: &Board) {
    let mut listed = HashSet::new();
    for column in &board.columns {
        for card_id in &column.card_ids {
            assert!(board.contains_card(card_id), "dangling reference {}", card_id);
            assert!(listed.insert(card_id.clone()), "{} listed twice", card_id);
        }
    }
    for (key, card) in &board.cards {
        assert_eq!(*key, card.id);
        assert!(listed.contains(key), "orphaned card {}", key);
    }
    let column_ids: HashSet<_> = board.columns.iter().map(|c| &c.id).collect();
    assert_eq!(column_ids.len(), board.columns.len());
}

fn move_card(card_id: &str, from: &str, to: &str, to_index: usize) -> MoveCard {
    MoveCard {
        card_id: card_id.into(),
        from_column_id: from.into(),
        to_column_id: to.into(),
        to_index,
    }
}

#[test]
fn test_every_same_column_move_keeps_cards_once() {
    let (board, mut ids) = populated();
    let source = board.column("col-1").unwrap().card_ids.clone();

    for card_id in &source {
        for to_index in 0..=source.len() + 2 {
            let after = run(&board, &move_card(card_id, "col-1", "col-1", to_index), &mut ids);
            let column = after.column("col-1").unwrap();

            assert_eq!(column.len(), source.len());
            assert_eq!(column.card_ids.iter().filter(|id| *id == card_id).count(), 1);
            assert_eq!(
                column.index_of(card_id),
                Some(to_index.min(source.len() - 1))
            );
            assert_well_formed(&after);
        }
    }
}

#[test]
fn test_every_cross_column_move_conserves_cards() {
    let (board, mut ids) = populated();
    let total = board.card_count();

    for card_id in board.column("col-1").unwrap().card_ids.clone() {
        for to_index in 0..5 {
            let after = run(&board, &move_card(&card_id, "col-1", "col-2", to_index), &mut ids);

            assert_eq!(after.column("col-1").unwrap().len(), 2);
            assert_eq!(after.column("col-2").unwrap().len(), 3);
            assert_eq!(after.card_count(), total);
            assert_eq!(
                after.position_of(&card_id).map(|(col, i)| (col.as_str(), i)),
                Some(("col-2", to_index.min(2)))
            );
            assert_well_formed(&after);
        }
    }
}

#[test]
fn test_out_of_range_index_matches_append() {
    let (board, mut ids) = populated();
    let card_id = board.column("col-1").unwrap().card_ids[0].clone();

    let appended = run(&board, &move_card(&card_id, "col-1", "col-3", 0), &mut ids);
    let far = run(&board, &move_card(&card_id, "col-1", "col-3", usize::MAX), &mut ids);
    assert_eq!(appended, far);

    let end = run(&board, &move_card(&card_id, "col-1", "col-2", 2), &mut ids);
    let far = run(&board, &move_card(&card_id, "col-1", "col-2", 1_000), &mut ids);
    assert_eq!(end, far);
}

#[test]
fn test_removing_each_column_leaves_no_orphans() {
    let (board, mut ids) = populated();

    for column in &board.columns {
        let after = run(
            &board,
            &RemoveColumn {
                column_id: column.id.clone(),
            },
            &mut ids,
        );
        assert_eq!(after.columns.len(), board.columns.len() - 1);
        assert_eq!(after.card_count(), board.card_count() - column.len());
        for card_id in &column.card_ids {
            assert!(!after.contains_card(card_id));
        }
        assert_well_formed(&after);
    }
}

#[test]
fn test_mixed_command_sequence_stays_well_formed() {
    let (mut board, mut ids) = populated();
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AddColumn::new("Review")),
        Box::new(move_card("card-4", "col-1", "col-3", 0)),
        Box::new(move_card("card-7", "col-2", "col-3", 9)),
        Box::new(RemoveCard {
            card_id: "card-5".into(),
        }),
        Box::new(move_card("card-5", "col-1", "col-2", 0)),
        Box::new(RemoveColumn {
            column_id: "col-2".into(),
        }),
        Box::new(AddCard {
            column_id: "col-2".into(),
            draft: CardDraft::new("Lost"),
        }),
        Box::new(AddCard {
            column_id: "col-3".into(),
            draft: CardDraft::new("Kept"),
        }),
    ];

    for command in &commands {
        board = run(&board, command.as_ref(), &mut ids);
        assert_well_formed(&board);
    }

    assert_eq!(board.columns.len(), 3);
    assert_eq!(board.column("col-1").unwrap().card_ids, vec!["card-6"]);
    assert_eq!(board.column("col-3").unwrap().len(), 3);
}

#[test]
fn test_round_trip_after_edits() {
    let (board, mut ids) = populated();
    let board = run(&board, &move_card("card-5", "col-1", "col-3", 0), &mut ids);

    let text = BoardExporter::export_to_json(&board).unwrap();
    let restored = BoardImporter::import_from_json(&text).unwrap();

    assert_eq!(restored, board);
    assert_eq!(BoardExporter::export_to_json(&restored).unwrap(), text);
}
