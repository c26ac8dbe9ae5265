use crate::tests::{AUTHOR, DONE, IN_PROGRESS, PENDING, board_with_tasks};
use crate::{
    ActionType, Board, BoardStates, DependencyCheck, MoveOutcome, Task, TaskLimits, TrackedField,
};

use chrono::{Duration, TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

fn ids_in(board: &Board, state: &str) -> Vec<u32> {
    board.tasks_in_state(state).iter().map(|t| t.id()).collect()
}

// =========================================================================
// Creation and removal
// =========================================================================

#[test]
fn given_new_board_when_tasks_created_then_ids_start_at_one() {
    let (board, ids) = board_with_tasks(3);

    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(ids_in(&board, PENDING), vec![1, 2, 3]);
    assert_that!(board.task_count(), eq(3));
}

#[test]
fn given_unknown_state_when_create_task_then_lands_in_initial_state() {
    let mut board = Board::new(1, "b", "");

    let id = board.create_task("t", "", "Backlog", AUTHOR);

    assert_that!(board.task(id).map(|t| t.state()), some(eq(PENDING)));
}

#[test]
fn given_created_task_when_inspected_then_creation_logged_without_snapshot() {
    let (board, ids) = board_with_tasks(1);

    let task = board.task(ids[0]).unwrap();

    assert_that!(task.activity_log().len(), eq(1));
    assert_that!(
        task.activity_log().entries()[0].action_type(),
        eq(&ActionType::Created)
    );
    assert!(task.history().is_empty());
}

#[test]
fn given_task_when_removed_then_returned_with_deletion_entry() {
    // Given
    let (mut board, ids) = board_with_tasks(2);

    // When
    let removed = board.remove_task(ids[0], AUTHOR);

    // Then
    let removed = removed.unwrap();
    assert_that!(
        removed.activity_log().entries().back().map(|e| e.action_type().clone()),
        some(eq(&ActionType::Deleted))
    );
    assert_that!(board.task(ids[0]).map(Task::id), none());
    assert_eq!(ids_in(&board, PENDING), vec![ids[1]]);
    assert_that!(board.remove_task(ids[0], AUTHOR).map(|t| t.id()), none());
}

#[test]
fn given_built_task_when_inserted_then_keeps_id_and_advances_counter() {
    // Given
    let mut board = Board::new(1, "b", "");
    let task = Task::new(10, "loaded", "", IN_PROGRESS, TaskLimits::default());

    // When
    let inserted = board.insert_task(task);
    let next = board.create_task("fresh", "", PENDING, AUTHOR);

    // Then
    assert!(inserted);
    assert_eq!(ids_in(&board, IN_PROGRESS), vec![10]);
    assert_that!(next, eq(11));
}

#[test]
fn given_task_with_undeclared_state_or_taken_id_when_inserted_then_rejected() {
    let (mut board, ids) = board_with_tasks(1);

    let stray = Task::new(50, "stray", "", "Archived", TaskLimits::default());
    let duplicate = Task::new(ids[0], "dup", "", PENDING, TaskLimits::default());

    assert!(!board.insert_task(stray));
    assert!(!board.insert_task(duplicate));
    assert_that!(board.task_count(), eq(1));
    assert_that!(board.task(ids[0]).map(|t| t.title()), some(eq("Task 0")));
}

#[test]
fn given_task_with_highest_id_when_inserted_then_later_tasks_reuse_lowest_free_id() {
    // Given
    let mut board = Board::new(1, "b", "");
    let first = board.create_task("first", "", PENDING, AUTHOR);
    let top = Task::new(u32::MAX, "top", "", PENDING, TaskLimits::default());

    // When
    let inserted = board.insert_task(top);
    let second = board.create_task("second", "", PENDING, AUTHOR);
    let third = board.create_task("third", "", PENDING, AUTHOR);

    // Then
    assert!(inserted);
    assert_that!(first, eq(1));
    assert_that!(second, eq(2));
    assert_that!(third, eq(3));
    assert_that!(board.task(u32::MAX).map(|t| t.title()), some(eq("top")));
    assert_that!(board.task_count(), eq(4));
}

#[test]
fn given_counter_one_below_highest_id_when_tasks_created_then_top_id_used_once() {
    let mut board = Board::new(1, "b", "");
    board.insert_task(Task::new(u32::MAX - 1, "loaded", "", PENDING, TaskLimits::default()));

    let top = board.create_task("top", "", PENDING, AUTHOR);
    let wrapped = board.create_task("after", "", PENDING, AUTHOR);

    assert_that!(top, eq(u32::MAX));
    assert_that!(wrapped, eq(1));
    assert_that!(board.task_count(), eq(3));
}

#[test]
fn given_tasks_when_cleared_then_counter_restarts() {
    let (mut board, _) = board_with_tasks(3);

    board.clear_all_tasks();

    assert_that!(board.task_count(), eq(0));
    assert_that!(board.create_task("again", "", PENDING, AUTHOR), eq(1));
}

// =========================================================================
// Moving
// =========================================================================

#[test]
fn given_unblocked_task_when_moved_then_changes_column_and_logs_move() {
    // Given
    let (mut board, ids) = board_with_tasks(1);

    // When
    let outcome = board.move_task(ids[0], IN_PROGRESS, AUTHOR);

    // Then
    match outcome {
        MoveOutcome::Moved(change) => {
            assert_that!(change.field(), eq(TrackedField::State));
            assert_that!(change.old_value(), eq(PENDING));
        }
        other => panic!("expected Moved, got {other:?}"),
    }
    assert!(ids_in(&board, PENDING).is_empty());
    assert_eq!(ids_in(&board, IN_PROGRESS), vec![ids[0]]);

    let task = board.task(ids[0]).unwrap();
    assert_that!(task.state(), eq(IN_PROGRESS));
    assert_that!(task.history().len(), eq(1));
    assert_that!(
        task.activity_log().entries().back().map(|e| e.action_type().clone()),
        some(eq(&ActionType::Moved))
    );
}

#[test]
fn given_incomplete_dependency_when_moved_to_gated_state_then_blocked_until_done() {
    // Given
    let (mut board, ids) = board_with_tasks(2);
    let (t, d) = (ids[0], ids[1]);
    assert!(board.add_dependency(t, d).is_allowed());

    // When
    let blocked = board.move_task(t, IN_PROGRESS, AUTHOR);

    // Then
    assert_that!(blocked, eq(&MoveOutcome::Blocked { blocking: vec![d] }));
    assert_that!(board.task(t).map(|t| t.state()), some(eq(PENDING)));
    assert_eq!(ids_in(&board, PENDING), vec![t, d]);
    assert_that!(board.task(t).map(|t| t.activity_log().len()), some(eq(1)));

    // When the dependency is finished
    assert!(board.move_task(d, DONE, AUTHOR).is_moved());
    let moved = board.move_task(t, IN_PROGRESS, AUTHOR);

    // Then
    assert!(moved.is_moved());
    assert_eq!(ids_in(&board, IN_PROGRESS), vec![t]);
}

#[test]
fn given_incomplete_dependency_when_moved_back_to_initial_then_allowed() {
    // Given
    let (mut board, ids) = board_with_tasks(2);
    let (t, d) = (ids[0], ids[1]);
    board.move_task(t, IN_PROGRESS, AUTHOR);
    board.add_dependency(t, d);

    // Then
    assert!(board.can_move_task(t, PENDING));
    assert!(!board.can_move_task(t, DONE));
    assert!(board.move_task(t, PENDING, AUTHOR).is_moved());
}

#[test]
fn given_dangling_dependency_when_queried_then_counts_as_blocking() {
    // Given
    let (mut board, ids) = board_with_tasks(1);
    let t = ids[0];
    board.task_mut(t).unwrap().add_dependency(9999);

    // Then
    assert_eq!(board.blocking_tasks(t), vec![9999]);
    assert!(!board.can_move_task(t, DONE));
}

#[test]
fn given_removed_dependency_task_when_queried_then_still_blocking() {
    let (mut board, ids) = board_with_tasks(2);
    let (t, d) = (ids[0], ids[1]);
    board.add_dependency(t, d);
    board.move_task(d, DONE, AUTHOR);

    board.remove_task(d, AUTHOR);

    assert_eq!(board.blocking_tasks(t), vec![d]);
    assert!(!board.can_move_task(t, IN_PROGRESS));
}

#[test]
fn given_unknown_state_or_task_when_moved_then_rejected() {
    let (mut board, ids) = board_with_tasks(1);

    assert_that!(
        board.move_task(ids[0], "Archived", AUTHOR),
        eq(&MoveOutcome::UnknownState)
    );
    assert_that!(
        board.move_task(404, IN_PROGRESS, AUTHOR),
        eq(&MoveOutcome::TaskNotFound)
    );
    assert!(!board.can_move_task(404, PENDING));
}

#[test]
fn given_task_in_state_when_moved_to_same_state_then_unchanged() {
    let (mut board, ids) = board_with_tasks(1);

    let outcome = board.move_task(ids[0], PENDING, AUTHOR);

    assert_that!(outcome, eq(&MoveOutcome::Unchanged));
    assert_that!(board.task(ids[0]).map(|t| t.activity_log().len()), some(eq(1)));
}

#[test]
fn given_ungated_state_when_moved_then_dependencies_ignored() {
    // Given
    let mut board = Board::new(1, "b", "");
    board.add_state("Review");
    let (t, d) = (
        board.create_task("t", "", PENDING, AUTHOR),
        board.create_task("d", "", PENDING, AUTHOR),
    );
    board.add_dependency(t, d);

    // Then
    assert!(board.move_task(t, "Review", AUTHOR).is_moved());
    assert!(board.set_state_gated("Review", true));
    assert!(board.move_task(t, PENDING, AUTHOR).is_moved());
    assert!(!board.move_task(t, "Review", AUTHOR).is_moved());
}

// =========================================================================
// Dependencies
// =========================================================================

#[test]
fn given_chain_when_closing_edge_added_then_rejected_with_path() {
    // Given: a -> b -> c
    let (mut board, ids) = board_with_tasks(3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    board.add_dependency(a, b);
    board.add_dependency(b, c);

    // When
    let check = board.add_dependency(c, a);

    // Then
    assert_that!(check, eq(&DependencyCheck::WouldCreateCycle { path: vec![c, a, b, c] }));
    assert!(!board.task(c).unwrap().has_dependencies());
    assert!(!board.can_add_dependency(c, a));
    assert!(board.has_circular_dependency(c, a));
}

#[test]
fn given_missing_tasks_when_add_dependency_then_reports_which() {
    let (mut board, ids) = board_with_tasks(1);

    assert_that!(board.add_dependency(ids[0], ids[0]), eq(&DependencyCheck::SelfReference));
    assert_that!(board.add_dependency(77, ids[0]), eq(&DependencyCheck::TaskNotFound(77)));
    assert_that!(
        board.add_dependency(ids[0], 88),
        eq(&DependencyCheck::DependencyNotFound(88))
    );
    assert!(!board.has_circular_dependency(ids[0], 88));
}

#[test]
fn given_dependency_when_removed_then_task_unblocked() {
    let (mut board, ids) = board_with_tasks(2);
    board.add_dependency(ids[0], ids[1]);

    assert!(board.remove_dependency(ids[0], ids[1]));
    assert!(!board.remove_dependency(ids[0], ids[1]));
    assert!(board.can_move_task(ids[0], DONE));
}

// =========================================================================
// States
// =========================================================================

#[test]
fn given_state_with_tasks_when_removed_then_rejected() {
    let mut board = Board::new(1, "b", "");
    board.add_state("Review");
    let id = board.create_task("t", "", "Review", AUTHOR);

    assert!(!board.remove_state("Review"));

    board.move_task(id, PENDING, AUTHOR);
    assert!(board.remove_state("Review"));
    assert!(!board.has_state("Review"));
}

#[test]
fn given_initial_or_terminal_state_when_removed_then_rejected() {
    let mut board = Board::new(1, "b", "");

    assert!(!board.remove_state(PENDING));
    assert!(!board.remove_state(DONE));
    assert!(board.remove_state(IN_PROGRESS));
    assert_eq!(board.states().states(), &[PENDING.to_string(), DONE.to_string()]);
}

#[test]
fn given_permutation_when_reordered_then_accepted_otherwise_rejected() {
    let mut board = Board::new(1, "b", "");

    assert!(!board.reorder_states(&[DONE, PENDING]));
    assert!(!board.reorder_states(&[DONE, DONE, PENDING]));
    assert!(board.reorder_states(&[DONE, IN_PROGRESS, PENDING]));
    assert_that!(board.states().states()[0].as_str(), eq(DONE));
}

#[test]
fn given_custom_states_when_board_created_then_columns_follow() {
    // Given
    let states = BoardStates::new(vec!["Todo", "Doing", "Done"], "Todo", "Done", &["Done"]).unwrap();
    let mut board = Board::with_states(1, "custom", "", states, TaskLimits::default());
    let (t, d) = (
        board.create_task("t", "", "Todo", AUTHOR),
        board.create_task("d", "", "Todo", AUTHOR),
    );
    board.add_dependency(t, d);

    // Then
    assert!(board.move_task(t, "Doing", AUTHOR).is_moved());
    assert!(!board.move_task(t, "Done", AUTHOR).is_moved());
    assert!(board.move_task(d, "Done", AUTHOR).is_moved());
    assert!(board.move_task(t, "Done", AUTHOR).is_moved());
    assert_that!(board.completion_percentage(), eq(100.0));
}

// =========================================================================
// Queries
// =========================================================================

#[test]
fn given_four_tasks_one_done_when_completion_then_twenty_five_percent() {
    let (mut board, ids) = board_with_tasks(4);

    board.move_task(ids[0], DONE, AUTHOR);

    assert_that!(board.completion_percentage(), eq(25.0));
    assert_that!(Board::new(2, "empty", "").completion_percentage(), eq(0.0));
}

#[test]
fn given_assignments_and_tags_when_queried_then_filtered() {
    // Given
    let (mut board, ids) = board_with_tasks(3);
    {
        let mut task = board.task_mut(ids[0]).unwrap();
        task.set_assigned_user(Some(5), AUTHOR);
        task.add_tag("api");
    }
    board.task_mut(ids[2]).unwrap().add_tag("api");

    // Then
    let by_user: Vec<u32> = board.tasks_by_user(5).iter().map(|t| t.id()).collect();
    let by_tag: Vec<u32> = board.tasks_by_tag("api").iter().map(|t| t.id()).collect();
    assert_eq!(by_user, vec![ids[0]]);
    assert_eq!(by_tag, vec![ids[0], ids[2]]);
}

#[test]
fn given_due_dates_when_overdue_tasks_then_terminal_excluded() {
    // Given
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    let (mut board, ids) = board_with_tasks(3);
    for &id in &ids {
        board.task_mut(id).unwrap().set_due_date(Some(now - Duration::days(2)));
    }
    board.move_task(ids[1], DONE, AUTHOR);

    // When
    let overdue: Vec<u32> = board.overdue_tasks(now).iter().map(|t| t.id()).collect();

    // Then
    assert_eq!(overdue, vec![ids[0], ids[2]]);
}

// =========================================================================
// Versions
// =========================================================================

#[test]
fn given_history_when_version_restored_then_fields_and_column_roll_back() {
    // Given
    let (mut board, ids) = board_with_tasks(1);
    let id = ids[0];
    board.task_mut(id).unwrap().set_title("renamed", AUTHOR);
    board.move_task(id, IN_PROGRESS, AUTHOR);
    board.task_mut(id).unwrap().set_title("final", AUTHOR);

    // When: snapshot 0 is the rename, still in the initial state
    let restored = board.restore_task_version(id, 0, "bob");

    // Then
    assert!(restored);
    let task = board.task(id).unwrap();
    assert_that!(task.title(), eq("renamed"));
    assert_that!(task.state(), eq(PENDING));
    assert_that!(task.history().len(), eq(3));
    let last = task.activity_log().entries().back().unwrap();
    assert_that!(last.action_type(), eq(&ActionType::Restored));
    assert_that!(last.user_name(), eq("bob"));
    assert_eq!(ids_in(&board, PENDING), vec![id]);
    assert!(ids_in(&board, IN_PROGRESS).is_empty());
}

#[test]
fn given_missing_version_when_restored_then_rejected() {
    let (mut board, ids) = board_with_tasks(1);

    assert!(!board.restore_task_version(ids[0], 0, AUTHOR));
    assert!(!board.restore_task_version(99, 0, AUTHOR));
}

#[test]
fn given_board_when_displayed_then_lists_columns() {
    let (mut board, ids) = board_with_tasks(2);
    board.move_task(ids[0], DONE, AUTHOR);

    let rendered = board.to_string();

    assert!(rendered.starts_with("Board[ID: 1, Name: Sprint]"));
    assert!(rendered.contains("Pendiente: 1 tasks"));
    assert!(rendered.contains("Completion: 50.0%"));
}
