use crate::tests::{AUTHOR, DONE, PENDING};
use crate::{Board, Project, User};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

fn fill(project: &mut Project, board_id: u32, titles: &[&str], done: usize) {
    let board = project.board_mut(board_id).unwrap();
    for (i, title) in titles.iter().enumerate() {
        let id = board.create_task(title, "", PENDING, AUTHOR);
        if i < done {
            board.move_task(id, DONE, AUTHOR);
        }
    }
}

// =========================================================================
// Boards and users
// =========================================================================

#[test]
fn given_project_when_boards_and_users_created_then_ids_start_at_one() {
    let mut project = Project::new(1, "Apollo", "");

    assert_that!(project.create_board("Sprint 1", ""), eq(1));
    assert_that!(project.create_board("Sprint 2", ""), eq(2));
    assert_that!(project.create_user("Ana", "ana@example.com", ""), eq(1));
    assert_that!(project.board_count(), eq(2));
    assert_that!(project.user_count(), eq(1));
}

#[test]
fn given_board_when_removed_then_gone() {
    let mut project = Project::new(1, "Apollo", "");
    let id = project.create_board("Sprint", "");

    assert_that!(project.remove_board(id).map(|b| b.id()), some(eq(id)));
    assert_that!(project.board(id).map(Board::id), none());
    assert_that!(project.remove_board(id).map(|b| b.id()), none());
}

#[test]
fn given_board_with_taken_id_when_added_then_rejected() {
    let mut project = Project::new(1, "Apollo", "");
    project.create_board("Sprint", "");

    assert!(!project.add_board(Board::new(1, "dup", "")));
    assert!(project.add_board(Board::new(7, "loaded", "")));
    assert_that!(project.create_board("next", ""), eq(8));
}

#[test]
fn given_users_when_looked_up_then_by_id_and_email() {
    // Given
    let mut project = Project::new(1, "Apollo", "");
    let ana = project.create_user("Ana", "ana@example.com", "lead");
    project.add_user(User::new(10, "Bo", "bo@example.com", ""));

    // Then
    assert_that!(project.user(ana).map(|u| u.name()), some(eq("Ana")));
    assert_that!(project.user_by_email("bo@example.com").map(|u| u.id()), some(eq(10)));
    assert_that!(project.create_user("Cy", "cy@example.com", ""), eq(11));
    assert_that!(project.remove_user(ana).map(|u| u.id()), some(eq(ana)));
    assert_that!(project.user(ana).map(|u| u.id()), none());
}

#[test]
fn given_board_and_user_with_highest_id_when_added_then_creation_continues() {
    // Given
    let mut project = Project::new(1, "Apollo", "");

    // When
    let added = project.add_board(Board::new(u32::MAX, "loaded", ""));
    project.add_user(User::new(u32::MAX, "Max", "max@example.com", ""));

    // Then
    assert!(added);
    assert_that!(project.create_board("next", ""), eq(1));
    assert_that!(project.create_user("Ana", "ana@example.com", ""), eq(1));
    assert_that!(project.create_user("Bo", "bo@example.com", ""), eq(2));
    assert_that!(project.board_count(), eq(2));
    assert_that!(project.user_count(), eq(3));
}

// =========================================================================
// Search
// =========================================================================

#[test]
fn given_two_boards_when_searching_by_title_then_board_order_and_case_sensitive() {
    // Given
    let mut project = Project::new(1, "Apollo", "");
    let first = project.create_board("A", "");
    let second = project.create_board("B", "");
    fill(&mut project, first, &["Fix login", "Write docs"], 0);
    fill(&mut project, second, &["fix logout", "Fix signup"], 0);

    // When
    let titles: Vec<&str> = project
        .find_tasks_by_title("Fix")
        .iter()
        .map(|t| t.title())
        .collect();

    // Then
    assert_eq!(titles, vec!["Fix login", "Fix signup"]);
}

#[test]
fn given_same_task_id_on_two_boards_when_found_by_id_then_first_board_wins() {
    let mut project = Project::new(1, "Apollo", "");
    let first = project.create_board("A", "");
    let second = project.create_board("B", "");
    fill(&mut project, first, &["from A"], 0);
    fill(&mut project, second, &["from B"], 0);

    assert_that!(project.find_task_by_id(1).map(|t| t.title()), some(eq("from A")));
    assert_that!(project.find_task_by_id(5).map(|t| t.id()), none());
}

#[test]
fn given_assigned_tasks_when_found_by_user_then_across_boards() {
    let mut project = Project::new(1, "Apollo", "");
    let first = project.create_board("A", "");
    let second = project.create_board("B", "");
    fill(&mut project, first, &["a1", "a2"], 0);
    fill(&mut project, second, &["b1"], 0);
    for board_id in [first, second] {
        let board = project.board_mut(board_id).unwrap();
        board.task_mut(1).unwrap().set_assigned_user(Some(3), AUTHOR);
    }

    let titles: Vec<&str> = project
        .find_tasks_by_user(3)
        .iter()
        .map(|t| t.title())
        .collect();

    assert_eq!(titles, vec!["a1", "b1"]);
}

// =========================================================================
// Statistics
// =========================================================================

#[test]
fn given_full_and_empty_boards_when_overall_completion_then_mean_of_boards() {
    // Given
    let mut project = Project::new(1, "Apollo", "");
    let finished = project.create_board("A", "");
    let untouched = project.create_board("B", "");
    fill(&mut project, finished, &["a", "b"], 2);
    fill(&mut project, untouched, &["c", "d", "e", "f", "g"], 0);

    // Then
    assert_that!(project.overall_completion_percentage(), eq(50.0));
    assert_that!(project.total_task_count(), eq(7));
}

#[test]
fn given_no_boards_when_overall_completion_then_zero() {
    assert_that!(Project::new(1, "Apollo", "").overall_completion_percentage(), eq(0.0));
}

#[test]
fn given_data_when_cleared_then_counters_restart() {
    let mut project = Project::new(1, "Apollo", "");
    project.create_board("A", "");
    project.create_user("Ana", "ana@example.com", "");

    project.clear_all_data();

    assert_that!(project.board_count(), eq(0));
    assert_that!(project.user_count(), eq(0));
    assert_that!(project.create_board("again", ""), eq(1));
    assert_that!(project.create_user("Bo", "bo@example.com", ""), eq(1));
}

#[test]
fn given_project_when_displayed_then_summarises_counts() {
    let mut project = Project::new(4, "Apollo", "");
    let board = project.create_board("A", "");
    fill(&mut project, board, &["a", "b"], 1);

    let rendered = project.to_string();

    assert!(rendered.starts_with("Project[ID: 4, Name: Apollo]"));
    assert!(rendered.contains("Total Tasks: 2"));
    assert!(rendered.contains("Completion: 50.0%"));
}
