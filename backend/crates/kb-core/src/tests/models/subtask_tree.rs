use crate::SubtaskTree;

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

/// root
/// ├── a
/// │   ├── a1
/// │   └── a2
/// └── b
fn sample_tree() -> (SubtaskTree, [u32; 5]) {
    let mut tree = SubtaskTree::new();
    let root = tree.add_root("root", "");
    let a = tree.add_child(root, "a", "").unwrap();
    let a1 = tree.add_child(a, "a1", "").unwrap();
    let a2 = tree.add_child(a, "a2", "").unwrap();
    let b = tree.add_child(root, "b", "").unwrap();
    (tree, [root, a, a1, a2, b])
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn given_nested_tree_when_two_nodes_completed_then_counts_and_percentage_match() {
    // Given
    let (mut tree, [root, _, a1, _, b]) = sample_tree();

    // When
    tree.set_completed(a1, true);
    tree.set_completed(b, true);

    // Then
    assert_that!(tree.count_total(root), eq(5));
    assert_that!(tree.count_completed(root), eq(2));
    assert_that!(tree.completion_percentage(root), eq(40.0));
}

#[test]
fn given_single_node_when_counted_then_node_counts_itself() {
    let mut tree = SubtaskTree::new();
    let root = tree.add_root("", "");

    assert_that!(tree.count_total(root), eq(1));
    assert_that!(tree.completion_percentage(root), eq(0.0));

    tree.set_completed(root, true);
    assert_that!(tree.completion_percentage(root), eq(100.0));
}

#[test]
fn given_missing_id_when_counted_then_zero() {
    let (tree, _) = sample_tree();

    assert_that!(tree.count_total(999), eq(0));
    assert_that!(tree.completion_percentage(999), eq(0.0));
}

#[test]
fn given_empty_tree_when_overall_percentage_then_zero() {
    let tree = SubtaskTree::new();

    assert_that!(tree.overall_completion_percentage(), eq(0.0));
    assert!(tree.is_empty());
}

#[test]
fn given_two_roots_when_overall_percentage_then_pools_all_nodes() {
    // Given
    let (mut tree, [_, _, a1, _, _]) = sample_tree();
    let other = tree.add_root("other", "");
    tree.set_completed(a1, true);
    tree.set_completed(other, true);

    // Then: 2 of 6 nodes
    let expected = 200.0 / 6.0;
    assert!((tree.overall_completion_percentage() - expected).abs() < 1e-9);
}

// =========================================================================
// Lookup
// =========================================================================

#[test]
fn given_nested_tree_when_find_in_then_searches_subtree_only() {
    let (tree, [root, a, a1, _, b]) = sample_tree();

    assert_that!(tree.find_in(root, a1).map(|s| s.title()), some(eq("a1")));
    assert_that!(tree.find_in(root, root).map(|s| s.title()), some(eq("root")));
    assert_that!(tree.find_in(a, b), none());
}

#[test]
fn given_missing_parent_when_add_child_then_none() {
    let mut tree = SubtaskTree::new();

    assert_that!(tree.add_child(42, "orphan", ""), none());
    assert!(tree.is_empty());
}

// =========================================================================
// Removal
// =========================================================================

#[test]
fn given_nested_tree_when_remove_child_then_subtree_is_dropped() {
    // Given
    let (mut tree, [root, a, a1, a2, _]) = sample_tree();

    // When
    let removed = tree.remove_child(root, a);

    // Then
    assert_that!(removed.map(|s| s.id()), some(eq(a)));
    assert_that!(tree.len(), eq(2));
    assert!(!tree.contains(a1));
    assert!(!tree.contains(a2));
    assert_that!(tree.count_total(root), eq(2));
}

#[test]
fn given_grandchild_when_remove_child_from_root_then_not_removed() {
    let (mut tree, [root, _, a1, _, _]) = sample_tree();

    assert_that!(tree.remove_child(root, a1), none());
    assert!(tree.contains(a1));
}

#[test]
fn given_root_when_remove_root_then_root_list_shrinks() {
    let (mut tree, [root, ..]) = sample_tree();
    let other = tree.add_root("other", "");

    assert_that!(tree.remove_root(root).map(|s| s.id()), some(eq(root)));
    assert_eq!(tree.roots(), &[other]);
    assert_that!(tree.len(), eq(1));
}

#[test]
fn given_subtask_when_edited_through_get_mut_then_changes_persist() {
    let (mut tree, [_, a, ..]) = sample_tree();

    let node = tree.get_mut(a).unwrap();
    node.set_title("renamed");
    node.set_description("details");

    let node = tree.get(a).unwrap();
    assert_that!(node.title(), eq("renamed"));
    assert_that!(node.description(), eq("details"));
}

#[test]
fn given_nested_tree_when_displayed_then_children_are_indented() {
    let (mut tree, [_, _, a1, _, _]) = sample_tree();
    tree.set_completed(a1, true);

    let rendered = tree.to_string();

    assert!(rendered.starts_with("[ ] root (1/5 completed)\n"));
    assert!(rendered.contains("\n    [X] a1\n"));
}
