//! Cascading deletion from principal and parent subsets.

use rusty_subsets::{DeletionOutcome, ParentCascade, Source, SubsetError, UndoOutcome};

use crate::fixtures::{engine, ids, query, ten_rows};

#[test]
fn child_deletion_propagates_to_parent() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    e.create_subset_from_subset("A", &query(&["y"]), "B").unwrap();

    let out = e.apply_deletion("B", true).unwrap();
    let DeletionOutcome::Applied(report) = out else {
        panic!("expected an applied deletion");
    };
    assert_eq!(report.removed_from_principal, 1);
    assert_eq!(report.principal_remaining, 9);
    assert_eq!(
        report.parent,
        Some(ParentCascade { parent: "A".into(), removed: 1, remaining: 2 })
    );

    assert_eq!(ids(&e.principal()), vec![1, 2, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(ids(&e.subset("A").unwrap()), vec![1, 5]);
    assert!(e.get("B").unwrap().applied);
}

#[test]
fn undo_restores_principal_but_not_parent() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    e.create_subset_from_subset("A", &query(&["y"]), "B").unwrap();
    e.apply_deletion("B", true).unwrap();

    assert_eq!(e.undo_last_deletion(), UndoOutcome::Restored { rows: 10 });
    assert_eq!(e.principal(), ten_rows());
    assert_eq!(ids(&e.subset("A").unwrap()), vec![1, 5]);
}

#[test]
fn no_propagation_leaves_parent_untouched() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    e.create_subset_from_subset("A", &query(&["y"]), "B").unwrap();

    let out = e.apply_deletion("B", false).unwrap();
    assert_eq!(out.removed_from_principal(), 1);
    assert!(matches!(out, DeletionOutcome::Applied(ref r) if r.parent.is_none()));
    assert_eq!(ids(&e.subset("A").unwrap()), vec![1, 3, 5]);
    assert_eq!(e.principal().len(), 9);
}

#[test]
fn cascade_stops_at_one_level() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    e.create_subset_from_subset("A", &query(&["y"]), "B").unwrap();
    e.create_subset_from_subset("B", &query(&["gamma"]), "C").unwrap();

    e.apply_deletion("C", true).unwrap();
    assert!(e.subset("B").unwrap().is_empty());
    assert_eq!(ids(&e.subset("A").unwrap()), vec![1, 3, 5]);
}

#[test]
fn empty_subset_is_a_no_op() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["nothing-matches"]), "E", None)
        .unwrap();

    let out = e.apply_deletion("E", true).unwrap();
    assert_eq!(out, DeletionOutcome::EmptySubset { subset: "E".into() });
    assert_eq!(out.removed_from_principal(), 0);
    assert_eq!(e.history_len(), 0);
    assert_eq!(e.principal(), ten_rows());
    assert!(!e.get("E").unwrap().applied);
}

#[test]
fn unknown_subset_is_not_found() {
    let mut e = engine(ten_rows());
    assert_eq!(
        e.apply_deletion("ghost", true).unwrap_err(),
        SubsetError::NotFound("ghost".into())
    );
    assert_eq!(
        e.apply_deletion("principal", true).unwrap_err(),
        SubsetError::NotFound("principal".into())
    );
    assert_eq!(e.history_len(), 0);
}

#[test]
fn latest_alias_can_be_applied() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    let out = e.apply_deletion("ultimo", true).unwrap();
    assert_eq!(out.removed_from_principal(), 3);
    assert!(e.get("A").unwrap().applied);
}

#[test]
fn sibling_deletions_stack_in_history() {
    let mut e = engine(ten_rows());
    e.create_filtered_subset(Source::Principal, &query(&["x"]), "A", None).unwrap();
    e.create_filtered_subset(Source::Principal, &query(&["beta"]), "B", None).unwrap();

    e.apply_deletion("A", true).unwrap();
    e.apply_deletion("B", true).unwrap();
    assert_eq!(e.principal().len(), 6);
    assert_eq!(e.history_len(), 2);

    e.undo_last_deletion();
    assert_eq!(e.principal().len(), 7);
    e.undo_last_deletion();
    assert_eq!(e.principal().len(), 10);
}
