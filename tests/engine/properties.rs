//! Property tests over random datasets and keyword choices.

use proptest::prelude::*;
use rusty_subsets::{row, CellValue, DeletionOutcome, Source, SubsetError, Table};

use crate::fixtures::{engine, ids, query};

const WORDS: [&str; 5] = ["red", "green", "blue", "round", "square"];

/// Rows keyed 1..=n, each described by a random pick of words.
fn dataset() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(0..WORDS.len(), 0..4), 1..30).prop_map(|descs| {
        Table::from_rows(
            descs
                .into_iter()
                .enumerate()
                .map(|(i, picks)| {
                    let text: Vec<&str> = picks.into_iter().map(|w| WORDS[w]).collect();
                    row([
                        ("id", CellValue::from(i as i64 + 1)),
                        ("descripcion", CellValue::from(text.join(" "))),
                    ])
                })
                .collect(),
        )
    })
}

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(WORDS.to_vec())
}

proptest! {
    #[test]
    fn duplicate_name_never_changes_store(data in dataset(), w1 in word(), w2 in word()) {
        let mut e = engine(data);
        e.create_filtered_subset(Source::Principal, &query(&[w1]), "s", None).unwrap();
        let before = e.subset("s").unwrap();
        let listing = e.list_subsets();

        let err = e.create_filtered_subset(Source::Principal, &query(&[w2]), "s", None).unwrap_err();
        prop_assert_eq!(err, SubsetError::DuplicateName("s".into()));
        prop_assert_eq!(e.subset("s").unwrap(), before);
        prop_assert_eq!(e.list_subsets(), listing);
    }

    #[test]
    fn deletion_then_undo_round_trips(data in dataset(), w in word()) {
        let mut e = engine(data);
        e.create_filtered_subset(Source::Principal, &query(&[w]), "s", None).unwrap();
        let before = e.principal();
        let history = e.history_len();

        let out = e.apply_deletion("s", true).unwrap();
        if out.is_noop() {
            prop_assert_eq!(e.history_len(), history);
            prop_assert_eq!(e.principal(), before);
        } else {
            e.undo_last_deletion();
            prop_assert_eq!(e.principal(), before);
        }
    }

    #[test]
    fn reset_always_restores_original(data in dataset(), picks in prop::collection::vec(word(), 0..6)) {
        let mut e = engine(data);
        for (i, w) in picks.iter().enumerate() {
            let name = format!("s{i}");
            e.create_filtered_subset(Source::Latest, &query(&[*w]), &name, None).unwrap();
            e.apply_deletion(&name, i % 2 == 0).unwrap();
        }

        e.reset_all();
        prop_assert_eq!(&e.principal(), e.original());
        prop_assert_eq!(e.list_subsets().len(), 1);
        prop_assert_eq!(e.history_len(), 0);
    }

    #[test]
    fn cascade_subtracts_child_from_principal_and_parent(
        data in dataset(),
        wa in word(),
        wb in word(),
        propagate in any::<bool>(),
    ) {
        let mut e = engine(data);
        let p = ids(&e.principal());
        let a = ids(&e.create_filtered_subset(Source::Principal, &query(&[wa]), "A", None).unwrap().rows);
        let b = ids(&e.create_subset_from_subset("A", &query(&[wb]), "B").unwrap().rows);

        let out = e.apply_deletion("B", propagate).unwrap();
        prop_assert_eq!(out.is_noop(), b.is_empty());

        let minus = |xs: &[i64]| xs.iter().copied().filter(|x| !b.contains(x)).collect::<Vec<_>>();
        prop_assert_eq!(ids(&e.principal()), minus(&p));
        let expected_a = if propagate { minus(&a) } else { a.clone() };
        prop_assert_eq!(ids(&e.subset("A").unwrap()), expected_a);

        if let DeletionOutcome::Applied(report) = out {
            prop_assert_eq!(report.parent.is_some(), propagate);
        }
    }

    #[test]
    fn and_is_a_subset_of_or(data in dataset(), w1 in word(), w2 in word()) {
        use rusty_subsets::MatchMode;
        let mut e = engine(data);
        let or = ids(&e.create_filtered_subset(Source::Principal, &query(&[w1, w2]), "or", None).unwrap().rows);
        let and = ids(&e
            .create_filtered_subset(Source::Principal, &query(&[w1, w2]).mode(MatchMode::And), "and", None)
            .unwrap()
            .rows);
        prop_assert!(and.iter().all(|id| or.contains(id)));
    }
}
