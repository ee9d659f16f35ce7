//! Property tests for the selection invariants.

use std::collections::HashSet;

use proptest::prelude::*;
use selectable_grid::model::{GridIndex, SelectionModel, Toggled};

const UNIVERSE: usize = 26;

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    Reorder(usize, usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..UNIVERSE + 2).prop_map(Op::Toggle),
        3 => (0..10usize, 0..10usize).prop_map(|(from, to)| Op::Reorder(from, to)),
        1 => Just(Op::Clear),
    ]
}

fn apply(model: &mut SelectionModel<usize>, op: &Op) {
    match *op {
        Op::Toggle(row) => {
            model.toggle(row);
        }
        Op::Reorder(from, to) => {
            model.reorder(from, to);
        }
        Op::Clear => {
            model.clear();
        }
    }
}

fn assert_invariants(model: &SelectionModel<usize>) {
    let selected = model.selected_items();
    assert!(selected.len() <= model.max_size());

    let unique: HashSet<_> = selected.iter().collect();
    assert_eq!(unique.len(), selected.len());

    for row in 0..UNIVERSE {
        let expected = selected.iter().position(|&item| item == row);
        assert_eq!(model.order_of(&GridIndex::catalog(row)), expected);
    }
}

proptest! {
    #[test]
    fn selection_stays_bounded_and_indexed(
        max_size in 1..8usize,
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut model = SelectionModel::new(0..UNIVERSE, max_size);
        for op in &ops {
            apply(&mut model, op);
            assert_invariants(&model);
        }
    }

    #[test]
    fn toggling_an_unselected_row_twice_restores_selection(
        ops in prop::collection::vec(op(), 0..32),
        row in 0..UNIVERSE,
    ) {
        let mut model = SelectionModel::new(0..UNIVERSE, 6);
        for op in &ops {
            apply(&mut model, op);
        }
        prop_assume!(!model.is_selected(&row));
        let before = model.selected_items().to_vec();

        let first = model.toggle(row);
        let second = model.toggle(row);
        if first == Toggled::Rejected {
            prop_assert_eq!(second, Toggled::Rejected);
        } else {
            prop_assert!(matches!(first, Toggled::Selected(_)));
            prop_assert!(matches!(second, Toggled::Deselected(_)));
        }
        prop_assert_eq!(model.selected_items(), before.as_slice());
    }

    #[test]
    fn reorder_only_permutes(
        ops in prop::collection::vec(op(), 0..32),
        from in 0..8usize,
        to in 0..8usize,
    ) {
        let mut model = SelectionModel::new(0..UNIVERSE, 6);
        for op in &ops {
            apply(&mut model, op);
        }
        let mut before = model.selected_items().to_vec();

        model.reorder(from, to);

        let mut after = model.selected_items().to_vec();
        prop_assert_eq!(after.len(), before.len());
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn clear_makes_every_row_selectable(ops in prop::collection::vec(op(), 0..32)) {
        let mut model = SelectionModel::new(0..UNIVERSE, 6);
        for op in &ops {
            apply(&mut model, op);
        }

        model.clear();
        prop_assert_eq!(model.selected_count(), 0);
        prop_assert!((0..UNIVERSE).all(|row| model.is_selectable(row)));
    }
}
