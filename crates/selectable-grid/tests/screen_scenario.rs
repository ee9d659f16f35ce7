//! End-to-end walk through the alphabet screen.

use selectable_grid::prelude::*;

fn row(letter: char) -> usize {
    (letter as u8 - b'A') as usize
}

fn tray(model: &SelectionModel<String>) -> String {
    model.selected_items().concat()
}

#[test]
fn alphabet_screen_walkthrough() {
    let mut model = SelectionModel::from_config(&GridConfig::default()).unwrap();

    for letter in "ABCDEF".chars() {
        assert!(model.is_selectable(row(letter)));
        assert!(model.toggle(row(letter)).changed());
    }
    assert_eq!(tray(&model), "ABCDEF");
    assert_eq!(model.fill_state(), FillState::Full);
    assert!(!model.is_selectable(row('G')));

    assert_eq!(model.toggle(row('A')), Toggled::Deselected(0));
    assert_eq!(tray(&model), "BCDEF");
    assert!(model.is_selectable(row('G')));

    assert!(model.reorder(0, 2));
    assert_eq!(tray(&model), "CDBEF");

    let badges: Vec<Option<usize>> = "ABCDEF"
        .chars()
        .map(|letter| model.order_of(&GridIndex::catalog(row(letter))))
        .collect();
    assert_eq!(badges, vec![None, Some(2), Some(0), Some(1), Some(3), Some(4)]);

    assert_eq!(model.clear(), 5);
    assert!((0..26).all(|r| model.is_selectable(r)));
    assert!((0..6).all(|r| model.title(&GridIndex::tray(r)).is_empty()));
}

#[test]
fn presenter_gesture_sequence() {
    let mut presenter = GridPresenter::new(GridConfig::new().with_max_size(3)).unwrap();

    for letter in "XYZ".chars() {
        presenter.tap(GridIndex::catalog(row(letter)));
    }
    assert!(matches!(
        presenter.tap(GridIndex::catalog(row('A'))),
        TapOutcome::Refused(_)
    ));

    presenter.begin_drag(GridIndex::tray(2));
    assert!(presenter.drop_at(Some(GridIndex::tray(0))));
    assert_eq!(tray(presenter.model()), "ZXY");
    assert_eq!(presenter.cell(GridIndex::catalog(row('Z'))).badge_text().as_deref(), Some("1"));

    presenter.clear();
    assert!(presenter.model().is_empty());
    assert!(matches!(
        presenter.tap(GridIndex::catalog(row('A'))),
        TapOutcome::Toggled(Toggled::Selected(0))
    ));
}

#[test]
fn custom_items_from_toml() {
    let config = GridConfig::from_toml_str(
        r#"
        max_size = 2
        items = ["red", "green", "blue", "green"]
        "#,
    )
    .unwrap();
    let mut model = SelectionModel::from_config(&config).unwrap();

    assert_eq!(model.item_count(Section::Catalog), 3);
    assert_eq!(model.item_count(Section::Tray), 2);
    model.toggle(2);
    assert_eq!(model.title(&GridIndex::tray(0)), "blue");
}
