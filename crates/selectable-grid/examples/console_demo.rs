//! Drives the alphabet screen from the console and prints the grid after
//! each gesture.
//!
//! Run with `RUST_LOG=selectable_grid=debug` to see the model's logging.
//! An optional argument names a TOML configuration file.

use selectable_grid::prelude::*;

fn render(presenter: &GridPresenter) {
    let tray: Vec<String> = (0..presenter.item_count(Section::Tray))
        .map(|row| {
            let cell = presenter.cell(GridIndex::tray(row));
            if cell.is_blank() { "_".to_string() } else { cell.title }
        })
        .collect();
    println!("tray:    [{}]", tray.join(" "));

    let catalog: Vec<String> = (0..presenter.item_count(Section::Catalog))
        .map(|row| {
            let cell = presenter.cell(GridIndex::catalog(row));
            match cell.badge_text() {
                Some(badge) => format!("{}({})", cell.title, badge),
                None => cell.title,
            }
        })
        .collect();
    println!("catalog: {}", catalog.join(" "));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GridConfig::load(path)?,
        None => GridConfig::default(),
    };
    let mut presenter = GridPresenter::new(config)?;

    presenter.notice.connect(|message| println!("notice:  {message}"));
    presenter.scroll.connect(|target| println!("scroll:  {target:?}"));

    let taps = presenter.item_count(Section::Tray) + 1;
    for row in 0..taps {
        presenter.tap(GridIndex::catalog(row));
    }
    render(&presenter);

    presenter.tap(GridIndex::catalog(0));
    render(&presenter);

    if presenter.begin_drag(GridIndex::tray(0)).is_some() {
        presenter.drop_at(Some(GridIndex::tray(2)));
    }
    render(&presenter);

    presenter.clear();
    render(&presenter);
    Ok(())
}
