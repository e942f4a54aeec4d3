use std::sync::Arc;

use anyhow::Result;
use mixtape::config::MixtapeConfig;
use mixtape::{
    Artwork, BasePresenter, BodyInputHandler, BodyView, DirectBodyPresenter, HeadlessBodyView,
    InMemoryListDataSource, LibraryItem, LibraryReadError, MenuItem, logging,
};

#[derive(Clone, Debug)]
struct Track {
    title: String,
    artist: String,
}

impl Track {
    fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

impl LibraryItem for Track {
    fn title(&self) -> Result<Option<String>, LibraryReadError> {
        Ok(Some(self.title.clone()))
    }

    fn subtitle(&self) -> Result<Option<String>, LibraryReadError> {
        Ok(Some(self.artist.clone()))
    }

    fn artwork(&self, _width: u32, _height: u32) -> Result<Option<Artwork>, LibraryReadError> {
        Ok(None)
    }
}

struct LogSelection;

impl BodyInputHandler<Track> for LogSelection {
    fn on_library_item_selected(&self, _view: &dyn BodyView<Track>, item: &Track) {
        tracing::info!(title = %item.title, "Play requested");
    }

    fn on_contextual_menu_item_selected(
        &self,
        _view: &dyn BodyView<Track>,
        item: &Track,
        menu_item: &MenuItem,
    ) {
        tracing::info!(title = %item.title, action = %menu_item.title, "Menu action requested");
    }
}

type DemoPresenter =
    DirectBodyPresenter<Track, InMemoryListDataSource<Track>, HeadlessBodyView<Track>>;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => MixtapeConfig::from_json_file(path)?,
        None => MixtapeConfig::default(),
    };
    let _guard = logging::init_logging(&config.logging)?;

    tracing::info!("=== Mixtape Demo Starting ===");

    let source = Arc::new(InMemoryListDataSource::with_items(vec![
        Track::new("Windowlicker", "Aphex Twin"),
        Track::new("Teardrop", "Massive Attack"),
    ]));
    let view = Arc::new(HeadlessBodyView::new("tracks"));

    let presenter = DemoPresenter::with_input_handler(Arc::new(LogSelection));
    presenter.set_view(Some(view.clone()));
    presenter.set_data_source(Some(source.clone()));

    source.push(Track::new("Roygbiv", "Boards of Canada"));
    source.move_item(2, 0)?;
    source.remove(1)?;
    source.refresh_with(|| {
        Ok(vec![
            Track::new("Avril 14th", "Aphex Twin"),
            Track::new("Angel", "Massive Attack"),
        ])
    })?;

    view.select_item(0);
    view.select_menu_item(1, &MenuItem::new(1, "Add to queue"));

    for item in view.displayed_items().unwrap_or_default() {
        println!("{} - {}", item.title, item.artist);
    }

    presenter.set_data_source(None);
    presenter.set_view(None);

    tracing::info!("Mixtape Demo shutting down");
    Ok(())
}
