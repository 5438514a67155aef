use std::path::{Path, PathBuf};

use crate::io::assets::AssetTexts;
use crate::io::store_io::DATA_FILE;
use crate::model::Store;
use crate::tui::app::App;
use crate::tui::render::render;
use crate::tui::router::{InfoTopic, MenuItem, Router, Trigger, ViewState};
use crate::tui::surface::Canvas;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// The asset directory shipped with the crate
pub fn fixture_assets_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// An App with an empty store saving into `dir` and the bundled assets.
pub fn app_in(dir: &Path) -> App {
    App::new(
        Store::default(),
        AssetTexts::load(&fixture_assets_dir()),
        dir.join(DATA_FILE),
    )
}

/// Render the whole screen into an in-memory canvas.
pub fn render_app(app: &App) -> Canvas {
    let mut canvas = Canvas::new(TERM_H, TERM_W, Theme::default());
    render(&mut canvas, app);
    canvas
}

/// Put the router in `state` by walking the transition table from the
/// main menu.
pub fn force_state(app: &mut App, state: ViewState) {
    let mut router = Router::new();
    let select = |router: &mut Router, item| router.fire(Trigger::Select(item));
    match state {
        ViewState::MainMenu => None,
        ViewState::Login => select(&mut router, MenuItem::Login),
        ViewState::DonationForm => select(&mut router, MenuItem::RegisterDonation),
        ViewState::UserList => select(&mut router, MenuItem::ListUsers),
        ViewState::DonationList => select(&mut router, MenuItem::ListDonations),
        ViewState::InfoMenu => select(&mut router, MenuItem::Info),
        other => {
            select(&mut router, MenuItem::Info);
            InfoTopic::from_view_state(other).and_then(|t| router.fire(Trigger::Pick(t)))
        }
    };
    assert_eq!(router.state(), state);
    app.router = router;
}
