use std::io;
use std::path::{Path, PathBuf};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::assets::AssetTexts;
use crate::io::config_io::{CONFIG_FILE, load_config};
use crate::io::store_io::{DATA_FILE, PersistenceError, data_dir, load_store, save_store};
use crate::model::{Session, Store};
use crate::ops::donation_ops::{self, DonationError};
use crate::ops::session_ops::{self, LoginError, LoginOutcome};

use super::input;
use super::keys::{CrosstermKeys, KeySource};
use super::render;
use super::router::{Router, ViewState};
use super::surface::{Surface, TerminalSurface};
use super::theme::Theme;

/// Everything the views read and mutate during a run
pub struct App {
    pub store: Store,
    pub session: Session,
    pub router: Router,
    pub assets: AssetTexts,
    /// Where the store is saved after every mutation
    pub data_path: PathBuf,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(store: Store, assets: AssetTexts, data_path: impl Into<PathBuf>) -> Self {
        App {
            store,
            session: Session::new(),
            router: Router::new(),
            assets,
            data_path: data_path.into(),
            show_key_hints: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn should_quit(&self) -> bool {
        self.router.is_quit()
    }

    /// Log in and persist the store if a user record was created
    pub fn login(&mut self, control_number: &str, name: &str) -> Result<LoginOutcome, LoginError> {
        let outcome = session_ops::login(
            &mut self.store,
            &mut self.session,
            control_number,
            name,
        )?;
        if outcome.is_new_user {
            let _ = self.save_store();
        }
        Ok(outcome)
    }

    /// Register a donation for the active user and persist the store
    pub fn register_donation(
        &mut self,
        paper: u32,
        plastic: u32,
        aluminum: u32,
    ) -> Result<(), DonationError> {
        donation_ops::register_donation(&mut self.store, &self.session, paper, plastic, aluminum)?;
        let _ = self.save_store();
        Ok(())
    }

    /// Failures are recorded in the recovery log by `save_store`; callers
    /// may ignore the result.
    pub fn save_store(&self) -> Result<(), PersistenceError> {
        save_store(&self.data_path, &self.store)
    }
}

/// Drive the app until the user quits. Menus and modals are rendered and
/// then block on a key; the two forms run their own field capture. The
/// store is saved once more on the way out.
pub fn run_with(
    app: &mut App,
    surface: &mut dyn Surface,
    keys: &mut dyn KeySource,
) -> io::Result<()> {
    while !app.should_quit() {
        match app.router.state() {
            ViewState::Login => input::forms::run_login(app, surface, keys)?,
            ViewState::DonationForm => input::forms::run_donation_form(app, surface, keys)?,
            _ => {
                render::render(surface, app);
                surface.present()?;
                let key = keys.read_key()?;
                input::handle_key(app, key);
            }
        }
    }
    let _ = app.save_store();
    Ok(())
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_path = Path::new(DATA_FILE);
    let config = load_config(Path::new(CONFIG_FILE), data_dir(data_path));
    let store = load_store(data_path, config.store);
    let assets = AssetTexts::load(Path::new(&config.assets.dir));
    let theme = Theme::from_config(&config.ui);

    let mut app = App::new(store, assets, data_path);
    app.show_key_hints = config.ui.show_key_hints;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let mut surface = TerminalSurface::new(terminal, theme)?;
    let mut keys = CrosstermKeys;
    let result = run_with(&mut app, &mut surface, &mut keys);

    // Restore terminal
    disable_raw_mode()?;
    let terminal = surface.terminal_mut();
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}
