pub mod chrome;
pub mod forms;
pub mod info_view;
pub mod lists;
pub mod menus;

#[cfg(test)]
pub mod test_helpers;

use super::app::App;
use super::router::{InfoTopic, ViewState};
use super::surface::Surface;

/// Main render function: chrome around the view of the current state
pub fn render(surface: &mut dyn Surface, app: &App) {
    surface.clear();
    chrome::render_navbar(surface, app);

    let state = app.router.state();
    match state {
        ViewState::MainMenu => menus::render_main_menu(surface, app),
        ViewState::InfoMenu => menus::render_info_menu(surface, app),
        ViewState::Login => forms::render_login_form(surface),
        ViewState::DonationForm => forms::render_donation_form(surface, app),
        ViewState::UserList => lists::render_user_list(surface, app),
        ViewState::DonationList => lists::render_donation_list(surface, app),
        ViewState::InfoComoReciclar | ViewState::InfoNoticias | ViewState::InfoCentros => {
            if let Some(topic) = InfoTopic::from_view_state(state) {
                info_view::render_info_view(surface, app, topic);
            }
        }
    }

    chrome::render_footer(surface, app);
}

/// Hint shown at the bottom of every modal
pub const PRESS_ANY_KEY: &str = "Presiona una tecla para volver.";
