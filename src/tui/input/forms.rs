use std::io;

use crate::ops::donation_ops::DonationError;
use crate::ops::session_ops::{LoginError, LoginOutcome};
use crate::parse::parse_weight;
use crate::tui::app::App;
use crate::tui::keys::KeySource;
use crate::tui::render::{self, forms::*};
use crate::tui::surface::Surface;

pub const DONATION_SAVED: &str = "Su donación ha sido registrada.";
pub const DATABASE_FULL: &str = "Base de datos llena.";
pub const EMPTY_CONTROL_NUMBER: &str = "El número de control no puede estar vacío.";

/// Greeting shown once a login went through
pub fn login_message(outcome: &LoginOutcome) -> String {
    match outcome.rejected {
        Some(_) => format!(
            "¡Hola, {}! Base de datos llena: no se guardó el usuario.",
            outcome.display_name
        ),
        None => format!("¡Hola, {}!", outcome.display_name),
    }
}

/// Capture control number then name, log in, show the result and wait for
/// a key before returning to the main menu.
pub fn run_login(
    app: &mut App,
    surface: &mut dyn Surface,
    keys: &mut dyn KeySource,
) -> io::Result<()> {
    render::render(surface, app);
    let layout = LoginLayout::new(surface.size());

    let control_number = keys.read_line(surface, layout.control_field())?;
    let name = keys.read_line(surface, layout.name_field())?;

    let message = match app.login(&control_number, &name) {
        Ok(outcome) => login_message(&outcome),
        Err(LoginError::EmptyControlNumber) => EMPTY_CONTROL_NUMBER.to_string(),
    };
    draw_message(surface, layout.message_row(), layout.left(), &message);
    draw_dismiss_hint(surface, layout.message_row() + 1, layout.left());
    surface.present()?;

    keys.read_key()?;
    app.router.finish();
    Ok(())
}

/// Capture the three weights and register the donation. Without a session
/// only the warning is shown and nothing is captured.
pub fn run_donation_form(
    app: &mut App,
    surface: &mut dyn Surface,
    keys: &mut dyn KeySource,
) -> io::Result<()> {
    render::render(surface, app);

    if app.is_authenticated() {
        let layout = DonationLayout::new(surface.size());
        let mut weights = [0u32; 3];
        for (weight, field) in weights.iter_mut().zip(layout.weight_fields()) {
            *weight = parse_weight(&keys.read_line(surface, field)?);
        }
        let [paper, plastic, aluminum] = weights;

        let message = match app.register_donation(paper, plastic, aluminum) {
            Ok(()) => DONATION_SAVED,
            Err(DonationError::Capacity(_)) => DATABASE_FULL,
            Err(DonationError::NotAuthenticated) => LOGIN_REQUIRED,
        };
        draw_message(surface, layout.message_row(), layout.left(), message);
        draw_dismiss_hint(surface, layout.message_row() + 1, layout.left());
    }
    surface.present()?;

    keys.read_key()?;
    app.router.finish();
    Ok(())
}
