use crate::model::{MAX_CONTROL_NUMBER_LEN, MAX_NAME_LEN};
use crate::tui::app::App;
use crate::tui::input::line::{Field, draw_field};
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;

use super::PRESS_ANY_KEY;

pub const WEIGHT_MAX_LEN: usize = 9;
pub const LOGIN_REQUIRED: &str = "Inicia sesión para registrar una donación.";

const LOGIN_WIDTH: u16 = 70;
const DONATION_WIDTH: u16 = 40;
const LABEL_WIDTH: u16 = 20;

/// Screen positions of the login form
#[derive(Debug, Clone, Copy)]
pub struct LoginLayout {
    top: u16,
    left: u16,
}

impl LoginLayout {
    pub fn new((rows, cols): (u16, u16)) -> Self {
        LoginLayout {
            top: (rows / 2).saturating_sub(3),
            left: cols.saturating_sub(LOGIN_WIDTH) / 2,
        }
    }

    pub fn control_field(&self) -> Field {
        Field::new(self.top + 2, self.left + LABEL_WIDTH, MAX_CONTROL_NUMBER_LEN)
    }

    pub fn name_field(&self) -> Field {
        Field::new(self.top + 4, self.left + LABEL_WIDTH, MAX_NAME_LEN)
    }

    pub fn message_row(&self) -> u16 {
        self.top + 6
    }

    pub fn left(&self) -> u16 {
        self.left
    }
}

/// Screen positions of the donation form
#[derive(Debug, Clone, Copy)]
pub struct DonationLayout {
    top: u16,
    left: u16,
}

impl DonationLayout {
    pub fn new((rows, cols): (u16, u16)) -> Self {
        DonationLayout {
            top: (rows / 2).saturating_sub(4),
            left: cols.saturating_sub(DONATION_WIDTH) / 2,
        }
    }

    /// Paper, plastic, and aluminum, in capture order
    pub fn weight_fields(&self) -> [Field; 3] {
        let col = self.left + LABEL_WIDTH;
        [
            Field::new(self.top + 2, col, WEIGHT_MAX_LEN),
            Field::new(self.top + 4, col, WEIGHT_MAX_LEN),
            Field::new(self.top + 6, col, WEIGHT_MAX_LEN),
        ]
    }

    pub fn message_row(&self) -> u16 {
        self.top + 8
    }

    pub fn left(&self) -> u16 {
        self.left
    }
}

/// Login box with empty fields, ready for capture
pub fn render_login_form(surface: &mut dyn Surface) {
    let layout = LoginLayout::new(surface.size());
    let (top, left) = (layout.top, layout.left);
    surface.draw_box(
        (top.saturating_sub(1), left.saturating_sub(2)),
        (layout.message_row() + 2, left + LOGIN_WIDTH),
    );
    draw_title(surface, top, left, "Inicio de sesión");

    let control = layout.control_field();
    let name = layout.name_field();
    surface.draw_text(control.row, left, "Número de control:");
    draw_field(surface, control, "");
    surface.draw_text(name.row, left, "Nombre:");
    draw_field(surface, name, "");
}

/// Donation box with empty fields, or a warning when nobody is logged in
pub fn render_donation_form(surface: &mut dyn Surface, app: &App) {
    let layout = DonationLayout::new(surface.size());
    let (top, left) = (layout.top, layout.left);
    surface.draw_box(
        (top.saturating_sub(1), left.saturating_sub(2)),
        (layout.message_row() + 2, left + DONATION_WIDTH + 2),
    );
    draw_title(surface, top, left, "Registrar donación");

    if !app.is_authenticated() {
        draw_message(surface, top + 2, left, LOGIN_REQUIRED);
        surface.draw_text(top + 4, left, PRESS_ANY_KEY);
        return;
    }

    let labels = ["Papel (kg):", "Plástico (kg):", "Aluminio (kg):"];
    for (label, field) in labels.into_iter().zip(layout.weight_fields()) {
        surface.draw_text(field.row, left, label);
        draw_field(surface, field, "");
    }
}

/// Result line after a form was submitted, followed by the dismiss hint
pub fn draw_message(surface: &mut dyn Surface, row: u16, left: u16, message: &str) {
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(row, left, message);
    surface.clear_emphasis();
}

pub fn draw_dismiss_hint(surface: &mut dyn Surface, row: u16, left: u16) {
    surface.set_emphasis(Emphasis::Dim);
    surface.draw_text(row, left, PRESS_ANY_KEY);
    surface.clear_emphasis();
}

fn draw_title(surface: &mut dyn Surface, row: u16, col: u16, title: &str) {
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(row, col, title);
    surface.clear_emphasis();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use crate::tui::router::ViewState;
    use crate::tui::theme::Theme;

    #[test]
    fn login_form_fields() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        force_state(&mut app, ViewState::Login);
        let canvas = render_app(&app);

        let layout = LoginLayout::new((TERM_H, TERM_W));
        let control = layout.control_field();
        assert_eq!(
            canvas.find("Número de control:"),
            Some((control.row, layout.left()))
        );
        let input_bg = Theme::default().input_bg;
        assert_eq!(canvas.cell(control.row, control.col).unwrap().bg, input_bg);
        let last = control.col + MAX_CONTROL_NUMBER_LEN as u16 - 1;
        assert_eq!(canvas.cell(control.row, last).unwrap().bg, input_bg);
        assert_ne!(canvas.cell(control.row, last + 1).unwrap().bg, input_bg);

        let name = layout.name_field();
        let last = name.col + MAX_NAME_LEN as u16 - 1;
        assert_eq!(canvas.cell(name.row, last).unwrap().bg, input_bg);
        // The name field stays inside the box
        assert_eq!(canvas.cell(name.row, last + 2).unwrap().symbol(), "│");
    }

    #[test]
    fn donation_form_when_logged_in() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        app.login("1", "Ana").unwrap();
        force_state(&mut app, ViewState::DonationForm);
        let canvas = render_app(&app);
        let layout = DonationLayout::new((TERM_H, TERM_W));
        let [paper, plastic, aluminum] = layout.weight_fields();
        assert_eq!(canvas.find("Papel (kg):").map(|(r, _)| r), Some(paper.row));
        assert_eq!(canvas.find("Plástico (kg):").map(|(r, _)| r), Some(plastic.row));
        assert_eq!(canvas.find("Aluminio (kg):").map(|(r, _)| r), Some(aluminum.row));
        assert!(canvas.find(LOGIN_REQUIRED).is_none());
    }

    #[test]
    fn donation_form_requires_login() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        force_state(&mut app, ViewState::DonationForm);
        let canvas = render_app(&app);
        assert!(canvas.find(LOGIN_REQUIRED).is_some());
        assert!(canvas.find("Papel (kg):").is_none());
        assert!(canvas.find(PRESS_ANY_KEY).is_some());
    }
}
