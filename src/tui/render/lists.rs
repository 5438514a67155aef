use crate::model::{Donation, User};
use crate::tui::app::App;
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;
use crate::util::unicode::truncate_to_width;

use super::PRESS_ANY_KEY;

const TITLE_ROW: u16 = 8;
const HEADER_ROW: u16 = TITLE_ROW + 2;
const FIRST_ROW: u16 = HEADER_ROW + 2;

const USER_LIST_WIDTH: u16 = 60;
const DONATION_LIST_WIDTH: u16 = 70;

pub const USER_HEADER: &str = "No. Control         | Nombre";
pub const DONATION_HEADER: &str =
    "Usuario (No. Control) | Papel (kg) | Plástico (kg) | Aluminio (kg)";
pub const NO_USERS: &str = "No hay usuarios registrados.";
pub const NO_DONATIONS: &str = "No hay donaciones registradas.";

/// One row of the user table
pub fn user_row(user: &User) -> String {
    format!("{:<20}| {}", user.control_number, user.name)
}

/// One row of the donation table, columns aligned under the header
pub fn donation_row(donation: &Donation) -> String {
    format!(
        "{:<21} | {:<10} | {:<13} | {}",
        donation.owner_control_number, donation.paper, donation.plastic, donation.aluminum
    )
}

pub fn render_user_list(surface: &mut dyn Surface, app: &App) {
    let rows: Vec<String> = app.store.list_users().map(user_row).collect();
    render_table(
        surface,
        Table {
            title: "Usuarios registrados",
            width: USER_LIST_WIDTH,
            header: USER_HEADER,
            empty: NO_USERS,
        },
        &rows,
    );
}

pub fn render_donation_list(surface: &mut dyn Surface, app: &App) {
    let rows: Vec<String> = app.store.list_donations().map(donation_row).collect();
    let total: u64 = app.store.list_donations().map(Donation::total).sum();
    let title = format!("Lista de donaciones ({} kg en total)", total);
    render_table(
        surface,
        Table {
            title: &title,
            width: DONATION_LIST_WIDTH,
            header: DONATION_HEADER,
            empty: NO_DONATIONS,
        },
        &rows,
    );
}

struct Table<'a> {
    title: &'a str,
    width: u16,
    header: &'a str,
    empty: &'a str,
}

/// Rows that fit between the header and the hint line. When there are more,
/// the last slot reports how many were left out.
fn render_table(surface: &mut dyn Surface, table: Table<'_>, rows: &[String]) {
    let (screen_rows, cols) = surface.size();
    let left = cols.saturating_sub(table.width) / 2;
    let hint_row = screen_rows.saturating_sub(5);
    let width = table.width as usize;

    surface.draw_box(
        (TITLE_ROW - 1, left.saturating_sub(2)),
        (screen_rows.saturating_sub(4), left + table.width + 2),
    );
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(TITLE_ROW, left, table.title);
    surface.clear_emphasis();

    surface.draw_text(HEADER_ROW, left, &truncate_to_width(table.header, width));
    surface.draw_hline(HEADER_ROW + 1, left, table.width);

    let capacity = hint_row.saturating_sub(FIRST_ROW) as usize;
    if rows.is_empty() {
        surface.draw_text(FIRST_ROW, left, table.empty);
    } else if rows.len() <= capacity {
        for (i, row) in rows.iter().enumerate() {
            surface.draw_text(FIRST_ROW + i as u16, left, &truncate_to_width(row, width));
        }
    } else if capacity > 0 {
        let shown = capacity - 1;
        for (i, row) in rows.iter().take(shown).enumerate() {
            surface.draw_text(FIRST_ROW + i as u16, left, &truncate_to_width(row, width));
        }
        let more = format!("... y {} más", rows.len() - shown);
        surface.set_emphasis(Emphasis::Dim);
        surface.draw_text(FIRST_ROW + shown as u16, left, &more);
        surface.clear_emphasis();
    }

    surface.draw_text(hint_row, left, PRESS_ANY_KEY);
}
