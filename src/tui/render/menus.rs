use crate::tui::app::App;
use crate::tui::router::{InfoTopic, MenuItem};
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;
use crate::util::unicode::centered_col;

const TITLE_ROW: u16 = 8;
const FIRST_ITEM_ROW: u16 = 10;

pub const MAIN_MENU_TITLE: &str = "Menú principal";
pub const INFO_MENU_TITLE: &str = "Información sobre reciclaje";

/// Only the items visible for the current session are drawn, packed
/// top-down.
pub fn render_main_menu(surface: &mut dyn Surface, app: &App) {
    let authenticated = app.is_authenticated();
    let cursor = app.router.menu_cursor(authenticated);
    let items: Vec<(&str, bool)> = MenuItem::visible(authenticated)
        .into_iter()
        .map(|item| (item.label(), item == cursor))
        .collect();
    render_menu(surface, MAIN_MENU_TITLE, &items);
}

pub fn render_info_menu(surface: &mut dyn Surface, app: &App) {
    let cursor = app.router.info_cursor();
    let items: Vec<(&str, bool)> = InfoTopic::ALL
        .into_iter()
        .map(|topic| (topic.label(), topic == cursor))
        .collect();
    render_menu(surface, INFO_MENU_TITLE, &items);
}

fn render_menu(surface: &mut dyn Surface, title: &str, items: &[(&str, bool)]) {
    let (_, cols) = surface.size();
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(TITLE_ROW, centered_col(cols, title), title);

    for (i, (label, highlighted)) in items.iter().enumerate() {
        let text = format!(" {} ", label);
        let row = FIRST_ITEM_ROW + i as u16 * 2;
        surface.set_emphasis(if *highlighted {
            Emphasis::Highlight
        } else {
            Emphasis::Button
        });
        surface.draw_text(row, centered_col(cols, &text), &text);
    }
    surface.clear_emphasis();
}
