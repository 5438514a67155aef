use crate::io::assets::Asset;
use crate::parse::TextLines;
use crate::tui::app::App;
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;
use crate::util::unicode::centered_col;

const LOGO_ROW: u16 = 1;
const LOGO_COL: u16 = 2;
const LOGO_MAX_LINES: usize = 5;
const BANNER_ROW: u16 = 3;
const BANNER_COL: u16 = LOGO_COL + 25;
const NAVBAR_RULE_ROW: u16 = 6;
const HOME_BUTTON: &str = " Inicio ";

pub const FOOTER_TEXT: &str = "Recicla 2025. Cada kilo cuenta.";

/// Logo, banner, and the home button over a horizontal rule
pub fn render_navbar(surface: &mut dyn Surface, app: &App) {
    let (_, cols) = surface.size();

    let logo = TextLines::new(app.assets.get(Asset::Logo));
    for (i, line) in logo.iter().take(LOGO_MAX_LINES).enumerate() {
        surface.draw_text(LOGO_ROW + i as u16, LOGO_COL, line);
    }

    let banner = TextLines::new(app.assets.get(Asset::Banner))
        .iter()
        .next()
        .unwrap_or_default();
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(BANNER_ROW, BANNER_COL, banner);
    surface.clear_emphasis();

    let width = HOME_BUTTON.chars().count() as u16;
    let btn_col = cols.saturating_sub(width + 4);
    surface.draw_box((2, btn_col), (4, btn_col + width + 1));
    surface.set_emphasis(Emphasis::Button);
    surface.draw_text(3, btn_col + 1, HOME_BUTTON);
    surface.clear_emphasis();

    surface.draw_hline(NAVBAR_RULE_ROW, 0, cols);
}

/// Rule, credit line, and the key hints for the menus
pub fn render_footer(surface: &mut dyn Surface, app: &App) {
    let (rows, cols) = surface.size();
    if rows < 3 {
        return;
    }
    surface.draw_hline(rows - 3, 0, cols);
    surface.draw_text(rows - 2, centered_col(cols, FOOTER_TEXT), FOOTER_TEXT);

    if app.show_key_hints && app.router.state().is_menu() {
        let hints = "↑/k ↓/j mover · Enter elegir · q/Esc salir";
        surface.set_emphasis(Emphasis::Dim);
        surface.draw_text(rows - 1, centered_col(cols, hints), hints);
        surface.clear_emphasis();
    }
}
