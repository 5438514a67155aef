use crate::parse::TextLines;
use crate::tui::app::App;
use crate::tui::router::InfoTopic;
use crate::tui::surface::Surface;
use crate::tui::theme::Emphasis;
use crate::util::unicode::truncate_to_width;

use super::PRESS_ANY_KEY;

const BOX_TOP: u16 = 8;
const BOX_WIDTH: u16 = 70;

/// Topic text in a bordered box. Lines past the box are dropped, long lines
/// are clipped.
pub fn render_info_view(surface: &mut dyn Surface, app: &App, topic: InfoTopic) {
    let (rows, cols) = surface.size();
    let left = cols.saturating_sub(BOX_WIDTH) / 2;
    let hint_row = rows.saturating_sub(5);

    surface.draw_box(
        (BOX_TOP - 1, left.saturating_sub(2)),
        (rows.saturating_sub(4), left + BOX_WIDTH + 2),
    );
    surface.set_emphasis(Emphasis::Title);
    surface.draw_text(BOX_TOP, left, topic.label());
    surface.clear_emphasis();

    let content = TextLines::new(app.assets.get(topic.asset()));
    let first = BOX_TOP + 2;
    for (row, line) in (first..hint_row).zip(content.iter()) {
        surface.draw_text(row, left, &truncate_to_width(line, BOX_WIDTH as usize));
    }

    surface.draw_text(hint_row, left, PRESS_ANY_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::assets::{AssetTexts, MISSING_ASSET_TEXT};
    use crate::tui::render::test_helpers::*;
    use crate::tui::router::ViewState;

    #[test]
    fn shows_topic_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        app.assets.como_reciclar = "Separa el papel.\nLava los envases.\n".into();
        force_state(&mut app, ViewState::InfoComoReciclar);
        let canvas = render_app(&app);
        assert_eq!(canvas.find("Cómo reciclar").map(|(r, _)| r), Some(BOX_TOP));
        assert_eq!(canvas.find("Separa el papel.").map(|(r, _)| r), Some(BOX_TOP + 2));
        assert_eq!(canvas.find("Lava los envases.").map(|(r, _)| r), Some(BOX_TOP + 3));
        assert_eq!(canvas.find(PRESS_ANY_KEY).map(|(r, _)| r), Some(TERM_H - 5));
    }

    #[test]
    fn long_content_stops_above_hint() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        app.assets.noticias = (0..30).map(|i| format!("linea {}\n", i)).collect();
        force_state(&mut app, ViewState::InfoNoticias);
        let canvas = render_app(&app);
        // Rows 10..19 hold lines 0..8
        assert!(canvas.find("linea 8").is_some());
        assert!(canvas.find("linea 9").is_none());
    }

    #[test]
    fn missing_topic_shows_placeholder() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut app = app_in(tmp.path());
        app.assets = AssetTexts::default();
        force_state(&mut app, ViewState::InfoCentros);
        let canvas = render_app(&app);
        let rows: Vec<u16> = (0..TERM_H)
            .filter(|&r| canvas.row_text(r).contains(MISSING_ASSET_TEXT))
            .collect();
        assert!(rows.contains(&(BOX_TOP + 2)));
    }
}
