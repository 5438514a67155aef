use crate::tui::app::App;

use super::*;

pub(super) fn handle_menu(app: &mut App, action: Action) {
    let authenticated = app.is_authenticated();
    match action {
        Action::MoveUp => app.router.move_up(authenticated),
        Action::MoveDown => app.router.move_down(authenticated),
        Action::Confirm => {
            app.router.confirm(authenticated);
        }
        Action::Cancel => {
            app.router.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::assets::AssetTexts;
    use crate::model::Store;
    use crate::tui::router::{InfoTopic, MenuItem, ViewState};

    fn app() -> App {
        App::new(Store::default(), AssetTexts::default(), "unused.txt")
    }

    #[test]
    fn navigate_main_menu() {
        let mut app = app();
        handle_menu(&mut app, Action::MoveUp);
        assert_eq!(app.router.menu_cursor(false), MenuItem::Exit);
        handle_menu(&mut app, Action::MoveDown);
        handle_menu(&mut app, Action::MoveDown);
        assert_eq!(app.router.menu_cursor(false), MenuItem::ListUsers);
        handle_menu(&mut app, Action::Confirm);
        assert_eq!(app.router.state(), ViewState::UserList);
    }

    #[test]
    fn info_menu_cancel_returns_to_main() {
        let mut app = app();
        for _ in 0..3 {
            handle_menu(&mut app, Action::MoveDown);
        }
        handle_menu(&mut app, Action::Confirm);
        assert_eq!(app.router.state(), ViewState::InfoMenu);

        handle_menu(&mut app, Action::MoveDown);
        assert_eq!(app.router.info_cursor(), InfoTopic::Noticias);
        handle_menu(&mut app, Action::Cancel);
        assert_eq!(app.router.state(), ViewState::MainMenu);
        assert!(!app.should_quit());
    }

    #[test]
    fn info_menu_pick_opens_topic() {
        let mut app = app();
        for _ in 0..3 {
            handle_menu(&mut app, Action::MoveDown);
        }
        handle_menu(&mut app, Action::Confirm);
        handle_menu(&mut app, Action::MoveDown);
        handle_menu(&mut app, Action::MoveDown);
        handle_menu(&mut app, Action::Confirm);
        assert_eq!(app.router.state(), ViewState::InfoCentros);
    }

    #[test]
    fn cancel_from_main_menu_quits() {
        let mut app = app();
        handle_menu(&mut app, Action::Cancel);
        assert!(app.should_quit());
    }

    #[test]
    fn exit_item_quits() {
        let mut app = app();
        handle_menu(&mut app, Action::MoveUp);
        handle_menu(&mut app, Action::Confirm);
        assert!(app.should_quit());
    }
}
