use crate::io::assets::Asset;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    MainMenu,
    Login,
    DonationForm,
    UserList,
    DonationList,
    InfoMenu,
    InfoComoReciclar,
    InfoNoticias,
    InfoCentros,
}

impl ViewState {
    pub const ALL: [ViewState; 9] = [
        ViewState::MainMenu,
        ViewState::Login,
        ViewState::DonationForm,
        ViewState::UserList,
        ViewState::DonationList,
        ViewState::InfoMenu,
        ViewState::InfoComoReciclar,
        ViewState::InfoNoticias,
        ViewState::InfoCentros,
    ];

    /// Menus wait for a selection; every other state is a one-shot modal
    pub fn is_menu(self) -> bool {
        matches!(self, ViewState::MainMenu | ViewState::InfoMenu)
    }
}

/// Logical entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Login,
    RegisterDonation,
    ListUsers,
    ListDonations,
    Info,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Login,
        MenuItem::RegisterDonation,
        MenuItem::ListUsers,
        MenuItem::ListDonations,
        MenuItem::Info,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Login => "Iniciar sesión",
            MenuItem::RegisterDonation => "Registrar donación",
            MenuItem::ListUsers => "Listar usuarios",
            MenuItem::ListDonations => "Listar donaciones",
            MenuItem::Info => "Información sobre reciclaje",
            MenuItem::Exit => "Salir",
        }
    }

    /// Login is offered only to anonymous users, donation only to
    /// authenticated ones.
    pub fn is_visible(self, authenticated: bool) -> bool {
        match self {
            MenuItem::Login => !authenticated,
            MenuItem::RegisterDonation => authenticated,
            _ => true,
        }
    }

    pub fn visible(authenticated: bool) -> Vec<MenuItem> {
        MenuItem::ALL
            .into_iter()
            .filter(|item| item.is_visible(authenticated))
            .collect()
    }
}

/// Entries of the info submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    ComoReciclar,
    Noticias,
    Centros,
}

impl InfoTopic {
    pub const ALL: [InfoTopic; 3] = [
        InfoTopic::ComoReciclar,
        InfoTopic::Noticias,
        InfoTopic::Centros,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InfoTopic::ComoReciclar => "Cómo reciclar",
            InfoTopic::Noticias => "Noticias recientes",
            InfoTopic::Centros => "Centros de acopio",
        }
    }

    pub fn view_state(self) -> ViewState {
        match self {
            InfoTopic::ComoReciclar => ViewState::InfoComoReciclar,
            InfoTopic::Noticias => ViewState::InfoNoticias,
            InfoTopic::Centros => ViewState::InfoCentros,
        }
    }

    pub fn asset(self) -> Asset {
        match self {
            InfoTopic::ComoReciclar => Asset::ComoReciclar,
            InfoTopic::Noticias => Asset::Noticias,
            InfoTopic::Centros => Asset::Centros,
        }
    }

    pub fn from_view_state(state: ViewState) -> Option<InfoTopic> {
        InfoTopic::ALL
            .into_iter()
            .find(|topic| topic.view_state() == state)
    }
}

/// What happened in the active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Select(MenuItem),
    Pick(InfoTopic),
    Cancel,
    /// A modal finished its single pass
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter(ViewState),
    Quit,
}

/// The transition table. `None` means the trigger does not apply in `from`.
pub fn transition(from: ViewState, trigger: Trigger) -> Option<Transition> {
    use ViewState::*;
    match (from, trigger) {
        (MainMenu, Trigger::Select(item)) => Some(match item {
            MenuItem::Login => Transition::Enter(Login),
            MenuItem::RegisterDonation => Transition::Enter(DonationForm),
            MenuItem::ListUsers => Transition::Enter(UserList),
            MenuItem::ListDonations => Transition::Enter(DonationList),
            MenuItem::Info => Transition::Enter(InfoMenu),
            MenuItem::Exit => Transition::Quit,
        }),
        (MainMenu, Trigger::Cancel) => Some(Transition::Quit),
        (InfoMenu, Trigger::Pick(topic)) => Some(Transition::Enter(topic.view_state())),
        (InfoMenu, Trigger::Cancel) => Some(Transition::Enter(MainMenu)),
        (state, Trigger::Done) if !state.is_menu() => Some(Transition::Enter(MainMenu)),
        _ => None,
    }
}

/// Current view plus the cursors of the two menus
#[derive(Debug, Clone)]
pub struct Router {
    state: ViewState,
    menu_cursor: MenuItem,
    info_cursor: usize,
    quit: bool,
}

impl Default for Router {
    fn default() -> Self {
        Router {
            state: ViewState::MainMenu,
            menu_cursor: MenuItem::ALL[0],
            info_cursor: 0,
            quit: false,
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Router::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Highlighted main menu item. A hidden item resolves to the next
    /// visible one, wrapping around.
    pub fn menu_cursor(&self, authenticated: bool) -> MenuItem {
        let start = index_of(self.menu_cursor);
        (0..MenuItem::ALL.len())
            .map(|offset| MenuItem::ALL[(start + offset) % MenuItem::ALL.len()])
            .find(|item| item.is_visible(authenticated))
            .unwrap_or(MenuItem::Exit)
    }

    pub fn info_cursor(&self) -> InfoTopic {
        InfoTopic::ALL[self.info_cursor]
    }

    pub fn move_up(&mut self, authenticated: bool) {
        self.step(authenticated, false);
    }

    pub fn move_down(&mut self, authenticated: bool) {
        self.step(authenticated, true);
    }

    fn step(&mut self, authenticated: bool, forward: bool) {
        match self.state {
            ViewState::MainMenu => {
                let visible = MenuItem::visible(authenticated);
                let current = self.menu_cursor(authenticated);
                let pos = visible.iter().position(|&i| i == current).unwrap_or(0);
                self.menu_cursor = visible[wrap(pos, visible.len(), forward)];
            }
            ViewState::InfoMenu => {
                self.info_cursor = wrap(self.info_cursor, InfoTopic::ALL.len(), forward);
            }
            _ => {}
        }
    }

    /// Select the highlighted entry of the active menu
    pub fn confirm(&mut self, authenticated: bool) -> Option<Transition> {
        let trigger = match self.state {
            ViewState::MainMenu => Trigger::Select(self.menu_cursor(authenticated)),
            ViewState::InfoMenu => Trigger::Pick(self.info_cursor()),
            _ => return None,
        };
        self.fire(trigger)
    }

    pub fn cancel(&mut self) -> Option<Transition> {
        self.fire(Trigger::Cancel)
    }

    /// End the active modal
    pub fn finish(&mut self) -> Option<Transition> {
        self.fire(Trigger::Done)
    }

    pub fn fire(&mut self, trigger: Trigger) -> Option<Transition> {
        let next = transition(self.state, trigger)?;
        match next {
            Transition::Enter(state) => {
                if state == ViewState::InfoMenu {
                    self.info_cursor = 0;
                }
                self.state = state;
            }
            Transition::Quit => self.quit = true,
        }
        Some(next)
    }
}

fn index_of(item: MenuItem) -> usize {
    MenuItem::ALL.iter().position(|&i| i == item).unwrap_or(0)
}

fn wrap(pos: usize, len: usize, forward: bool) -> usize {
    if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn main_menu_selections() {
        let cases = [
            (MenuItem::Login, Transition::Enter(ViewState::Login)),
            (
                MenuItem::RegisterDonation,
                Transition::Enter(ViewState::DonationForm),
            ),
            (MenuItem::ListUsers, Transition::Enter(ViewState::UserList)),
            (
                MenuItem::ListDonations,
                Transition::Enter(ViewState::DonationList),
            ),
            (MenuItem::Info, Transition::Enter(ViewState::InfoMenu)),
            (MenuItem::Exit, Transition::Quit),
        ];
        for (item, expected) in cases {
            assert_eq!(
                transition(ViewState::MainMenu, Trigger::Select(item)),
                Some(expected),
                "{:?}",
                item
            );
        }
        assert_eq!(
            transition(ViewState::MainMenu, Trigger::Cancel),
            Some(Transition::Quit)
        );
    }

    #[test]
    fn info_menu_transitions() {
        for topic in InfoTopic::ALL {
            assert_eq!(
                transition(ViewState::InfoMenu, Trigger::Pick(topic)),
                Some(Transition::Enter(topic.view_state()))
            );
        }
        assert_eq!(
            transition(ViewState::InfoMenu, Trigger::Cancel),
            Some(Transition::Enter(ViewState::MainMenu))
        );
    }

    #[test]
    fn every_modal_returns_to_main_menu() {
        for state in ViewState::ALL.into_iter().filter(|s| !s.is_menu()) {
            assert_eq!(
                transition(state, Trigger::Done),
                Some(Transition::Enter(ViewState::MainMenu))
            );
            assert_eq!(transition(state, Trigger::Cancel), None);
            assert_eq!(
                transition(state, Trigger::Select(MenuItem::Exit)),
                None,
                "{:?}",
                state
            );
        }
    }

    #[test]
    fn menus_ignore_unrelated_triggers() {
        assert_eq!(transition(ViewState::MainMenu, Trigger::Done), None);
        assert_eq!(transition(ViewState::InfoMenu, Trigger::Done), None);
        assert_eq!(
            transition(ViewState::MainMenu, Trigger::Pick(InfoTopic::Noticias)),
            None
        );
        assert_eq!(
            transition(ViewState::InfoMenu, Trigger::Select(MenuItem::Exit)),
            None
        );
    }

    #[test]
    fn visible_items_depend_on_session() {
        assert_eq!(
            MenuItem::visible(false),
            vec![
                MenuItem::Login,
                MenuItem::ListUsers,
                MenuItem::ListDonations,
                MenuItem::Info,
                MenuItem::Exit
            ]
        );
        assert_eq!(
            MenuItem::visible(true),
            vec![
                MenuItem::RegisterDonation,
                MenuItem::ListUsers,
                MenuItem::ListDonations,
                MenuItem::Info,
                MenuItem::Exit
            ]
        );
    }

    #[test]
    fn cursor_wraps_over_visible_items_only() {
        for auth in [false, true] {
            let visible = MenuItem::visible(auth);
            let mut router = Router::new();
            assert_eq!(router.menu_cursor(auth), visible[0]);

            router.move_up(auth);
            assert_eq!(router.menu_cursor(auth), *visible.last().unwrap());
            router.move_down(auth);
            assert_eq!(router.menu_cursor(auth), visible[0]);

            for _ in 0..visible.len() * 2 {
                router.move_down(auth);
                assert!(router.menu_cursor(auth).is_visible(auth));
            }
            assert_eq!(router.menu_cursor(auth), visible[0]);
        }
    }

    #[test]
    fn hidden_cursor_resolves_to_next_visible() {
        let mut router = Router::new();
        assert_eq!(router.menu_cursor(false), MenuItem::Login);
        // After logging in the Login entry disappears
        assert_eq!(router.menu_cursor(true), MenuItem::RegisterDonation);
        router.move_down(true);
        assert_eq!(router.menu_cursor(true), MenuItem::ListUsers);
    }

    #[test]
    fn confirm_and_cancel_drive_the_router() {
        let mut router = Router::new();
        router.move_down(false);
        router.move_down(false);
        router.move_down(false);
        assert_eq!(router.menu_cursor(false), MenuItem::Info);
        assert_eq!(
            router.confirm(false),
            Some(Transition::Enter(ViewState::InfoMenu))
        );
        assert_eq!(router.info_cursor(), InfoTopic::ComoReciclar);

        router.move_up(false);
        assert_eq!(router.info_cursor(), InfoTopic::Centros);
        router.confirm(false);
        assert_eq!(router.state(), ViewState::InfoCentros);

        assert_eq!(router.confirm(false), None);
        router.finish();
        assert_eq!(router.state(), ViewState::MainMenu);
        // The main menu cursor is kept across the round trip
        assert_eq!(router.menu_cursor(false), MenuItem::Info);

        router.confirm(false);
        router.move_down(false);
        router.cancel();
        assert_eq!(router.state(), ViewState::MainMenu);
        router.confirm(false);
        assert_eq!(router.info_cursor(), InfoTopic::ComoReciclar);

        router.cancel();
        assert!(!router.is_quit());
        router.cancel();
        assert!(router.is_quit());
    }

    #[test]
    fn info_topics_map_to_states_and_assets() {
        for topic in InfoTopic::ALL {
            assert_eq!(InfoTopic::from_view_state(topic.view_state()), Some(topic));
        }
        assert_eq!(InfoTopic::Centros.asset(), Asset::Centros);
        assert_eq!(InfoTopic::from_view_state(ViewState::UserList), None);
    }
}
