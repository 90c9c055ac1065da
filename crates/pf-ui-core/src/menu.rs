//! Mobile menu visibility.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Which of the three menu elements carry the `hidden` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub panel_hidden: bool,
    pub menu_icon_hidden: bool,
    pub close_icon_hidden: bool,
}

impl MenuState {
    /// Read the initial state from the panel's `hidden` class.
    pub fn from_panel_hidden(hidden: bool) -> Self {
        if hidden {
            MenuState::Closed
        } else {
            MenuState::Open
        }
    }

    pub fn toggle(&mut self) -> MenuView {
        *self = match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
        self.view()
    }

    pub fn close(&mut self) -> MenuView {
        *self = MenuState::Closed;
        self.view()
    }

    pub fn view(self) -> MenuView {
        let open = self == MenuState::Open;
        MenuView {
            panel_hidden: !open,
            menu_icon_hidden: open,
            close_icon_hidden: !open,
        }
    }
}
