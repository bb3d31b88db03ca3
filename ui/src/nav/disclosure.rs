//! Open/closed state of the header's three disclosure widgets.
//!
//! Each widget is its own two-state machine. The flags are independent; both
//! dropdowns may be open at once since only one tree is visible per breakpoint.

use dioxus::logger::tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

/// Disclosure flags owned by one mounted header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisclosureState {
    pub menu: Disclosure,
    pub desktop_dropdown: Disclosure,
    pub mobile_dropdown: Disclosure,
}

impl DisclosureState {
    /// Hamburger button.
    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        debug!(menu = ?self.menu, "mobile menu toggled");
    }

    /// Desktop dropdown trigger.
    pub fn toggle_desktop_dropdown(&mut self) {
        self.desktop_dropdown.toggle();
        debug!(dropdown = ?self.desktop_dropdown, "desktop dropdown toggled");
    }

    /// Dropdown trigger inside the mobile panel.
    pub fn toggle_mobile_dropdown(&mut self) {
        self.mobile_dropdown.toggle();
        debug!(dropdown = ?self.mobile_dropdown, "mobile dropdown toggled");
    }

    /// Pointer-down landed outside the desktop dropdown.
    pub fn pointer_down_outside(&mut self) {
        self.desktop_dropdown.close();
        debug!("desktop dropdown dismissed by outside pointer-down");
    }

    /// A link inside the desktop dropdown was chosen.
    pub fn select_desktop_child(&mut self) {
        self.desktop_dropdown.close();
    }

    /// A top-level link in the mobile panel was chosen.
    pub fn select_mobile_leaf(&mut self) {
        self.menu.close();
    }

    /// A link inside the mobile dropdown was chosen.
    pub fn select_mobile_child(&mut self) {
        self.menu.close();
        self.mobile_dropdown.close();
    }
}
