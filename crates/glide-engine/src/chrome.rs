#![forbid(unsafe_code)]

//! Page chrome: navbar condensing and the mobile drawer.
//!
//! Independent wiring with no ordering hazards: each piece owns its one
//! flag and emits only on change.

use crate::effects::Effect;

/// Navbar and drawer state.
#[derive(Debug, Clone)]
pub struct Chrome {
    threshold: f32,
    condensed: bool,
    drawer_open: bool,
}

impl Chrome {
    /// Create chrome state with the navbar condense threshold.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            condensed: false,
            drawer_open: false,
        }
    }

    /// Whether the drawer is currently open.
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// A vertical scroll put the page at `offset`; condense or expand the
    /// navbar when the threshold is crossed.
    pub fn on_scroll(&mut self, offset: f32, out: &mut Vec<Effect>) {
        let condensed = offset > self.threshold;
        if condensed != self.condensed {
            self.condensed = condensed;
            out.push(Effect::NavbarCondensed(condensed));
        }
    }

    /// Toggle the mobile drawer, locking background scroll while open.
    pub fn toggle_drawer(&mut self, out: &mut Vec<Effect>) {
        self.drawer_open = !self.drawer_open;
        out.push(Effect::DrawerOpen(self.drawer_open));
        out.push(Effect::ScrollLock(self.drawer_open));
    }

    /// Close the drawer if it is open (drawer links close before
    /// navigating).
    pub fn close_drawer(&mut self, out: &mut Vec<Effect>) {
        if self.drawer_open {
            self.toggle_drawer(out);
        }
    }
}
