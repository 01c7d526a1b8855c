/// Open/closed flag of the mobile navigation drawer. Starts closed on every load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigationDrawerState {
    #[default]
    Closed,
    Open,
}

impl NavigationDrawerState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            log::debug!("Opening navigation drawer");
        }
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("Closing navigation drawer");
        }
        *self = Self::Closed;
    }

    /// A navigation link was chosen; the drawer gets out of the way.
    pub fn select_destination(&mut self) {
        self.close();
    }
}
