//! Navigation model with explicit active-item state
//!
//! Which item is active lives here as a plain field, read directly — it is
//! never inferred back from whatever the host rendered. Presentation (and
//! actually calling `ScreenManager::open`) stays with the host.

/// One navigation entry: a label and the screen it opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub screen: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, screen: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            screen: screen.into(),
        }
    }
}

/// Ordered navigation items plus the explicit active index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavModel {
    items: Vec<NavItem>,
    active_index: Option<usize>,
}

impl NavModel {
    /// Create a model with no item active
    pub fn new(items: Vec<NavItem>) -> Self {
        Self {
            items,
            active_index: None,
        }
    }

    /// The navigation items in display order
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Index of the active item, if any
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// The active item, if any
    pub fn active_item(&self) -> Option<&NavItem> {
        self.active_index.and_then(|i| self.items.get(i))
    }

    /// Activate an item by index; out-of-range indices are ignored
    pub fn activate(&mut self, index: usize) {
        if index < self.items.len() {
            self.active_index = Some(index);
        }
    }

    /// Activate the item targeting the given screen, if one exists
    pub fn activate_screen(&mut self, screen: &str) {
        if let Some(index) = self.items.iter().position(|item| item.screen == screen) {
            self.active_index = Some(index);
        }
    }

    /// Deactivate whatever is active
    pub fn clear_active(&mut self) {
        self.active_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> NavModel {
        NavModel::new(vec![
            NavItem::new("Players", "players"),
            NavItem::new("Settings", "settings"),
        ])
    }

    #[test]
    fn test_starts_with_nothing_active() {
        let nav = model();
        assert_eq!(nav.active_index(), None);
        assert_eq!(nav.active_item(), None);
    }

    #[test]
    fn test_activate_by_index() {
        let mut nav = model();
        nav.activate(1);
        assert_eq!(nav.active_index(), Some(1));
        assert_eq!(nav.active_item().unwrap().screen, "settings");
    }

    #[test]
    fn test_activate_out_of_range_ignored() {
        let mut nav = model();
        nav.activate(0);
        nav.activate(7);
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn test_activate_screen() {
        let mut nav = model();
        nav.activate_screen("settings");
        assert_eq!(nav.active_index(), Some(1));

        // Unknown screen leaves the current activation untouched
        nav.activate_screen("nope");
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn test_clear_active() {
        let mut nav = model();
        nav.activate(0);
        nav.clear_active();
        assert_eq!(nav.active_item(), None);
    }
}
