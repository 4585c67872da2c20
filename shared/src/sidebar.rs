pub const SIDEBAR_STORAGE_KEY: &str = "sidebarCollapsed";
pub const COLLAPSED_CLASS: &str = "sidebar-collapsed";

/// Collapsed/expanded state of the navigation sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    collapsed: bool,
}

impl SidebarState {
    /// Restore from the stored flag. Only the exact string `"true"` collapses.
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            collapsed: value == Some("true"),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the state and return the new collapsed flag.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Value written back to local storage
    pub fn storage_value(&self) -> &'static str {
        if self.collapsed {
            "true"
        } else {
            "false"
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.collapsed.then_some(COLLAPSED_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_from_storage() {
        assert!(SidebarState::from_stored(Some("true")).is_collapsed());
        assert!(!SidebarState::from_stored(Some("false")).is_collapsed());
        assert!(!SidebarState::from_stored(Some("TRUE")).is_collapsed());
        assert!(!SidebarState::from_stored(None).is_collapsed());
    }

    #[test]
    fn test_persisted_value_tracks_class_after_each_toggle() {
        let mut state = SidebarState::default();
        for _ in 0..5 {
            let collapsed = state.toggle();
            let restored = SidebarState::from_stored(Some(state.storage_value()));
            assert_eq!(restored.is_collapsed(), collapsed);
            assert_eq!(state.body_class().is_some(), collapsed);
        }
    }

    #[test]
    fn test_double_toggle_returns_to_start() {
        let mut state = SidebarState::from_stored(Some("true"));
        state.toggle();
        state.toggle();
        assert_eq!(state, SidebarState::from_stored(Some("true")));
        assert_eq!(state.body_class(), Some(COLLAPSED_CLASS));
    }
}
