//! Panel capability system
//!
//! Views declare what kind of keyboard input they accept. The keyboard
//! middleware routes keys on these flags instead of knowing concrete views.
//!
//! For example, while the search input has focus the stories view reports
//! `TEXT_INPUT`, so `j` is typed into the input instead of moving the cursor.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View supports vim-style navigation keybindings (j, k, gg, G)
        const VIM_NAVIGATION_BINDINGS = 1 << 0;

        /// View can navigate to next/previous items
        const ITEM_NAVIGATION = 1 << 1;

        /// View currently routes printable keys into a text input
        const TEXT_INPUT = 1 << 2;
    }
}

impl PanelCapabilities {
    /// Check if view supports vim-style navigation (j/k)
    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }

    /// Check if view supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    /// Check if printable keys should go to a text input
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
    }

    #[test]
    fn test_combined_flags() {
        let caps = PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        assert!(caps.supports_item_navigation());
        assert!(caps.supports_vim_navigation());
        assert!(!caps.accepts_text_input());
    }
}
