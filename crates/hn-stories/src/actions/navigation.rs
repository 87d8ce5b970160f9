//! Navigation actions - translated by the active view

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Navigate to next item (j, down arrow)
    Next,
    /// Navigate to previous item (k, up arrow)
    Previous,
    /// Navigate to top (gg, Home)
    ToTop,
    /// Navigate to bottom (G, End)
    ToBottom,
}
