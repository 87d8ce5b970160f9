//! Context-sensitive actions
//!
//! These are semantic actions that views interpret differently based on context.
//! For example, `Confirm` (Enter key) means "open the story" in the story list.

/// Semantic actions that views interpret differently.
///
/// These represent user intent, not specific operations.
/// Each view translates them to view-specific actions via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,

    /// Drop the focused item (d, Delete)
    Dismiss,
}
