//! UI panel modules extracted from the main app update loop.

/// Folder tree browsing with breadcrumb navigation.
pub(super) mod folders;
/// Right-side asset card: thumbnail, labels, and per-dimension editing.
pub(super) mod media_card;
/// Rocketium catalog search surface.
pub(super) mod rocketium;
/// Library search with autocomplete popover.
pub(super) mod search;
/// Bottom status bar content.
pub(super) mod status_bar;
/// Transient toast notifications.
pub(super) mod toasts;
/// Top bar with view switching.
pub(super) mod top_bar;
/// Upload surface for pushing new assets.
pub(super) mod upload;
