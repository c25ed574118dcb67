/// Catalog manifest location and asset folder layout.
pub mod catalog;

/// Default tuning values for joystick manipulation and the contextual menu.
pub mod interaction;

/// Named colours for recolouring and UI chrome.
pub mod palette;
