//! Interaction tools for placing and editing catalog objects in a mixed reality scene.
//!
//! ## Tool Layout
//!
//! ```text
//! hit_resolver   pointers -> at most one world hit, or "over UI"
//! edit_mode      Position | ScaleAndRotate joystick mapping
//! object_editor  selection, placement, manipulation, catalog browsing
//! context_menu   Hidden / Root / Scale / Rotation / Position / Color panels
//! ```
//!
//! ## Native Bindings
//!
//! Mouse, keyboard and gamepad mappings are listed in `engine::input`. Catalog and menu panels
//! are Bevy UI buttons; pressing one marks the frame as over UI so the same click never reaches
//! the world.

/// Exclusive joystick mapping shared by the manipulation loop and the status label.
pub mod edit_mode;

/// Per-frame pointer resolution with UI consumption.
///
/// Tests UI on every pointer before any world cast; first world hit in priority order wins.
pub mod hit_resolver;

/// Selection, placement, joystick manipulation and catalog browsing.
///
/// Owns the `ObjectEditor` resource and registers `ObjectEditorPlugin`.
pub mod object_editor;

/// Floating contextual menu state machine and its step actions.
pub mod context_menu;
