//! Floating contextual menu anchored above the selected instance.
//!
//! ## States
//!
//! ```text
//!            select E                 Open(tool)
//!  Hidden ─────────────> Root ──────────────────────> Scale | Rotation | Position | Color
//!    ^                    │  ^                                   │
//!    │   Close / select   │  └──────────── Back ─────────────────┘
//!    │   same E / select  │
//!    └── empty space ─────┘   (Close is accepted from every visible panel)
//! ```
//!
//! Exactly one panel is visible while the menu is shown and none while hidden. Leaving Hidden
//! always lands on Root; a tool panel is never resumed.
//!
//! ## Buttons
//!
//! Navigation buttons (`Open`, `Back`, `Close`) drive the state machine. Step buttons belong to
//! one tool panel and are only accepted while that panel is current; the menu hands them back to
//! the caller together with the target entity so the editor can apply them (see `actions`).

/// Transform and colour edits behind the tool panel buttons.
pub mod actions;

/// Button press handlers for the contextual menu and its panels.
pub mod interactions;

/// `PanelHost` over Bevy UI nodes, plus world-anchor projection.
pub mod panels;

/// Spawns the contextual menu node tree.
pub mod ui;

use bevy::prelude::*;
use thiserror::Error;

use crate::engine::pose::{menu_anchor, viewer_facing_rotation, Bounds};
use crate::engine::runtime::{PanelHost, PanelId, SceneRuntime};
pub use actions::{StepAction, SwatchChoice};
use constants::interaction::FALLBACK_BOUNDS_SIZE;

/// The five panels of the contextual menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuPanel {
    Root,
    Scale,
    Rotation,
    Position,
    Color,
}

impl MenuPanel {
    pub const ALL: [MenuPanel; 5] = [
        MenuPanel::Root,
        MenuPanel::Scale,
        MenuPanel::Rotation,
        MenuPanel::Position,
        MenuPanel::Color,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Root => "Object",
            Self::Scale => "Scale",
            Self::Rotation => "Rotation",
            Self::Position => "Position",
            Self::Color => "Color",
        }
    }

    pub fn is_tool(&self) -> bool {
        !matches!(self, Self::Root)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Visible { panel: MenuPanel, target: Entity },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    /// Root only: switch to a tool panel.
    Open(MenuPanel),
    /// Tool panels only: return to Root.
    Back,
    Close,
    /// Root only: destroy the target.
    Delete,
    Step(StepAction),
}

/// What an accepted button asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Navigation only; the menu already updated itself.
    None,
    Apply { target: Entity, action: StepAction },
    Delete { target: Entity },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu is hidden")]
    Hidden,
    #[error("{button:?} is not available on the {panel:?} panel")]
    WrongPanel { button: MenuButton, panel: MenuPanel },
}

#[derive(Debug, Default)]
pub struct ContextMenu {
    state: MenuState,
}

impl ContextMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, MenuState::Visible { .. })
    }

    pub fn current_panel(&self) -> Option<MenuPanel> {
        match self.state {
            MenuState::Visible { panel, .. } => Some(panel),
            MenuState::Hidden => None,
        }
    }

    pub fn target(&self) -> Option<Entity> {
        match self.state {
            MenuState::Visible { target, .. } => Some(target),
            MenuState::Hidden => None,
        }
    }

    /// Select pressed on an eligible entity: toggles off for the current target, otherwise
    /// (re)opens at Root for `entity`.
    pub fn on_select<H: PanelHost>(&mut self, entity: Entity, host: &mut H) {
        match self.state {
            MenuState::Visible { target, .. } if target == entity => self.hide(host),
            _ => self.open(entity, host),
        }
    }

    /// Select pressed on empty space.
    pub fn on_select_nothing<H: PanelHost>(&mut self, host: &mut H) {
        if self.is_visible() {
            self.hide(host);
        }
    }

    fn open<H: PanelHost>(&mut self, target: Entity, host: &mut H) {
        if let MenuState::Visible { panel, .. } = self.state {
            host.hide(PanelId::Menu(panel));
        } else {
            host.show(PanelId::ContextMenu);
        }
        host.show(PanelId::Menu(MenuPanel::Root));
        self.state = MenuState::Visible {
            panel: MenuPanel::Root,
            target,
        };
        debug!("Menu opened for {}", target);
    }

    pub fn hide<H: PanelHost>(&mut self, host: &mut H) {
        let MenuState::Visible { panel, .. } = self.state else {
            return;
        };
        host.hide(PanelId::Menu(panel));
        host.hide(PanelId::ContextMenu);
        self.state = MenuState::Hidden;
        debug!("Menu hidden");
    }

    fn switch<H: PanelHost>(&mut self, to: MenuPanel, target: Entity, host: &mut H) {
        if let Some(from) = self.current_panel() {
            host.hide(PanelId::Menu(from));
        }
        host.show(PanelId::Menu(to));
        self.state = MenuState::Visible { panel: to, target };
        debug!("Menu panel: {}", to.title());
    }

    /// Handle one button press. Rejected presses change nothing.
    pub fn press<H: PanelHost>(
        &mut self,
        button: MenuButton,
        host: &mut H,
    ) -> Result<MenuCommand, MenuError> {
        let MenuState::Visible { panel, target } = self.state else {
            return Err(MenuError::Hidden);
        };
        let wrong_panel = MenuError::WrongPanel { button, panel };

        match button {
            MenuButton::Close => {
                self.hide(host);
                Ok(MenuCommand::None)
            }
            MenuButton::Open(to) if panel == MenuPanel::Root && to.is_tool() => {
                self.switch(to, target, host);
                Ok(MenuCommand::None)
            }
            MenuButton::Back if panel.is_tool() => {
                self.switch(MenuPanel::Root, target, host);
                Ok(MenuCommand::None)
            }
            MenuButton::Delete if panel == MenuPanel::Root => Ok(MenuCommand::Delete { target }),
            MenuButton::Step(action) if action.panel() == panel => {
                Ok(MenuCommand::Apply { target, action })
            }
            _ => Err(wrong_panel),
        }
    }

    /// Re-anchor the menu above its target and turn it toward the viewer.
    ///
    /// Hides the menu if the target no longer exists.
    pub fn refresh_pose<S: SceneRuntime, H: PanelHost>(
        &mut self,
        scene: &S,
        host: &mut H,
        height_offset: f32,
    ) {
        let Some(target) = self.target() else {
            return;
        };
        let Some(transform) = scene.transform(target) else {
            warn!("Menu target {} is gone, hiding menu", target);
            self.hide(host);
            return;
        };

        let bounds = scene
            .bounds(target)
            .unwrap_or_else(|| Bounds::cube(transform.translation, FALLBACK_BOUNDS_SIZE));
        let position = menu_anchor(bounds, height_offset);
        let rotation = scene
            .viewer_position()
            .map(|viewer| viewer_facing_rotation(position, viewer))
            .unwrap_or(Quat::IDENTITY);

        host.set_world_pose(PanelId::ContextMenu, position, rotation);
    }
}
