use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::engine::runtime::{PanelHost, PanelId};

/// Marks the UI node that represents a named panel.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTag(pub PanelId);

/// World pose a screen-space panel follows.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct WorldAnchor {
    pub position: Vec3,
    /// Kept for hosts that render the panel in world space; the screen overlay always faces
    /// the camera.
    pub rotation: Quat,
    pub active: bool,
}

/// `PanelHost` over tagged `bevy_ui` nodes.
#[derive(SystemParam)]
pub struct UiPanels<'w, 's> {
    panels: Query<'w, 's, (&'static PanelTag, &'static mut Node, Option<&'static mut WorldAnchor>)>,
}

impl UiPanels<'_, '_> {
    fn set_display(&mut self, panel: PanelId, display: Display) {
        for (tag, mut node, anchor) in &mut self.panels {
            if tag.0 != panel {
                continue;
            }
            node.display = display;
            if let Some(mut anchor) = anchor {
                anchor.active = display != Display::None;
            }
        }
    }
}

impl PanelHost for UiPanels<'_, '_> {
    fn show(&mut self, panel: PanelId) {
        self.set_display(panel, Display::Flex);
    }

    fn hide(&mut self, panel: PanelId) {
        self.set_display(panel, Display::None);
    }

    fn set_world_pose(&mut self, panel: PanelId, position: Vec3, rotation: Quat) {
        for (tag, _, anchor) in &mut self.panels {
            if tag.0 != panel {
                continue;
            }
            if let Some(mut anchor) = anchor {
                anchor.position = position;
                anchor.rotation = rotation;
            }
        }
    }
}

// Projects world-anchored panels onto the viewport, centred horizontally on the anchor
pub fn project_world_anchors(
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut anchored: Query<(&WorldAnchor, &mut Node, &ComputedNode)>,
) {
    let Ok((cam_xf, camera)) = cameras.single() else {
        return;
    };

    for (anchor, mut node, computed) in &mut anchored {
        if !anchor.active {
            continue;
        }
        let Ok(screen) = camera.world_to_viewport(cam_xf, anchor.position) else {
            // Behind the camera.
            node.display = Display::None;
            continue;
        };
        let size = computed.size() * computed.inverse_scale_factor();
        node.display = Display::Flex;
        node.left = Val::Px(screen.x - size.x * 0.5);
        node.top = Val::Px(screen.y - size.y);
    }
}
