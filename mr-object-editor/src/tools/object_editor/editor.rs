use bevy::prelude::*;

use super::catalog_browser::CatalogBrowser;
use super::manipulation::apply_joysticks;
use super::placement::{self, PlacedInstance, PlacementError};
use super::selection::{SelectionError, SelectionState};
use super::state::{EditorSettings, FrameInput, TickOutcome};
use crate::engine::assets::catalog::{AssetCatalog, CatalogError, CatalogItemRef};
use crate::engine::runtime::{PanelHost, Pointer, SceneRuntime, WorldHit};
use crate::tools::context_menu::actions::{apply_step, swatch};
use crate::tools::context_menu::{ContextMenu, MenuButton, MenuCommand, StepAction};
use crate::tools::edit_mode::EditModeState;
use crate::tools::hit_resolver::{Resolution, resolve};

/// Interaction core. Owns all selection, menu and mode state and is advanced once per frame by
/// `tick`.
#[derive(Resource, Debug)]
pub struct ObjectEditor {
    pub selection: SelectionState,
    pub menu: ContextMenu,
    pub mode: EditModeState,
    pub browser: CatalogBrowser,
    settings: EditorSettings,
}

impl Default for ObjectEditor {
    fn default() -> Self {
        Self::new(EditorSettings::default())
    }
}

impl ObjectEditor {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            selection: SelectionState::default(),
            menu: ContextMenu::default(),
            mode: EditModeState::new(settings.default_edit_mode),
            browser: CatalogBrowser::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Replace the settings and reset the edit mode to the configured default.
    pub fn apply_settings(&mut self, settings: EditorSettings) {
        self.mode.set_mode(settings.default_edit_mode);
        self.settings = settings;
    }

    /// One frame: resolve pointers, handle menu buttons, selection, placement and delete, apply
    /// joysticks, then re-anchor the menu.
    pub fn tick<P, S, H>(
        &mut self,
        input: &FrameInput,
        pointers: &[P],
        scene: &mut S,
        host: &mut H,
    ) -> TickOutcome
    where
        P: Pointer,
        S: SceneRuntime,
        H: PanelHost,
    {
        let resolution = resolve(pointers);
        let mut outcome = TickOutcome {
            over_ui: resolution.over_ui,
            ..default()
        };

        if input.toggle_edit_mode {
            self.mode.toggle();
        }

        for button in &input.menu_buttons {
            if let Some(deleted) = self.press_menu_button(*button, scene, host) {
                outcome.deleted = Some(deleted);
            }
        }

        // UI consumes the select press.
        if input.select && !resolution.over_ui {
            outcome.selected = self.select(resolution.hit.as_ref(), scene, host);
        }

        if input.place {
            match self.place(&resolution, scene) {
                Ok(placed) => outcome.placed = Some(placed),
                Err(e) => outcome.placement_error = Some(e),
            }
        }

        if input.delete {
            if let Some(deleted) = self.delete_selected(scene, host) {
                outcome.deleted = Some(deleted);
            }
        }

        outcome.manipulated = self.manipulate(input, scene);
        self.menu
            .refresh_pose(scene, host, self.settings.menu_height_offset);
        outcome
    }

    /// Select press against the resolved hit. Returns the entity now selected, if any.
    pub fn select<S: SceneRuntime, H: PanelHost>(
        &mut self,
        hit: Option<&WorldHit>,
        scene: &S,
        host: &mut H,
    ) -> Option<Entity> {
        let Some(hit) = hit else {
            self.menu.on_select_nothing(host);
            return None;
        };
        let info = scene.describe(hit.entity)?;

        match self.selection.select_world_entity(hit.entity, &info) {
            Ok(()) => {
                self.menu.on_select(hit.entity, host);
                Some(hit.entity)
            }
            Err(e) => {
                debug!("Selection ignored: {}", e);
                None
            }
        }
    }

    pub fn place<S: SceneRuntime>(
        &mut self,
        resolution: &Resolution,
        scene: &mut S,
    ) -> Result<PlacedInstance, PlacementError> {
        placement::place(resolution, self.selection.chosen_item(), scene)
    }

    /// Destroy the selected instance, closing the menu if it was anchored to it.
    pub fn delete_selected<S: SceneRuntime, H: PanelHost>(
        &mut self,
        scene: &mut S,
        host: &mut H,
    ) -> Option<Entity> {
        let deleted = self.selection.delete_selected(scene)?;
        if self.menu.target() == Some(deleted) {
            self.menu.hide(host);
        }
        Some(deleted)
    }

    fn delete_menu_target<S: SceneRuntime, H: PanelHost>(
        &mut self,
        target: Entity,
        scene: &mut S,
        host: &mut H,
    ) -> Entity {
        scene.destroy(target);
        self.selection.forget(target);
        self.menu.hide(host);
        info!("Deleted {} from menu", target);
        target
    }

    /// Returns the deleted entity when the button was Delete.
    pub fn press_menu_button<S: SceneRuntime, H: PanelHost>(
        &mut self,
        button: MenuButton,
        scene: &mut S,
        host: &mut H,
    ) -> Option<Entity> {
        match self.menu.press(button, host) {
            Ok(MenuCommand::None) => None,
            Ok(MenuCommand::Apply { target, action }) => {
                self.apply_step_action(target, action, scene);
                None
            }
            Ok(MenuCommand::Delete { target }) => {
                Some(self.delete_menu_target(target, scene, host))
            }
            Err(e) => {
                debug!("Menu button ignored: {}", e);
                None
            }
        }
    }

    fn apply_step_action<S: SceneRuntime>(
        &mut self,
        target: Entity,
        action: StepAction,
        scene: &mut S,
    ) {
        if let StepAction::Recolor(choice) = action {
            let color = swatch(choice, &mut rand::thread_rng());
            scene.set_color(target, color);
            debug!("Recoloured {} ({})", target, choice.label());
            return;
        }
        let Some(current) = scene.transform(target) else {
            return;
        };
        let next = apply_step(action, &current, &self.settings);
        scene.set_transform(target, next);
        debug!("{} on {}: {:?}", action.label(), target, next);
    }

    /// Joystick edits on the selected instance. Returns whether a transform was written.
    pub fn manipulate<S: SceneRuntime>(&mut self, input: &FrameInput, scene: &mut S) -> bool {
        let Some(entity) = self.selection.selected_entity() else {
            return false;
        };
        let Some(current) = scene.transform(entity) else {
            // Destroyed outside the editor.
            self.selection.forget(entity);
            return false;
        };

        match apply_joysticks(
            &current,
            self.mode.mode(),
            input.sticks,
            input.delta_seconds,
            &self.settings,
        ) {
            Some(next) => {
                scene.set_transform(entity, next);
                true
            }
            None => false,
        }
    }

    pub fn open_category<C: AssetCatalog, H: PanelHost>(
        &mut self,
        category: &str,
        catalog: &C,
        host: &mut H,
    ) -> Result<&[CatalogItemRef], CatalogError> {
        self.browser
            .open_category(category, catalog, &mut self.selection, host)
    }

    pub fn choose_item(&mut self, index: usize) -> Result<&CatalogItemRef, SelectionError> {
        self.browser.choose_item(index, &mut self.selection)
    }

    pub fn return_to_categories<H: PanelHost>(&mut self, host: &mut H) {
        self.browser
            .return_to_categories(&mut self.selection, host);
    }
}
