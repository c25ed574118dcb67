use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which joystick mapping the manipulation loop applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    #[default]
    Position,
    ScaleAndRotate,
}

impl EditMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::ScaleAndRotate => "scale_and_rotate",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Position => Self::ScaleAndRotate,
            Self::ScaleAndRotate => Self::Position,
        }
    }
}

/// Holds the single global edit mode.
#[derive(Debug, Default)]
pub struct EditModeState {
    mode: EditMode,
}

impl EditModeState {
    pub fn new(mode: EditMode) -> Self {
        Self { mode }
    }

    /// Switch to `mode`, returning whether anything changed.
    pub fn set_mode(&mut self, mode: EditMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        info!("Edit mode: {}", mode.as_str());
        true
    }

    pub fn toggle(&mut self) -> EditMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mode_reports_changes_only() {
        let mut state = EditModeState::default();
        assert_eq!(state.mode(), EditMode::Position);
        assert!(!state.set_mode(EditMode::Position));
        assert!(state.set_mode(EditMode::ScaleAndRotate));
        assert_eq!(state.toggle(), EditMode::Position);
    }

    #[test]
    fn display_names_match_configuration_names() {
        for mode in [EditMode::Position, EditMode::ScaleAndRotate] {
            let json = serde_json::to_string(&mode).expect("serializes");
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
            let parsed: EditMode = serde_json::from_str(&json).expect("parses");
            assert_eq!(parsed, mode);
        }
        assert!(serde_json::from_str::<EditMode>("\"orbit\"").is_err());
    }
}
