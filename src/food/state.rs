use crate::food::dish::{Dish, ImageSet};
use crate::i18n::Language;
use crate::preferences::{Preferences, Theme};
use serde::Serialize;

/// Where the current search workflow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowPhase {
    #[default]
    Idle,
    DetailsPending,
    ImagesPending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    pub generation: u64,
    pub phase: WorkflowPhase,
    pub query: Option<String>,
    pub dish: Option<Dish>,
    pub images: ImageSet,
    pub details_loading: bool,
    pub images_loading: bool,
    pub error: Option<String>,
    pub language: Language,
    pub theme: Theme,
}

impl SearchState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            generation: 0,
            phase: WorkflowPhase::Idle,
            query: None,
            dish: None,
            images: Vec::new(),
            details_loading: false,
            images_loading: false,
            error: None,
            language: preferences.language,
            theme: preferences.theme,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.details_loading || self.images_loading
    }

    /// True when there is nothing to show yet: no dish, no error, nothing pending.
    pub fn is_welcome(&self) -> bool {
        self.dish.is_none() && self.error.is_none() && !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_idle_welcome() {
        let state = SearchState::new(Preferences { theme: Theme::Dark, language: Language::Hi });
        assert_eq!(state.phase, WorkflowPhase::Idle);
        assert!(state.is_welcome());
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.language, Language::Hi);
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&WorkflowPhase::DetailsPending).unwrap();
        assert_eq!(json, "\"details_pending\"");
    }
}
