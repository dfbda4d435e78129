//! Search workflow: one detail request, then one image request built from the
//! returned dish.
//!
//! Every workflow carries the generation number it was started with. Results
//! are written back only while that generation is still the current one, so a
//! newer search silently wins over anything still in flight.

use crate::error::{GenerationError, PreferenceError, ValidationError};
use crate::food::dish::{CopyTarget, SearchQuery};
use crate::food::state::{SearchState, WorkflowPhase};
use crate::i18n::Language;
use crate::preferences::{PreferenceStore, Preferences, Theme};
use crate::providers::traits::DishGateway;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const FALLBACK_ERROR: &str = "An unknown error occurred.";

/// Handle for a started workflow, consumed by [`SearchOrchestrator::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowTicket {
    pub generation: u64,
    pub query: SearchQuery,
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Succeeded,
    DetailsFailed,
    ImagesFailed,
    /// A newer search started before this one finished; its results were dropped.
    Superseded,
}

/// Turns a gateway failure into the text shown to the user.
pub fn user_message(err: &GenerationError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

pub struct SearchOrchestrator {
    gateway: Arc<dyn DishGateway>,
    state: Mutex<SearchState>,
    store: Option<PreferenceStore>,
}

impl SearchOrchestrator {
    pub fn new(gateway: Arc<dyn DishGateway>, preferences: Preferences) -> Self {
        Self {
            gateway,
            state: Mutex::new(SearchState::new(preferences)),
            store: None,
        }
    }

    /// Persist theme and language changes to `store`.
    pub fn with_store(mut self, store: PreferenceStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.lock().clone()
    }

    pub fn language(&self) -> Language {
        self.state.lock().language
    }

    pub fn theme(&self) -> Theme {
        self.state.lock().theme
    }

    pub fn gateway_info(&self) -> String {
        self.gateway.get_model_info()
    }

    /// Validates the query and resets the state for a new workflow.
    /// Blank queries leave the state untouched.
    pub fn start(&self, raw_query: &str) -> Result<WorkflowTicket, ValidationError> {
        let query = SearchQuery::parse(raw_query)?;

        let mut state = self.state.lock();
        state.generation += 1;
        state.phase = WorkflowPhase::DetailsPending;
        state.query = Some(query.as_str().to_string());
        state.dish = None;
        state.images = Vec::new();
        state.error = None;
        state.details_loading = true;
        state.images_loading = false;

        let ticket = WorkflowTicket {
            generation: state.generation,
            query,
            language: state.language,
        };
        info!("Search #{} started for {:?} ({})", ticket.generation, ticket.query.as_str(), ticket.language);
        Ok(ticket)
    }

    /// Drives a started workflow to completion.
    pub async fn run(&self, ticket: WorkflowTicket) -> SearchOutcome {
        let WorkflowTicket { generation, query, language } = ticket;

        let dish = match self.gateway.get_dish_details(query.as_str(), language).await {
            Ok(dish) => dish,
            Err(e) => {
                let message = user_message(&e);
                let applied = self.apply(generation, |state| {
                    state.error = Some(message);
                    state.details_loading = false;
                    state.images_loading = false;
                    state.phase = WorkflowPhase::Failed;
                });
                if !applied {
                    return SearchOutcome::Superseded;
                }
                warn!("Search #{} failed while fetching details: {}", generation, e);
                return SearchOutcome::DetailsFailed;
            }
        };

        let applied = self.apply(generation, |state| {
            state.dish = Some(dish.clone());
            state.details_loading = false;
            state.images_loading = true;
            state.phase = WorkflowPhase::ImagesPending;
        });
        if !applied {
            return SearchOutcome::Superseded;
        }

        // The returned name and description make a better image prompt than the raw query.
        match self.gateway.get_dish_images(&dish.name, &dish.description).await {
            Ok(images) => {
                let count = images.len();
                let applied = self.apply(generation, |state| {
                    state.images = images;
                    state.images_loading = false;
                    state.phase = WorkflowPhase::Succeeded;
                });
                if !applied {
                    return SearchOutcome::Superseded;
                }
                info!("Search #{} finished with {} images", generation, count);
                SearchOutcome::Succeeded
            }
            Err(e) => {
                let message = user_message(&e);
                let applied = self.apply(generation, |state| {
                    state.error = Some(message);
                    state.images_loading = false;
                    state.phase = WorkflowPhase::Failed;
                });
                if !applied {
                    return SearchOutcome::Superseded;
                }
                warn!("Search #{} failed while fetching images: {}", generation, e);
                SearchOutcome::ImagesFailed
            }
        }
    }

    pub async fn search(&self, raw_query: &str) -> Result<SearchOutcome, ValidationError> {
        let ticket = self.start(raw_query)?;
        Ok(self.run(ticket).await)
    }

    /// Clipboard text for the current dish, if any.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        self.state.lock().dish.as_ref().map(|dish| target.render(dish))
    }

    /// Applies to the next detail request; a search already running keeps its language.
    pub fn set_language(&self, language: Language) -> Result<(), PreferenceError> {
        self.state.lock().language = language;
        match &self.store {
            Some(store) => store.save_language(language),
            None => Ok(()),
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        self.state.lock().theme = theme;
        match &self.store {
            Some(store) => store.save_theme(theme),
            None => Ok(()),
        }
    }

    pub fn toggle_theme(&self) -> Result<Theme, PreferenceError> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    /// Runs `update` only if `generation` is still the live workflow.
    fn apply<F>(&self, generation: u64, update: F) -> bool
    where
        F: FnOnce(&mut SearchState),
    {
        let mut state = self.state.lock();
        if state.generation != generation {
            debug!(
                "Discarding result of search #{} (current is #{})",
                generation, state.generation
            );
            return false;
        }
        update(&mut state);
        true
    }
}
