pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod food;
pub mod i18n;
pub mod preferences;
pub mod providers;

// Re-export commonly used items
pub use food::{Dish, SearchOrchestrator, SearchState};
pub use providers::{DishGateway, GeminiProvider};
