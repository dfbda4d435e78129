pub mod dish;
pub mod search;
pub mod state;

pub use dish::{CopyTarget, Dish, ImageSet, SearchQuery};
pub use search::{SearchOrchestrator, SearchOutcome, WorkflowTicket};
pub use state::{SearchState, WorkflowPhase};
