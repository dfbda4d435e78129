pub mod gemini;
pub mod traits;
pub mod utils;

pub use gemini::GeminiProvider;
pub use traits::DishGateway;
