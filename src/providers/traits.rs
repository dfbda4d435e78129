use async_trait::async_trait;
use crate::error::GenerationError;
use crate::food::dish::{Dish, ImageSet};
use crate::i18n::Language;

/// Remote capability that writes dish details and photographs.
///
/// Every call may cost latency and money; nothing here caches or retries.
#[async_trait]
pub trait DishGateway: Send + Sync {
    /// Structured details for `name`, with all text written in `language`.
    async fn get_dish_details(&self, name: &str, language: Language) -> Result<Dish, GenerationError>;

    /// Photographs of the dish. An empty set is a valid answer.
    async fn get_dish_images(&self, name: &str, description: &str) -> Result<ImageSet, GenerationError>;

    fn get_model_info(&self) -> String;
}
