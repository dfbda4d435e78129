use async_trait::async_trait;
use crate::config::ProviderConfig;
use crate::error::{ConfigurationError, GenerationError};
use crate::food::dish::{Dish, ImageSet};
use crate::i18n::Language;
use crate::providers::traits::DishGateway;
use crate::providers::utils::{collect_images, extract_candidate_text, parse_dish};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, error, info};

const IMAGE_MIME: &str = "image/jpeg";
const IMAGE_ASPECT_RATIO: &str = "4:3";
const IMAGE_COUNT: u32 = 1;
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    config: ProviderConfig,
}

impl GeminiProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigurationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.config.api_url, model, method)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, GenerationError> {
        let response = self.client
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

/// JSON schema the detail response has to follow.
pub fn dish_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "The official name of the dish."
            },
            "description": {
                "type": "STRING",
                "description": "A captivating and appetizing paragraph about the dish, its origin, and its flavor profile."
            },
            "ingredients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of strings, where each string is a single ingredient with its quantity (e.g., \"2 cups all-purpose flour\")."
            },
            "recipe": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of strings, where each string is a single, clear step in the cooking process."
            }
        },
        "required": ["name", "description", "ingredients", "recipe"],
        "propertyOrdering": ["name", "description", "ingredients", "recipe"]
    })
}

pub fn details_prompt(name: &str, language: Language) -> String {
    format!(
        "Provide detailed information for the dish: \"{}\". \
         Write the name, description, every ingredient and every recipe step in {}. \
         Your response must be in JSON format.",
        name,
        language.english_name()
    )
}

pub fn details_request_body(name: &str, language: Language, temperature: f32) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": details_prompt(name, language) }]
        }],
        "generationConfig": {
            "temperature": temperature,
            "responseMimeType": "application/json",
            "responseSchema": dish_schema()
        }
    })
}

pub fn image_prompt(name: &str, description: &str) -> String {
    format!(
        "Photorealistic, delicious-looking professional food photography of {}: {}, \
         beautifully plated and ready to eat.",
        name,
        description.trim()
    )
}

pub fn images_request_body(name: &str, description: &str) -> Value {
    json!({
        "instances": [{ "prompt": image_prompt(name, description) }],
        "parameters": {
            "sampleCount": IMAGE_COUNT,
            "aspectRatio": IMAGE_ASPECT_RATIO,
            "outputOptions": { "mimeType": IMAGE_MIME }
        }
    })
}

#[async_trait]
impl DishGateway for GeminiProvider {
    async fn get_dish_details(&self, name: &str, language: Language) -> Result<Dish, GenerationError> {
        info!("Fetching dish details for {:?} in {}", name, language);
        let url = self.endpoint(&self.config.text_model, "generateContent");
        let body = details_request_body(name, language, self.config.temperature);

        let result = async {
            let response = self.post(&url, &body).await?;
            let text = extract_candidate_text(&response)?;
            parse_dish(&text)
        }
        .await;

        match &result {
            Ok(dish) => debug!(
                "Received {} ingredients and {} steps for {}",
                dish.ingredients.len(),
                dish.recipe.len(),
                dish.name
            ),
            Err(e) => error!("Failed to fetch dish details: {}", e),
        }
        result
    }

    async fn get_dish_images(&self, name: &str, description: &str) -> Result<ImageSet, GenerationError> {
        info!("Generating images for {:?}", name);
        let url = self.endpoint(&self.config.image_model, "predict");
        let body = images_request_body(name, description);

        let result = async {
            let response = self.post(&url, &body).await?;
            collect_images(&response, IMAGE_MIME)
        }
        .await;

        match &result {
            Ok(images) => debug!("Received {} images for {}", images.len(), name),
            Err(e) => error!("Failed to fetch dish images: {}", e),
        }
        result
    }

    fn get_model_info(&self) -> String {
        format!("{} + {}", self.config.text_model, self.config.image_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::search::{SearchOrchestrator, SearchOutcome};
    use crate::preferences::Preferences;
    use std::sync::Arc;
    use std::time::Duration;

    fn config() -> ProviderConfig {
        ProviderConfig {
            api_key: "test-key".into(),
            api_url: "http://localhost:9".into(),
            text_model: "gemini-test".into(),
            image_model: "imagen-test".into(),
            temperature: 0.2,
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn endpoints_follow_model_method_layout() {
        let provider = GeminiProvider::new(config()).unwrap();
        assert_eq!(
            provider.endpoint("gemini-test", "generateContent"),
            "http://localhost:9/models/gemini-test:generateContent"
        );
        assert_eq!(provider.get_model_info(), "gemini-test + imagen-test");
    }

    #[test]
    fn details_request_asks_for_json_in_target_language() {
        let body = details_request_body("Biryani", Language::Ur, 0.5);
        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["required"].as_array().unwrap().len(), 4);

        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("\"Biryani\""));
        assert!(prompt.contains("Urdu"));
    }

    #[test]
    fn image_request_is_single_photo_four_by_three() {
        let body = images_request_body("Pho", "A fragrant noodle soup.");
        assert_eq!(body["parameters"]["sampleCount"], 1);
        assert_eq!(body["parameters"]["aspectRatio"], "4:3");
        assert_eq!(body["parameters"]["outputOptions"]["mimeType"], "image/jpeg");

        let prompt = body["instances"][0]["prompt"].as_str().unwrap();
        assert!(prompt.starts_with("Photorealistic"));
        assert!(prompt.contains("Pho: A fragrant noodle soup."));
    }

    #[tokio::test]
    async fn unreachable_service_is_generation_error() {
        let provider = GeminiProvider::new(config()).unwrap();
        let err = provider.get_dish_details("Pho", Language::En).await.unwrap_err();
        assert!(matches!(err, GenerationError::Request(_) | GenerationError::Timeout));
    }

    #[tokio::test]
    async fn api_key_stays_out_of_error_messages() {
        let provider = GeminiProvider::new(ProviderConfig {
            api_key: "SUPER-SECRET-KEY".into(),
            api_url: "http://127.0.0.1:9".into(),
            ..config()
        })
        .unwrap();
        let orchestrator = SearchOrchestrator::new(Arc::new(provider), Preferences::default());

        let outcome = orchestrator.search("Pho").await.unwrap();
        assert_eq!(outcome, SearchOutcome::DetailsFailed);

        let state = orchestrator.snapshot();
        let message = state.error.unwrap();
        assert!(!message.is_empty());
        assert!(!message.contains("SUPER-SECRET-KEY"), "key leaked: {}", message);
    }
}
