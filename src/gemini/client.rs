use crate::extract::IngredientExtractor;
use crate::gemini::{
    config::GeminiConfig,
    models::{GenerateRequest, GenerateResponse},
};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;
use tracing::{debug, error};

const INGREDIENT_PROMPT: &str = "\
The text below was read by OCR from a grocery receipt. Extract only the names of \
ingredients that can be used for cooking.

Rules:
- Drop prices, quantities, dates, payment details, store names, advertising and category labels.
- Drop brand names and product qualifiers, keep the ingredient name itself.
- Processed foods that are used in cooking count as one ingredient (e.g. strawberry yogurt).
- Drop descriptive words such as classic, light or full fat.
- Keep the language used on the receipt.
- Answer with a single line of ingredient names separated by commas.
- Do not add explanations, numbering, bullets, quotes or markdown.
- Example answer: 사과, 양파, 햄, 치즈, 딸기 요거트

OCR text:
";

/// Gemini generateContent client used for ingredient extraction
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client; requires an API key
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        url::Url::parse(&config.endpoint())?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!("Receipt-Chef/", env!("CARGO_PKG_VERSION"))),
        );
        let mut key_value = header::HeaderValue::from_str(api_key)
            .map_err(|_| Error::Config("Invalid GEMINI_API_KEY value".to_string()))?;
        key_value.set_sensitive(true);
        headers.insert("x-goog-api-key", key_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Build the extraction prompt for a receipt
    pub fn ingredient_prompt(ocr_text: &str) -> String {
        format!("{INGREDIENT_PROMPT}{ocr_text}")
    }

    /// Send a prompt and return the text of the first candidate
    pub async fn generate(&self, prompt: String) -> Result<String> {
        let url = self.config.endpoint();
        debug!("Gemini request: POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("Gemini API error: {} - {}", status, error_body);
            return Err(Error::Upstream(format!("Gemini API error: {status}")));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Failed to parse Gemini response: {e}")))?;

        first_candidate_text(body)
    }
}

fn first_candidate_text(body: GenerateResponse) -> Result<String> {
    let candidate = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| Error::Upstream("Gemini response has no candidates".to_string()))?;

    let part = candidate
        .content
        .unwrap_or_default()
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| Error::Upstream("Gemini response has no content parts".to_string()))?;

    Ok(part.text.unwrap_or_default())
}

#[async_trait]
impl IngredientExtractor for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn extract_ingredients(&self, text: &str) -> Result<String> {
        self.generate(Self::ingredient_prompt(text)).await
    }
}
