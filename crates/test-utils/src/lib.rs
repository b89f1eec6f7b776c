use brandcircle::errors::PromptError;
use brandcircle::providers::ai::AiProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

#[derive(Clone, Debug)]
pub struct MockAiProvider {
    responses: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
    failure: Option<String>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// A provider whose every call fails with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Pre-programs a response for a specific prompt.
    /// The key should be a unique substring of the system prompt.
    pub fn add_response(&self, key: &str, response: &str) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(key.to_string(), response.to_string());
    }

    /// Retrieves the recorded calls for assertion.
    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(message) = &self.failure {
            return Err(PromptError::AiApi(message.clone()));
        }

        let responses = self.responses.lock().unwrap();
        for (key, response) in responses.iter() {
            if system_prompt.contains(key) {
                return Ok(response.clone());
            }
        }

        Err(PromptError::AiApi(format!(
            "MockAiProvider: No response programmed for system prompt. Got: '{system_prompt}'"
        )))
    }
}

// --- Test-Specific Helpers ---
#[cfg(feature = "pdf")]
pub mod helpers {
    use anyhow::Result;
    use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

    const FONT_NAME: Name<'static> = Name(b"F1");
    const LINE_HEIGHT: f32 = 16.0;

    /// Generates a single-page A4 PDF with one text line per input line,
    /// set in the built-in Helvetica font.
    pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
        generate_multi_page_pdf(&[text])
    }

    /// Generates a PDF with one page per entry in `pages`.
    pub fn generate_multi_page_pdf(pages: &[&str]) -> Result<Vec<u8>> {
        if pages.is_empty() {
            anyhow::bail!("A test PDF needs at least one page");
        }

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let mut next_id = 4;

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let mut page_ids = Vec::with_capacity(pages.len());
        for text in pages {
            let page_id = Ref::new(next_id);
            let content_id = Ref::new(next_id + 1);
            next_id += 2;
            page_ids.push(page_id);

            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources().fonts().pair(FONT_NAME, font_id);
            page.finish();

            // Each line gets its own text object so readers see a line break.
            let mut content = Content::new();
            for (index, line) in text.lines().enumerate() {
                content.begin_text();
                content.set_font(FONT_NAME, 12.0);
                content.next_line(72.0, 770.0 - LINE_HEIGHT * index as f32);
                content.show(Str(line.as_bytes()));
                content.end_text();
            }
            pdf.stream(content_id, &content.finish());
        }

        let page_count = page_ids.len() as i32;
        pdf.pages(page_tree_id).kids(page_ids).count(page_count);

        Ok(pdf.finish())
    }
}
