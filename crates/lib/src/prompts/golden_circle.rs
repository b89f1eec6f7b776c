//! # Golden Circle Prompts
//!
//! Default prompts for extracting a Golden Circle (Why, How, What) from
//! interview markdown. Both can be overridden per deployment through the
//! `golden_circle_extraction` task in `config.yml` or `prompt.yml`.

/// The system prompt for Golden Circle extraction.
pub const GOLDEN_CIRCLE_SYSTEM_PROMPT: &str = r#"You are a senior brand strategist. You read transcripts of stakeholder interviews and distill them into Simon Sinek's Golden Circle.
- "why": the purpose, belief, or cause. Why the brand exists.
- "how": the process or values. How the brand fulfills its purpose.
- "what": the products or services. What the brand actually does.
Also identify the brand's name if the interview states it.

Respond with a single JSON object and nothing else, using exactly this shape:
{"brand_name": "<name or null>", "golden_circle": {"why": "<text>", "how": "<text>", "what": "<text>"}}
Each of "why", "how" and "what" must be one to three complete sentences written in the same language as the interview. Do not add markdown fences or commentary."#;

/// The user prompt template. `{markdown_content}` is replaced with the extracted interview text.
pub const GOLDEN_CIRCLE_USER_PROMPT: &str = r#"# Interview Transcript
{markdown_content}

# Task
Extract the Golden Circle for the brand discussed in this interview."#;

/// The placeholder substituted with the interview text.
pub const MARKDOWN_CONTENT_PLACEHOLDER: &str = "{markdown_content}";
