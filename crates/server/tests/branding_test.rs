//! # Branding Endpoint Tests
//!
//! End-to-end tests for `/api/v1/branding/*`, running the real router with the
//! real PDF extractor and an `httpmock` stand-in for the AI provider.

mod common;

use anyhow::Result;
use common::{golden_circle_json, interview_form, interview_pdf, TestApp, CREATE_PATH};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

fn assert_golden_circle_filled(body: &Value) {
    for field in ["why", "how", "what"] {
        let value = body["golden_circle"][field]
            .as_str()
            .unwrap_or_else(|| panic!("missing golden_circle.{field} in {body}"));
        assert!(value.len() > 10, "golden_circle.{field} is too short: {value:?}");
    }
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let response = app
        .client
        .get(app.url("/api/v1/branding/health"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({"status": "healthy", "service": "branding"}));
    Ok(())
}

#[tokio::test]
async fn test_supported_formats_endpoint() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let response = app
        .client
        .get(app.url("/api/v1/branding/supported-formats"))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({
            "supported_formats": [
                {"extension": ".pdf", "mime_type": "application/pdf", "description": "PDF documents"}
            ],
            "max_file_size": "10MB",
            "encoding": "UTF-8"
        })
    );
    Ok(())
}

#[tokio::test]
async fn test_create_uses_inferred_brand_name() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_completion(&golden_circle_json(Some("Olillac Skincare")));

    let form = interview_form("Olillac_interview.pdf", "application/pdf", interview_pdf()?, None)?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Olillac Skincare");
    assert_eq!(
        body["golden_circle"]["what"],
        "Olillac makes skincare for sensitive skin."
    );
    ai_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_override_wins_over_inferred_name() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_completion(&golden_circle_json(Some("Inferred Name")));

    let form = interview_form(
        "Olillac_interview.pdf",
        "application/pdf",
        interview_pdf()?,
        Some("Olillac Paris"),
    )?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Olillac Paris");
    ai_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_falls_back_without_retry() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_failure(500);

    let form = interview_form("Olillac_interview.pdf", "application/pdf", interview_pdf()?, None)?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Olillac");
    assert_golden_circle_filled(&body);
    ai_mock.assert_hits(1);
    Ok(())
}

#[tokio::test]
async fn test_malformed_model_output_falls_back() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_completion("I am unable to produce JSON today.");

    let form = interview_form(
        "Olillac_interview.pdf",
        "application/pdf",
        interview_pdf()?,
        Some("Olillac"),
    )?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Olillac");
    assert_golden_circle_filled(&body);
    ai_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_heuristic_only_olillac_interview() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let form = interview_form("Olillac_interview.pdf", "application/pdf", interview_pdf()?, None)?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Olillac");
    assert_golden_circle_filled(&body);
    Ok(())
}

#[tokio::test]
async fn test_fields_accepted_in_any_order() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let part = Part::bytes(interview_pdf()?)
        .file_name("Olillac_interview.pdf")
        .mime_str("application/pdf")?;
    let form = Form::new()
        .text("brand_name", "Maison Olillac")
        .text("campaign", "spring")
        .part("interview_file", part);
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Maison Olillac");
    Ok(())
}

#[tokio::test]
async fn test_empty_brand_name_uses_filename() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let form = interview_form(
        "awesome_brand_interview.pdf",
        "application/pdf",
        interview_pdf()?,
        Some(""),
    )?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "Awesome Brand");
    Ok(())
}

#[tokio::test]
async fn test_whitespace_brand_name_is_returned_verbatim() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let form = interview_form(
        "awesome_brand_interview.pdf",
        "application/pdf",
        interview_pdf()?,
        Some("   "),
    )?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["brand_name"], "   ");
    assert_golden_circle_filled(&body);
    Ok(())
}

#[tokio::test]
async fn test_unsupported_file_type_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_completion(&golden_circle_json(None));

    let form = interview_form("photo.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0], None)?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await?;
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.contains("Unsupported file type"), "detail: {detail}");
    ai_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_part_is_unprocessable() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let form = Form::new().text("brand_name", "Olillac");
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await?;
    assert!(body["detail"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn test_non_multipart_body_is_unprocessable() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let response = app
        .client
        .post(app.url(CREATE_PATH))
        .json(&json!({"interview_file": "not a file"}))
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 422);
    Ok(())
}

#[tokio::test]
async fn test_empty_pdf_is_rejected() -> Result<()> {
    let app = TestApp::spawn().await?;
    let ai_mock = app.mock_chat_completion(&golden_circle_json(None));

    let form = interview_form("empty_interview.pdf", "application/pdf", Vec::new(), None)?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await?;
    let detail = body["detail"].as_str().unwrap_or_default();
    assert!(detail.contains("Failed to extract text"), "detail: {detail}");
    ai_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_corrupt_pdf_is_rejected() -> Result<()> {
    let app = TestApp::spawn_heuristic_only().await?;

    let form = interview_form(
        "broken_interview.pdf",
        "application/pdf",
        b"this is not a pdf".to_vec(),
        None,
    )?;
    let response = app.upload(form).await?;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await?;
    assert_eq!(
        body["detail"],
        "Failed to extract text from PDF. Ensure the PDF is readable."
    );
    Ok(())
}
