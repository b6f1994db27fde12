//! Skill Query — asks the model which skills a job title requires and returns
//! the answer text unmodified.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::{prompts::fill_template, LlmClient, LlmError, SamplingParams};

pub mod handlers;

/// Replace `{job_title}` before sending.
pub const SKILLS_PROMPT_TEMPLATE: &str = "List the most important skills required to be a \
    {job_title} in the current job market. Include technical and soft skills.";

pub const SKILLS_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.7,
    max_tokens: None,
};

pub fn build_skills_prompt(job_title: &str) -> String {
    fill_template(SKILLS_PROMPT_TEMPLATE, &[("job_title", job_title)])
}

/// Returns the model's answer for `job_title`.
///
/// A non-success status from the provider is not an error here: it becomes the
/// displayed text `"Error: <status> - <body>"`. Transport failures are errors.
pub async fn get_job_skills(llm: &LlmClient, job_title: &str) -> Result<String, AppError> {
    let job_title = job_title.trim();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }

    info!(job_title, model = llm.model(), "Querying required skills");

    match llm.call(&build_skills_prompt(job_title), SKILLS_SAMPLING).await {
        Ok(text) => Ok(text),
        Err(LlmError::Api { status, body }) => {
            warn!(status, "Skill query returned a non-success status");
            Ok(format!("Error: {status} - {body}"))
        }
        Err(e) => Err(AppError::Llm(format!("Skill query failed: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(&ProviderConfig {
            api_url: format!("{}/chat/completions", server.uri()),
            api_key: "k".to_string(),
            model: "skills-model".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_prompt_names_the_job_title() {
        let prompt = build_skills_prompt("Data Engineer");
        assert_eq!(
            prompt,
            "List the most important skills required to be a Data Engineer in the current \
             job market. Include technical and soft skills."
        );
    }

    #[tokio::test]
    async fn test_answer_is_returned_verbatim() {
        let server = MockServer::start().await;
        let text = "**Technical**\n- SQL\n- Spark\n\n**Soft**\n- Communication  ";
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "messages": [{"role": "user", "content": build_skills_prompt("Data Engineer")}],
                "temperature": 0.7
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": text}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let skills = get_job_skills(&client_for(&server), "Data Engineer").await.unwrap();
        assert_eq!(skills, text);
    }

    #[tokio::test]
    async fn test_rate_limit_is_displayed_inline() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(429).set_body_string(r#"{"error":"quota exceeded"}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let skills = get_job_skills(&client_for(&server), "Nurse").await.unwrap();
        assert_eq!(skills, r#"Error: 429 - {"error":"quota exceeded"}"#);
    }

    #[tokio::test]
    async fn test_blank_answer_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": ""}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let skills = get_job_skills(&client_for(&server), "Pilot").await.unwrap();
        assert_eq!(skills, "");
    }

    #[tokio::test]
    async fn test_blank_title_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = get_job_skills(&client_for(&server), "   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
