//! Job Source Client — fetches candidate job postings from the external API.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A job posting as supplied by the job source.
///
/// `skills` is kept loose: the source may send a list, a scalar, or nothing
/// at all. Unknown extra fields round-trip untouched so matches return the
/// posting exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl JobPosting {
    /// Skills flattened into one string: a space-joined list, a coerced
    /// scalar, or empty when absent.
    pub fn flattened_skills(&self) -> String {
        match &self.skills {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" "),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// Thin client over the job source endpoint.
#[derive(Clone)]
pub struct JobSourceClient {
    http: reqwest::Client,
    url: String,
}

impl JobSourceClient {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    /// Fetches the full candidate set. Failures propagate; the match
    /// handler turns them into its error response shape.
    pub async fn fetch_jobs(&self) -> Result<Vec<JobPosting>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("job source request to {} failed", self.url))?;
        if !response.status().is_success() {
            bail!("job source returned status {}", response.status());
        }
        response
            .json::<Vec<JobPosting>>()
            .await
            .context("job source returned malformed job records")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_skill_list() {
        let job: JobPosting = serde_json::from_value(json!({
            "title": "Backend Engineer",
            "description": "Build APIs",
            "skills": ["Rust", "Postgres"]
        }))
        .unwrap();
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.flattened_skills(), "Rust Postgres");
    }

    #[test]
    fn test_deserialize_with_scalar_skills() {
        let job: JobPosting = serde_json::from_value(json!({
            "title": "Analyst",
            "description": "",
            "skills": "SQL"
        }))
        .unwrap();
        assert_eq!(job.flattened_skills(), "SQL");
    }

    #[test]
    fn test_deserialize_with_absent_fields() {
        let job: JobPosting = serde_json::from_value(json!({})).unwrap();
        assert_eq!(job.title, "");
        assert_eq!(job.description, "");
        assert_eq!(job.flattened_skills(), "");
    }

    #[test]
    fn test_null_skills_flatten_to_empty() {
        let job: JobPosting = serde_json::from_value(json!({
            "title": "Ops",
            "skills": null
        }))
        .unwrap();
        assert_eq!(job.flattened_skills(), "");
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let input = json!({
            "title": "SRE",
            "description": "Keep it up",
            "skills": ["Linux"],
            "id": 7,
            "company": "Acme"
        });
        let job: JobPosting = serde_json::from_value(input.clone()).unwrap();
        let back = serde_json::to_value(&job).unwrap();
        assert_eq!(back, input);
    }
}
