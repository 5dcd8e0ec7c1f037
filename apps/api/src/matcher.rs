//! Similarity Matcher — scores a resume against job postings and ranks them.

use anyhow::Result;
use serde::Serialize;

use crate::embedding::{cosine_similarity, Embedder};
use crate::jobs::JobPosting;

/// Minimum raw similarity for a job to be retained.
const SIMILARITY_THRESHOLD: f32 = 0.4;
/// Maximum number of matches returned.
const MAX_MATCHES: usize = 5;

/// One ranked match. `similarity` is rounded to 2 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub job: JobPosting,
    pub similarity: f32,
}

/// The text a job is embedded from: title, description, and flattened skills.
pub fn composite_job_text(job: &JobPosting) -> String {
    format!(
        "{} {} {}",
        job.title,
        job.description,
        job.flattened_skills()
    )
}

/// Embeds the resume once, then every job's composite text, scoring each pair.
pub async fn score_jobs(
    embedder: &dyn Embedder,
    resume_text: &str,
    jobs: Vec<JobPosting>,
) -> Result<Vec<(JobPosting, f32)>> {
    let resume_vec = embedder.embed(resume_text).await?;
    let mut scored = Vec::with_capacity(jobs.len());
    for job in jobs {
        let job_vec = embedder.embed(&composite_job_text(&job)).await?;
        let similarity = cosine_similarity(&resume_vec, &job_vec);
        scored.push((job, similarity));
    }
    Ok(scored)
}

/// Filters, ranks, and truncates scored jobs.
///
/// Only jobs strictly above [`SIMILARITY_THRESHOLD`] are retained. The sort
/// is stable, so jobs with equal scores keep their original order. Rounding
/// to 2 decimals happens last, on the returned entries only.
pub fn rank_matches(scored: Vec<(JobPosting, f32)>) -> Vec<MatchResult> {
    let mut retained: Vec<(JobPosting, f32)> = scored
        .into_iter()
        .filter(|(_, score)| *score > SIMILARITY_THRESHOLD)
        .collect();
    retained.sort_by(|a, b| b.1.total_cmp(&a.1));
    retained
        .into_iter()
        .take(MAX_MATCHES)
        .map(|(job, score)| MatchResult {
            job,
            similarity: round2(score),
        })
        .collect()
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
