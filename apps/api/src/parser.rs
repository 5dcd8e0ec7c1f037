//! Field Parser — heuristic extraction of structured fields from resume text.
//!
//! Parsing is a pure function of the line sequence: identical input always
//! yields an identical record, and the first qualifying line or section in
//! document order always wins. Non-English section headers and multi-column
//! layouts are unsupported; the parser only sees flat lines.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder for fields with no qualifying content.
pub const NOT_FOUND: &str = "Not found";

/// Maximum number of skills returned per resume.
const MAX_SKILLS: usize = 10;
/// Number of lines scanned after a skills heading.
const SKILLS_WINDOW: usize = 7;

/// Structured record extracted from one resume document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub experience: String,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap())
}

/// Parses the full extracted text into a [`ResumeRecord`].
pub fn parse_resume_text(text: &str) -> ResumeRecord {
    let lines: Vec<&str> = text.lines().collect();
    ResumeRecord {
        name: extract_name(&lines),
        email: extract_email(text),
        skills: extract_skills(&lines),
        experience: extract_experience(&lines),
    }
}

/// First email-like substring in document order.
fn extract_email(text: &str) -> String {
    email_regex()
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// First line that looks like a person's name: at least two tokens, no
/// contact keywords, no "@", no digits.
fn extract_name(lines: &[&str]) -> String {
    for line in lines {
        let clean = line.trim();
        if clean.is_empty() {
            continue;
        }
        let lower = clean.to_lowercase();
        if clean.split_whitespace().count() >= 2
            && !lower.contains("email")
            && !lower.contains("phone")
            && !clean.contains('@')
            && !clean.chars().any(|c| c.is_ascii_digit())
        {
            return clean.to_string();
        }
    }
    NOT_FOUND.to_string()
}

/// Skills from the first "Skills" or "Additional Information" section.
///
/// Up to [`SKILLS_WINDOW`] lines after the heading are collected, stopping
/// early at the next section heading. The block is split on commas and
/// newlines; fragments of a single character are discarded and the result
/// is capped at [`MAX_SKILLS`].
fn extract_skills(lines: &[&str]) -> Vec<String> {
    const STOP_KEYWORDS: [&str; 4] = ["education", "projects", "experience", "certification"];

    for (i, line) in lines.iter().enumerate() {
        let lower = line.to_lowercase();
        if !lower.contains("skills") && !lower.contains("additional information") {
            continue;
        }
        let mut block = Vec::new();
        for next in lines.iter().skip(i + 1).take(SKILLS_WINDOW) {
            let next_lower = next.to_lowercase();
            if STOP_KEYWORDS.iter().any(|kw| next_lower.contains(kw)) {
                break;
            }
            block.push(*next);
        }
        let flat = block.join(" ");
        return flat
            .split(|c| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|s| s.chars().count() > 1)
            .take(MAX_SKILLS)
            .map(str::to_string)
            .collect();
    }
    Vec::new()
}

/// Experience body from the first "Experience" (or "Professional
/// Experience") section, collected until the next section heading or the
/// end of the document.
fn extract_experience(lines: &[&str]) -> String {
    const STOP_KEYWORDS: [&str; 5] = [
        "projects",
        "education",
        "skills",
        "certifications",
        "additional information",
    ];

    for (i, line) in lines.iter().enumerate() {
        // "professional experience" is covered by the substring match.
        if !line.trim().to_lowercase().contains("experience") {
            continue;
        }
        let mut collected = Vec::new();
        for next in &lines[i + 1..] {
            let next_lower = next.trim().to_lowercase();
            if STOP_KEYWORDS.iter().any(|kw| next_lower.contains(kw)) {
                break;
            }
            collected.push(next.trim());
        }
        let joined = collected.join("\n").trim().to_string();
        return if joined.is_empty() {
            NOT_FOUND.to_string()
        } else {
            joined
        };
    }
    NOT_FOUND.to_string()
}
