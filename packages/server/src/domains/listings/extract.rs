//! Lenient extraction of a subject/body pair from free-form model output.
//!
//! The email prompt asks for JSON, but nothing guarantees the model
//! complies. Extraction is an explicit ordered chain of parse attempts;
//! the final rung always succeeds, so a malformed response never becomes
//! a hard error.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::format::format_bathrooms;
use super::models::{EmailContent, PropertyRecord};

lazy_static! {
    /// First brace-delimited block in the response, spanning lines.
    static ref JSON_BLOCK: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
    /// "subject" label (with optional colon) on a heuristic subject line.
    static ref SUBJECT_LABEL: Regex = Regex::new(r"(?i)subject:?").unwrap();
}

/// How the subject/body pair was recovered from the raw response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailParse {
    /// A brace-delimited JSON block with `subject` and `body` keys parsed
    /// cleanly.
    StructuredMatch(EmailContent),
    /// Subject and body recovered from labeled lines.
    HeuristicMatch(EmailContent),
    /// Nothing recognizable; synthesized subject plus the raw text as body.
    RawFallback(EmailContent),
}

impl EmailParse {
    /// The parsed content, regardless of which rung produced it.
    pub fn into_content(self) -> EmailContent {
        match self {
            EmailParse::StructuredMatch(content)
            | EmailParse::HeuristicMatch(content)
            | EmailParse::RawFallback(content) => content,
        }
    }
}

#[derive(Deserialize)]
struct EmailJson {
    subject: String,
    body: String,
}

/// Parse the raw email response.
///
/// Tries, in order: a JSON block, labeled subject/body lines, and a
/// synthesized fallback built from the record's bedroom/bathroom counts.
/// Never fails.
pub fn parse_email(raw: &str, record: &PropertyRecord) -> EmailParse {
    if let Some(content) = try_structured(raw) {
        return EmailParse::StructuredMatch(content);
    }
    if let Some(content) = try_heuristic(raw) {
        return EmailParse::HeuristicMatch(content);
    }
    EmailParse::RawFallback(raw_fallback(raw, record))
}

fn try_structured(raw: &str) -> Option<EmailContent> {
    let block = JSON_BLOCK.find(raw)?;
    let parsed: EmailJson = serde_json::from_str(block.as_str()).ok()?;
    Some(EmailContent {
        subject: parsed.subject,
        body: parsed.body,
    })
}

fn try_heuristic(raw: &str) -> Option<EmailContent> {
    let lines = non_empty_lines(raw);
    let subject_line = lines
        .iter()
        .find(|line| line.to_lowercase().contains("subject"))?;
    let subject = SUBJECT_LABEL
        .replace(subject_line, "")
        .trim()
        .replace(['\'', '"'], "");

    // The body starts after the first line mentioning "body" or "email".
    // When no marker line exists, every line is taken: the original
    // implementation sliced from `marker_index + 1` with the index pinned
    // at -1, which resolves to the whole list. That quirk is kept.
    let body_start = lines.iter().position(|line| {
        let lower = line.to_lowercase();
        lower.contains("body") || lower.contains("email")
    });
    let body = match body_start {
        Some(index) => lines[index + 1..].join("\n"),
        None => lines.join("\n"),
    };

    Some(EmailContent {
        subject,
        body: body.trim().to_string(),
    })
}

fn raw_fallback(raw: &str, record: &PropertyRecord) -> EmailContent {
    EmailContent {
        subject: format!(
            "🏠 Don't Miss This {}BR/{}BA Home!",
            record.bedrooms,
            format_bathrooms(record.bathrooms)
        ),
        body: non_empty_lines(raw).join("\n").trim().to_string(),
    }
}

fn non_empty_lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
