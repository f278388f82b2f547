//! Content suggestion capability.
//!
//! The editor asks an external service for slide content ideas: a topic
//! string goes in, an ordered list of suggestion strings comes out. The
//! transport lives behind [`SuggestionProvider`]; this module owns the
//! reply-shaping rules shared by every implementation.

use crate::BoxFuture;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Lines this short are headings or noise, not usable suggestions.
const MIN_SUGGESTION_LEN: usize = 10;

/// Leading `1. ` numbering on a reply line.
static NUMBERING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.\s*").unwrap());

/// Leading `* ` bullet on a reply line.
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\*\s*").unwrap());

/// Errors from the suggestion capability.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The topic was missing or blank.
    #[error("topic is required")]
    EmptyTopic,
    /// The upstream service failed.
    #[error("suggestion gateway error: {0}")]
    Gateway(String),
}

/// A capability that turns a topic into suggestion strings.
///
/// Implementations may call a hosted model, a local cache, or a test stub;
/// the deck editor does not care about the transport.
pub trait SuggestionProvider {
    /// Generate suggestions for a topic.
    fn generate(&self, topic: &str) -> BoxFuture<'_, Result<Vec<String>, SuggestError>>;
}

/// Shape a raw model reply into suggestion strings.
///
/// Splits into lines, strips leading numbering then bullet markup (in that
/// order, so `1. * point` loses both), trims, and discards anything of
/// [`MIN_SUGGESTION_LEN`] characters or fewer.
pub fn parse_suggestions(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let line = NUMBERING.replace(line, "");
            BULLET.replace(&line, "").trim().to_string()
        })
        .filter(|line| line.len() > MIN_SUGGESTION_LEN)
        .collect()
}
