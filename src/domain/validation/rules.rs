//! Named validation rules.
//!
//! Each rule checks a single candidate value and either passes or returns the
//! message to show next to the field. Structural rules are synchronous; the
//! image link rule is the only one that awaits a network round trip.

use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};
use url::Url;

use crate::domain::probe::ContentProbe;

static LEADING_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

/// Failure message produced by a rule.
pub type RuleResult = Result<(), String>;

/// A pure synchronous check.
pub trait SyncRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, value: &str) -> RuleResult;
}

/// A check that needs to suspend, e.g. for network I/O.
#[async_trait]
pub trait AsyncRule: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    async fn check(&self, value: &str) -> RuleResult;
}

/// A rule in a field's ordered rule list.
pub enum Rule {
    Sync(Box<dyn SyncRule>),
    Async(Box<dyn AsyncRule>),
}

impl Rule {
    pub fn sync(rule: impl SyncRule + 'static) -> Self {
        Self::Sync(Box::new(rule))
    }

    pub fn async_rule(rule: impl AsyncRule + 'static) -> Self {
        Self::Async(Box::new(rule))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Sync(rule) => rule.name(),
            Rule::Async(rule) => rule.name(),
        }
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Rule::Async(_))
    }
}

/// Fails when the value begins with whitespace.
pub struct NoLeadingWhitespace;

impl SyncRule for NoLeadingWhitespace {
    fn name(&self) -> &'static str {
        "no_leading_whitespace"
    }

    fn check(&self, value: &str) -> RuleResult {
        if LEADING_WHITESPACE.is_match(value) {
            return Err("Cannot start with whitespace".to_string());
        }
        Ok(())
    }
}

/// Fails when the value contains two or more consecutive whitespace characters.
pub struct SingleSpacesOnly;

impl SyncRule for SingleSpacesOnly {
    fn name(&self) -> &'static str {
        "single_spaces_only"
    }

    fn check(&self, value: &str) -> RuleResult {
        if WHITESPACE_RUN.is_match(value) {
            return Err("Only one space allowed between words".to_string());
        }
        Ok(())
    }
}

/// Fails unless the first character is an ASCII letter.
pub struct StartsWithLetter;

impl SyncRule for StartsWithLetter {
    fn name(&self) -> &'static str {
        "starts_with_letter"
    }

    fn check(&self, value: &str) -> RuleResult {
        match value.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => Ok(()),
            _ => Err("Must start with an alphabet".to_string()),
        }
    }
}

/// Inclusive character-count bounds.
pub struct Length {
    min: usize,
    max: Option<usize>,
    min_message: Option<&'static str>,
}

impl Length {
    pub fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
            min_message: None,
        }
    }

    pub fn at_least(min: usize) -> Self {
        Self {
            min,
            max: None,
            min_message: None,
        }
    }

    /// Overrides the message reported when the value is too short.
    pub fn with_min_message(mut self, message: &'static str) -> Self {
        self.min_message = Some(message);
        self
    }
}

impl SyncRule for Length {
    fn name(&self) -> &'static str {
        "length"
    }

    fn check(&self, value: &str) -> RuleResult {
        let len = value.chars().count();

        if len < self.min {
            return Err(match self.min_message {
                Some(message) => message.to_string(),
                None => format!("Must be at least {} characters", self.min),
            });
        }

        if let Some(max) = self.max
            && len > max
        {
            return Err(format!("Must be at most {} characters", max));
        }

        Ok(())
    }
}

/// Fails unless the value parses as an absolute URL.
pub struct UrlFormat;

impl SyncRule for UrlFormat {
    fn name(&self) -> &'static str {
        "url_format"
    }

    fn check(&self, value: &str) -> RuleResult {
        Url::parse(value)
            .map(|_| ())
            .map_err(|_| "Invalid URL format".to_string())
    }
}

/// Fails unless the remote resource declares an `image/*` content type.
///
/// Unreachable resources, missing headers and non-image types all produce the
/// same message.
pub struct ImageContentType {
    probe: Arc<dyn ContentProbe>,
}

impl ImageContentType {
    pub const MESSAGE: &'static str = "URL must point to a valid image";

    pub fn new(probe: Arc<dyn ContentProbe>) -> Self {
        Self { probe }
    }
}

#[async_trait]
impl AsyncRule for ImageContentType {
    fn name(&self) -> &'static str {
        "image_content_type"
    }

    async fn check(&self, value: &str) -> RuleResult {
        let Ok(url) = Url::parse(value) else {
            return Err(Self::MESSAGE.to_string());
        };

        match self.probe.content_type(&url).await {
            Some(content_type) if content_type.starts_with("image/") => Ok(()),
            Some(content_type) => {
                tracing::debug!(url = %url, %content_type, "link is not an image");
                Err(Self::MESSAGE.to_string())
            }
            None => {
                tracing::debug!(url = %url, "link probe returned no content type");
                Err(Self::MESSAGE.to_string())
            }
        }
    }
}
