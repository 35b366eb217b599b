//! Parser backends. The rule-based engine is the default; alternative
//! extraction strategies plug in behind the same trait.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::parse;
use crate::models::resume::ParsedResume;

/// Carried in `AppState` as `Arc<dyn ResumeParser>`.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    /// Short identifier reported alongside results.
    fn backend_id(&self) -> &str;

    async fn parse(&self, text: &str) -> Result<ParsedResume, AppError>;
}

/// Deterministic pattern-matching parser. Never returns an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

pub const RULE_BASED_BACKEND: &str = "rule-based";

#[async_trait]
impl ResumeParser for RuleBasedParser {
    fn backend_id(&self) -> &str {
        RULE_BASED_BACKEND
    }

    async fn parse(&self, text: &str) -> Result<ParsedResume, AppError> {
        Ok(parse(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rule_based_matches_engine() {
        let text = "Jane Doe\njane@x.com\nSkills\nRust, Go";
        let parsed = RuleBasedParser.parse(text).await.unwrap();
        assert_eq!(parsed, parse(text));
    }

    #[tokio::test]
    async fn test_blank_text_is_not_an_error() {
        let parsed = RuleBasedParser.parse("   ").await.unwrap();
        assert_eq!(parsed, ParsedResume::empty());
    }

    #[test]
    fn test_backend_id() {
        assert_eq!(RuleBasedParser.backend_id(), "rule-based");
    }
}
