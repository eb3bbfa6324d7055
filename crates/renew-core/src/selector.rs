//! Canned-reply selection.
//!
//! Rules are tried top-down and the first match wins. Matching is a
//! case-insensitive substring test against any of a rule's keywords.

use renew_types::message::MessageContent;
use renew_types::reply::ReplyKind;

/// One (predicate, payload) pair in the selection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRule {
    pub kind: ReplyKind,
    /// Lowercase keywords; any one of them matches
    pub keywords: Vec<&'static str>,
}

impl ReplyRule {
    pub fn new(kind: ReplyKind, keywords: &[&'static str]) -> Self {
        Self {
            kind,
            keywords: keywords.to_vec(),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        let lowered = input.to_lowercase();
        self.matches_lowered(&lowered)
    }

    fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered.contains(&k.to_lowercase()))
    }
}

/// Ordered rule list plus the fallback used when nothing matches
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    rules: Vec<ReplyRule>,
    fallback: ReplyKind,
}

impl ResponseSelector {
    pub fn new() -> Self {
        Self::with_rules(
            vec![
                // "regional manager" and "agile" share one payload
                ReplyRule::new(ReplyKind::CareerPivot, &["regional manager", "agile"]),
                ReplyRule::new(ReplyKind::EmploymentGap, &["gap"]),
            ],
            ReplyKind::Encouragement,
        )
    }

    pub fn with_rules(rules: Vec<ReplyRule>, fallback: ReplyKind) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }

    pub fn fallback(&self) -> ReplyKind {
        self.fallback
    }

    /// Pick the reply kind for `input`. Total over all strings.
    pub fn select(&self, input: &str) -> ReplyKind {
        let lowered = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches_lowered(&lowered))
            .map(|rule| rule.kind)
            .unwrap_or(self.fallback)
    }

    pub fn reply_for(&self, input: &str) -> MessageContent {
        self.select(input).payload()
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new()
    }
}
