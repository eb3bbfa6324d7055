use serde::{Deserialize, Serialize};

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the coach conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
    /// RFC3339 timestamp, set when the message is appended
    pub created_at: String,
}

/// Content of a message: plain text or structured rich blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Rich(Vec<RichBlock>),
}

impl MessageContent {
    /// Flatten into a single string, one line per block.
    pub fn plain_text(&self) -> String {
        match self {
            MessageContent::Text(s) => s.clone(),
            MessageContent::Rich(blocks) => blocks
                .iter()
                .map(RichBlock::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.plain_text().contains(needle)
    }
}

/// One block of a rich assistant reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichBlock {
    Paragraph { spans: Vec<Span> },
    /// Labelled highlight box, e.g. "ATS Resume Rewrite:"
    Callout { label: String, body: String, tone: CalloutTone },
    /// The closing upsell line
    CallToAction { text: String },
}

impl RichBlock {
    pub fn paragraph(spans: Vec<Span>) -> Self {
        RichBlock::Paragraph { spans }
    }

    pub fn callout(label: impl Into<String>, body: impl Into<String>, tone: CalloutTone) -> Self {
        RichBlock::Callout {
            label: label.into(),
            body: body.into(),
            tone,
        }
    }

    pub fn call_to_action(text: impl Into<String>) -> Self {
        RichBlock::CallToAction { text: text.into() }
    }

    pub fn plain_text(&self) -> String {
        match self {
            RichBlock::Paragraph { spans } => spans.iter().map(|s| s.text.as_str()).collect(),
            RichBlock::Callout { label, body, .. } => format!("{} {}", label, body),
            RichBlock::CallToAction { text } => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutTone {
    Primary,
    Secondary,
}

/// A run of text with a single emphasis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Plain,
    Strong,
    Italic,
    Accent,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Plain }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Strong }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Italic }
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self { text: text.into(), emphasis: Emphasis::Accent }
    }
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: MessageContent::Text(text.into()),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn assistant(content: MessageContent) -> Self {
        Self {
            role: Role::Assistant,
            content,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn assistant_text(text: impl Into<String>) -> Self {
        Self::assistant(MessageContent::Text(text.into()))
    }
}
