//! The three canned coach replies.

use serde::{Deserialize, Serialize};

use crate::message::{CalloutTone, MessageContent, RichBlock, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    /// Career-pivot reframing: resume bullet, headline, upsell
    CareerPivot,
    /// Employment-gap reframing: repositioning language, upsell
    EmploymentGap,
    /// Generic encouragement
    Encouragement,
}

impl ReplyKind {
    pub fn all() -> &'static [ReplyKind] {
        &[
            ReplyKind::CareerPivot,
            ReplyKind::EmploymentGap,
            ReplyKind::Encouragement,
        ]
    }

    pub fn label(&self) -> &str {
        match self {
            ReplyKind::CareerPivot => "career pivot",
            ReplyKind::EmploymentGap => "employment gap",
            ReplyKind::Encouragement => "encouragement",
        }
    }

    /// Build the reply payload for this kind.
    pub fn payload(&self) -> MessageContent {
        match self {
            ReplyKind::CareerPivot => MessageContent::Rich(vec![
                RichBlock::paragraph(vec![
                    Span::strong("Perfect pivot!"),
                    Span::plain(
                        " Your 25 years leading regional teams is actually \"Scale Management\" in tech-speak.",
                    ),
                ]),
                RichBlock::callout(
                    "ATS Resume Rewrite:",
                    "\"Led 50-person cross-functional regional teams → Scaled Agile delivery \
                     efficiency by 40% using servant-leadership.\"",
                    CalloutTone::Primary,
                ),
                RichBlock::callout(
                    "LinkedIn Headline:",
                    "Seasoned Leader | Agile Transformation | 25+ Yrs Operational Results",
                    CalloutTone::Secondary,
                ),
                RichBlock::call_to_action("Want your full 10-page rebrand?"),
            ]),
            ReplyKind::EmploymentGap => MessageContent::Rich(vec![
                RichBlock::paragraph(vec![
                    Span::plain(
                        "A \"gap\" is only a gap if you call it one. For someone with 20+ years \
                         of experience, we reposition this as ",
                    ),
                    Span::strong("\"Strategic Sabbatical & Modernization Period.\""),
                ]),
                RichBlock::paragraph(vec![
                    Span::plain("We'll show you how to list your upskilling as an active role. "),
                    Span::italic("\"Interim Strategic Consultant & AI Adoption Specialist.\""),
                ]),
                RichBlock::call_to_action("Shall we start your resume refresh?"),
            ]),
            ReplyKind::Encouragement => MessageContent::Text(ENCOURAGEMENT.to_string()),
        }
    }
}

const ENCOURAGEMENT: &str = "That's a powerful foundation. Professionals over 50 are the \
'hidden giants' of the remote workforce. Your stakeholder management experience maps \
directly to high-value leadership roles. Ready to see the Skill Map?";
