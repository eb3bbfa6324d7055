//! Static landing-page copy.

use serde::{Deserialize, Serialize};

pub const BRAND_NAME: &str = "Renew AI";
pub const BRAND_TAGLINE: &str = "Career Evolution";

pub const HERO_HEADLINE: &str = "Your Next Chapter";
pub const HERO_HEADLINE_ACCENT: &str = "Starts Here";
pub const HERO_SUBHEAD: &str = "You’ve spent decades building expertise. Renew AI helps you \
translate those skills into a flexible, remote role in today’s AI‑powered market.";
pub const HERO_KICKER: &str = "No reinvention, just repositioning.";
pub const HERO_CTA: &str = "Start Your 60‑Second Skill Map";
pub const HERO_IMAGE_ALT: &str = "Diverse group of senior professionals working together";
pub const HERO_BADGE: &str = "Active Collaboration";

pub const LEAD_MAGNET_LABEL: &str = "Get the LinkedIn Success Prompts PDF + Audio (Free)";
pub const EMAIL_PLACEHOLDER: &str = "your@email.com";
pub const EMAIL_SUBMIT: &str = "Send It to Me";
pub const EMAIL_CONFIRM_TITLE: &str = "Awesome!";
pub const EMAIL_CONFIRM_BODY: &str =
    "Check your inbox for the LinkedIn Success Prompts PDF + audio overview.";

pub const TRUST_LINE_PREFIX: &str = "Trusted by ";
pub const TRUST_LINE_COUNT: &str = "5,000+";
pub const TRUST_LINE_SUFFIX: &str = " experienced professionals.";
pub const PRESS_NAMES: &[&str] = &["FORBES", "WSJ", "TIME", "WIRED"];

pub const COACH_TITLE: &str = "Try the AI Coach";
pub const COACH_BLURB: &str = "Describe your current role and your goals. See how our AI \
translates your legacy experience into modern potential.";
pub const COACH_FOOTNOTE: &str = "Powered by Renew AI proprietary Career Analysis Engine.";
pub const COACH_HEADER: &str = "Renew AI Coach";
pub const COACH_LIVE: &str = "Live";
pub const COACH_THINKING: &str = "Coach is thinking...";
pub const COACH_INPUT_HINT: &str = "Type your career question...";
pub const COACH_SEND: &str = "Ask Renew AI";
pub const COACH_SECURE_NOTE: &str = "Encrypted & Secure · Career Analysis Engine";
pub const COACH_FULL_EXPERIENCE: &str = "Try the Full Experience";

/// A shortcut button under the coach blurb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// Text shown on the button
    pub label: &'static str,
    /// Text actually submitted to the session
    pub question: &'static str,
}

pub const SHORTCUTS: &[Shortcut] = &[
    Shortcut {
        label: "\"How do I explain a 2-year gap?\"",
        question: "How do I explain a 2-year gap?",
    },
    Shortcut {
        label: "\"Regional Manager to Agile?\"",
        question: "Regional Manager to Agile Product Owner?",
    },
];

pub const PRICING_TITLE: &str = "Invest in Your Next Chapter";
pub const PRICING_BLURB: &str = "Tailored career pivot tools designed specifically for the \
nuanced needs of experienced professionals 50+.";
pub const PRICING_FOOTNOTE: &str = "Cancel anytime · No hidden fees · Safe & Secure";
pub const PRICING_CTA: &str = "Get Started";

/// One pricing card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub badge: String,
    pub blurb: String,
    /// Display price including currency symbol
    pub price: String,
    pub cadence: Cadence,
    pub features: Vec<String>,
    /// Rendered with the "POPULAR" ribbon
    pub highlighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    OneTime,
    Monthly,
}

impl Cadence {
    pub fn label(&self) -> &str {
        match self {
            Cadence::OneTime => "One-Time",
            Cadence::Monthly => "/mo",
        }
    }
}

pub const POPULAR_RIBBON: &str = "POPULAR";

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            name: "Rebrand Bundle".to_string(),
            badge: "Starter".to_string(),
            blurb: "Complete eBooks + custom LinkedIn Prompts library.".to_string(),
            price: "$37".to_string(),
            cadence: Cadence::OneTime,
            features: vec!["eBooks & Guides".to_string(), "LinkedIn Library".to_string()],
            highlighted: false,
        },
        PricingTier {
            name: "Founding Member".to_string(),
            badge: "Best Value".to_string(),
            blurb: "Everything in Rebrand bundle plus full Early Access & AI Toolkit.".to_string(),
            price: "$29".to_string(),
            cadence: Cadence::Monthly,
            features: vec!["Early App Access".to_string(), "Renew AI Engine".to_string()],
            highlighted: true,
        },
        PricingTier {
            name: "VIP Pivot".to_string(),
            badge: "VIP".to_string(),
            blurb: "First 25 Founders: 1 Year Full Access".to_string(),
            price: "$297".to_string(),
            cadence: Cadence::OneTime,
            features: vec![
                "Complete eBooks + LinkedIn Prompts".to_string(),
                "Full Renew AI App Access (1 year)".to_string(),
                "1-on-1 Personalized Coaching".to_string(),
                "Priority Support + Lifetime Updates".to_string(),
            ],
            highlighted: false,
        },
    ]
}

pub const FOOTER_TAGLINE: &str = "Empowering Decades of Experience";
pub const FOOTER_LINKS: &[&str] = &["Privacy", "Terms", "Contact"];
pub const FOOTER_COPYRIGHT: &str = "© 2026 Renew AI. Built for the next chapter.";
