use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{sync::LazyLock, time::Duration};
use thiserror::Error;

use crate::{
    interaction::TOAST_DURATION,
    reveal::{RevealConfig, RevealError, DEFAULT_THRESHOLD},
    typing::{Typewriter, TypingConfig, TypingError},
};

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("navigation item {0:?} has no anchor")]
    Anchor(String),
    #[error(transparent)]
    Typing(#[from] TypingError),
    #[error(transparent)]
    Reveal(#[from] RevealError),
}

/// The page content, parsed once from the embedded `portfolio.json`.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    GLOBAL_PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub identity: Identity,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub about: About,
    pub experience: Experience,
    pub skills: Vec<SkillGroup>,
    pub education: Vec<Credential>,
    pub contact: Contact,
    #[serde(default)]
    pub motion: Motion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub initials: String,
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub greeting: String,
    pub lead: String,
    pub phrases: Vec<String>,
    pub intro: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    #[default]
    Plain,
    Accent,
    Strong,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portrait {
    pub src: String,
    pub alt: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<Vec<Segment>>,
    pub highlights: Vec<String>,
    pub portrait: Portrait,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub period: Option<String>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gig {
    pub role: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub jobs: Vec<Job>,
    pub freelance: Vec<Gig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Code,
    Server,
    Pen,
    Graduation,
    Cloud,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Code => "</>",
            Glyph::Server => "▤",
            Glyph::Pen => "✎",
            Glyph::Graduation => "🎓",
            Glyph::Cloud => "☁",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub icon: Glyph,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub icon: Glyph,
    pub title: String,
    pub issuer: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phone {
    pub display: String,
    pub dial: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub kicker: String,
    pub blurb: String,
    pub email: String,
    pub phone: Phone,
    pub whatsapp: String,
    pub linkedin: String,
    pub website: String,
    pub credit: String,
}

/// Animation tuning. Every field falls back to the stock value when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    pub typing_speed_ms: u64,
    pub deleting_speed_ms: u64,
    pub pause_ms: u64,
    pub reveal_threshold: f64,
    pub toast_ms: u64,
}

impl Default for Motion {
    fn default() -> Self {
        let typing = TypingConfig::default();
        Self {
            typing_speed_ms: typing.typing_speed.as_millis() as u64,
            deleting_speed_ms: typing.deleting_speed.as_millis() as u64,
            pause_ms: typing.pause.as_millis() as u64,
            reveal_threshold: DEFAULT_THRESHOLD,
            toast_ms: TOAST_DURATION.as_millis() as u64,
        }
    }
}

impl Motion {
    pub fn typing(&self) -> TypingConfig {
        TypingConfig {
            typing_speed: Duration::from_millis(self.typing_speed_ms),
            deleting_speed: Duration::from_millis(self.deleting_speed_ms),
            pause: Duration::from_millis(self.pause_ms),
        }
    }

    pub fn reveal(&self) -> RevealConfig {
        RevealConfig {
            threshold: self.reveal_threshold,
            ..Default::default()
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        let text =
            std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        self.typewriter()?;
        self.motion.reveal().validate()?;
        if let Some(item) = self.nav.iter().find(|n| n.anchor.trim().is_empty()) {
            return Err(ContentError::Anchor(item.label.clone()));
        }
        Ok(())
    }

    /// A fresh animator over the hero phrases.
    pub fn typewriter(&self) -> Result<Typewriter, TypingError> {
        Typewriter::new(self.hero.phrases.iter().cloned(), self.motion.typing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(motion: &str, phrases: &str) -> String {
        format!(
            r##"{{
                "identity": {{ "name": "Test Person", "initials": "TP", "resume": "/resume.pdf" }},
                "nav": [{{ "label": "About", "anchor": "about" }}],
                "hero": {{ "greeting": "Hi", "lead": "I build", "phrases": {phrases}, "intro": "intro" }},
                "about": {{
                    "paragraphs": [[{{ "text": "Hello " }}, {{ "text": "world", "emphasis": "accent" }}]],
                    "highlights": ["Rust"],
                    "portrait": {{ "src": "/me.jpg", "alt": "me", "placeholder": "no photo" }}
                }},
                "experience": {{ "jobs": [], "freelance": [] }},
                "skills": [],
                "education": [],
                "contact": {{
                    "kicker": "Next", "blurb": "Say hi", "email": "a@b.c",
                    "phone": {{ "display": "1 2 3", "dial": "+123" }},
                    "whatsapp": "https://wa.me/123", "linkedin": "https://l.in", "website": "https://w.site",
                    "credit": "by me"
                }}
                {motion}
            }}"##
        )
    }

    #[test]
    fn test_embedded_portfolio_is_valid() {
        let portfolio = portfolio().expect("embedded portfolio should load");
        assert!(!portfolio.hero.phrases.is_empty());
        assert_eq!(portfolio.nav.len(), 4);
        assert!(portfolio.nav.iter().any(|n| n.href() == "#contact"));
        assert_eq!(portfolio.motion.toast_duration(), TOAST_DURATION);
        assert!(portfolio.experience.jobs[0].period.is_some());
        assert!(portfolio.experience.jobs[1].period.is_none());
    }

    #[test]
    fn test_motion_defaults_when_absent() {
        let portfolio = Portfolio::from_json(&sample("", r#"["a", "b"]"#)).unwrap();
        assert_eq!(portfolio.motion, Motion::default());
        assert_eq!(portfolio.motion.typing(), TypingConfig::default());
        assert_eq!(portfolio.about.paragraphs[0][0].emphasis, Emphasis::Plain);
        assert_eq!(portfolio.about.paragraphs[0][1].emphasis, Emphasis::Accent);
    }

    #[test]
    fn test_partial_motion_keeps_other_defaults() {
        let json = sample(r#", "motion": { "pause_ms": 0 }"#, r#"["a"]"#);
        let portfolio = Portfolio::from_json(&json).unwrap();
        assert_eq!(portfolio.motion.pause_ms, 0);
        assert_eq!(portfolio.motion.typing_speed_ms, 150);
        assert_eq!(portfolio.motion.reveal_threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_rejects_bad_content() {
        let err = Portfolio::from_json(&sample("", "[]")).unwrap_err();
        assert_eq!(err, ContentError::Typing(TypingError::NoPhrases));

        let json = sample(r#", "motion": { "typing_speed_ms": 0 }"#, r#"["a"]"#);
        assert_eq!(
            Portfolio::from_json(&json).unwrap_err(),
            ContentError::Typing(TypingError::ZeroSpeed)
        );

        let json = sample(r#", "motion": { "reveal_threshold": 2.0 }"#, r#"["a"]"#);
        assert!(matches!(
            Portfolio::from_json(&json),
            Err(ContentError::Reveal(RevealError::Threshold(_)))
        ));

        assert!(matches!(
            Portfolio::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            Portfolio::load("missing.json"),
            Err(ContentError::NotFound(_))
        ));
    }
}
