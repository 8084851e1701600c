//! Result renderer: turns an assessment into the visual report model.
//!
//! [`Report::render`] rewrites every part of the report from a single
//! [`AssessmentResult`]. It performs no I/O and is idempotent, so calling it
//! again with the same input leaves the report unchanged. Widgets only read
//! the model produced here.

use std::str::FromStr;

use passaudit_client::{AssessmentResult, MAX_RISK_SCORE};
use ratatui::style::Color;
use tracing::trace;

/// Full arc length of the score ring.
pub const RING_CIRCUMFERENCE: f64 = 339.292;

/// Dash offset of the ring arc for `score`: the full circumference at 0 and
/// nothing at 100. Scores above 100 are clamped.
pub fn ring_offset(score: u8) -> f64 {
    let score = f64::from(score.min(MAX_RISK_SCORE));
    RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * score / f64::from(MAX_RISK_SCORE)
}

/// Color supplied by the scoring service.
///
/// The raw value is kept verbatim; `color` is its terminal rendition when
/// the value can be represented.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RiskColor {
    raw: String,
    color: Option<Color>,
}

impl RiskColor {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let color = Color::from_str(raw.trim()).ok();
        Self { raw, color }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Terminal color, or `fallback` when the raw value is not representable.
    pub fn to_color(&self, fallback: Color) -> Color {
        self.color.unwrap_or(fallback)
    }

    /// RGB components, for outputs that only understand truecolor.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self.color {
            Some(Color::Rgb(r, g, b)) => Some((r, g, b)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRing {
    pub score: u8,
    pub offset: f64,
    pub stroke: RiskColor,
}

impl ScoreRing {
    fn new(score: u8, stroke: RiskColor) -> Self {
        Self {
            score,
            offset: ring_offset(score),
            stroke,
        }
    }

    /// Raw integer, no smoothing.
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }

    /// Share of the ring that is drawn, in `0.0..=1.0`.
    pub fn drawn_fraction(&self) -> f64 {
        (RING_CIRCUMFERENCE - self.offset) / RING_CIRCUMFERENCE
    }
}

impl Default for ScoreRing {
    fn default() -> Self {
        Self::new(0, RiskColor::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthBar {
    pub width_percent: u16,
    pub fill: RiskColor,
    pub glow: RiskColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelText {
    pub text: String,
    pub color: RiskColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckClass {
    Passed,
    Failed,
}

impl CheckClass {
    pub fn from_passed(passed: bool) -> Self {
        if passed { Self::Passed } else { Self::Failed }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}

/// Icon for a check, resolved from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckIcon {
    RulerHorizontal,
    Font,
    Hashtag,
    Asterisk,
    ShieldVirus,
    Clone,
    /// Used for any name outside the known set.
    CheckCircle,
}

impl CheckIcon {
    /// Exact-match lookup. Unknown names get [`CheckIcon::CheckCircle`].
    pub fn for_check(name: &str) -> Self {
        match name {
            "Length" => Self::RulerHorizontal,
            "Uppercase" | "Lowercase" => Self::Font,
            "Digits" => Self::Hashtag,
            "Special Characters" => Self::Asterisk,
            "Common Password" => Self::ShieldVirus,
            "No Repetition" => Self::Clone,
            _ => Self::CheckCircle,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::RulerHorizontal => "ruler-horizontal",
            Self::Font => "font",
            Self::Hashtag => "hashtag",
            Self::Asterisk => "asterisk",
            Self::ShieldVirus => "shield-virus",
            Self::Clone => "clone",
            Self::CheckCircle => "check-circle",
        }
    }

    /// Single-cell terminal symbol.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::RulerHorizontal => "↔",
            Self::Font => "A",
            Self::Hashtag => "#",
            Self::Asterisk => "*",
            Self::ShieldVirus => "⛨",
            Self::Clone => "⧉",
            Self::CheckCircle => "✓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub name: String,
    pub class: CheckClass,
    pub icon: CheckIcon,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Issue,
    Recommendation,
}

impl InsightKind {
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::Recommendation => "recommendation",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Issue => "⚠",
            Self::Recommendation => "💡",
        }
    }

    /// Text of the single entry shown for an empty list.
    pub fn placeholder(&self) -> String {
        format!("No {}s found. Good job!", self.noun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightEntry {
    Item(String),
    Placeholder(String),
}

impl InsightEntry {
    pub fn text(&self) -> &str {
        match self {
            Self::Item(text) | Self::Placeholder(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightList {
    pub kind: InsightKind,
    pub entries: Vec<InsightEntry>,
}

impl InsightList {
    fn empty(kind: InsightKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Replace the entries: one per item in order, or one placeholder.
    fn rebuild(&mut self, items: &[String]) {
        self.entries.clear();
        if items.is_empty() {
            self.entries
                .push(InsightEntry::Placeholder(self.kind.placeholder()));
            return;
        }
        self.entries
            .extend(items.iter().cloned().map(InsightEntry::Item));
    }
}

/// The complete visual report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub ring: ScoreRing,
    pub bar: StrengthBar,
    pub level: LevelText,
    pub checks: Vec<CheckEntry>,
    pub issues: InsightList,
    pub recommendations: InsightList,
    /// Issue badge, taken verbatim from the service's count.
    pub badge: String,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            ring: ScoreRing::default(),
            bar: StrengthBar::default(),
            level: LevelText::default(),
            checks: Vec::new(),
            issues: InsightList::empty(InsightKind::Issue),
            recommendations: InsightList::empty(InsightKind::Recommendation),
            badge: "0".to_string(),
        }
    }
}

impl Report {
    /// Build a report for `result` in one step.
    pub fn from_result(result: &AssessmentResult) -> Self {
        let mut report = Self::default();
        report.render(result);
        report
    }

    /// Rewrite the whole report from `result`.
    pub fn render(&mut self, result: &AssessmentResult) {
        let color = RiskColor::new(result.risk_color.as_str());
        let score = result.risk_score.min(MAX_RISK_SCORE);

        self.ring = ScoreRing::new(score, color.clone());

        self.bar = StrengthBar {
            width_percent: u16::from(score),
            fill: color.clone(),
            glow: color.clone(),
        };

        self.level = LevelText {
            text: result.risk_level.clone(),
            color,
        };

        self.checks.clear();
        self.checks.extend(result.checks.iter().map(|check| {
            let entry = CheckEntry {
                name: check.name.clone(),
                class: CheckClass::from_passed(check.passed),
                icon: CheckIcon::for_check(&check.name),
                message: check.message.clone(),
            };
            trace!(
                check = %entry.name,
                class = entry.class.as_str(),
                icon = entry.icon.id(),
                "check rendered"
            );
            entry
        }));

        self.issues.rebuild(&result.issues);
        self.recommendations.rebuild(&result.recommendations);

        self.badge = result.issue_count.to_string();
    }

    pub fn list(&self, kind: InsightKind) -> &InsightList {
        match kind {
            InsightKind::Issue => &self.issues,
            InsightKind::Recommendation => &self.recommendations,
        }
    }
}
