//! Structured descriptors for template placeholders.
//!
//! A placeholder such as `{d+2,^upWord}` is parsed into a [`DynamicValue`], a closed sum type
//! with one variant per placeholder kind. Optional fields stay `None` when the matching modifier
//! was not used; the `*_or_default` accessors supply the documented defaults at render time.
//!
//! # Public API
//! - [`DynamicValue`]: Tagged union of all placeholder kinds
//! - [`DirectoryNameValue`], [`GitReferenceValue`], [`InputValue`], [`TimeValue`]: Variants
//! - [`InputWordFormat`], [`WordCasing`], [`GitReferenceType`]: Closed option sets
//! - [`TimeRound`], [`TimeUnit`], [`RoundDirection`]: Time rounding request
//!
//! # Serialization
//! Descriptors serialize to the same JSON shape the template language documents, e.g.
//! `{"type":"directory-name","directoryOffset":1}` or `{"type":"time","round":[5,"minutes","up"]}`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DIRECTORY_OFFSET: i64 = 0;
pub const DEFAULT_OUTPUT_WORD_JOINER: &str = " ";
pub const DEFAULT_TIME_OFFSET: i64 = 0;
pub const DEFAULT_TIME_FORMAT: &str = "[HH]:[MM]";

/// Largest integer that survives a round trip through an IEEE double, the bound numeric
/// modifiers are checked against.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DynamicValue {
    DirectoryName(DirectoryNameValue),
    GitReference(GitReferenceValue),
    Input(InputValue),
    Time(TimeValue),
}

impl DynamicValue {
    /// The one-letter tag that introduces this kind inside a template
    pub fn type_tag(&self) -> char {
        match self {
            DynamicValue::DirectoryName(_) => 'd',
            DynamicValue::GitReference(_) => 'g',
            DynamicValue::Input(_) => 'i',
            DynamicValue::Time(_) => 't',
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryNameValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_word_format: Option<InputWordFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reformat_word_casing: Option<WordCasing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_word_joiner: Option<String>,
}

impl DirectoryNameValue {
    pub fn directory_offset_or_default(&self) -> i64 {
        self.directory_offset.unwrap_or(DEFAULT_DIRECTORY_OFFSET)
    }

    pub fn input_word_format_or_default(&self) -> InputWordFormat {
        self.input_word_format.unwrap_or_default()
    }

    pub fn reformat_word_casing_or_default(&self) -> WordCasing {
        self.reformat_word_casing.unwrap_or_default()
    }

    pub fn output_word_joiner_or_default(&self) -> &str {
        self.output_word_joiner
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_WORD_JOINER)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitReferenceValue {
    pub reference_type: GitReferenceType,
}

/// Prompt-for-value placeholder. At most one of the two lists is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    /// Allowed values, no freeform input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mandatory_values: Option<Vec<String>>,
    /// Suggested values, freeform input allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeValue {
    /// Offset from "now" in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<TimeRound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl TimeValue {
    pub fn offset_or_default(&self) -> i64 {
        self.offset.unwrap_or(DEFAULT_TIME_OFFSET)
    }

    pub fn format_or_default(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }
}

/// How a directory name is split into words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputWordFormat {
    Camel,
    Kebab,
    Pascal,
    Snake,
    #[default]
    Space,
    NoSplitting,
}

impl InputWordFormat {
    pub const TAGS: [&'static str; 6] = ["camel", "kebab", "no-splitting", "pascal", "snake", "space"];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "camel" => Some(Self::Camel),
            "kebab" => Some(Self::Kebab),
            "pascal" => Some(Self::Pascal),
            "snake" => Some(Self::Snake),
            "space" => Some(Self::Space),
            "no-splitting" => Some(Self::NoSplitting),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::Space => "space",
            Self::NoSplitting => "no-splitting",
        }
    }
}

impl fmt::Display for InputWordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the casing of directory name words is rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordCasing {
    Low,
    #[default]
    Unchanged,
    Up,
    UpFirst,
    UpWord,
    UpWordExceptFirst,
}

impl WordCasing {
    pub const TAGS: [&'static str; 6] = [
        "low",
        "unchanged",
        "up",
        "upFirst",
        "upWord",
        "upWordExceptFirst",
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "low" => Some(Self::Low),
            "unchanged" => Some(Self::Unchanged),
            "up" => Some(Self::Up),
            "upFirst" => Some(Self::UpFirst),
            "upWord" => Some(Self::UpWord),
            "upWordExceptFirst" => Some(Self::UpWordExceptFirst),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Unchanged => "unchanged",
            Self::Up => "up",
            Self::UpFirst => "upFirst",
            Self::UpWord => "upWord",
            Self::UpWordExceptFirst => "upWordExceptFirst",
        }
    }
}

impl fmt::Display for WordCasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GitReferenceType {
    Branch,
    Commit,
}

impl GitReferenceType {
    pub const TAGS: [&'static str; 2] = ["branch", "commit"];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "branch" => Some(Self::Branch),
            "commit" => Some(Self::Commit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hours,
    Minutes,
}

impl TimeUnit {
    /// Length of one unit in seconds
    pub fn seconds(&self) -> i64 {
        match self {
            TimeUnit::Hours => 60 * 60,
            TimeUnit::Minutes => 60,
        }
    }

    /// How many units fit into the next larger unit (hours per day, minutes per hour)
    pub fn units_per_parent(&self) -> u32 {
        match self {
            TimeUnit::Hours => 24,
            TimeUnit::Minutes => 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundDirection {
    /// Half away from zero
    Nearest,
    Up,
    Down,
}

/// Round to a multiple of `increment` units. Serialized as `[increment, unit, direction]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(u32, TimeUnit, RoundDirection)",
    into = "(u32, TimeUnit, RoundDirection)"
)]
pub struct TimeRound {
    pub increment: u32,
    pub unit: TimeUnit,
    pub direction: RoundDirection,
}

impl TimeRound {
    pub fn new(increment: u32, unit: TimeUnit, direction: RoundDirection) -> Self {
        Self {
            increment,
            unit,
            direction,
        }
    }

    /// The increment must be at least one, smaller than the parent unit and divide it evenly.
    pub fn is_valid(&self) -> bool {
        let range = self.unit.units_per_parent();
        self.increment >= 1 && self.increment < range && range % self.increment == 0
    }
}

impl From<(u32, TimeUnit, RoundDirection)> for TimeRound {
    fn from((increment, unit, direction): (u32, TimeUnit, RoundDirection)) -> Self {
        Self::new(increment, unit, direction)
    }
}

impl From<TimeRound> for (u32, TimeUnit, RoundDirection) {
    fn from(round: TimeRound) -> Self {
        (round.increment, round.unit, round.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_value_json_shape() -> serde_json::Result<()> {
        let value = DynamicValue::DirectoryName(DirectoryNameValue {
            directory_offset: Some(1),
            input_word_format: Some(InputWordFormat::NoSplitting),
            reformat_word_casing: Some(WordCasing::UpWordExceptFirst),
            ..Default::default()
        });

        let json = serde_json::to_value(&value)?;
        assert_eq!(
            json,
            serde_json::json!({
                "type": "directory-name",
                "directoryOffset": 1,
                "inputWordFormat": "no-splitting",
                "reformatWordCasing": "upWordExceptFirst",
            })
        );
        Ok(())
    }

    #[test]
    fn test_time_round_serializes_as_tuple() -> serde_json::Result<()> {
        let value = DynamicValue::Time(TimeValue {
            round: Some(TimeRound::new(1, TimeUnit::Hours, RoundDirection::Down)),
            ..Default::default()
        });

        let json = serde_json::to_string(&value)?;
        assert_eq!(json, r#"{"type":"time","round":[1,"hours","down"]}"#);

        let back: DynamicValue = serde_json::from_str(&json)?;
        assert_eq!(back, value);
        Ok(())
    }

    #[test]
    fn test_programmatic_descriptor_from_json() -> serde_json::Result<()> {
        let value: DynamicValue =
            serde_json::from_str(r#"{"type":"git-reference","referenceType":"commit"}"#)?;
        assert_eq!(
            value,
            DynamicValue::GitReference(GitReferenceValue {
                reference_type: GitReferenceType::Commit
            })
        );
        assert_eq!(value.type_tag(), 'g');
        Ok(())
    }

    #[test]
    fn test_defaults() {
        let dir = DirectoryNameValue::default();
        assert_eq!(dir.directory_offset_or_default(), 0);
        assert_eq!(dir.input_word_format_or_default(), InputWordFormat::Space);
        assert_eq!(dir.reformat_word_casing_or_default(), WordCasing::Unchanged);
        assert_eq!(dir.output_word_joiner_or_default(), " ");

        let time = TimeValue::default();
        assert_eq!(time.offset_or_default(), 0);
        assert_eq!(time.format_or_default(), "[HH]:[MM]");
    }

    #[test]
    fn test_tags_round_trip() {
        for tag in InputWordFormat::TAGS {
            assert_eq!(InputWordFormat::from_tag(tag).map(|f| f.as_str()), Some(tag));
        }
        for tag in WordCasing::TAGS {
            assert_eq!(WordCasing::from_tag(tag).map(|c| c.as_str()), Some(tag));
        }
        assert_eq!(InputWordFormat::from_tag("Camel"), None);
        assert_eq!(WordCasing::from_tag("UP"), None);
    }

    #[test]
    fn test_round_validity() {
        assert!(TimeRound::new(1, TimeUnit::Minutes, RoundDirection::Nearest).is_valid());
        assert!(TimeRound::new(15, TimeUnit::Minutes, RoundDirection::Up).is_valid());
        assert!(TimeRound::new(6, TimeUnit::Hours, RoundDirection::Down).is_valid());
        assert!(!TimeRound::new(60, TimeUnit::Minutes, RoundDirection::Up).is_valid());
        assert!(!TimeRound::new(7, TimeUnit::Minutes, RoundDirection::Up).is_valid());
        assert!(!TimeRound::new(0, TimeUnit::Hours, RoundDirection::Up).is_valid());
        assert!(!TimeRound::new(24, TimeUnit::Hours, RoundDirection::Up).is_valid());
    }
}
