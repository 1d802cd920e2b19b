//! Delimiter rule selection

use std::fmt;
use std::str::FromStr;

/// The policy that decides how a text is blasted into segments.
///
/// The four built-in rules are backed by fixed patterns that are known to
/// compile. `Custom` carries a caller-authored regular expression and is the
/// only way an externally supplied pattern enters the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DelimiterRule {
    /// Every character except line terminators
    All,
    /// Every non-whitespace character, with surrounding whitespace folded
    /// into the same segment
    Character,
    /// Runs of non-whitespace characters with surrounding whitespace
    #[default]
    Word,
    /// Phrases ending in terminal punctuation or at the end of the text
    Sentence,
    /// A caller-supplied regular expression, used verbatim
    Custom(String),
}

impl DelimiterRule {
    /// Names accepted by [`FromStr`] for the built-in rules
    pub const BUILTIN_NAMES: &'static [&'static str] = &["all", "character", "word", "sentence"];

    /// Shorthand for [`DelimiterRule::Custom`]
    pub fn custom(pattern: impl Into<String>) -> Self {
        DelimiterRule::Custom(pattern.into())
    }

    /// Whether the rule is backed by a fixed, engine-owned pattern
    pub fn is_builtin(&self) -> bool {
        !matches!(self, DelimiterRule::Custom(_))
    }

    /// Short name of the rule (`"custom"` for custom patterns)
    pub fn name(&self) -> &'static str {
        match self {
            DelimiterRule::All => "all",
            DelimiterRule::Character => "character",
            DelimiterRule::Word => "word",
            DelimiterRule::Sentence => "sentence",
            DelimiterRule::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for DelimiterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterRule::Custom(pattern) => write!(f, "custom({pattern})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Error returned when a rule name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown delimiter `{0}` (expected one of: all, character, word, sentence)")]
pub struct UnknownDelimiter(pub String);

impl FromStr for DelimiterRule {
    type Err = UnknownDelimiter;

    /// Parses a built-in rule name. Custom patterns are never parsed from a
    /// name; build them with [`DelimiterRule::custom`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(DelimiterRule::All),
            "character" | "char" | "chars" => Ok(DelimiterRule::Character),
            "word" | "words" => Ok(DelimiterRule::Word),
            "sentence" | "sentences" => Ok(DelimiterRule::Sentence),
            _ => Err(UnknownDelimiter(s.to_string())),
        }
    }
}
