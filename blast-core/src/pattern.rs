//! Compiled delimiter patterns

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CoreError, Result};
use crate::resolver::{resolve, Extraction, Resolved};
use crate::rule::DelimiterRule;

static ALL: OnceLock<Pattern> = OnceLock::new();
static CHARACTER: OnceLock<Pattern> = OnceLock::new();
static WORD: OnceLock<Pattern> = OnceLock::new();
static SENTENCE: OnceLock<Pattern> = OnceLock::new();

/// A compiled matcher plus the policy for reading segments out of it.
///
/// Immutable once built, so it can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub(crate) regex: Regex,
    pub(crate) extraction: Extraction,
}

impl Pattern {
    /// Resolve and compile a rule.
    ///
    /// Fails with [`CoreError::InvalidPattern`] when a `Custom` pattern is
    /// not a valid regular expression. The built-in rules always compile.
    pub fn compile(rule: &DelimiterRule) -> Result<Self> {
        Self::from_resolved(&resolve(rule))
    }

    /// Compile an already resolved pattern
    pub fn from_resolved(resolved: &Resolved<'_>) -> Result<Self> {
        let regex = Regex::new(&resolved.pattern).map_err(|e| CoreError::InvalidPattern {
            pattern: resolved.pattern.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            pattern = regex.as_str(),
            groups = regex.captures_len() - 1,
            "compiled delimiter pattern"
        );

        Ok(Self {
            regex,
            extraction: resolved.extraction,
        })
    }

    /// Process-wide precompiled pattern for a built-in rule, `None` for
    /// `Custom`.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile. That is a defect in
    /// the engine itself and is covered by the test suite.
    pub fn builtin(rule: &DelimiterRule) -> Option<&'static Pattern> {
        let cell = match rule {
            DelimiterRule::All => &ALL,
            DelimiterRule::Character => &CHARACTER,
            DelimiterRule::Word => &WORD,
            DelimiterRule::Sentence => &SENTENCE,
            DelimiterRule::Custom(_) => return None,
        };

        Some(cell.get_or_init(|| match Pattern::compile(rule) {
            Ok(pattern) => pattern,
            Err(e) => panic!("built-in `{}` pattern is broken: {e}", rule.name()),
        }))
    }

    /// Source text of the pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Segment extraction policy
    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    /// Number of explicit capture groups
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_patterns_compile() {
        for rule in [
            DelimiterRule::All,
            DelimiterRule::Character,
            DelimiterRule::Word,
            DelimiterRule::Sentence,
        ] {
            let pattern = Pattern::builtin(&rule).expect("built-in rule");
            assert_eq!(pattern.group_count(), 1);
            assert_eq!(pattern.extraction(), Extraction::WholeMatch);
        }
    }

    #[test]
    fn test_builtin_is_shared() {
        let first = Pattern::builtin(&DelimiterRule::Word).unwrap();
        let second = Pattern::builtin(&DelimiterRule::Word).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_custom_has_no_builtin() {
        assert!(Pattern::builtin(&DelimiterRule::custom("um")).is_none());
    }

    #[test]
    fn test_custom_compiles_verbatim() {
        let pattern = Pattern::compile(&DelimiterRule::custom("(u)(m)")).unwrap();
        assert_eq!(pattern.as_str(), "(u)(m)");
        assert_eq!(pattern.group_count(), 2);
        assert_eq!(pattern.extraction(), Extraction::PrimaryGroup);
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = Pattern::compile(&DelimiterRule::custom("(um")).unwrap_err();
        match err {
            CoreError::InvalidPattern { pattern, reason } => {
                assert_eq!(pattern, "(um");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
