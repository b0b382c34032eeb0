//! Compiled obfuscation rules.
//!
//! One [`ObfuscationRule`] corresponds to one configured pattern entry.
//! Compilation is pure: it either yields an immutable rule or a
//! [`CompileError`], and never touches shared state.

use regex::{Regex, RegexBuilder};
use sp_config::PatternSpec;

use crate::error::{CompileError, Result};

/// Replacement token written over masked content.
pub const MASK_TOKEN: &str = "***";

/// A mask regex, compiled in two forms.
#[derive(Debug, Clone)]
struct MaskPattern {
    /// Raw form, used to replace matched substrings.
    replace: Regex,

    /// Anchored `\A(?:..)\z` form. Partial replacement only applies when
    /// the mask matches the entire value; otherwise the whole value is
    /// masked.
    full: Regex,
}

impl MaskPattern {
    fn compile(raw: &str, case_insensitive: bool) -> Result<Self> {
        let invalid = |source| CompileError::InvalidMask {
            pattern: raw.to_string(),
            source,
        };

        let replace = build_regex(raw, case_insensitive).map_err(invalid)?;
        let full = build_regex(&format!(r"\A(?:{raw})\z"), case_insensitive).map_err(invalid)?;

        Ok(Self { replace, full })
    }
}

/// One compiled matching/masking unit. Immutable once built.
#[derive(Debug, Clone)]
pub struct ObfuscationRule {
    trigger: Regex,
    check_key: bool,
    check_data: bool,
    mask: Option<MaskPattern>,
}

impl ObfuscationRule {
    /// Compile a pattern spec into an executable rule.
    pub fn compile(spec: &PatternSpec) -> Result<Self> {
        let trigger =
            build_regex(&spec.pattern, spec.case_insensitive).map_err(|source| {
                CompileError::InvalidTrigger {
                    pattern: spec.pattern.clone(),
                    source,
                }
            })?;

        let mask = match &spec.replace_regex {
            Some(raw) => Some(MaskPattern::compile(raw, spec.case_insensitive)?),
            None => None,
        };

        Ok(Self {
            trigger,
            check_key: spec.check_key,
            check_data: spec.check_data,
            mask,
        })
    }

    /// Whether this rule fires for the given attribute.
    ///
    /// Contains semantics: the trigger fires if it is found anywhere in
    /// the tested field. A rule with both check flags false never fires.
    pub fn matches(&self, key: &str, value: &str) -> bool {
        (self.check_key && self.trigger.is_match(key))
            || (self.check_data && self.trigger.is_match(value))
    }

    /// Mask a triggered value.
    ///
    /// Without a mask regex the entire value is replaced by
    /// [`MASK_TOKEN`]. With a mask regex, the matched substrings are
    /// replaced in place when the regex covers the whole value; a partial
    /// or failed mask match falls back to whole-value replacement.
    pub fn apply(&self, value: &str) -> String {
        match &self.mask {
            Some(mask) if mask.full.is_match(value) => {
                mask.replace.replace_all(value, MASK_TOKEN).into_owned()
            }
            _ => MASK_TOKEN.to_string(),
        }
    }
}

fn build_regex(pattern: &str, case_insensitive: bool) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_rule(pattern: &str) -> ObfuscationRule {
        ObfuscationRule::compile(&PatternSpec::new(pattern).check_key(true)).unwrap()
    }

    #[test]
    fn test_invalid_trigger() {
        let err = ObfuscationRule::compile(&PatternSpec::new("[[a-z]").check_key(true)).unwrap_err();
        assert!(matches!(err, CompileError::InvalidTrigger { .. }));
        assert_eq!(err.pattern(), "[[a-z]");
    }

    #[test]
    fn test_invalid_mask() {
        let spec = PatternSpec::new("[a-z]+").check_key(true).replace_regex("(unclosed");
        let err = ObfuscationRule::compile(&spec).unwrap_err();
        assert!(matches!(err, CompileError::InvalidMask { .. }));
    }

    #[test]
    fn test_contains_semantics() {
        let rule = key_rule("secret");
        assert!(rule.matches("my_secret_key", ""));
        assert!(!rule.matches("public", ""));
    }

    #[test]
    fn test_check_flags_select_field() {
        let key_only = key_rule("[0-9]+");
        assert!(key_only.matches("user42", "plain"));
        assert!(!key_only.matches("user", "42"));

        let data_only =
            ObfuscationRule::compile(&PatternSpec::new("[0-9]+").check_data(true)).unwrap();
        assert!(data_only.matches("user", "42"));
        assert!(!data_only.matches("user42", "plain"));
    }

    #[test]
    fn test_inert_rule_never_fires() {
        let rule = ObfuscationRule::compile(&PatternSpec::new(".*")).unwrap();
        assert!(!rule.matches("anything", "anything"));
    }

    #[test]
    fn test_case_sensitivity() {
        let sensitive = key_rule("[a-z]+");
        assert!(!sensitive.matches("ABC", ""));

        let insensitive = ObfuscationRule::compile(
            &PatternSpec::new("[a-z]+").check_key(true).case_insensitive(true),
        )
        .unwrap();
        assert!(insensitive.matches("ABC", ""));
        assert!(insensitive.matches("abc", ""));
    }

    #[test]
    fn test_apply_whole_value() {
        let rule = key_rule("[a-z]+");
        assert_eq!(rule.apply("anything at all"), "***");
    }

    #[test]
    fn test_apply_mask_full_match() {
        let spec = PatternSpec::new("card").check_key(true).replace_regex("[0-9]+");
        let rule = ObfuscationRule::compile(&spec).unwrap();

        // Mask covers the whole value: matched substrings replaced.
        assert_eq!(rule.apply("1234567890"), "***");
    }

    #[test]
    fn test_apply_mask_partial_match_falls_back() {
        let spec = PatternSpec::new("[a-z]+").check_key(true).replace_regex("[b-z]+");
        let rule = ObfuscationRule::compile(&spec).unwrap();

        // `[b-z]+` finds "bc" in "abc" but does not cover the whole value,
        // so the entire value is masked.
        assert_eq!(rule.apply("abc"), "***");
    }

    #[test]
    fn test_apply_mask_no_match_falls_back() {
        let spec = PatternSpec::new("[a-z]+").check_key(true).replace_regex("[0-9]+");
        let rule = ObfuscationRule::compile(&spec).unwrap();

        assert_eq!(rule.apply("letters only"), "***");
    }

    #[test]
    fn test_mask_inherits_case_insensitivity() {
        let spec = PatternSpec::new("card")
            .check_key(true)
            .case_insensitive(true)
            .replace_regex("[a-f0-9]+");
        let rule = ObfuscationRule::compile(&spec).unwrap();

        assert_eq!(rule.apply("DEADBEEF"), "***");
    }
}
