//! Step validation: does a submission satisfy a step's acceptance pattern?
//!
//! Patterns come from catalog content and are compiled once, when a
//! domain is loaded. Matching a compiled pattern cannot fail.

use regex::{Regex, RegexBuilder};

/// A compiled, case-insensitive acceptance pattern.
#[derive(Debug, Clone)]
pub struct AcceptancePattern(Regex);

impl AcceptancePattern {
    /// Compile a pattern source. Fails on malformed syntax.
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map(Self)
    }

    /// Whether the trimmed input matches anywhere the pattern allows.
    ///
    /// Patterns anchor themselves with `^`; a prefix match is a pass.
    pub fn accepts(&self, input: &str) -> bool {
        self.0.is_match(input.trim())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// One-shot validation against an uncompiled pattern.
///
/// A malformed pattern never accepts anything.
pub fn validate(pattern: &str, input: &str) -> bool {
    AcceptancePattern::compile(pattern).is_ok_and(|p| p.accepts(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_after_trim() {
        assert!(validate(r"^docker\s+ps", "  DOCKER PS"));
    }

    #[test]
    fn different_tool_fails() {
        assert!(!validate(r"^docker\s+ps", "kubectl get pods"));
    }

    #[test]
    fn prefix_match_is_enough() {
        assert!(validate(r"^git\s+log", "git log --oneline -n 5"));
    }

    #[test]
    fn anchor_is_respected_after_trim() {
        assert!(!validate(r"^pwd", "echo pwd"));
        assert!(validate(r"^pwd", "\tpwd\n"));
    }

    #[test]
    fn malformed_pattern_fails_closed() {
        assert!(!validate(r"^docker\s+(ps", "docker ps"));
        assert!(AcceptancePattern::compile(r"^docker\s+(ps").is_err());
    }

    #[test]
    fn backslash_meta_command() {
        let pattern = AcceptancePattern::compile(r"^\\dt").unwrap();
        assert!(pattern.accepts(r"\dt"));
        assert!(!pattern.accepts("dt"));
    }
}
