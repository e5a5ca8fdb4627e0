//! Constraint values documented by the service.
//!
//! Patterns are matched against the whole value. Lengths count characters.

use std::sync::OnceLock;

use regex::Regex;

/// A lazily compiled, fully anchored regular expression.
pub struct Pattern {
    source: &'static str,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// The pattern as documented.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.compiled
            .get_or_init(|| {
                Regex::new(&format!("^(?:{})$", self.source))
                    .expect("documented constraint patterns are valid regexes")
            })
            .is_match(value)
    }
}

/// Length bounds and optional pattern for a text field.
pub struct TextRule {
    pub min: usize,
    pub max: usize,
    pub pattern: Option<&'static Pattern>,
}

impl TextRule {
    const fn length(min: usize, max: usize) -> Self {
        Self { min, max, pattern: None }
    }

    const fn matching(min: usize, max: usize, pattern: &'static Pattern) -> Self {
        Self {
            min,
            max,
            pattern: Some(pattern),
        }
    }
}

pub static NAME_PATTERN: Pattern = Pattern::new(r"([A-Za-z]_?)+");
pub static VERSION_PATTERN: Pattern = Pattern::new(r"\$LATEST|[0-9]+");
pub static VERSION_OR_ALIAS_PATTERN: Pattern = Pattern::new(r"\$LATEST|[0-9]+|([A-Za-z]_?)+");
pub static SLOT_NAME_PATTERN: Pattern = Pattern::new(r"([A-Za-z](-|_|.)?)+");
pub static SLOT_TYPE_PATTERN: Pattern = Pattern::new(r"((AMAZON\.)_?|[A-Za-z]_?)+");
pub static LAMBDA_ARN_PATTERN: Pattern = Pattern::new(
    r"arn:aws[a-zA-Z-]*:lambda:[a-z]+-[a-z]+(-[a-z]+)*-[0-9]:[0-9]{12}:function:[a-zA-Z0-9_-]+(/[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})?(:[a-zA-Z0-9_-]+)?",
);
pub static KENDRA_INDEX_PATTERN: Pattern =
    Pattern::new(r"arn:aws:kendra:[a-z]+-[a-z]+-[0-9]:[0-9]{12}:index/[a-zA-Z0-9][a-zA-Z0-9_-]*");
pub static IAM_ROLE_PATTERN: Pattern = Pattern::new(r"arn:aws:iam::[0-9]{12}:role/.*");

pub static BOT_NAME: TextRule = TextRule::matching(2, 50, &NAME_PATTERN);
pub static RESOURCE_NAME: TextRule = TextRule::matching(1, 100, &NAME_PATTERN);
pub static DESCRIPTION: TextRule = TextRule::length(0, 200);
pub static VERSION: TextRule = TextRule::matching(1, 64, &VERSION_PATTERN);
pub static VERSION_OR_ALIAS: TextRule = TextRule::matching(1, 64, &VERSION_OR_ALIAS_PATTERN);
pub static MESSAGE_CONTENT: TextRule = TextRule::length(1, 1000);
pub static RESPONSE_CARD: TextRule = TextRule::length(1, 50_000);
pub static SLOT_NAME: TextRule = TextRule::matching(1, 100, &SLOT_NAME_PATTERN);
pub static SLOT_TYPE: TextRule = TextRule::matching(1, 100, &SLOT_TYPE_PATTERN);
pub static UTTERANCE: TextRule = TextRule::length(1, 200);
pub static DEFAULT_VALUE: TextRule = TextRule::length(1, 202);
pub static CODE_HOOK_URI: TextRule = TextRule::matching(20, 2048, &LAMBDA_ARN_PATTERN);
pub static MESSAGE_VERSION: TextRule = TextRule::length(1, 5);
pub static KENDRA_INDEX: TextRule = TextRule::matching(20, 2048, &KENDRA_INDEX_PATTERN);
pub static IAM_ROLE: TextRule = TextRule::matching(20, 2048, &IAM_ROLE_PATTERN);
pub static TAG_KEY: TextRule = TextRule::length(1, 128);
pub static TAG_VALUE: TextRule = TextRule::length(0, 256);
pub static ENUMERATION_VALUE: TextRule = TextRule::length(1, 140);
pub static SYNONYM: TextRule = TextRule::length(1, 140);
pub static REGEX_PATTERN: TextRule = TextRule::length(1, 100);
pub static KMS_KEY_ARN: TextRule = TextRule::length(20, 2048);
pub static RESOURCE_ARN: TextRule = TextRule::length(1, 2048);

pub const IDLE_SESSION_TTL: (i32, i32) = (60, 86_400);
pub const GROUP_NUMBER: (i32, i32) = (1, 5);
pub const MAX_ATTEMPTS: (i32, i32) = (1, 5);
pub const SLOT_PRIORITY: (i32, i32) = (0, 100);

pub const MESSAGES: (usize, usize) = (1, 15);
pub const SAMPLE_UTTERANCES: (usize, usize) = (0, 10);
pub const DEFAULT_VALUES: (usize, usize) = (0, 10);
pub const TAGS: (usize, usize) = (0, 200);
pub const ENUMERATION_VALUES: (usize, usize) = (0, 10_000);
pub const SLOT_TYPE_CONFIGURATIONS: (usize, usize) = (0, 10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for pattern in [
            &NAME_PATTERN,
            &VERSION_PATTERN,
            &VERSION_OR_ALIAS_PATTERN,
            &SLOT_NAME_PATTERN,
            &SLOT_TYPE_PATTERN,
            &LAMBDA_ARN_PATTERN,
            &KENDRA_INDEX_PATTERN,
            &IAM_ROLE_PATTERN,
        ] {
            assert!(Regex::new(pattern.source()).is_ok(), "{}", pattern.source());
        }
    }

    #[test]
    fn test_name_pattern() {
        assert!(NAME_PATTERN.is_match("PizzaBot"));
        assert!(NAME_PATTERN.is_match("Order_Pizza"));
        assert!(!NAME_PATTERN.is_match("Order__Pizza"));
        assert!(!NAME_PATTERN.is_match("Pizza Bot"));
        assert!(!NAME_PATTERN.is_match("_Pizza"));
        assert!(!NAME_PATTERN.is_match("Pizza2"));
    }

    #[test]
    fn test_version_pattern_is_anchored() {
        assert!(VERSION_PATTERN.is_match("$LATEST"));
        assert!(VERSION_PATTERN.is_match("12"));
        assert!(!VERSION_PATTERN.is_match("12a"));
        assert!(!VERSION_PATTERN.is_match("v$LATEST"));
    }

    #[test]
    fn test_slot_type_pattern() {
        assert!(SLOT_TYPE_PATTERN.is_match("AMAZON.NUMBER"));
        assert!(SLOT_TYPE_PATTERN.is_match("PizzaSize"));
        assert!(!SLOT_TYPE_PATTERN.is_match("Pizza-Size"));
    }

    #[test]
    fn test_lambda_arn_pattern() {
        assert!(LAMBDA_ARN_PATTERN.is_match(
            "arn:aws:lambda:us-east-1:123456789012:function:OrderPizzaHook"
        ));
        assert!(LAMBDA_ARN_PATTERN.is_match(
            "arn:aws:lambda:eu-west-2:123456789012:function:order-pizza:live"
        ));
        assert!(!LAMBDA_ARN_PATTERN.is_match("arn:aws:s3:::bucket"));
    }

    #[test]
    fn test_kendra_and_role_patterns() {
        assert!(KENDRA_INDEX_PATTERN.is_match(
            "arn:aws:kendra:us-east-1:123456789012:index/0123abcd-faq"
        ));
        assert!(IAM_ROLE_PATTERN.is_match("arn:aws:iam::123456789012:role/LexKendra"));
        assert!(!IAM_ROLE_PATTERN.is_match("arn:aws:iam::123:role/LexKendra"));
    }
}
