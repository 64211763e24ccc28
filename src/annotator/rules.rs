//! The ordered annotation passes
//!
//! Each rule is a find-and-wrap substitution over the whole text. Rules run
//! in table order and each sees the previous rule's output, so the order is
//! part of the behavior.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::marker::{Category, CLOSE};

/// One find-and-wrap pass
#[derive(Debug)]
pub struct AnnotationRule {
    name: &'static str,
    pattern: Regex,
    replacement: String,
}

impl AnnotationRule {
    fn new(name: &'static str, pattern: &str, replacement: String) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid annotation regex"),
            replacement,
        }
    }

    /// Short name identifying the pass
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The pattern this pass searches for
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the pass to every non-overlapping match
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Word boundary over ASCII word characters only
///
/// Letters such as `é` count as non-word, so `éprint` still has a
/// boundary before `print`.
const WORD_BOUNDARY: &str = r"(?-u:\b)";

/// Names wrapped as identifiers
const IDENTIFIERS: &[&str] = &["notte_sdk", "NotteClient", "response", "print"];

/// Keyword-argument names wrapped as parameters
const PARAMETERS: &[&str] = &["api_key", "task", "model", "vault_id", "session_id"];

/// Calls whose argument span is rebuilt after the generic parenthesis pass
const CALL_SITES: &[(&str, &str)] = &[
    ("client_call", "NotteClient"),
    ("run_call", "run"),
    ("print_call", "print"),
];

/// Rule for one known call site
///
/// Matches the callee, whether already marked as an identifier or bare,
/// then its parenthesized arguments up to the first `)`. If the generic
/// pass left a single arguments span there it is replaced, otherwise the
/// raw contents are wrapped.
fn call_site_rule(name: &'static str, callee: &str) -> AnnotationRule {
    let callee = regex::escape(callee);
    let ident_open = regex::escape(&Category::Identifier.open_marker());
    let args_open = regex::escape(&Category::Arguments.open_marker());
    let close = regex::escape(&CLOSE.to_string());

    let pattern = format!(
        r"({ident_open}{callee}{close}|{WORD_BOUNDARY}{callee}{WORD_BOUNDARY})\((?:{args_open}(.*?){close}|(.*?))\)"
    );
    let replacement = format!("${{1}}({})", Category::Arguments.wrap("${2}${3}"));
    AnnotationRule::new(name, &pattern, replacement)
}

fn build_rules() -> Vec<AnnotationRule> {
    let mut rules = vec![
        AnnotationRule::new(
            "keyword",
            &format!(r"(?m)^(from|import){WORD_BOUNDARY}"),
            Category::Keyword.wrap("${1}"),
        ),
        AnnotationRule::new(
            "identifier",
            &format!(
                "{WORD_BOUNDARY}({}){WORD_BOUNDARY}",
                IDENTIFIERS.join("|")
            ),
            Category::Identifier.wrap("${1}"),
        ),
        AnnotationRule::new(
            "parameter",
            &format!(
                "{WORD_BOUNDARY}({}){WORD_BOUNDARY}",
                PARAMETERS.join("|")
            ),
            Category::Parameter.wrap("${1}"),
        ),
        AnnotationRule::new(
            "operator",
            r"(?m)^([^=\n]*)=",
            format!("${{1}}{}", Category::Operator.wrap("=")),
        ),
        AnnotationRule::new(
            "string",
            r#""(.*?)""#,
            Category::String.wrap(r#""${1}""#),
        ),
        AnnotationRule::new(
            "arguments",
            r"\((.*?)\)",
            format!("({})", Category::Arguments.wrap("${1}")),
        ),
    ];

    rules.extend(
        CALL_SITES
            .iter()
            .map(|&(name, callee)| call_site_rule(name, callee)),
    );

    rules.push(AnnotationRule::new(
        "punctuation",
        r"\.",
        Category::Punctuation.wrap("."),
    ));

    rules
}

static RULES: LazyLock<Vec<AnnotationRule>> = LazyLock::new(build_rules);

/// The annotation passes in the order they run
pub fn rules() -> &'static [AnnotationRule] {
    &RULES
}
