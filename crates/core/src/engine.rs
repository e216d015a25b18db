//! Scalar transform and structural walk.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::NormalizeError;
use crate::rules::RuleSet;
use crate::target::{Normalizable, StringField, StringSlot};

/// Two or more consecutive whitespace characters.
///
/// `\s` is the Unicode `White_Space` property, the same set `str::trim`
/// strips, so collapsing never leaves an edge that trimming would miss.
const WHITESPACE_RUN_PATTERN: &str = r"\s{2,}";

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_RUN_PATTERN).expect("valid regex"));

/// Apply `rules` to a single value.
///
/// Order is fixed: collapse, then trim, then the blank check. An absent input
/// is always absent on output.
///
/// ```
/// use tidy_core::{apply, RuleSet};
///
/// let rules = RuleSet::new(true, true, true);
/// assert_eq!(apply(Some("  hello    world  "), rules).as_deref(), Some("hello world"));
/// assert_eq!(apply(Some("   "), rules), None);
/// assert_eq!(apply(None, rules), None);
/// ```
pub fn apply(value: Option<&str>, rules: RuleSet) -> Option<String> {
    let value = value?;

    let collapsed = if rules.collapse_spaces {
        WHITESPACE_RUN_RE.replace_all(value, " ")
    } else {
        Cow::Borrowed(value)
    };

    let trimmed = if rules.trim {
        collapsed.trim()
    } else {
        &*collapsed
    };

    if rules.blank_to_null && trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Normalize every string field of `target` in place.
///
/// Either argument being absent makes this a no-op.
pub fn normalize<T: Normalizable + ?Sized>(
    target: Option<&mut T>,
    rules: Option<RuleSet>,
) -> Result<(), NormalizeError> {
    match (target, rules) {
        (Some(target), Some(rules)) => normalize_fields(target, rules),
        _ => Ok(()),
    }
}

/// Walk `target` and rewrite each present string field with [`apply`].
///
/// Fails on the first field that cannot take its normalized value; fields
/// visited before it keep their new values.
pub fn normalize_fields<T: Normalizable + ?Sized>(
    target: &mut T,
    rules: RuleSet,
) -> Result<(), NormalizeError> {
    target.visit_string_fields(&mut |field: StringField<'_>| write_field(field, rules))
}

fn write_field(field: StringField<'_>, rules: RuleSet) -> Result<(), NormalizeError> {
    let StringField { owner, name, slot } = field;
    match slot {
        StringSlot::Optional(value) => {
            if value.is_some() {
                *value = apply(value.as_deref(), rules);
            }
            Ok(())
        }
        StringSlot::Required(value) => match apply(Some(value.as_str()), rules) {
            Some(normalized) => {
                *value = normalized;
                Ok(())
            }
            None => Err(NormalizeError::Unrepresentable {
                owner,
                field: name,
            }),
        },
    }
}
