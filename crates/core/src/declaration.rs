//! Resolving which rule set, if any, applies at a call site.

use crate::rules::{RulePreset, RuleSet};
use crate::target::Normalizable;

/// Pick the rule set for one value.
///
/// A parameter-level declaration wins over the type-level one. With neither,
/// nothing applies and the value passes through untouched.
pub fn resolve_rule_set(parameter: Option<RuleSet>, declared: Option<RuleSet>) -> Option<RuleSet> {
    parameter.or(declared)
}

/// Declarations attached to one occurrence of a value (e.g. a handler
/// parameter), independent of the value's type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallSite {
    parameter: Option<RuleSet>,
}

impl CallSite {
    /// A call site without its own declaration.
    pub const fn bare() -> Self {
        Self { parameter: None }
    }

    /// A call site declaring `rules` for this occurrence only.
    pub const fn annotated(rules: RuleSet) -> Self {
        Self {
            parameter: Some(rules),
        }
    }

    pub const fn with_preset<P: RulePreset>() -> Self {
        Self::annotated(P::RULES)
    }

    pub fn parameter(&self) -> Option<RuleSet> {
        self.parameter
    }

    /// Whether any declaration covers a value of type `T` here.
    pub fn is_declared<T: Normalizable + ?Sized>(&self) -> bool {
        self.parameter.is_some() || T::DECLARED_RULES.is_some()
    }

    /// Rule set for a value of type `T` at this call site.
    pub fn resolve<T: Normalizable + ?Sized>(&self) -> Option<RuleSet> {
        resolve_rule_set(self.parameter, T::DECLARED_RULES)
    }
}
