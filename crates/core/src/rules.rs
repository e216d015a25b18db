//! Rule set representation.

/// Which transforms apply to a string value.
///
/// The three switches are independent; every combination is valid. The
/// defaults mirror a bare declaration: trim and blank-to-null on, collapsing
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSet {
    /// Strip leading and trailing whitespace.
    pub trim: bool,
    /// Replace an empty (after the other transforms) value with absent.
    pub blank_to_null: bool,
    /// Replace every run of two or more whitespace characters with one space.
    pub collapse_spaces: bool,
}

impl RuleSet {
    /// The rule set of a declaration that sets no options.
    pub const DEFAULT: RuleSet = RuleSet::new(true, true, false);

    pub const fn new(trim: bool, blank_to_null: bool, collapse_spaces: bool) -> Self {
        Self {
            trim,
            blank_to_null,
            collapse_spaces,
        }
    }

    pub const fn with_trim(self, trim: bool) -> Self {
        Self { trim, ..self }
    }

    pub const fn with_blank_to_null(self, blank_to_null: bool) -> Self {
        Self {
            blank_to_null,
            ..self
        }
    }

    pub const fn with_collapse_spaces(self, collapse_spaces: bool) -> Self {
        Self {
            collapse_spaces,
            ..self
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A rule set named at the type level, used for call-site declarations.
///
/// Extractors take a preset as a type parameter so the rules are fixed at
/// compile time for that occurrence only.
pub trait RulePreset: Send + Sync + 'static {
    const RULES: RuleSet;
}

/// Generic preset whose const parameters default to [`RuleSet::DEFAULT`].
///
/// `Rules` alone is the default rule set; `Rules<true, true, true>` also
/// collapses whitespace runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rules<
    const TRIM: bool = true,
    const BLANK_TO_NULL: bool = true,
    const COLLAPSE_SPACES: bool = false,
>;

impl<const TRIM: bool, const BLANK_TO_NULL: bool, const COLLAPSE_SPACES: bool> RulePreset
    for Rules<TRIM, BLANK_TO_NULL, COLLAPSE_SPACES>
{
    const RULES: RuleSet = RuleSet::new(TRIM, BLANK_TO_NULL, COLLAPSE_SPACES);
}
