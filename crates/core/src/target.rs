//! Types whose string fields can be rewritten in place.

use std::sync::Arc;

use crate::error::NormalizeError;
use crate::rules::RuleSet;

/// Storage of one string field.
#[derive(Debug)]
pub enum StringSlot<'a> {
    /// A field that must always hold a value.
    Required(&'a mut String),
    /// A field that may be absent.
    Optional(&'a mut Option<String>),
}

/// A string field handed to the walk, named for error reporting.
#[derive(Debug)]
pub struct StringField<'a> {
    /// Type that declares the field.
    pub owner: &'static str,
    /// Field name as written in the declaring type.
    pub name: &'static str,
    pub slot: StringSlot<'a>,
}

impl<'a> StringField<'a> {
    pub fn required(owner: &'static str, name: &'static str, value: &'a mut String) -> Self {
        Self {
            owner,
            name,
            slot: StringSlot::Required(value),
        }
    }

    pub fn optional(
        owner: &'static str,
        name: &'static str,
        value: &'a mut Option<String>,
    ) -> Self {
        Self {
            owner,
            name,
            slot: StringSlot::Optional(value),
        }
    }
}

/// Visitor the walk passes to [`Normalizable::visit_string_fields`].
pub type FieldVisitor<'v> = dyn FnMut(StringField<'_>) -> Result<(), NormalizeError> + 'v;

/// A value whose string fields the engine may rewrite.
///
/// Implementations hand every string field they own to the visitor, then
/// delegate to the value they extend (if any), so fields reached through the
/// whole composition chain are covered. Non-string fields are never visited.
///
/// Usually derived:
///
/// ```
/// use tidy_core::Normalize;
///
/// #[derive(Normalize)]
/// struct Audit {
///     created_by: Option<String>,
/// }
///
/// #[derive(Normalize)]
/// #[normalize(collapse_spaces = true)]
/// struct Note {
///     title: String,
///     #[normalize(flatten)]
///     audit: Audit,
/// }
/// ```
pub trait Normalizable {
    /// Type-level declaration. `None` means the type can be walked but does
    /// not ask for normalization on its own.
    const DECLARED_RULES: Option<RuleSet> = None;

    /// Hand every string field to `visitor`, stopping at the first error.
    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError>;
}

impl Normalizable for String {
    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        visitor(StringField::required("String", "value", self))
    }
}

impl Normalizable for Option<String> {
    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        visitor(StringField::optional("String", "value", self))
    }
}

impl<T: Normalizable + ?Sized> Normalizable for Box<T> {
    const DECLARED_RULES: Option<RuleSet> = T::DECLARED_RULES;

    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        (**self).visit_string_fields(visitor)
    }
}

/// An absent parent contributes no fields.
impl<T: Normalizable> Normalizable for Option<Box<T>> {
    const DECLARED_RULES: Option<RuleSet> = T::DECLARED_RULES;

    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        match self {
            Some(inner) => inner.visit_string_fields(visitor),
            None => Ok(()),
        }
    }
}

/// Only a uniquely owned `Arc` can be rewritten.
impl<T: Normalizable + ?Sized> Normalizable for Arc<T> {
    const DECLARED_RULES: Option<RuleSet> = T::DECLARED_RULES;

    fn visit_string_fields(&mut self, visitor: &mut FieldVisitor<'_>) -> Result<(), NormalizeError> {
        match Arc::get_mut(self) {
            Some(inner) => inner.visit_string_fields(visitor),
            None => Err(NormalizeError::Inaccessible {
                owner: "Arc",
                field: "value",
                reason: format!(
                    "shared ({} strong, {} weak references)",
                    Arc::strong_count(self),
                    Arc::weak_count(self)
                ),
            }),
        }
    }
}
