//! Interception points around wire-format encoding and decoding.
//!
//! Each call is a single decide-then-act step: resolve the rule set from the
//! declarations in scope, normalize if one applies, hand the same value back.
//! The adapters know nothing about the wire format; the glue crates call them
//! right after decoding or right before encoding.

use crate::declaration::CallSite;
use crate::engine::normalize;
use crate::error::NormalizeError;
use crate::target::Normalizable;

/// Fires once an inbound payload has been decoded, before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InboundAdapter;

impl InboundAdapter {
    /// Whether normalization applies to a `T` arriving at `site`.
    pub fn supports<T: Normalizable + ?Sized>(site: &CallSite) -> bool {
        site.is_declared::<T>()
    }

    /// Normalize `body` with the rule set resolved for `site`.
    ///
    /// The same value is returned, with only its string fields rewritten.
    pub fn after_read<T: Normalizable>(mut body: T, site: &CallSite) -> Result<T, NormalizeError> {
        let rules = site.resolve::<T>();
        match rules {
            Some(rules) => tracing::debug!(
                target_type = std::any::type_name::<T>(),
                parameter_level = site.parameter().is_some(),
                ?rules,
                "Normalizing inbound payload"
            ),
            None => tracing::trace!(
                target_type = std::any::type_name::<T>(),
                "No normalization declared, passing inbound payload through"
            ),
        }
        normalize(Some(&mut body), rules)?;
        Ok(body)
    }
}

/// Fires right before a value is encoded for the wire, and mirrors
/// [`InboundAdapter`] for responses received by a client.
///
/// Outbound contexts carry no call-site declarations, so only the type-level
/// declaration is consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutboundAdapter;

impl OutboundAdapter {
    pub fn can_handle<T: Normalizable + ?Sized>() -> bool {
        T::DECLARED_RULES.is_some()
    }

    /// Normalize `object` in place, then run `encode` on it.
    ///
    /// The rewrite stays visible through the caller's reference after this
    /// returns, whether or not encoding succeeds.
    pub fn before_write<T, W, E, F>(object: &mut T, encode: F) -> Result<W, E>
    where
        T: Normalizable + ?Sized,
        E: From<NormalizeError>,
        F: FnOnce(&T) -> Result<W, E>,
    {
        let rules = T::DECLARED_RULES;
        if let Some(rules) = rules {
            tracing::debug!(
                target_type = std::any::type_name::<T>(),
                ?rules,
                "Normalizing outbound payload"
            );
        }
        normalize(Some(&mut *object), rules)?;
        encode(object)
    }

    /// Normalize a value decoded from a response.
    pub fn after_read<T: Normalizable>(object: T) -> Result<T, NormalizeError> {
        InboundAdapter::after_read(object, &CallSite::bare())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::rules::{RuleSet, Rules};
    use crate::Normalize;

    #[derive(Debug, Normalize)]
    #[normalize(collapse_spaces = true)]
    struct TestRequest {
        name: Option<String>,
        email: Option<String>,
    }

    #[derive(Debug, Normalize)]
    struct PlainRequest {
        name: Option<String>,
    }

    #[derive(Debug, Normalize)]
    #[normalize]
    struct Strict {
        name: String,
    }

    fn request(name: &str, email: &str) -> TestRequest {
        TestRequest {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    // -----------------------------------------------------------------------
    // InboundAdapter
    // -----------------------------------------------------------------------

    #[test]
    fn inbound_supports_declared_type() {
        assert!(InboundAdapter::supports::<TestRequest>(&CallSite::bare()));
    }

    #[test]
    fn inbound_supports_parameter_declaration_on_plain_type() {
        assert!(!InboundAdapter::supports::<PlainRequest>(&CallSite::bare()));
        assert!(InboundAdapter::supports::<PlainRequest>(
            &CallSite::with_preset::<Rules>()
        ));
    }

    #[test]
    fn inbound_normalizes_with_type_declaration() {
        let body = InboundAdapter::after_read(request("hello    world", "a@b.com"), &CallSite::bare())
            .unwrap();
        assert_eq!(body.name.as_deref(), Some("hello world"));
        assert_eq!(body.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn inbound_parameter_declaration_takes_precedence() {
        let site = CallSite::annotated(RuleSet::new(true, true, false));
        let body = InboundAdapter::after_read(request("  a   b  ", "  "), &site).unwrap();
        // The type collapses, the parameter does not.
        assert_eq!(body.name.as_deref(), Some("a   b"));
        assert_eq!(body.email, None);
    }

    #[test]
    fn inbound_passes_undeclared_type_through() {
        let body = PlainRequest {
            name: Some("  keep  ".into()),
        };
        let body = InboundAdapter::after_read(body, &CallSite::bare()).unwrap();
        assert_eq!(body.name.as_deref(), Some("  keep  "));
    }

    #[test]
    fn inbound_surfaces_unrepresentable_field() {
        let err = InboundAdapter::after_read(
            Strict {
                name: "  ".into(),
            },
            &CallSite::bare(),
        )
        .unwrap_err();
        assert_matches!(
            err,
            NormalizeError::Unrepresentable {
                owner: "Strict",
                field: "name"
            }
        );
    }

    // -----------------------------------------------------------------------
    // OutboundAdapter
    // -----------------------------------------------------------------------

    #[test]
    fn outbound_can_handle_only_declared_types() {
        assert!(OutboundAdapter::can_handle::<TestRequest>());
        assert!(!OutboundAdapter::can_handle::<PlainRequest>());
    }

    #[test]
    fn before_write_mutates_caller_reference_and_encodes_normalized_value() {
        let mut req = request("a    b    c", "   ");

        let encoded: Result<String, NormalizeError> =
            OutboundAdapter::before_write(&mut req, |r| Ok(format!("{:?}|{:?}", r.name, r.email)));

        assert_eq!(encoded.unwrap(), r#"Some("a b c")|None"#);
        assert_eq!(req.name.as_deref(), Some("a b c"));
        assert_eq!(req.email, None);
    }

    #[test]
    fn before_write_leaves_undeclared_type_untouched() {
        let mut req = PlainRequest {
            name: Some("  x ".into()),
        };
        let encoded: Result<Option<String>, NormalizeError> =
            OutboundAdapter::before_write(&mut req, |r| Ok(r.name.clone()));
        assert_eq!(encoded.unwrap().as_deref(), Some("  x "));
        assert_eq!(req.name.as_deref(), Some("  x "));
    }

    #[test]
    fn before_write_does_not_encode_after_failure() {
        let mut value = Strict {
            name: "\t".into(),
        };
        let mut encoded = false;
        let result: Result<(), NormalizeError> = OutboundAdapter::before_write(&mut value, |_| {
            encoded = true;
            Ok(())
        });
        assert_matches!(result, Err(NormalizeError::Unrepresentable { .. }));
        assert!(!encoded);
    }

    #[test]
    fn outbound_after_read_uses_type_declaration() {
        let body = OutboundAdapter::after_read(request("  John  ", "   ")).unwrap();
        assert_eq!(body.name.as_deref(), Some("John"));
        assert_eq!(body.email, None);
    }
}
