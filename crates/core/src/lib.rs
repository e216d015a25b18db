//! Declarative string normalization for data-transfer types.
//!
//! A type opts in by implementing [`Normalizable`] (usually through
//! `#[derive(Normalize)]`), optionally declaring a [`RuleSet`] at the type
//! level. The adapters in [`adapter`] decide, at the moment a payload is
//! decoded or about to be encoded, whether a rule set applies and then rewrite
//! every reachable string field in place.
//!
//! ```
//! use tidy_core::{normalize, Normalize, RuleSet};
//!
//! #[derive(Normalize)]
//! #[normalize(collapse_spaces = true)]
//! struct SearchRequest {
//!     query: Option<String>,
//! }
//!
//! let mut req = SearchRequest { query: Some("  hello    world  ".into()) };
//! normalize(Some(&mut req), Some(RuleSet::new(true, true, true))).unwrap();
//! assert_eq!(req.query.as_deref(), Some("hello world"));
//! ```

// Lets `#[derive(Normalize)]` expand to `::tidy_core::..` inside this crate too.
extern crate self as tidy_core;

pub mod adapter;
pub mod declaration;
pub mod engine;
pub mod error;
pub mod rules;
pub mod target;

pub use adapter::{InboundAdapter, OutboundAdapter};
pub use declaration::{resolve_rule_set, CallSite};
pub use engine::{apply, normalize, normalize_fields};
pub use error::NormalizeError;
pub use rules::{RulePreset, RuleSet, Rules};
pub use target::{FieldVisitor, Normalizable, StringField, StringSlot};

#[cfg(feature = "derive")]
pub use tidy_derive::Normalize;
