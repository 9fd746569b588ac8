//! # loupe-core
//!
//! Typed, path-tracking, **read-only** access into dynamically-shaped
//! decoded data — JSON documents, configuration files, message payloads,
//! anything that decodes into an untyped value tree.
//!
//! Wrap the root of a decoded tree in an [`Accessor`], descend with
//! [`Accessor::index`], and pull typed scalars or lists out at the end.
//! Getters come in two disciplines: **strict** (`get_int`, ...) requires the
//! exact runtime type, **coercive** (`get_as_int`, ...) converts through a
//! fixed rule set. Every failure carries the full key path of the access
//! that produced it, so an error three maps and two lists deep still points
//! at the exact location.
//!
//! ## Quick start
//!
//! ```rust
//! use loupe_core::{AccessError, Accessor, Value};
//!
//! let doc = Value::from_json(
//!     r#"{"user": {"id": "42", "active": "true", "tags": ["a", "b"]}}"#,
//! )
//! .unwrap();
//! let root = Accessor::new(&doc);
//! let user = root.index("user");
//!
//! // Coercive getters convert where a fixed rule applies.
//! assert_eq!(user.index("id").get_as_int().unwrap(), 42);
//! assert!(user.index("active").get_as_bool().unwrap());
//!
//! // Strict getters require the exact decoded type.
//! assert_eq!(user.index("tags").get_list_of_string().unwrap(), vec!["a", "b"]);
//!
//! // A key that does not resolve reports exactly where it went missing.
//! let err = user.index("missing").get_string().unwrap_err();
//! assert!(matches!(err, AccessError::MissingValue { .. }));
//! assert_eq!(err.path().to_string(), "root.user.missing");
//! ```
//!
//! ## Modules
//!
//! - [`accessor`] — [`Accessor`], [`MissingAccessor`], and the [`Accessed`]
//!   union they dispatch through
//! - [`value`] — the [`Value`] sum type, map [`Key`]s, and the serde_json
//!   bridge
//! - [`path`] — [`KeyPath`], the immutable key sequence behind every
//!   accessor and error
//! - [`error`] — [`AccessError`] taxonomy and the crate [`Result`] alias

pub mod accessor;
mod coerce;
pub mod error;
pub mod path;
pub mod value;

pub use accessor::{Accessed, Accessor, MissingAccessor};
pub use error::{AccessError, Result};
pub use path::KeyPath;
pub use value::{Key, Value};
