//! Error kinds raised by registration, lookup, conversion and comparison.
//!
//! Registration errors ([`RegistryError`]) describe programming defects in an
//! enumeration declaration and are fatal once a static registry is built.
//! Everything else is an ordinary recoverable failure.

use std::fmt;

use super::index::KeyKind;

/// Fatal registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two members of the same enumeration share an id.
	#[error("registry {registry}: duplicate id {id}: used by {existing:?}, rejected {incoming:?}")]
	DuplicateId {
		registry: &'static str,
		id: i64,
		existing: &'static str,
		incoming: &'static str,
	},
	/// A canonical string or alias is already bound to a member.
	#[error(
		"registry {registry}: {kind} {key:?} of {incoming:?} is not unique: already the {owner_kind} of {owner:?}"
	)]
	DuplicateStringForm {
		registry: &'static str,
		key: &'static str,
		kind: KeyKind,
		incoming: &'static str,
		owner: &'static str,
		owner_kind: KeyKind,
	},
	/// A member was declared without a canonical string.
	#[error("registry {registry}: member with id {id} has an empty canonical string")]
	EmptyCanonical { registry: &'static str, id: i64 },
}

/// A lookup input as it appears in a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RejectedKey {
	Id(i64),
	Str(String),
}

impl fmt::Display for RejectedKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(id) => write!(f, "id {id}"),
			Self::Str(s) => write!(f, "string {s:?}"),
		}
	}
}

/// Raised by registry lookups when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
	#[error("registry {registry}: no member for {key}")]
	NotFound { registry: &'static str, key: RejectedKey },
}

impl LookupError {
	/// Returns the key that failed to resolve.
	pub fn key(&self) -> &RejectedKey {
		match self {
			Self::NotFound { key, .. } => key,
		}
	}
}

/// Raised by the int/string conversion entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
	#[error("{registry}: could not find value with {value}{}", DidYouMean(.suggestion))]
	InvalidCast {
		registry: &'static str,
		value: RejectedKey,
		suggestion: Option<&'static str>,
	},
}

impl CastError {
	/// Returns the rejected input.
	pub fn value(&self) -> &RejectedKey {
		match self {
			Self::InvalidCast { value, .. } => value,
		}
	}

	/// Returns the closest known string form, if one was near enough.
	pub fn suggestion(&self) -> Option<&'static str> {
		match self {
			Self::InvalidCast { suggestion, .. } => *suggestion,
		}
	}
}

struct DidYouMean<'a>(&'a Option<&'static str>);

impl fmt::Display for DidYouMean<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(s) => write!(f, " (did you mean {s:?}?)"),
			None => Ok(()),
		}
	}
}

/// Raised when members of two different enumerations are ordered against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot order a member of {left} against a member of {right}")]
pub struct TypeMismatch {
	pub left: &'static str,
	pub right: &'static str,
}
