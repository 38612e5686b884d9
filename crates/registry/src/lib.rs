//! String-keyed enumerations backed by per-type registries.
//!
//! An enumeration is a closed set of [`Member`]s. Each member carries an
//! integer id, a canonical string and any number of aliases, and behaves at
//! once like an integer-backed enum, a string lookup table and an ordered
//! value type.
//!
//! # Declaring
//!
//! [`string_enum!`] declares the enumeration marker type, one `static` per
//! member, and a [`StringEnum`] implementation whose registry is built once,
//! in declaration order, on first access.
//!
//! # Consuming
//!
//! - [`StringEnum::from_id`] / [`StringEnum::from_string`] convert inputs to members.
//! - [`Member::to_int`] / [`Member::canonical`] convert members back.
//! - `==`, `<`, `>` work between members, against `i64` ids and against `&str` string forms.
//! - [`StringEnum::all`] iterates members in declaration order.
//! - [`AnyMember`] compares members of different enumerations.
//!
//! # Features
//!
//! - `builtins` (default): the [`builtins::weekdays`] and [`builtins::shapes`] enumerations.
//! - `serde`: members serialize as their canonical string.

#[cfg(feature = "builtins")]
pub mod builtins;
pub mod core;
mod macros;

#[doc(hidden)]
pub use paste;

pub use crate::core::{
	AnyMember, CastError, Enumeration, KeyKind, LookupError, LookupKey, Member, Members, Registry, RegistryBuilder,
	RegistryError, RejectedKey, StringEnum, TypeMismatch, lookup,
};

#[cfg(test)]
mod tests;
