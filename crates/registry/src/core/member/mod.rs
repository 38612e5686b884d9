//! Enumeration member values.
//!
//! A [`Member`] is an immutable `(id, canonical, aliases)` record tagged with
//! its enumeration type `E`. Members are declared as statics and registered by
//! reference, so every lookup hands back the declared singleton.
//!
//! # Comparison surface
//!
//! | Right-hand side | `==` / `!=` | `<` / `>` | Named form |
//! |-----------------|-------------|-----------|------------|
//! | `Member<E>` | by id | by id | [`Ord::cmp`] |
//! | `i64` | by id, no lookup | by id, no lookup | [`Member::cmp_id`] |
//! | `&str` | resolved, unknown is unequal | resolved, unknown is unordered | [`Member::compare_str`] fails with `NotFound` |
//! | other enumeration | use [`AnyMember`]: always unequal | [`AnyMember::try_cmp`] fails with `TypeMismatch` | |

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use super::index::KeyKind;
use super::{AnyMember, CastError, LookupError, StringEnum};

#[cfg(feature = "serde")]
mod serde;


/// One value of the enumeration `E`.
pub struct Member<E> {
	id: i64,
	canonical: &'static str,
	aliases: &'static [&'static str],
	_enum: PhantomData<fn() -> E>,
}

impl<E> Member<E> {
	/// Declares a member. Nothing is validated until the member is registered.
	pub const fn new(id: i64, canonical: &'static str, aliases: &'static [&'static str]) -> Self {
		Self {
			id,
			canonical,
			aliases,
			_enum: PhantomData,
		}
	}

	#[inline]
	pub const fn id(&self) -> i64 {
		self.id
	}

	/// Integer conversion.
	#[inline]
	pub const fn to_int(&self) -> i64 {
		self.id
	}

	/// The string produced by string conversion. Never an alias.
	#[inline]
	pub const fn canonical(&self) -> &'static str {
		self.canonical
	}

	#[inline]
	pub const fn aliases(&self) -> &'static [&'static str] {
		self.aliases
	}

	/// Canonical string followed by aliases.
	pub fn string_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.keyed_forms().map(|(form, _)| form)
	}

	pub(crate) fn keyed_forms(&self) -> impl Iterator<Item = (&'static str, KeyKind)> + '_ {
		std::iter::once((self.canonical, KeyKind::Canonical)).chain(self.aliases.iter().map(|&alias| (alias, KeyKind::Alias)))
	}

	/// Compares against a raw integer without touching the registry.
	#[inline]
	pub fn cmp_id(&self, id: i64) -> Ordering {
		self.id.cmp(&id)
	}
}

impl<E: StringEnum> Member<E> {
	/// Converts an integer to a member of `E`.
	pub fn from_id(id: i64) -> Result<&'static Self, CastError> {
		E::registry().from_id(id)
	}

	/// Converts any string form to a member of `E`.
	pub fn from_string(key: &str) -> Result<&'static Self, CastError> {
		E::registry().from_string(key)
	}

	/// Equality against a string form. Unknown strings are unequal.
	pub fn eq_str(&self, key: &str) -> bool {
		E::registry().get(key).is_some_and(|other| other == self)
	}

	/// Orders against a string form, resolving it first.
	pub fn compare_str(&self, key: &str) -> Result<Ordering, LookupError> {
		E::registry().lookup_by_string(key).map(|other| self.cmp(other))
	}

	/// Erases the enumeration type for cross-type comparison.
	pub fn erase(&self) -> AnyMember {
		AnyMember::of(self)
	}
}

impl<E> Clone for Member<E> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<E> Copy for Member<E> {}

impl<E> fmt::Debug for Member<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Member")
			.field("id", &self.id)
			.field("canonical", &self.canonical)
			.field("aliases", &self.aliases)
			.finish()
	}
}

impl<E> fmt::Display for Member<E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.canonical)
	}
}

impl<E> AsRef<str> for Member<E> {
	fn as_ref(&self) -> &str {
		self.canonical
	}
}

impl<E> PartialEq for Member<E> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl<E> Eq for Member<E> {}

impl<E> PartialOrd for Member<E> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<E> Ord for Member<E> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

// Equal members share an id, so the id alone keeps `Hash` consistent with `Eq`.
impl<E> Hash for Member<E> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl<E> PartialEq<i64> for Member<E> {
	fn eq(&self, other: &i64) -> bool {
		self.id == *other
	}
}

impl<E> PartialEq<Member<E>> for i64 {
	fn eq(&self, other: &Member<E>) -> bool {
		*self == other.id
	}
}

impl<E> PartialOrd<i64> for Member<E> {
	fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
		Some(self.cmp_id(*other))
	}
}

impl<E> PartialOrd<Member<E>> for i64 {
	fn partial_cmp(&self, other: &Member<E>) -> Option<Ordering> {
		Some(self.cmp(&other.id))
	}
}

impl<E: StringEnum> PartialEq<str> for Member<E> {
	fn eq(&self, other: &str) -> bool {
		self.eq_str(other)
	}
}

impl<E: StringEnum> PartialEq<&str> for Member<E> {
	fn eq(&self, other: &&str) -> bool {
		self.eq_str(other)
	}
}

impl<E: StringEnum> PartialEq<Member<E>> for str {
	fn eq(&self, other: &Member<E>) -> bool {
		other.eq_str(self)
	}
}

impl<E: StringEnum> PartialEq<Member<E>> for &str {
	fn eq(&self, other: &Member<E>) -> bool {
		other.eq_str(self)
	}
}

// Unknown strings are unordered, so `<` and `>` are both false for them.
impl<E: StringEnum> PartialOrd<str> for Member<E> {
	fn partial_cmp(&self, other: &str) -> Option<Ordering> {
		self.compare_str(other).ok()
	}
}

impl<E: StringEnum> PartialOrd<&str> for Member<E> {
	fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
		self.compare_str(other).ok()
	}
}

impl<E: StringEnum> PartialOrd<Member<E>> for str {
	fn partial_cmp(&self, other: &Member<E>) -> Option<Ordering> {
		other.compare_str(self).ok().map(Ordering::reverse)
	}
}

impl<E: StringEnum> PartialOrd<Member<E>> for &str {
	fn partial_cmp(&self, other: &Member<E>) -> Option<Ordering> {
		other.compare_str(self).ok().map(Ordering::reverse)
	}
}

impl<E> From<Member<E>> for i64 {
	fn from(member: Member<E>) -> Self {
		member.id
	}
}

impl<E> From<&Member<E>> for i64 {
	fn from(member: &Member<E>) -> Self {
		member.id
	}
}

impl<E> From<Member<E>> for &'static str {
	fn from(member: Member<E>) -> Self {
		member.canonical
	}
}

impl<E: StringEnum> TryFrom<i64> for Member<E> {
	type Error = CastError;

	fn try_from(id: i64) -> Result<Self, Self::Error> {
		Self::from_id(id).copied()
	}
}

impl<E: StringEnum> TryFrom<&str> for Member<E> {
	type Error = CastError;

	fn try_from(key: &str) -> Result<Self, Self::Error> {
		Self::from_string(key).copied()
	}
}

impl<E: StringEnum> FromStr for Member<E> {
	type Err = CastError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_string(s).copied()
	}
}
