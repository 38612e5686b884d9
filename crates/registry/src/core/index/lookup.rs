//! Keyed lookup and fuzzy suggestions.

use super::types::Registry;
use crate::core::{LookupError, Member, RejectedKey};

/// A registry key: either an id or a string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKey<'a> {
	Id(i64),
	Str(&'a str),
}

impl From<i64> for LookupKey<'_> {
	fn from(id: i64) -> Self {
		Self::Id(id)
	}
}

impl<'a> From<&'a str> for LookupKey<'a> {
	fn from(key: &'a str) -> Self {
		Self::Str(key)
	}
}

impl<'a> From<&'a String> for LookupKey<'a> {
	fn from(key: &'a String) -> Self {
		Self::Str(key)
	}
}

impl From<LookupKey<'_>> for RejectedKey {
	fn from(key: LookupKey<'_>) -> Self {
		match key {
			LookupKey::Id(id) => Self::Id(id),
			LookupKey::Str(s) => Self::Str(s.to_owned()),
		}
	}
}

/// Looks up a member of `registry` by id or by string form.
///
/// ```
/// use strenum_registry::builtins::weekdays::{MONDAY, WeekDays};
/// use strenum_registry::{StringEnum, lookup};
///
/// let registry = WeekDays::registry();
/// assert_eq!(lookup(registry, 1_i64).unwrap(), &MONDAY);
/// assert_eq!(lookup(registry, "Mon").unwrap(), &MONDAY);
/// assert!(lookup(registry, "Funday").is_err());
/// ```
pub fn lookup<'k, E: 'static>(registry: &Registry<E>, key: impl Into<LookupKey<'k>>) -> Result<&'static Member<E>, LookupError> {
	match key.into() {
		LookupKey::Id(id) => registry.lookup_by_id(id),
		LookupKey::Str(s) => registry.lookup_by_string(s),
	}
}

/// Suggests the closest string form using edit distance.
pub(crate) fn suggest<'a>(forms: impl Iterator<Item = &'a str>, key: &str) -> Option<&'a str> {
	forms
		.map(|form| (strsim::levenshtein(key, form), form))
		.filter(|&(distance, _)| distance <= 3)
		.min_by_key(|&(distance, _)| distance)
		.map(|(_, form)| form)
}
