use rustc_hash::FxHashMap as HashMap;

use super::build::RegistryBuilder;
use super::collision::{KeyBinding, KeyKind};
use super::lookup::suggest;
use crate::core::{CastError, LookupError, Member, RegistryError, RejectedKey};

/// Iterator over registered members in declaration order.
pub type Members<'a, E> = std::iter::Copied<std::slice::Iter<'a, &'static Member<E>>>;

/// Frozen lookup tables for one enumeration.
///
/// Holds id -> member, string form -> member, and (through the member slots)
/// member -> canonical string. Produced by [`RegistryBuilder::build`] and never
/// mutated afterwards, so shared reads need no coordination.
pub struct Registry<E: 'static> {
	pub(super) label: &'static str,
	pub(super) members: Box<[&'static Member<E>]>,
	pub(super) by_id: HashMap<i64, usize>,
	pub(super) by_key: HashMap<&'static str, KeyBinding>,
}

impl<E: 'static> Registry<E> {
	/// Starts a new registration pass.
	pub fn builder(label: &'static str) -> RegistryBuilder<E> {
		RegistryBuilder::new(label)
	}

	/// Registers `members` in order and freezes the result.
	pub fn try_declare<I>(label: &'static str, members: I) -> Result<Self, RegistryError>
	where
		I: IntoIterator<Item = &'static Member<E>>,
	{
		let mut builder = RegistryBuilder::new(label);
		builder.extend(members)?;
		Ok(builder.build())
	}

	/// Registers `members` in order and freezes the result.
	///
	/// # Panics
	///
	/// Panics on any [`RegistryError`]. A bad declaration is a defect in the
	/// program, so there is no registry to fall back to.
	pub fn declare<I>(label: &'static str, members: I) -> Self
	where
		I: IntoIterator<Item = &'static Member<E>>,
	{
		Self::try_declare(label, members).unwrap_or_else(|e| {
			tracing::error!(registry = label, error = %e, "enumeration registration failed");
			panic!("{e}");
		})
	}

	/// Returns the label used in diagnostics.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up a member by id.
	#[inline]
	pub fn get_by_id(&self, id: i64) -> Option<&'static Member<E>> {
		self.by_id.get(&id).map(|&slot| self.members[slot])
	}

	/// Looks up a member by any of its string forms. Exact, case-sensitive match.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&'static Member<E>> {
		self.by_key.get(key).map(|binding| self.members[binding.slot])
	}

	/// Looks up a member by string and reports which of its forms matched.
	pub fn resolve_key(&self, key: &str) -> Option<(&'static Member<E>, KeyKind)> {
		self.by_key.get(key).map(|binding| (self.members[binding.slot], binding.kind))
	}

	/// Looks up a member by id, failing with [`LookupError::NotFound`].
	pub fn lookup_by_id(&self, id: i64) -> Result<&'static Member<E>, LookupError> {
		self.get_by_id(id).ok_or(LookupError::NotFound {
			registry: self.label,
			key: RejectedKey::Id(id),
		})
	}

	/// Looks up a member by string, failing with [`LookupError::NotFound`].
	pub fn lookup_by_string(&self, key: &str) -> Result<&'static Member<E>, LookupError> {
		self.get(key).ok_or_else(|| LookupError::NotFound {
			registry: self.label,
			key: RejectedKey::Str(key.to_owned()),
		})
	}

	/// Converts an integer to a member.
	pub fn from_id(&self, id: i64) -> Result<&'static Member<E>, CastError> {
		self.get_by_id(id).ok_or(CastError::InvalidCast {
			registry: self.label,
			value: RejectedKey::Id(id),
			suggestion: None,
		})
	}

	/// Converts a string to a member.
	///
	/// On failure the error carries the closest known string form, if any.
	pub fn from_string(&self, key: &str) -> Result<&'static Member<E>, CastError> {
		self.get(key).ok_or_else(|| CastError::InvalidCast {
			registry: self.label,
			value: RejectedKey::Str(key.to_owned()),
			suggestion: suggest(self.string_forms(), key),
		})
	}

	/// Returns the canonical string the registry holds for `member`.
	///
	/// `None` when no member with that id was registered here.
	pub fn canonical_of(&self, member: &Member<E>) -> Option<&'static str> {
		self.get_by_id(member.id()).map(Member::canonical)
	}

	/// Returns members in declaration order.
	///
	/// Each call starts a fresh iterator over the same frozen table.
	#[inline]
	pub fn all(&self) -> Members<'_, E> {
		self.members.iter().copied()
	}

	/// Returns every string form, member by member in declaration order.
	pub fn string_forms(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.all().flat_map(Member::string_forms)
	}

	#[inline]
	pub fn contains_id(&self, id: i64) -> bool {
		self.by_id.contains_key(&id)
	}

	#[inline]
	pub fn contains_key(&self, key: &str) -> bool {
		self.by_key.contains_key(key)
	}

	/// Returns the number of members.
	#[inline]
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if the registry holds no members.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}
}

impl<'a, E: 'static> IntoIterator for &'a Registry<E> {
	type Item = &'static Member<E>;
	type IntoIter = Members<'a, E>;

	fn into_iter(self) -> Self::IntoIter {
		self.all()
	}
}

impl<E: 'static> std::fmt::Debug for Registry<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("members", &self.members.len())
			.field("string_forms", &self.by_key.len())
			.finish()
	}
}
