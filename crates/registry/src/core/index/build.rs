use rustc_hash::FxHashMap as HashMap;

use super::collision::{KeyBinding, KeyKind};
use super::types::Registry;
use crate::core::{Member, RegistryError};

/// Builder for constructing a [`Registry`].
///
/// Members are registered one at a time in declaration order. Each call to
/// [`RegistryBuilder::register`] validates the candidate against everything
/// registered so far and either inserts all of its keys or none of them.
pub struct RegistryBuilder<E: 'static> {
	label: &'static str,
	members: Vec<&'static Member<E>>,
	by_id: HashMap<i64, usize>,
	by_key: HashMap<&'static str, KeyBinding>,
}

impl<E: 'static> RegistryBuilder<E> {
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			members: Vec::new(),
			by_id: HashMap::default(),
			by_key: HashMap::default(),
		}
	}

	/// Returns the label used in diagnostics.
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of members registered so far.
	pub fn len(&self) -> usize {
		self.members.len()
	}

	/// Returns true if no members have been registered so far.
	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	/// Registers a member, enforcing id and string-form uniqueness.
	///
	/// Checks run in order: id collision, empty canonical string, then every
	/// string form (canonical first, aliases in declaration order). On error
	/// the builder is left exactly as it was.
	///
	/// Not idempotent: registering the same member twice is a [`RegistryError::DuplicateId`].
	pub fn register(&mut self, member: &'static Member<E>) -> Result<(), RegistryError> {
		let id = member.id();
		let canonical = member.canonical();

		if let Some(&slot) = self.by_id.get(&id) {
			return Err(RegistryError::DuplicateId {
				registry: self.label,
				id,
				existing: self.members[slot].canonical(),
				incoming: canonical,
			});
		}

		if canonical.is_empty() {
			return Err(RegistryError::EmptyCanonical { registry: self.label, id });
		}

		let mut staged: Vec<(&'static str, KeyKind)> = Vec::with_capacity(1 + member.aliases().len());
		for (key, kind) in member.keyed_forms() {
			if let Some(existing) = self.by_key.get(key) {
				return Err(RegistryError::DuplicateStringForm {
					registry: self.label,
					key,
					kind,
					incoming: canonical,
					owner: self.members[existing.slot].canonical(),
					owner_kind: existing.kind,
				});
			}
			if let Some(&(_, owner_kind)) = staged.iter().find(|(k, _)| *k == key) {
				return Err(RegistryError::DuplicateStringForm {
					registry: self.label,
					key,
					kind,
					incoming: canonical,
					owner: canonical,
					owner_kind,
				});
			}
			staged.push((key, kind));
		}

		let slot = self.members.len();
		self.members.push(member);
		self.by_id.insert(id, slot);
		for (key, kind) in staged {
			self.by_key.insert(key, KeyBinding { slot, kind });
		}

		tracing::trace!(registry = self.label, id, canonical, aliases = member.aliases().len(), "registered member");
		Ok(())
	}

	/// Registers multiple members in iteration order, stopping at the first error.
	pub fn extend<I: IntoIterator<Item = &'static Member<E>>>(&mut self, members: I) -> Result<(), RegistryError> {
		members.into_iter().try_for_each(|member| self.register(member))
	}

	/// Freezes the builder into an immutable [`Registry`].
	pub fn build(self) -> Registry<E> {
		tracing::debug!(
			registry = self.label,
			members = self.members.len(),
			string_forms = self.by_key.len(),
			"registry built"
		);
		Registry {
			label: self.label,
			members: self.members.into_boxed_slice(),
			by_id: self.by_id,
			by_key: self.by_key,
		}
	}
}
