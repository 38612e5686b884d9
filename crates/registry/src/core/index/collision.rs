//! String-form kinds and bindings.
//!
//! # Role
//!
//! Every string form of a member is bound to exactly one slot in the registry.
//! The binding remembers whether the string is the member's canonical form or
//! one of its aliases so collisions can report both sides.

/// Which string form of a member a key is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
	/// The single string produced by string conversion.
	Canonical,
	/// An additional accepted input form.
	Alias,
}

impl std::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Canonical => write!(f, "canonical string"),
			Self::Alias => write!(f, "alias"),
		}
	}
}

/// A string form bound to a member slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct KeyBinding {
	/// Declaration-order slot of the owning member.
	pub slot: usize,
	pub kind: KeyKind,
}
