//! Type-erased members for comparisons across enumerations.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Member, StringEnum, TypeMismatch};

/// A member whose enumeration type is tracked at runtime.
///
/// Equality across enumerations is always `false`; ordering across
/// enumerations is rejected with [`TypeMismatch`].
#[derive(Clone, Copy)]
pub struct AnyMember {
	type_id: TypeId,
	enum_name: &'static str,
	id: i64,
	canonical: &'static str,
}

impl AnyMember {
	pub fn of<E: StringEnum>(member: &Member<E>) -> Self {
		Self {
			type_id: TypeId::of::<E>(),
			enum_name: E::NAME,
			id: member.id(),
			canonical: member.canonical(),
		}
	}

	#[inline]
	pub fn enum_name(&self) -> &'static str {
		self.enum_name
	}

	#[inline]
	pub fn id(&self) -> i64 {
		self.id
	}

	#[inline]
	pub fn canonical(&self) -> &'static str {
		self.canonical
	}

	/// Returns true if this member belongs to `E`.
	#[inline]
	pub fn is<E: StringEnum>(&self) -> bool {
		self.type_id == TypeId::of::<E>()
	}

	/// Recovers the registered member of `E`, if this member belongs to it.
	pub fn downcast<E: StringEnum>(&self) -> Option<&'static Member<E>> {
		if self.is::<E>() { E::registry().get_by_id(self.id) } else { None }
	}

	/// Orders two members of the same enumeration by id.
	pub fn try_cmp(&self, other: &Self) -> Result<Ordering, TypeMismatch> {
		if self.type_id != other.type_id {
			return Err(TypeMismatch {
				left: self.enum_name,
				right: other.enum_name,
			});
		}
		Ok(self.id.cmp(&other.id))
	}
}

impl PartialEq for AnyMember {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id && self.id == other.id
	}
}

impl Eq for AnyMember {}

impl Hash for AnyMember {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state);
		self.id.hash(state);
	}
}

impl<E: StringEnum> From<Member<E>> for AnyMember {
	fn from(member: Member<E>) -> Self {
		Self::of(&member)
	}
}

impl<E: StringEnum> From<&Member<E>> for AnyMember {
	fn from(member: &Member<E>) -> Self {
		Self::of(member)
	}
}

impl fmt::Debug for AnyMember {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}::{}({})", self.enum_name, self.canonical, self.id)
	}
}

impl fmt::Display for AnyMember {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.canonical)
	}
}
