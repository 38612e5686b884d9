//! The minimal enumeration value: an id and a name, no registry.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named constant compared and ordered by id alone.
///
/// Unlike [`Member`](crate::Member) it has no aliases and no string lookup.
#[derive(Debug, Clone, Copy)]
pub struct Enumeration {
	id: i64,
	name: &'static str,
}

impl Enumeration {
	pub const fn new(id: i64, name: &'static str) -> Self {
		Self { id, name }
	}

	#[inline]
	pub const fn id(&self) -> i64 {
		self.id
	}

	#[inline]
	pub const fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for Enumeration {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Enumeration {}

impl PartialOrd for Enumeration {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Enumeration {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id.cmp(&other.id)
	}
}

impl Hash for Enumeration {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Display for Enumeration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
