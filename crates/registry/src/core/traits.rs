use super::index::{LookupKey, Members, Registry, lookup};
use super::{CastError, LookupError, Member};

/// An enumeration type: a closed set of [`Member`]s sharing one [`Registry`].
///
/// Usually implemented through [`string_enum!`](crate::string_enum), which
/// builds the registry lazily on first access. Implementors must return the
/// same registry from every call to [`StringEnum::registry`].
pub trait StringEnum: Sized + 'static {
	/// Enumeration name used in diagnostics.
	const NAME: &'static str;

	/// Returns the process-wide registry for this enumeration.
	fn registry() -> &'static Registry<Self>;

	/// Converts an integer to a member.
	fn from_id(id: i64) -> Result<&'static Member<Self>, CastError> {
		Self::registry().from_id(id)
	}

	/// Converts any string form to a member.
	fn from_string(key: &str) -> Result<&'static Member<Self>, CastError> {
		Self::registry().from_string(key)
	}

	/// Looks up a member by id or string form.
	fn lookup<'k>(key: impl Into<LookupKey<'k>>) -> Result<&'static Member<Self>, LookupError> {
		lookup(Self::registry(), key)
	}

	/// Returns members in declaration order.
	fn all() -> Members<'static, Self> {
		Self::registry().all()
	}
}
