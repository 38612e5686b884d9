//! Shared enumeration infrastructure.

pub mod any;
pub mod enumeration;
pub mod error;
pub mod index;
pub mod member;
pub mod traits;

pub use any::AnyMember;
pub use enumeration::Enumeration;
pub use error::{CastError, LookupError, RegistryError, RejectedKey, TypeMismatch};
pub use index::{KeyKind, LookupKey, Members, Registry, RegistryBuilder, lookup};
pub use member::Member;
pub use traits::StringEnum;
