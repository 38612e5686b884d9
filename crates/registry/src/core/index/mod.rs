//! Per-enumeration registry infrastructure.
//!
//! # Mental Model
//!
//! 1. **Registration:** [`RegistryBuilder`] ingests `&'static` members in
//!    declaration order and rejects duplicate ids, empty canonical strings
//!    and colliding string forms.
//! 2. **Freeze:** [`RegistryBuilder::build`] produces a [`Registry`] that is
//!    never mutated again.
//! 3. **Consumption:** readers resolve ids and strings with O(1) lookups and
//!    iterate members in declaration order.
//!
//! # Invariants
//!
//! - No two members share an id.
//!   - Enforced in: [`RegistryBuilder::register`].
//! - The string form -> member map is injective across canonical strings and aliases.
//!   - Enforced in: [`RegistryBuilder::register`].
//! - Iteration order is registration order, independent of ids.
//!   - Enforced in: [`Registry::all`].
//! - A failed registration leaves no keys behind.
//!   - Enforced in: [`RegistryBuilder::register`] (keys are staged before insertion).

mod build;
mod collision;
mod lookup;
mod types;

pub use build::RegistryBuilder;
pub use collision::KeyKind;
pub use lookup::{LookupKey, lookup};
pub use types::{Members, Registry};

#[cfg(test)]
mod tests;
