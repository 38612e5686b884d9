//! Serde support: members serialize as their canonical string and deserialize
//! from any string form or from an integer id.

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Member;
use crate::core::StringEnum;

impl<E> Serialize for Member<E> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.canonical())
	}
}

impl<'de, E: StringEnum> Deserialize<'de> for Member<E> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(MemberVisitor(PhantomData))
	}
}

struct MemberVisitor<E>(PhantomData<fn() -> E>);

impl<E: StringEnum> Visitor<'_> for MemberVisitor<E> {
	type Value = Member<E>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "a string form or id of {}", E::NAME)
	}

	fn visit_str<Er: de::Error>(self, v: &str) -> Result<Self::Value, Er> {
		Member::<E>::from_string(v).copied().map_err(Er::custom)
	}

	fn visit_i64<Er: de::Error>(self, v: i64) -> Result<Self::Value, Er> {
		Member::<E>::from_id(v).copied().map_err(Er::custom)
	}

	fn visit_u64<Er: de::Error>(self, v: u64) -> Result<Self::Value, Er> {
		let id = i64::try_from(v).map_err(|_| Er::invalid_value(de::Unexpected::Unsigned(v), &self))?;
		self.visit_i64(id)
	}
}
