use pretty_assertions::assert_eq;

use super::{KeyKind, LookupKey, Registry, RegistryBuilder, lookup};
use crate::core::{CastError, LookupError, Member, RegistryError, RejectedKey};

enum Colors {}

static RED: Member<Colors> = Member::new(10, "Red", &["R", "rouge"]);
static GREEN: Member<Colors> = Member::new(3, "Green", &["G"]);
static BLUE: Member<Colors> = Member::new(7, "Blue", &[]);

fn leak(member: Member<Colors>) -> &'static Member<Colors> {
	Box::leak(Box::new(member))
}

fn colors() -> Registry<Colors> {
	Registry::try_declare("colors", [&RED, &GREEN, &BLUE]).expect("colors must register")
}

/// Lookups by id, canonical string and alias all return the declared static.
#[test]
fn test_lookup_returns_declared_singleton() {
	let registry = colors();

	assert!(std::ptr::eq(registry.lookup_by_id(10).unwrap(), &RED));
	assert!(std::ptr::eq(registry.lookup_by_string("Red").unwrap(), &RED));
	assert!(std::ptr::eq(registry.lookup_by_string("rouge").unwrap(), &RED));
	assert!(std::ptr::eq(registry.lookup_by_string("G").unwrap(), &GREEN));
	assert_eq!(registry.len(), 3);
	assert!(!registry.is_empty());
}

/// Iteration follows registration order, not id order.
#[test]
fn test_all_is_declaration_order() {
	let registry = colors();

	let ids: Vec<i64> = registry.all().map(Member::id).collect();
	assert_eq!(ids, vec![10, 3, 7]);

	// Restartable: a second pass yields the same sequence.
	let again: Vec<i64> = registry.all().map(Member::id).collect();
	assert_eq!(again, ids);

	let via_into_iter: Vec<&str> = (&registry).into_iter().map(Member::canonical).collect();
	assert_eq!(via_into_iter, vec!["Red", "Green", "Blue"]);
}

/// String lookups are exact: no case folding, no trimming.
#[test]
fn test_string_lookup_is_exact() {
	let registry = colors();

	assert!(registry.get("red").is_none());
	assert!(registry.get(" Red").is_none());
	assert!(registry.get("Red ").is_none());
	assert!(registry.get("").is_none());
}

#[test]
fn test_lookup_not_found() {
	let registry = colors();

	assert_eq!(
		registry.lookup_by_id(99).unwrap_err(),
		LookupError::NotFound {
			registry: "colors",
			key: RejectedKey::Id(99),
		}
	);
	let err = registry.lookup_by_string("Purple").unwrap_err();
	assert_eq!(err.key(), &RejectedKey::Str("Purple".into()));
}

#[test]
fn test_free_lookup_dispatches_on_key() {
	let registry = colors();

	assert_eq!(lookup(&registry, 3_i64).unwrap(), &GREEN);
	assert_eq!(lookup(&registry, "B").unwrap_err().key(), &RejectedKey::Str("B".into()));
	assert_eq!(lookup(&registry, LookupKey::Str("Blue")).unwrap(), &BLUE);
	let owned = String::from("R");
	assert_eq!(lookup(&registry, &owned).unwrap(), &RED);
}

#[test]
fn test_casts_carry_rejected_input() {
	let registry = colors();

	assert_eq!(
		registry.from_id(4).unwrap_err(),
		CastError::InvalidCast {
			registry: "colors",
			value: RejectedKey::Id(4),
			suggestion: None,
		}
	);

	let err = registry.from_string("Gren").unwrap_err();
	assert_eq!(err.value(), &RejectedKey::Str("Gren".into()));
	assert_eq!(err.suggestion(), Some("Green"));
	assert_eq!(err.to_string(), "colors: could not find value with string \"Gren\" (did you mean \"Green\"?)");

	let far = registry.from_string("Magenta").unwrap_err();
	assert_eq!(far.suggestion(), None);
}

#[test]
fn test_resolve_key_reports_kind() {
	let registry = colors();

	assert_eq!(registry.resolve_key("Red"), Some((&RED, KeyKind::Canonical)));
	assert_eq!(registry.resolve_key("rouge"), Some((&RED, KeyKind::Alias)));
	assert_eq!(registry.resolve_key("rose"), None);
}

#[test]
fn test_canonical_of() {
	let registry = colors();

	assert_eq!(registry.canonical_of(&RED), Some("Red"));
	assert_eq!(registry.canonical_of(&Member::new(3, "Vert", &[])), Some("Green"));
	assert_eq!(registry.canonical_of(&Member::new(42, "Nope", &[])), None);
}

#[test]
fn test_string_forms_in_declaration_order() {
	let registry = colors();

	let forms: Vec<&str> = registry.string_forms().collect();
	assert_eq!(forms, vec!["Red", "R", "rouge", "Green", "G", "Blue"]);
	assert!(registry.contains_key("R"));
	assert!(registry.contains_id(7));
	assert!(!registry.contains_id(8));
}

#[test]
fn test_duplicate_id_rejected() {
	let mut builder = RegistryBuilder::new("colors");
	builder.extend([&RED, &GREEN, &BLUE]).unwrap();

	let err = builder.register(leak(Member::new(10, "Crimson", &[]))).unwrap_err();
	assert_eq!(
		err,
		RegistryError::DuplicateId {
			registry: "colors",
			id: 10,
			existing: "Red",
			incoming: "Crimson",
		}
	);
	assert_eq!(builder.len(), 3);
}

/// Registering the same static twice is not idempotent.
#[test]
fn test_reregistration_is_duplicate_id() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	assert!(matches!(builder.register(&RED), Err(RegistryError::DuplicateId { id: 10, .. })));
}

#[test]
fn test_empty_canonical_rejected() {
	let mut builder = RegistryBuilder::<Colors>::new("colors");

	assert_eq!(
		builder.register(leak(Member::new(1, "", &["x"]))).unwrap_err(),
		RegistryError::EmptyCanonical { registry: "colors", id: 1 }
	);
	assert!(builder.is_empty());
}

/// The id check runs before the canonical check.
#[test]
fn test_duplicate_id_checked_before_empty_canonical() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	assert!(matches!(
		builder.register(leak(Member::new(10, "", &[]))),
		Err(RegistryError::DuplicateId { .. })
	));
}

#[test]
fn test_canonical_collides_with_existing_canonical() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	assert_eq!(
		builder.register(leak(Member::new(99, "Red", &[]))).unwrap_err(),
		RegistryError::DuplicateStringForm {
			registry: "colors",
			key: "Red",
			kind: KeyKind::Canonical,
			incoming: "Red",
			owner: "Red",
			owner_kind: KeyKind::Canonical,
		}
	);
}

#[test]
fn test_alias_collides_with_existing_alias() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	assert_eq!(
		builder.register(leak(Member::new(99, "Ruby", &["rouge"]))).unwrap_err(),
		RegistryError::DuplicateStringForm {
			registry: "colors",
			key: "rouge",
			kind: KeyKind::Alias,
			incoming: "Ruby",
			owner: "Red",
			owner_kind: KeyKind::Alias,
		}
	);
}

/// A canonical string may not reuse another member's alias, and vice versa.
#[test]
fn test_cross_kind_collisions() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	assert!(matches!(
		builder.register(leak(Member::new(1, "R", &[]))),
		Err(RegistryError::DuplicateStringForm {
			kind: KeyKind::Canonical,
			owner_kind: KeyKind::Alias,
			..
		})
	));
	assert!(matches!(
		builder.register(leak(Member::new(2, "Ruby", &["Red"]))),
		Err(RegistryError::DuplicateStringForm {
			kind: KeyKind::Alias,
			owner_kind: KeyKind::Canonical,
			..
		})
	));
}

#[test]
fn test_member_cannot_repeat_its_own_forms() {
	let mut builder = RegistryBuilder::<Colors>::new("colors");

	assert_eq!(
		builder.register(leak(Member::new(1, "Teal", &["T", "Teal"]))).unwrap_err(),
		RegistryError::DuplicateStringForm {
			registry: "colors",
			key: "Teal",
			kind: KeyKind::Alias,
			incoming: "Teal",
			owner: "Teal",
			owner_kind: KeyKind::Canonical,
		}
	);
}

/// A rejected member leaves neither its id nor any of its string forms behind.
#[test]
fn test_failed_registration_is_atomic() {
	let mut builder = RegistryBuilder::new("colors");
	builder.register(&RED).unwrap();

	// "Orange" and "O" would be new, "R" collides.
	assert!(builder.register(leak(Member::new(5, "Orange", &["O", "R"]))).is_err());

	// The same id and strings are still free for a valid member.
	builder.register(leak(Member::new(5, "Orange", &["O"]))).unwrap();
	let registry = builder.build();
	assert_eq!(registry.lookup_by_string("O").unwrap().id(), 5);
	assert_eq!(registry.len(), 2);
}

#[test]
fn test_error_messages_name_both_members() {
	let err = Registry::try_declare("colors", [&RED, leak(Member::new(11, "Rust", &["R"]))]).unwrap_err();

	assert_eq!(
		err.to_string(),
		"registry colors: alias \"R\" of \"Rust\" is not unique: already the alias of \"Red\""
	);
}

#[test]
#[should_panic(expected = "registry colors: duplicate id 3")]
fn test_declare_panics_on_defect() {
	let _ = Registry::declare("colors", [&GREEN, leak(Member::new(3, "Lime", &[]))]);
}

#[test]
fn test_empty_registry() {
	let registry = RegistryBuilder::<Colors>::new("empty").build();

	assert!(registry.is_empty());
	assert_eq!(registry.all().count(), 0);
	assert_eq!(registry.label(), "empty");
}
