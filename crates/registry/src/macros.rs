//! Enumeration declaration macros.

/// Declares an enumeration type and its members.
///
/// Each member becomes a `static` named after it in `SCREAMING_SNAKE_CASE`.
/// The registry is built from the members in declaration order on first
/// access; a duplicate id, an empty canonical string or a repeated string
/// form panics at that point.
///
/// ```
/// strenum_registry::string_enum! {
/// 	/// Traffic light colours.
/// 	pub enum Light {
/// 		Red = 0 => "Red" | "R",
/// 		Amber = 1 => "Amber" | "Yellow",
/// 		Green = 2 => "Green",
/// 	}
/// }
///
/// use strenum_registry::StringEnum;
///
/// assert_eq!(Light::from_string("Yellow").unwrap(), &AMBER);
/// assert_eq!(RED.to_int(), 0);
/// assert_eq!(Light::all().count(), 3);
/// ```
#[macro_export]
macro_rules! string_enum {
	(
		$(#[$attr:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$member_attr:meta])*
				$member:ident = $id:expr => $canonical:literal $(| $alias:literal)*
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug)]
		$vis enum $name {}

		$crate::paste::paste! {
			$(
				$(#[$member_attr])*
				#[doc = concat!("`", stringify!($name), "::", stringify!($member), "` (id ", stringify!($id), ").")]
				$vis static [<$member:snake:upper>]: $crate::Member<$name> =
					$crate::Member::new($id, $canonical, &[$($alias),*]);
			)*

			impl $crate::StringEnum for $name {
				const NAME: &'static str = stringify!($name);

				fn registry() -> &'static $crate::Registry<Self> {
					static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$name>> = ::std::sync::LazyLock::new(|| {
						$crate::Registry::declare(stringify!($name), [$(&[<$member:snake:upper>]),*])
					});
					&REGISTRY
				}
			}
		}
	};
}
