//! Days of the week, ids 1 through 7 starting on Monday.

crate::string_enum! {
	/// Days of the week. Canonical strings are full day names; abbreviations are aliases.
	pub enum WeekDays {
		Monday = 1 => "Monday" | "Mon" | "M",
		Tuesday = 2 => "Tuesday" | "Tue" | "Tu",
		Wednesday = 3 => "Wednesday" | "Wed" | "W",
		Thursday = 4 => "Thursday" | "Thu" | "Th",
		Friday = 5 => "Friday" | "Fri" | "F",
		Saturday = 6 => "Saturday" | "Sat" | "Sa",
		Sunday = 7 => "Sunday" | "Sun" | "Su",
	}
}
