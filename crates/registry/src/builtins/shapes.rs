//! Geometric shapes by dimension, ids starting at 0.

crate::string_enum! {
	/// Shapes by dimension. Aliases name the dimension.
	pub enum Shapes {
		Point = 0 => "Point",
		Line = 1 => "Line" | "1D",
		Square = 2 => "Square" | "2D",
	}
}
