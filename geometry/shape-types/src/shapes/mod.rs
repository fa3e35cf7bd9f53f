//! Shape value types.
//!
//! Each type holds the minimal defining parameters of one shape kind and
//! implements [`Shape2d`](crate::Shape2d) by delegating to the kernels.
//! Constructors and setters that could break an invariant (negative sizes,
//! non-unit axes) return [`Result`](crate::Result).

mod circle;
mod ellipse;
mod multi;
mod oriented_rectangle;
mod parallelogram;
mod path;
mod rectangle;
mod round_rectangle;
mod segment;
mod triangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use multi::MultiShape;
pub use oriented_rectangle::OrientedRectangle;
pub use parallelogram::Parallelogram;
pub use path::Path;
pub use rectangle::Rectangle;
pub use round_rectangle::RoundRectangle;
pub use segment::Segment;
pub use triangle::Triangle;
