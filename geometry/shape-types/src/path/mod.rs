//! Path iteration protocol and winding engine.
//!
//! - [`element`]: [`PathElement`], [`PathElementType`] and [`WindingRule`]
//! - [`iter`]: the [`PathIterator`] trait and the boundary iterators of
//!   every shape kind
//! - [`crossing`]: point-in-path evaluation by signed crossing counts
//! - [`bezier`]: cubic helpers for flattening and tight bounds

pub mod bezier;
pub mod crossing;
pub mod element;
pub mod iter;

pub use bezier::CubicSegment;
pub use crossing::{Segments, contains_point, contains_point_with, point_crossings};
pub use element::{PathElement, PathElementType, WindingRule};
pub use iter::{
    BoxedPathIter, ChainedPathIter, EllipsePathIter, FlatteningPathIter, PathElements,
    PathIterator, PolygonPathIter, RoundRectanglePathIter, TransformedPathIter,
};
