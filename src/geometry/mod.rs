pub mod path;
pub mod segment;

pub use path::{Path, PathIntersection};
pub use segment::{Arc, Line, Segment};
