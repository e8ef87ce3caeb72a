//! The mapping engine.
//!
//! [`build`] turns the field values of a mapped object into a call structure
//! and [`map`] turns a call structure back into field values. Both walk the
//! resolved [`MappedType`](crate::schema::MappedType) in declared field
//! order. Value-level failures are reported as mapping errors carrying the
//! path of the failing field, such as `FLIGHT_LIST[1].PRICE`.

mod build;
pub use build::{build, build_object};

mod map;
pub use map::{map, map_object, map_onto};

mod path;
use path::Path;
