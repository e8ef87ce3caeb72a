//! The call structure: the tree exchanged with the remote transport.
//!
//! A call structure is built from mapped objects on the way out and mapped
//! back onto them on the way in. It never refers to native objects.

mod node;
pub use node::Node;

mod scalar;
pub use scalar::Scalar;

mod structure;
pub use structure::Structure;

mod table;
pub use table::Table;
