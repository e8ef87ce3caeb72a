pub mod call;
pub use call::{Node, Scalar, Structure, Table};

pub mod convert;
pub use convert::{Converter, Format, Registry};

mod error;
pub use error::{Error, IntoError};

mod properties;
pub use properties::Properties;

pub mod schema;
pub use schema::{MappedType, Metadata};

pub mod transport;
pub use transport::{Connection, Connector, TransportError};

pub mod value;
pub use value::{Type, Value, ValueRecord};

/// A Result type alias that uses rfcmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
