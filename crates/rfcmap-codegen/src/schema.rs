mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, PadAttr, RoleAttr};

mod lit;

mod mapped;
pub(crate) use mapped::{Kind, Mapped};

mod mapped_attr;
pub(crate) use mapped_attr::MappedAttr;
