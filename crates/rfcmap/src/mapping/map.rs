use super::Path;
use crate::{Error, Mapped, Node, Result, Structure, Value, ValueRecord};

use rfcmap_core::schema::{FieldKind, FieldMapping};
use rfcmap_core::MappedType;

/// Maps a call structure back to field values.
///
/// A field whose node is missing is left absent. The structure is not
/// modified.
pub fn map(structure: &Structure, mapped: &MappedType) -> Result<ValueRecord> {
    let mut path = Path::default();
    map_structure(structure, mapped, &mut path)
}

/// Maps a call structure onto a new `T::default()`.
pub fn map_object<T: Mapped>(structure: &Structure, mapped: &MappedType) -> Result<T> {
    T::from_record(map(structure, mapped)?)
}

/// Maps a call structure onto an existing object. Fields missing from the
/// structure keep their current value.
///
/// On error `target` is left unchanged: every received value is first loaded
/// into a scratch instance, and only then merged into `target`.
pub fn map_onto<T: Mapped>(structure: &Structure, mapped: &MappedType, target: &mut T) -> Result<()> {
    let record = map(structure, mapped)?;

    // Field loads are deterministic, so a record that loads here also merges.
    T::from_record(record.clone())?;

    target.apply(record)
}

fn map_structure(structure: &Structure, mapped: &MappedType, path: &mut Path) -> Result<ValueRecord> {
    let mut record = ValueRecord::absent(mapped.fields.len());

    for field in &mapped.fields {
        let Some(node) = structure.get(&field.remote_name) else {
            continue;
        };

        path.push_field(&field.remote_name);
        record[field.index] = map_field(field, node, path)?;
        path.pop();
    }

    Ok(record)
}

fn map_field(field: &FieldMapping, node: &Node, path: &mut Path) -> Result<Option<Value>> {
    match (&field.kind, node) {
        (
            FieldKind::Scalar {
                native,
                converter,
                format,
            },
            Node::Scalar(scalar),
        ) => {
            let value = converter
                .decode(scalar.clone(), format)
                .map_err(|err| Error::mapping(path.to_string(), err))?;

            match value {
                Some(value) if !value.is_a(&native.ty) => Err(Error::mapping(
                    path.to_string(),
                    Error::type_conversion(value, native.name),
                )),
                value => Ok(value),
            }
        }
        (FieldKind::Structure(nested), Node::Structure(structure)) => {
            let record = map_structure(structure, nested, path)?;
            Ok(Some(Value::Record(record)))
        }
        (FieldKind::Table(nested), Node::Table(table)) => {
            let mut rows = Vec::with_capacity(table.len());

            for (index, row) in table.iter().enumerate() {
                path.push_row(index);
                rows.push(Value::Record(map_structure(row, nested, path)?));
                path.pop();
            }

            Ok(Some(Value::List(rows)))
        }
        (_, node) => Err(Error::mapping(
            path.to_string(),
            Error::invalid_value(format!(
                "expected a {} node, found a {}",
                field.role(),
                node.kind_name()
            )),
        )),
    }
}
