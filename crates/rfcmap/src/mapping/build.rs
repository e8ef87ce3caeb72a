use super::Path;
use crate::{Error, Mapped, Node, Result, Structure, Table, Value, ValueRecord};

use rfcmap_core::schema::{FieldKind, FieldMapping};
use rfcmap_core::MappedType;

/// Builds the call structure for one mapped object from its field values.
///
/// Fields are emitted in declared order. Absent fields are skipped; tables
/// keep their rows in source order, including duplicates.
pub fn build(mapped: &MappedType, record: ValueRecord) -> Result<Structure> {
    let mut path = Path::default();
    build_structure(mapped, record, &mut path)
}

/// Builds the call structure for `object`.
pub fn build_object<T: Mapped>(mapped: &MappedType, object: &T) -> Result<Structure> {
    build(mapped, object.store())
}

fn build_structure(mapped: &MappedType, record: ValueRecord, path: &mut Path) -> Result<Structure> {
    if record.len() != mapped.fields.len() {
        return Err(Error::mapping(
            path.to_string(),
            Error::invalid_value(format!(
                "`{}` has {} fields, but {} values were provided",
                mapped.name,
                mapped.fields.len(),
                record.len()
            )),
        ));
    }

    let mut structure = Structure::new();

    for (field, value) in mapped.fields.iter().zip(record) {
        let Some(value) = value else {
            continue;
        };

        path.push_field(&field.remote_name);
        let node = build_field(field, value, path)?;
        path.pop();

        structure.insert(field.remote_name.clone(), node);
    }

    Ok(structure)
}

fn build_field(field: &FieldMapping, value: Value, path: &mut Path) -> Result<Node> {
    match &field.kind {
        FieldKind::Scalar {
            converter, format, ..
        } => converter
            .encode(value, format)
            .map(Node::Scalar)
            .map_err(|err| Error::mapping(path.to_string(), err)),
        FieldKind::Structure(nested) => {
            let record = value
                .into_record()
                .map_err(|err| Error::mapping(path.to_string(), err))?;

            build_structure(nested, record, path).map(Node::Structure)
        }
        FieldKind::Table(nested) => {
            let rows = value
                .into_list()
                .map_err(|err| Error::mapping(path.to_string(), err))?;

            let mut table = Table::new();

            for (index, row) in rows.into_iter().enumerate() {
                path.push_row(index);
                let record = row
                    .into_record()
                    .map_err(|err| Error::mapping(path.to_string(), err))?;
                table.push(build_structure(nested, record, path)?);
                path.pop();
            }

            Ok(Node::Table(table))
        }
    }
}
