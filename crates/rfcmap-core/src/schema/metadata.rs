use super::{CallKind, FieldDescriptor, FieldKind, FieldMapping, MappedType, Role, Shape, TypeRef};
use crate::convert::{DecimalConverter, Format};
use crate::{Error, Registry, Result};

use heck::ToShoutySnakeCase;
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

/// The compute-once cache of resolved mapped types.
///
/// Resolving a type resolves every type it references. A type graph is
/// resolved under one lock, so concurrent first resolutions of the same type
/// produce one `MappedType`; every later call returns that same `Arc`.
#[derive(Debug)]
pub struct Metadata {
    registry: Arc<Registry>,
    cache: Mutex<HashMap<TypeId, Arc<MappedType>>>,
}

impl Metadata {
    pub fn new(registry: Arc<Registry>) -> Metadata {
        Metadata {
            registry,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Resolves `ty`, returning the cached mapped type when it was resolved
    /// before.
    pub fn resolve(&self, ty: TypeRef) -> Result<Arc<MappedType>> {
        let mut cache = self.lock();

        if let Some(mapped) = cache.get(&ty.id) {
            return Ok(mapped.clone());
        }

        Resolver {
            registry: &self.registry,
            cache: &mut *cache,
            stack: vec![],
        }
        .resolve(ty)
    }

    /// Returns the mapped type for `id` if it has been resolved.
    pub fn get(&self, id: TypeId) -> Option<Arc<MappedType>> {
        self.lock().get(&id).cloned()
    }

    /// Number of resolved types.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TypeId, Arc<MappedType>>> {
        // Entries are only inserted once fully resolved, so a poisoned cache
        // is still consistent.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

struct Resolver<'a> {
    registry: &'a Registry,
    cache: &'a mut HashMap<TypeId, Arc<MappedType>>,

    /// Types currently being resolved, outermost first
    stack: Vec<TypeRef>,
}

impl Resolver<'_> {
    fn resolve(&mut self, ty: TypeRef) -> Result<Arc<MappedType>> {
        if let Some(mapped) = self.cache.get(&ty.id) {
            return Ok(mapped.clone());
        }

        if let Some(pos) = self.stack.iter().position(|entry| entry.id == ty.id) {
            let cycle = self.stack[pos..]
                .iter()
                .chain(Some(&ty))
                .map(|entry| entry.name)
                .collect::<Vec<_>>()
                .join(" -> ");

            return Err(Error::mapping_configuration(
                ty.name,
                format!("recursive type graph: {cycle}"),
            ));
        }

        let descriptor = (ty.describe)();

        if descriptor.remote_name.is_empty() {
            return Err(Error::mapping_configuration(
                descriptor.name,
                "remote name is empty",
            ));
        }

        self.stack.push(ty);
        let fields = self.resolve_fields(descriptor.name, &descriptor.fields);
        self.stack.pop();

        let mapped = Arc::new(MappedType {
            id: ty.id,
            name: descriptor.name,
            remote_name: descriptor.remote_name,
            kind: descriptor.kind,
            fields: fields?,
        });

        tracing::debug!(
            ty = mapped.name,
            remote = %mapped.remote_name,
            kind = %mapped.kind,
            fields = mapped.fields.len(),
            "resolved mapped type"
        );

        self.cache.insert(ty.id, mapped.clone());
        Ok(mapped)
    }

    fn resolve_fields(
        &mut self,
        type_name: &str,
        fields: &[FieldDescriptor],
    ) -> Result<Vec<FieldMapping>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(fields.len());

        for (index, field) in fields.iter().enumerate() {
            let remote_name = field
                .remote_name
                .clone()
                .unwrap_or_else(|| field.local_name.to_shouty_snake_case());

            if remote_name.is_empty() {
                return Err(Error::mapping_configuration(
                    type_name,
                    format!("field `{}` has an empty remote name", field.local_name),
                ));
            }

            if !seen.insert(remote_name.clone()) {
                return Err(Error::mapping_configuration(
                    type_name,
                    format!("remote name `{remote_name}` is used by more than one field"),
                ));
            }

            let shape_role = field.shape.role();
            if let Some(declared) = field.role {
                if declared != shape_role {
                    return Err(Error::mapping_configuration(
                        type_name,
                        format!(
                            "field `{}` is declared as {declared} but its type maps to a {shape_role}",
                            field.local_name
                        ),
                    ));
                }
            }

            let kind = match field.shape {
                Shape::Scalar(native) => {
                    check_format(type_name, &field.local_name, &field.format)?;

                    FieldKind::Scalar {
                        native,
                        converter: self.registry.converter_for(
                            &native,
                            Role::Scalar,
                            field.converter.as_deref(),
                        )?,
                        format: field.format.clone(),
                    }
                }
                Shape::Structure(nested) | Shape::Table(nested) => {
                    if field.converter.is_some() || !field.format.is_empty() {
                        return Err(Error::mapping_configuration(
                            type_name,
                            format!(
                                "field `{}` is a {shape_role}; converters and format hints only apply to scalars",
                                field.local_name
                            ),
                        ));
                    }

                    let nested = self.resolve(nested)?;

                    if nested.kind == CallKind::Function {
                        return Err(Error::mapping_configuration(
                            type_name,
                            format!(
                                "field `{}` refers to function `{}`, which cannot be nested",
                                field.local_name, nested.name
                            ),
                        ));
                    }

                    match shape_role {
                        Role::Table => FieldKind::Table(nested),
                        _ => FieldKind::Structure(nested),
                    }
                }
            };

            resolved.push(FieldMapping {
                index,
                local_name: field.local_name.clone(),
                remote_name,
                optional: field.optional,
                converter_key: field.converter.clone(),
                kind,
            });
        }

        Ok(resolved)
    }
}

fn check_format(type_name: &str, field: &str, format: &Format) -> Result<()> {
    if let Some(scale) = format.scale.filter(|&scale| scale > DecimalConverter::MAX_SCALE) {
        return Err(Error::mapping_configuration(
            type_name,
            format!(
                "field `{field}` declares scale {scale}, but at most {} is supported",
                DecimalConverter::MAX_SCALE
            ),
        ));
    }

    if let Some(precision) = format
        .precision
        .filter(|&precision| precision > DecimalConverter::MAX_PRECISION)
    {
        return Err(Error::mapping_configuration(
            type_name,
            format!(
                "field `{field}` declares precision {precision}, but at most {} is supported",
                DecimalConverter::MAX_PRECISION
            ),
        ));
    }

    Ok(())
}
