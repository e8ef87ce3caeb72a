use crate::session::Shared;
use crate::{
    Connector, Converter, Environment, Error, Mapped, Primitive, Properties, Registry, Result,
    SessionManager,
};

use rfcmap_core::schema::TypeRef;
use rfcmap_core::Metadata;

use std::any::TypeId;
use std::sync::Arc;

/// Configures and builds a [`SessionManager`].
///
/// Every registered type is resolved by [`build`](Builder::build), so mapping
/// and converter errors surface at startup rather than on the first call.
///
/// Properties consumed by the builder:
///
/// * `connection.*` is handed to the connector with the prefix stripped.
/// * `mapping.types` is a comma-separated list of remote names that must all
///   be registered.
/// * `converter.<key> = <name>` binds a converter override key to a built-in
///   rule (see [`Registry::builtin`]).
#[derive(Debug, Default)]
pub struct Builder {
    types: Vec<TypeRef>,
    properties: Properties,
    overrides: Vec<(String, Arc<dyn Converter>)>,
    by_type: Vec<(TypeId, Arc<dyn Converter>)>,
}

impl Builder {
    pub fn register<T: Mapped>(&mut self) -> &mut Self {
        self.types.push(T::type_ref());
        self
    }

    pub fn property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.set(key, value);
        self
    }

    /// Adds all `properties`, replacing existing keys.
    pub fn properties(&mut self, properties: Properties) -> &mut Self {
        self.properties
            .extend(properties.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self
    }

    /// Registers a converter under an override key.
    pub fn converter(&mut self, key: impl Into<String>, converter: impl Converter) -> &mut Self {
        self.overrides.push((key.into(), Arc::new(converter)));
        self
    }

    /// Registers the converter for the primitive type `T` and the types
    /// whose parent chain reaches `T`.
    pub fn converter_for<T: Primitive>(&mut self, converter: impl Converter) -> &mut Self {
        self.by_type.push((T::native().id, Arc::new(converter)));
        self
    }

    pub fn build(&mut self, connector: impl Connector) -> Result<SessionManager> {
        let mut registry = Registry::new();

        for (key, converter) in &self.overrides {
            registry.register_override(key.clone(), converter.clone());
        }

        for (id, converter) in &self.by_type {
            registry.register_type(*id, converter.clone());
        }

        for (key, name) in self.properties.namespace("converter").iter() {
            let Some(converter) = Registry::builtin(name) else {
                return Err(Error::invalid_configuration(format!(
                    "unknown converter `{name}` for key `converter.{key}`"
                )));
            };
            registry.register_override(key, converter);
        }

        let metadata = Metadata::new(Arc::new(registry));

        let resolved = self
            .types
            .iter()
            .map(|ty| metadata.resolve(*ty))
            .collect::<Result<Vec<_>>>()?;

        if let Some(types) = self.properties.get("mapping.types") {
            for name in types.split(',').map(str::trim).filter(|name| !name.is_empty()) {
                if !resolved.iter().any(|mapped| mapped.remote_name == name) {
                    return Err(Error::invalid_configuration(format!(
                        "`{name}` is listed in `mapping.types` but no mapped type with that remote name is registered"
                    )));
                }
            }
        }

        tracing::info!(
            version = Environment::VERSION,
            types = resolved.len(),
            properties = self.properties.len(),
            "session manager configured"
        );

        Ok(SessionManager::new(Shared {
            metadata,
            properties: self.properties.clone(),
            connector: Box::new(connector),
        }))
    }
}
