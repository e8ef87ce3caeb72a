use super::{Converter, DecimalConverter, Flag, Float, Integer, Temporal, Text};
use crate::schema::{NativeType, Role};
use crate::{Error, Result, Type};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves the converter for a scalar field.
///
/// Lookup order:
///
/// 1. the converter registered under the field's override key,
/// 2. a converter registered for the exact native type,
/// 3. a converter registered for the nearest parent of the native type,
/// 4. the built-in rule for the native type or its nearest built-in parent.
///
/// When nothing matches the lookup fails with a "no converter found" error.
/// The registry is filled during configuration and only read afterwards.
#[derive(Debug)]
pub struct Registry {
    overrides: HashMap<String, Arc<dyn Converter>>,
    by_type: HashMap<TypeId, Arc<dyn Converter>>,
    defaults: HashMap<TypeId, Arc<dyn Converter>>,
}

impl Registry {
    /// A registry holding only the built-in rules.
    pub fn new() -> Registry {
        let mut defaults: HashMap<TypeId, Arc<dyn Converter>> = HashMap::new();

        defaults.insert(TypeId::of::<bool>(), Arc::new(Flag));
        defaults.insert(TypeId::of::<i8>(), Arc::new(Integer::new(Type::I8)));
        defaults.insert(TypeId::of::<i16>(), Arc::new(Integer::new(Type::I16)));
        defaults.insert(TypeId::of::<i32>(), Arc::new(Integer::new(Type::I32)));
        defaults.insert(TypeId::of::<i64>(), Arc::new(Integer::new(Type::I64)));
        defaults.insert(TypeId::of::<u8>(), Arc::new(Integer::new(Type::U8)));
        defaults.insert(TypeId::of::<u16>(), Arc::new(Integer::new(Type::U16)));
        defaults.insert(TypeId::of::<u32>(), Arc::new(Integer::new(Type::U32)));
        defaults.insert(TypeId::of::<u64>(), Arc::new(Integer::new(Type::U64)));
        defaults.insert(TypeId::of::<f32>(), Arc::new(Float::new(Type::F32)));
        defaults.insert(TypeId::of::<f64>(), Arc::new(Float::new(Type::F64)));
        defaults.insert(TypeId::of::<Decimal>(), Arc::new(DecimalConverter));
        defaults.insert(TypeId::of::<String>(), Arc::new(Text));
        defaults.insert(TypeId::of::<NaiveDate>(), Arc::new(Temporal::new(Type::Date)));
        defaults.insert(TypeId::of::<NaiveTime>(), Arc::new(Temporal::new(Type::Time)));
        defaults.insert(
            TypeId::of::<NaiveDateTime>(),
            Arc::new(Temporal::new(Type::DateTime)),
        );

        Registry {
            overrides: HashMap::new(),
            by_type: HashMap::new(),
            defaults,
        }
    }

    /// Registers `converter` under an override key that fields can name.
    pub fn register_override(&mut self, key: impl Into<String>, converter: Arc<dyn Converter>) {
        self.overrides.insert(key.into(), converter);
    }

    /// Registers `converter` for the native type `id` and the types whose
    /// parent chain reaches it.
    pub fn register_type(&mut self, id: TypeId, converter: Arc<dyn Converter>) {
        self.by_type.insert(id, converter);
    }

    pub fn has_override(&self, key: &str) -> bool {
        self.overrides.contains_key(key)
    }

    /// Returns the built-in rule with the given name.
    ///
    /// The names are `flag`, `text`, `decimal`, `date`, `time`, `datetime`,
    /// `f32`, `f64` and the integer type names `i8` through `u64`.
    pub fn builtin(name: &str) -> Option<Arc<dyn Converter>> {
        let converter: Arc<dyn Converter> = match name {
            "flag" => Arc::new(Flag),
            "text" => Arc::new(Text),
            "decimal" => Arc::new(DecimalConverter),
            "date" => Arc::new(Temporal::new(Type::Date)),
            "time" => Arc::new(Temporal::new(Type::Time)),
            "datetime" => Arc::new(Temporal::new(Type::DateTime)),
            "f32" => Arc::new(Float::new(Type::F32)),
            "f64" => Arc::new(Float::new(Type::F64)),
            "i8" => Arc::new(Integer::new(Type::I8)),
            "i16" => Arc::new(Integer::new(Type::I16)),
            "i32" => Arc::new(Integer::new(Type::I32)),
            "i64" => Arc::new(Integer::new(Type::I64)),
            "u8" => Arc::new(Integer::new(Type::U8)),
            "u16" => Arc::new(Integer::new(Type::U16)),
            "u32" => Arc::new(Integer::new(Type::U32)),
            "u64" => Arc::new(Integer::new(Type::U64)),
            _ => return None,
        };

        Some(converter)
    }

    pub fn converter_for(
        &self,
        native: &NativeType,
        role: Role,
        key: Option<&str>,
    ) -> Result<Arc<dyn Converter>> {
        if role != Role::Scalar {
            return Err(Error::no_converter_found(native.name, key));
        }

        if let Some(key) = key {
            return self
                .overrides
                .get(key)
                .cloned()
                .ok_or_else(|| Error::no_converter_found(native.name, Some(key)));
        }

        native
            .ancestors()
            .find_map(|ty| self.by_type.get(&ty.id))
            .or_else(|| native.ancestors().find_map(|ty| self.defaults.get(&ty.id)))
            .cloned()
            .ok_or_else(|| Error::no_converter_found(native.name, None))
    }
}

impl Default for Registry {
    fn default() -> Registry {
        Registry::new()
    }
}
