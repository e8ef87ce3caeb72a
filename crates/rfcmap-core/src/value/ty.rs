/// The scalar kind of a native [`Value`](super::Value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    String,
    Date,
    Time,
    DateTime,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Type::Bool => "Bool",
            Type::I8 => "I8",
            Type::I16 => "I16",
            Type::I32 => "I32",
            Type::I64 => "I64",
            Type::U8 => "U8",
            Type::U16 => "U16",
            Type::U32 => "U32",
            Type::U64 => "U64",
            Type::F32 => "F32",
            Type::F64 => "F64",
            Type::Decimal => "Decimal",
            Type::String => "String",
            Type::Date => "Date",
            Type::Time => "Time",
            Type::DateTime => "DateTime",
        }
    }

    pub fn is_bool(self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Type::String)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Type::I8
                | Type::I16
                | Type::I32
                | Type::I64
                | Type::U8
                | Type::U16
                | Type::U32
                | Type::U64
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Type::F32 | Type::F64)
    }

    pub fn is_temporal(self) -> bool {
        matches!(self, Type::Date | Type::Time | Type::DateTime)
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
