use super::{lit, ErrorSet};

use heck::ToShoutySnakeCase;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

/// Field-level `#[rfc(...)]` attribute.
#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Remote field name, when it differs from the default
    pub(crate) name: Option<syn::LitStr>,

    /// Declared role
    pub(crate) role: Option<RoleAttr>,

    /// Converter override key
    pub(crate) converter: Option<syn::LitStr>,

    pub(crate) width: Option<usize>,

    pub(crate) pad: Option<PadAttr>,

    pub(crate) scale: Option<u32>,

    pub(crate) precision: Option<u32>,

    pub(crate) pattern: Option<syn::LitStr>,

    /// The field is not mapped
    pub(crate) skip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RoleAttr {
    Scalar,
    Structure,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PadAttr {
    Left,
    Right,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(
                field,
                "mapped type fields must be named",
            ));
        };

        let mut attrs = FieldAttr::default();
        let mut errs = ErrorSet::new();

        for attr in &field.attrs {
            if !attr.path().is_ident("rfc") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                macro_rules! set_once {
                    ($slot:expr, $value:expr) => {{
                        let value = $value;
                        if $slot.is_some() {
                            return Err(meta.error("duplicate attribute"));
                        }
                        $slot = Some(value);
                    }};
                }

                if meta.path.is_ident("name") {
                    set_once!(attrs.name, lit::string(&meta)?);
                } else if meta.path.is_ident("scalar") {
                    set_once!(attrs.role, RoleAttr::Scalar);
                } else if meta.path.is_ident("structure") {
                    set_once!(attrs.role, RoleAttr::Structure);
                } else if meta.path.is_ident("table") {
                    set_once!(attrs.role, RoleAttr::Table);
                } else if meta.path.is_ident("converter") {
                    set_once!(attrs.converter, lit::string(&meta)?);
                } else if meta.path.is_ident("width") {
                    set_once!(attrs.width, lit::int(&meta)?);
                } else if meta.path.is_ident("pad") {
                    let lit = lit::string(&meta)?;
                    let pad = match lit.value().as_str() {
                        "left" => PadAttr::Left,
                        "right" => PadAttr::Right,
                        _ => {
                            return Err(syn::Error::new_spanned(
                                lit,
                                "expected `pad = \"left\"` or `pad = \"right\"`",
                            ))
                        }
                    };
                    set_once!(attrs.pad, pad);
                } else if meta.path.is_ident("scale") {
                    set_once!(attrs.scale, lit::int(&meta)?);
                } else if meta.path.is_ident("precision") {
                    set_once!(attrs.precision, lit::int(&meta)?);
                } else if meta.path.is_ident("pattern") {
                    set_once!(attrs.pattern, lit::string(&meta)?);
                } else if meta.path.is_ident("skip") {
                    if attrs.skip {
                        return Err(meta.error("duplicate attribute"));
                    }
                    attrs.skip = true;
                } else {
                    return Err(meta.error("unknown field attribute"));
                }

                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        if attrs.skip && attrs.has_mapping() {
            errs.push(syn::Error::new_spanned(
                ident,
                "a skipped field cannot have other mapping attributes",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Field {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    /// Name of the field on the remote side.
    pub(crate) fn remote_name(&self) -> String {
        match &self.attrs.name {
            Some(name) => name.value(),
            None => self.ident.to_string().to_shouty_snake_case(),
        }
    }
}

impl FieldAttr {
    fn has_mapping(&self) -> bool {
        self.name.is_some()
            || self.role.is_some()
            || self.converter.is_some()
            || self.width.is_some()
            || self.pad.is_some()
            || self.scale.is_some()
            || self.precision.is_some()
            || self.pattern.is_some()
    }
}
