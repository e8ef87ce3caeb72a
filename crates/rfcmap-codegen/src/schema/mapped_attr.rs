use super::{lit, ErrorSet, Kind};

/// Type-level `#[rfc(...)]` attribute.
#[derive(Debug, Default)]
pub(crate) struct MappedAttr {
    /// Declared kind and remote name, e.g. `#[rfc(function = "BAPI_FLIGHT_GETLIST")]`
    pub(crate) kind: Option<(Kind, syn::LitStr)>,
}

impl MappedAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if !attr.path().is_ident("rfc") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                let kind = if meta.path.is_ident("function") {
                    Kind::Function
                } else if meta.path.is_ident("structure") {
                    Kind::Structure
                } else if meta.path.is_ident("table_row") {
                    Kind::TableRow
                } else {
                    return Err(meta.error(
                        "expected one of `function = \"..\"`, `structure = \"..\"` or `table_row = \"..\"`",
                    ));
                };

                let name = lit::string(&meta)?;

                if self.kind.is_some() {
                    return Err(meta.error("a type can only be mapped to one remote name"));
                }

                self.kind = Some((kind, name));
                Ok(())
            });

            if let Err(err) = res {
                errs.push(err);
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
