use super::{ErrorSet, Field, MappedAttr};

use heck::ToShoutySnakeCase;

#[derive(Debug)]
pub(crate) struct Mapped {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// What the type stands for on the remote side
    pub(crate) kind: Kind,

    /// Remote function or structure name
    pub(crate) remote_name: String,

    /// All struct fields in declared order, including skipped ones
    pub(crate) fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Function,
    Structure,
    TableRow,
}

impl Mapped {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Mapped> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "mapped type fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "mapped type generics are not supported",
            ));
        }

        let mut attr = MappedAttr::default();
        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        errs.check(attr.populate_from_ast(&ast.attrs));

        for node in &node.named {
            if let Some(field) = errs.check(Field::from_ast(node)) {
                fields.push(field);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let (kind, remote_name) = match attr.kind {
            Some((kind, name)) => (kind, name.value()),
            None => (Kind::Structure, ast.ident.to_string().to_shouty_snake_case()),
        };

        Ok(Mapped {
            ident: ast.ident.clone(),
            kind,
            remote_name,
            fields,
        })
    }

    /// Fields that take part in the mapping, in declared order.
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}
