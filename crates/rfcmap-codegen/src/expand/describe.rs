use super::Expand;
use crate::schema::{Field, Kind, PadAttr, RoleAttr};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the `TypeDescriptor` from the parsed attributes. Defaults that
    /// the attributes leave open, such as remote field names, are filled in
    /// at resolution time.
    pub(super) fn expand_describe_body(&self) -> TokenStream {
        let rfcmap = &self.rfcmap;
        let name = self.mapped.ident.to_string();
        let remote_name = &self.mapped.remote_name;

        let kind = match self.mapped.kind {
            Kind::Function => quote!(Function),
            Kind::Structure => quote!(Structure),
            Kind::TableRow => quote!(TableRow),
        };

        let fields = self
            .mapped
            .mapped_fields()
            .map(|field| self.expand_field_descriptor(field));

        quote! {
            #rfcmap::TypeDescriptor::new(#name, #remote_name, #rfcmap::CallKind::#kind)
                #( .field(#fields) )*
        }
    }

    fn expand_field_descriptor(&self, field: &Field) -> TokenStream {
        let rfcmap = &self.rfcmap;
        let ty = &field.ty;
        let local_name = field.ident.to_string();
        let attrs = &field.attrs;

        let mut builders = vec![];

        if let Some(name) = &attrs.name {
            builders.push(quote!(.remote_name(#name)));
        }

        if let Some(role) = attrs.role {
            let role = match role {
                RoleAttr::Scalar => quote!(Scalar),
                RoleAttr::Structure => quote!(Structure),
                RoleAttr::Table => quote!(Table),
            };
            builders.push(quote!(.role(#rfcmap::Role::#role)));
        }

        if let Some(converter) = &attrs.converter {
            builders.push(quote!(.converter(#converter)));
        }

        if let Some(width) = attrs.width {
            let width = super::util::int(width);
            builders.push(quote!(.width(#width)));
        }

        if let Some(pad) = attrs.pad {
            let pad = match pad {
                PadAttr::Left => quote!(Left),
                PadAttr::Right => quote!(Right),
            };
            builders.push(quote!(.pad(#rfcmap::Pad::#pad)));
        }

        if let Some(scale) = attrs.scale {
            builders.push(quote!(.scale(#scale)));
        }

        if let Some(precision) = attrs.precision {
            builders.push(quote!(.precision(#precision)));
        }

        if let Some(pattern) = &attrs.pattern {
            builders.push(quote!(.pattern(#pattern)));
        }

        quote! {
            #rfcmap::field::<#ty>(#local_name) #( #builders )*
        }
    }
}
