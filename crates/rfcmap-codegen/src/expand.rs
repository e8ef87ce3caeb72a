mod describe;
mod field;
mod record;
mod util;

use crate::schema::Mapped;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The type being expanded
    mapped: &'a Mapped,

    /// Path prefix for rfcmap types
    rfcmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let mapped_impl = self.expand_mapped_impl();
        let field_impl = self.expand_field_impl();

        wrap_in_const(quote! {
            #mapped_impl
            #field_impl
        })
    }

    fn expand_mapped_impl(&self) -> TokenStream {
        let rfcmap = &self.rfcmap;
        let ident = &self.mapped.ident;
        let name = ident.to_string();
        let describe = self.expand_describe_body();
        let store = self.expand_store_body();
        let apply = self.expand_apply_body();

        quote! {
            impl #rfcmap::Mapped for #ident {
                fn describe() -> #rfcmap::TypeDescriptor {
                    #describe
                }

                fn store(&self) -> #rfcmap::ValueRecord {
                    #store
                }

                fn apply(&mut self, record: #rfcmap::ValueRecord) -> #rfcmap::Result<()> {
                    #apply
                }

                fn type_ref() -> #rfcmap::TypeRef {
                    #rfcmap::TypeRef::of::<Self>(#name, <Self as #rfcmap::Mapped>::describe)
                }
            }
        }
    }
}

pub(super) fn mapped(mapped: &Mapped) -> TokenStream {
    Expand {
        mapped,
        rfcmap: quote!(_rfcmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rfcmap as _rfcmap;
            #code
        };
    }
}
