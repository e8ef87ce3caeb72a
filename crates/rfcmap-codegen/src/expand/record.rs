use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Collects the mapped field values into a positional record.
    pub(super) fn expand_store_body(&self) -> TokenStream {
        let rfcmap = &self.rfcmap;

        let values = self.mapped.mapped_fields().map(|field| {
            let ident = &field.ident;
            quote!(#rfcmap::Field::store(&self.#ident))
        });

        quote! {
            #rfcmap::ValueRecord::from_vec(::std::vec![ #( #values ),* ])
        }
    }

    /// Merges the present slots of a record into the fields.
    pub(super) fn expand_apply_body(&self) -> TokenStream {
        let rfcmap = &self.rfcmap;

        let fields = self
            .mapped
            .mapped_fields()
            .enumerate()
            .map(|(index, field)| {
                let ident = &field.ident;
                let index = util::int(index);
                let remote_name = field.remote_name();

                quote! {
                    if let #rfcmap::Option::Some(value) = record.take(#index) {
                        #rfcmap::apply_field(&mut self.#ident, #remote_name, value)?;
                    }
                }
            })
            .collect::<Vec<_>>();

        if fields.is_empty() {
            return quote! {
                let _ = record;
                ::std::result::Result::Ok(())
            };
        }

        quote! {
            let mut record = record;
            #( #fields )*
            ::std::result::Result::Ok(())
        }
    }
}
