use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// A mapped type used as a field is a nested structure. Tables come from
    /// the `Vec<T>` implementation.
    pub(super) fn expand_field_impl(&self) -> TokenStream {
        let rfcmap = &self.rfcmap;
        let ident = &self.mapped.ident;

        quote! {
            impl #rfcmap::Field for #ident {
                fn shape() -> #rfcmap::Shape {
                    #rfcmap::Shape::Structure(<Self as #rfcmap::Mapped>::type_ref())
                }

                fn store(&self) -> #rfcmap::Option<#rfcmap::Value> {
                    #rfcmap::Option::Some(#rfcmap::Value::Record(<Self as #rfcmap::Mapped>::store(self)))
                }

                fn load(value: #rfcmap::Value) -> #rfcmap::Result<Self> {
                    <Self as #rfcmap::Mapped>::from_record(value.into_record()?)
                }

                fn apply(&mut self, value: #rfcmap::Value) -> #rfcmap::Result<()> {
                    <Self as #rfcmap::Mapped>::apply(self, value.into_record()?)
                }
            }
        }
    }
}
