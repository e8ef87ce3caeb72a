extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `rfcmap::Mapped` and `rfcmap::Field` for a struct with named
/// fields.
///
/// ```ignore
/// #[derive(Debug, Default, rfcmap::Mapped)]
/// #[rfc(function = "BAPI_FLIGHT_GETLIST")]
/// struct FlightList {
///     #[rfc(name = "DESTINATION_FROM", width = 3)]
///     from_city: String,
///
///     #[rfc(table)]
///     flight_list: Vec<Flight>,
/// }
/// ```
#[proc_macro_derive(Mapped, attributes(rfc))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    match rfcmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
