use syn::meta::ParseNestedMeta;

/// Parses `key = "text"`, rejecting an empty string.
pub(super) fn string(meta: &ParseNestedMeta<'_>) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = meta.value()?.parse()?;

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(&lit, "value must not be empty"));
    }

    Ok(lit)
}

/// Parses `key = N`.
pub(super) fn int<N>(meta: &ParseNestedMeta<'_>) -> syn::Result<N>
where
    N: std::str::FromStr,
    N::Err: std::fmt::Display,
{
    let lit: syn::LitInt = meta.value()?.parse()?;
    lit.base10_parse()
}
