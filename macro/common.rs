use proc_macro_error::abort;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{parse_quote, Attribute, Data, DataStruct, DeriveInput, Fields, FieldsNamed, Ident, Path, Token};

/// Path of the runtime crate used by generated code unless `crate = ...` is given.
pub fn default_crate_path() -> Path {
    parse_quote!(::traitdata)
}

/// Parses `crate = path` when it is the next argument.
pub fn try_parse_crate_arg(input: ParseStream) -> syn::Result<Option<Path>> {
    if input.peek(Token![crate]) && input.peek2(Token![=]) {
        input.parse::<Token![crate]>()?;
        input.parse::<Token![=]>()?;
        return Ok(Some(input.parse()?));
    }
    Ok(None)
}

/// Consumes the separator between two arguments.
pub fn parse_separator(input: ParseStream) -> syn::Result<()> {
    if !input.is_empty() {
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

/// The struct body of `item`, aborting on enums and unions.
pub fn expect_struct<'a>(item: &'a DeriveInput, macro_name: &str) -> &'a DataStruct {
    match &item.data {
        Data::Struct(data) => data,
        Data::Enum(data) => abort!(
            data.enum_token,
            "#[{}] can only be applied to structs",
            macro_name
        ),
        Data::Union(data) => abort!(
            data.union_token,
            "#[{}] can only be applied to structs",
            macro_name
        ),
    }
}

/// Rejects generic parameters, which views cannot carry.
pub fn reject_generics(item: &DeriveInput, macro_name: &str) -> syn::Result<()> {
    if item.generics.params.is_empty() {
        return Ok(());
    }
    Err(syn::Error::new_spanned(
        &item.generics,
        format!("#[{macro_name}] does not support generic parameters"),
    ))
}

/// Named fields of a struct; `None` for unit structs.
pub fn named_fields<'a>(fields: &'a Fields, macro_name: &str) -> syn::Result<Option<&'a FieldsNamed>> {
    match fields {
        Fields::Named(named) => Ok(Some(named)),
        Fields::Unit => Ok(None),
        Fields::Unnamed(unnamed) => Err(syn::Error::new_spanned(
            unnamed,
            format!("#[{macro_name}] requires named fields"),
        )),
    }
}

pub fn check_reserved(ident: &Ident, reserved: &[&str], macro_name: &str) -> syn::Result<()> {
    let name = ident.unraw().to_string();
    if reserved.contains(&name.as_str()) {
        return Err(syn::Error::new_spanned(
            ident,
            format!("`{name}` clashes with a method generated by #[{macro_name}]"),
        ));
    }
    Ok(())
}

/// Attributes carried over to the generated struct.
///
/// `derive` is rejected since the generated struct already derives `Clone`
/// and `Debug` and its fields are not the user's.
pub fn forwarded_attrs<'a>(attrs: &'a [Attribute], macro_name: &str) -> syn::Result<Vec<&'a Attribute>> {
    if let Some(derive) = attrs.iter().find(|attr| attr.path().is_ident("derive")) {
        return Err(syn::Error::new_spanned(
            derive.path(),
            format!("#[{macro_name}] generates `Clone` and `Debug` itself; remove this derive"),
        ));
    }
    Ok(attrs.iter().collect())
}

pub fn doc_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .cloned()
        .collect()
}

/// `mime_type` -> `mimeType`
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.trim_start_matches('_').chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
