use std::collections::HashSet;

use proc_macro2::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::{DeriveInput, Ident, LitStr, Path, Token};
use template_quote::quote;

use crate::common::{
    default_crate_path, expect_struct, forwarded_attrs, named_fields, parse_separator,
    reject_generics, try_parse_crate_arg,
};
use crate::property::Property;

pub struct TraitDefArgs {
    pub id: Option<LitStr>,
    pub krate: Path,
}

impl Parse for TraitDefArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut id = None;
        let mut krate = None;

        while !input.is_empty() {
            if let Some(path) = try_parse_crate_arg(input)? {
                krate = Some(path);
            } else {
                let name: Ident = input.parse()?;
                if name != "id" {
                    return Err(syn::Error::new_spanned(
                        &name,
                        format!("unknown argument `{name}`, expected `id` or `crate`"),
                    ));
                }
                input.parse::<Token![=]>()?;
                id = Some(validate_id(input.parse()?)?);
            }
            parse_separator(input)?;
        }

        Ok(TraitDefArgs {
            id,
            krate: krate.unwrap_or_else(default_crate_path),
        })
    }
}

fn validate_id(id: LitStr) -> syn::Result<LitStr> {
    let value = id.value();
    if value.is_empty() {
        return Err(syn::Error::new_spanned(&id, "trait id must not be empty"));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(syn::Error::new_spanned(&id, "trait id must not contain whitespace"));
    }
    Ok(id)
}

fn reject_duplicate_keys(properties: &[Property]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for property in properties {
        if !seen.insert(property.key.as_str()) {
            return Err(syn::Error::new_spanned(
                &property.ident,
                format!("duplicate property key `{}`", property.key),
            ));
        }
    }
    Ok(())
}

pub fn traitdef(item: DeriveInput, args: TraitDefArgs) -> syn::Result<TokenStream> {
    let data = expect_struct(&item, "traitdef");
    reject_generics(&item, "traitdef")?;
    let id = args.id.ok_or_else(|| {
        syn::Error::new_spanned(&item.ident, "missing `id = \"...\"` argument for #[traitdef]")
    })?;
    let properties = match named_fields(&data.fields, "traitdef")? {
        Some(fields) => fields
            .named
            .iter()
            .map(Property::from_field)
            .collect::<syn::Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    reject_duplicate_keys(&properties)?;

    let attrs = forwarded_attrs(&item.attrs, "traitdef")?;
    let krate = &args.krate;
    let ident = &item.ident;
    let defaults: Vec<_> = properties
        .iter()
        .filter_map(|property| property.default_entry(krate))
        .collect();
    let default_properties = if defaults.is_empty() {
        TokenStream::new()
    } else {
        quote! {
            fn default_properties() -> ::std::vec::Vec<(&'static str, #krate::Value)> {
                ::std::vec![#(#defaults),*]
            }
        }
    };

    Ok(quote! {
        #(for attr in &attrs) { #attr }
        #[derive(Clone, Debug)]
        #{&item.vis} struct #ident {
            data: #krate::TraitsDataPtr,
        }

        #[allow(dead_code)]
        impl #ident {
            /// Unique id of this trait.
            pub const ID: &'static str = #id;

            /// Binds a view of this trait to `data`.
            pub fn new(data: #krate::TraitsDataPtr) -> Self {
                Self { data }
            }

            pub fn traits_data(&self) -> &#krate::TraitsDataPtr {
                &self.data
            }

            pub fn is_imbued(&self) -> bool {
                <Self as #krate::TraitBase>::is_imbued(self)
            }

            /// Adds this trait and its declared defaults to the bound data.
            pub fn imbue(&self) {
                <Self as #krate::TraitBase>::imbue(self)
            }

            pub fn is_imbued_to(data: &#krate::TraitsData) -> bool {
                <Self as #krate::TraitBase>::is_imbued_to(data)
            }

            pub fn imbue_to(data: &#krate::TraitsData) {
                <Self as #krate::TraitBase>::imbue_to(data)
            }

            #(for property in &properties) {
                #{property.accessors(krate)}
            }
        }

        impl #krate::TraitBase for #ident {
            const ID: &'static str = #id;

            fn new(data: #krate::TraitsDataPtr) -> Self {
                Self { data }
            }

            fn traits_data(&self) -> &#krate::TraitsDataPtr {
                &self.data
            }

            #default_properties
        }
    })
}
