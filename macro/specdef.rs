use proc_macro2::TokenStream;
use syn::parse::{Parse, ParseStream};
use syn::{DeriveInput, Ident, Path};
use template_quote::quote;

use crate::common::{
    check_reserved, default_crate_path, doc_attrs, expect_struct, forwarded_attrs, named_fields,
    parse_separator, reject_generics, try_parse_crate_arg,
};

const RESERVED: &[&str] = &["create", "wrap", "try_wrap", "traits_data", "trait_set", "imbue_to"];

pub struct SpecDefArgs {
    pub krate: Path,
}

impl Parse for SpecDefArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut krate = None;
        while !input.is_empty() {
            match try_parse_crate_arg(input)? {
                Some(path) => krate = Some(path),
                None => {
                    let name: Ident = input.parse()?;
                    return Err(syn::Error::new_spanned(
                        &name,
                        format!("unknown argument `{name}`, expected `crate`"),
                    ));
                }
            }
            parse_separator(input)?;
        }
        Ok(SpecDefArgs {
            krate: krate.unwrap_or_else(default_crate_path),
        })
    }
}

pub fn specdef(item: DeriveInput, args: SpecDefArgs) -> syn::Result<TokenStream> {
    let data = expect_struct(&item, "specdef");
    reject_generics(&item, "specdef")?;
    let fields = match named_fields(&data.fields, "specdef")? {
        Some(fields) if !fields.named.is_empty() => fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &item.ident,
                "#[specdef] requires at least one trait field",
            ))
        }
    };

    let mut members = Vec::new();
    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        check_reserved(ident, RESERVED, "specdef")?;
        members.push((ident, &field.ty, doc_attrs(&field.attrs)));
    }

    let attrs = forwarded_attrs(&item.attrs, "specdef")?;
    let krate = &args.krate;
    let ident = &item.ident;
    let trait_tys: Vec<_> = members.iter().map(|(_, ty, _)| *ty).collect();

    Ok(quote! {
        #(for attr in &attrs) { #attr }
        #[derive(Clone, Debug)]
        #{&item.vis} struct #ident {
            data: #krate::TraitsDataPtr,
        }

        #[allow(dead_code)]
        impl #ident {
            /// Creates new traits data imbued with every trait of this specification.
            pub fn create() -> Self {
                <Self as #krate::Specification>::create()
            }

            /// Wraps existing data without checking its traits.
            pub fn wrap(data: #krate::TraitsDataPtr) -> Self {
                Self { data }
            }

            pub fn try_wrap(data: #krate::TraitsDataPtr) -> #krate::Result<Self> {
                <Self as #krate::Specification>::try_wrap(data)
            }

            pub fn traits_data(&self) -> &#krate::TraitsDataPtr {
                &self.data
            }

            pub fn trait_set() -> #krate::TraitSet {
                <Self as #krate::Specification>::trait_set()
            }

            #(for (name, ty, docs) in &members) {
                #(for doc in docs) { #doc }
                pub fn #name(&self) -> #ty {
                    <#ty as #krate::TraitBase>::new(::std::sync::Arc::clone(&self.data))
                }
            }
        }

        impl #krate::Specification for #ident {
            fn trait_set() -> #krate::TraitSet {
                [#(for ty in &trait_tys), { <#ty as #krate::TraitBase>::ID }]
                    .into_iter()
                    .map(::std::string::String::from)
                    .collect()
            }

            fn wrap(data: #krate::TraitsDataPtr) -> Self {
                Self { data }
            }

            fn traits_data(&self) -> &#krate::TraitsDataPtr {
                &self.data
            }

            fn imbue_to(data: &#krate::TraitsData) {
                #(for ty in &trait_tys) {
                    <#ty as #krate::TraitBase>::imbue_to(data);
                }
            }
        }
    })
}
