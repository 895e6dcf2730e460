use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, LitFloat, LitStr, Path, Token, Type};
use template_quote::quote;

use crate::common::{camel_case, check_reserved, doc_attrs};

const RESERVED: &[&str] = &[
    "new",
    "imbue",
    "is_imbued",
    "imbue_to",
    "is_imbued_to",
    "traits_data",
    "default_properties",
];

/// One trait property, declared as a named field of a `#[traitdef]` struct.
pub struct Property {
    pub ident: Ident,
    pub ty: Type,
    pub key: String,
    pub default: Option<Expr>,
    pub docs: Vec<Attribute>,
}

#[derive(Default)]
struct PropertyOptions {
    key: Option<LitStr>,
    default: Option<Expr>,
}

fn parse_options(attr: &Attribute, options: &mut PropertyOptions) -> syn::Result<()> {
    attr.parse_args_with(|input: syn::parse::ParseStream| {
        while !input.is_empty() {
            let name: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            match name.to_string().as_str() {
                "key" => {
                    let key: LitStr = input.parse()?;
                    if key.value().is_empty() {
                        return Err(syn::Error::new_spanned(&key, "property key must not be empty"));
                    }
                    options.key = Some(key);
                }
                "default" => options.default = Some(input.parse()?),
                _ => {
                    return Err(syn::Error::new_spanned(
                        &name,
                        format!("unknown property option `{name}`, expected `key` or `default`"),
                    ))
                }
            }
            crate::common::parse_separator(input)?;
        }
        Ok(())
    })
}

fn is_f64(ty: &Type) -> bool {
    matches!(ty, Type::Path(path) if path.qself.is_none() && path.path.is_ident("f64"))
}

impl Property {
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        // Only reached for named fields.
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        check_reserved(&ident, RESERVED, "traitdef")?;

        let mut options = PropertyOptions::default();
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("property")) {
            parse_options(attr, &mut options)?;
        }

        Ok(Property {
            key: options
                .key
                .map(|key| key.value())
                .unwrap_or_else(|| camel_case(&ident.unraw().to_string())),
            ident,
            ty: field.ty.clone(),
            default: options.default,
            docs: doc_attrs(&field.attrs),
        })
    }

    fn suffixed(&self, prefix: &str, suffix: &str) -> Ident {
        Ident::new(
            &format!("{prefix}{}{suffix}", self.ident.unraw()),
            self.ident.span(),
        )
    }

    /// Getter, fallback getter and setter for the view's inherent impl.
    pub fn accessors(&self, krate: &Path) -> TokenStream {
        let Property { ident, ty, key, docs, .. } = self;
        let getter_or = self.suffixed("", "_or");
        let setter = self.suffixed("set_", "");
        let or_doc = format!("Returns the `{key}` property, or `default` when it is not set.");
        let set_doc = format!("Sets the `{key}` property, adding the trait if it is absent.");
        quote! {
            #(for doc in docs) { #doc }
            pub fn #ident(&self) -> #krate::Result<::core::option::Option<#ty>> {
                self.data.typed_trait_property::<#ty>(Self::ID, #key)
            }

            #[doc = #or_doc]
            pub fn #getter_or(&self, default: #ty) -> #krate::Result<#ty> {
                ::core::result::Result::Ok(self.#ident()?.unwrap_or(default))
            }

            #[doc = #set_doc]
            pub fn #setter(&self, value: #ty) {
                self.data.set_trait_property(
                    Self::ID,
                    #key,
                    <#ty as #krate::PropertyType>::into_value(value),
                );
            }
        }
    }

    /// `(key, value)` entry for `TraitBase::default_properties`, if declared.
    pub fn default_entry(&self, krate: &Path) -> Option<TokenStream> {
        let Property { ty, key, .. } = self;
        self.default.as_ref().map(|default| {
            // Typed binding rather than `Into` so numeric literals take the
            // property type instead of falling back to `i32`. String
            // literals and unsuffixed integers for `f64` need rewriting first.
            let value = match default {
                Expr::Lit(ExprLit { lit: Lit::Str(lit), .. }) => {
                    quote! { ::std::string::String::from(#lit) }
                }
                Expr::Lit(ExprLit { lit: Lit::Int(lit), .. })
                    if lit.suffix().is_empty() && is_f64(ty) =>
                {
                    let lit = LitFloat::new(&format!("{}.0", lit.base10_digits()), lit.span());
                    quote! { #lit }
                }
                other => quote! { #other },
            };
            quote! {
                (
                    #key,
                    <#ty as #krate::PropertyType>::into_value({
                        let value: #ty = #value;
                        value
                    }),
                )
            }
        })
    }
}
