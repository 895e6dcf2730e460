use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::{parse_macro_input, DeriveInput};

mod common;
mod property;
mod specdef;
mod traitdef;

#[proc_macro_error]
#[proc_macro_attribute]
pub fn traitdef(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as traitdef::TraitDefArgs);
    let item = parse_macro_input!(input as DeriveInput);
    traitdef::traitdef(item, args)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_error]
#[proc_macro_attribute]
pub fn specdef(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as specdef::SpecDefArgs);
    let item = parse_macro_input!(input as DeriveInput);
    specdef::specdef(item, args)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
