extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Record`, `IntoValue` and `Source` for a struct.
///
/// A type deriving `Record` must not also derive `Source`.
#[proc_macro_derive(Record, attributes(object, external_id, field, source, id))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match forcemap_codegen::generate_record(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Implements `IntoValue` and `Source` for a struct used as a source record.
#[proc_macro_derive(Source, attributes(field, id))]
pub fn derive_source(input: TokenStream) -> TokenStream {
    match forcemap_codegen::generate_source(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
