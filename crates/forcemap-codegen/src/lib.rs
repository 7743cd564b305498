mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate_record(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item, schema::RecordKind::Record)?;

    Ok(expand::record(&record))
}

pub fn generate_source(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item, schema::RecordKind::Source)?;

    Ok(expand::source(&record))
}
