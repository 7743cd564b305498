mod record;
mod source;
mod value;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for forcemap types
    forcemap: TokenStream,
}

impl<'a> Expand<'a> {
    fn new(record: &'a Record) -> Self {
        Self {
            record,
            forcemap: quote!(_forcemap::codegen_support),
        }
    }

    /// Type name, as shown in field access errors
    fn type_name(&self) -> String {
        self.record.ident.to_string()
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    let expand = Expand::new(record);

    let record_impl = expand.expand_record_impl();
    let into_value_impl = expand.expand_into_value_impl(true);
    let source_impl = expand.expand_source_impl();

    wrap_in_const(quote! {
        #record_impl
        #into_value_impl
        #source_impl
    })
}

pub(super) fn source(record: &Record) -> TokenStream {
    let expand = Expand::new(record);

    let into_value_impl = expand.expand_into_value_impl(false);
    let source_impl = expand.expand_source_impl();

    wrap_in_const(quote! {
        #into_value_impl
        #source_impl
    })
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use forcemap as _forcemap;
            #code
        };
    }
}
