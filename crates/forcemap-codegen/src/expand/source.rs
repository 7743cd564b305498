use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_source_impl(&self) -> TokenStream {
        let forcemap = &self.forcemap;
        let ident = &self.record.ident;
        let type_name = self.type_name();

        let arms = self.record.value_fields().map(|field| {
            let name = field.name();
            let field_ident = &field.ident;
            quote! {
                #name => #forcemap::IntoValue::to_value(&self.#field_ident)
            }
        });

        quote! {
            impl #forcemap::Source for #ident {
                fn resolve(&self, path: &str) -> #forcemap::Result<#forcemap::Option<#forcemap::Value>> {
                    let (segment, rest) = #forcemap::path::split(path);
                    let value: #forcemap::Value = match segment {
                        #( #arms, )*
                        _ => {
                            return ::core::result::Result::Err(
                                #forcemap::Error::field_access(#type_name, segment),
                            )
                        }
                    };
                    #forcemap::path::descend(#type_name, segment, &value, rest)
                }
            }
        }
    }
}
