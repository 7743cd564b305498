use super::Expand;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let forcemap = &self.forcemap;
        let ident = &self.record.ident;
        let object = &self.record.attr.object;
        let external_id = match &self.record.attr.external_id {
            Some(lit) => quote!(#forcemap::Option::Some(#lit)),
            None => quote!(#forcemap::Option::None),
        };
        let field_defs = self.expand_field_defs();
        let len = Literal::usize_unsuffixed(self.record.wire_fields().count());
        let field_value_arms = self.expand_field_value_arms();

        quote! {
            impl #forcemap::Record for #ident {
                const OBJECT: &'static str = #object;
                const EXTERNAL_ID: #forcemap::Option<&'static str> = #external_id;

                fn fields() -> &'static [#forcemap::FieldDef] {
                    static FIELDS: [#forcemap::FieldDef; #len] = [ #( #field_defs, )* ];
                    &FIELDS
                }

                fn field_value(&self, index: usize) -> #forcemap::Value {
                    match index {
                        #( #field_value_arms, )*
                        _ => #forcemap::Value::Null,
                    }
                }
            }
        }
    }

    fn expand_field_defs(&self) -> Vec<TokenStream> {
        let forcemap = &self.forcemap;

        self.record
            .wire_fields()
            .map(|field| {
                let name = field.name();
                let wire_name = field.wire_name();
                let ty = &field.ty;
                let source = match &field.attrs.source {
                    Some(path) => quote!(#forcemap::Option::Some(#path)),
                    None => quote!(#forcemap::Option::None),
                };

                quote! {
                    #forcemap::FieldDef {
                        name: #name,
                        wire_name: #wire_name,
                        source: #source,
                        kind: <#ty as #forcemap::IntoValue>::KIND,
                    }
                }
            })
            .collect()
    }

    fn expand_field_value_arms(&self) -> Vec<TokenStream> {
        let forcemap = &self.forcemap;

        self.record
            .wire_fields()
            .enumerate()
            .map(|(index, field)| {
                let index = Literal::usize_unsuffixed(index);
                let field_ident = &field.ident;

                quote! {
                    #index => #forcemap::IntoValue::to_value(&self.#field_ident)
                }
            })
            .collect()
    }
}
