use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Reads the whole struct as a [`Value::Record`], keyed by Rust field
    /// name. Records referenced from another record collapse to their id.
    pub(super) fn expand_into_value_impl(&self, is_record: bool) -> TokenStream {
        let forcemap = &self.forcemap;
        let ident = &self.record.ident;
        let type_name = self.type_name();

        let kind = if is_record {
            quote!(const KIND: #forcemap::FieldKind = #forcemap::FieldKind::Record;)
        } else {
            quote!()
        };

        let inserts = self.record.value_fields().map(|field| {
            let name = field.name();
            let field_ident = &field.ident;
            quote! {
                record.insert(#name, #forcemap::IntoValue::to_value(&self.#field_ident));
            }
        });

        let set_id = self.record.id_field.map(|index| {
            let name = self.record.fields[index].name();
            quote!(record.set_id_field(#name);)
        });

        quote! {
            impl #forcemap::IntoValue for #ident {
                #kind

                fn to_value(&self) -> #forcemap::Value {
                    let mut record = #forcemap::ValueRecord::new(#type_name);
                    #( #inserts )*
                    #set_id
                    #forcemap::Value::Record(record)
                }
            }
        }
    }
}
