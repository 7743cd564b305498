use super::{ErrorSet, Field, RecordAttr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecordKind {
    /// Mapped onto a remote object: `#[derive(Record)]`
    Record,

    /// Only read from as a source record: `#[derive(Source)]`
    Source,
}

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Struct level attributes
    pub(crate) attr: RecordAttr,

    /// Record fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// Index of the field holding the record's identifier
    pub(crate) id_field: Option<usize>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct, kind: RecordKind) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attr = RecordAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => {
                    if kind == RecordKind::Source && field.wire_name().is_some() {
                        errs.push(syn::Error::new_spanned(
                            node,
                            "wire names are only used by #[derive(Record)]",
                        ));
                    }
                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        if kind == RecordKind::Record && attr.object.is_none() {
            errs.push(syn::Error::new_spanned(
                &ast.ident,
                "missing #[object(\"...\")] attribute",
            ));
        }

        if let Some(external_id) = &attr.external_id {
            let declared = fields
                .iter()
                .any(|field| field.wire_name().is_some_and(|name| name.value() == external_id.value()));
            if !declared {
                errs.push(syn::Error::new_spanned(
                    external_id,
                    "external id must be the wire name of a field",
                ));
            }
        }

        let mut id_field = None;
        for (index, field) in fields.iter().enumerate() {
            if let Some(attr) = &field.attrs.id {
                if id_field.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "only one field can be #[id]"));
                }
                id_field = Some(index);
            }
        }

        // Without #[id], the field written as `Id` identifies the record
        if id_field.is_none() {
            id_field = fields
                .iter()
                .position(|field| field.wire_name().is_some_and(|name| name.value() == "Id"));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            attr,
            fields,
            id_field,
        })
    }

    /// Fields carrying a wire name, in declaration order.
    pub(crate) fn wire_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.wire_name().is_some())
    }

    /// Fields visible to values and source paths.
    pub(crate) fn value_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.is_skipped())
    }
}
