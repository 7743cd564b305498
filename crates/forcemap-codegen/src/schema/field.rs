use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// `#[field("Name")]` or `#[field(skip)]`
    pub(crate) wire: Option<Wire>,

    /// Dotted path into the source record: `#[source("customer.name")]`
    pub(crate) source: Option<syn::LitStr>,

    /// Set if the field is annotated with `#[id]`
    pub(crate) id: Option<syn::Attribute>,
}

#[derive(Debug)]
pub(crate) enum Wire {
    Name(syn::LitStr),
    Skip,
}

mod kw {
    syn::custom_keyword!(skip);
}

impl syn::parse::Parse for Wire {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(syn::LitStr) {
            let name: syn::LitStr = input.parse()?;
            if name.value().is_empty() {
                return Err(syn::Error::new_spanned(name, "wire name must not be empty"));
            }
            Ok(Wire::Name(name))
        } else if lookahead.peek(kw::skip) {
            let _kw: kw::skip = input.parse()?;
            Ok(Wire::Skip)
        } else {
            Err(lookahead.error())
        }
    }
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            wire: None,
            source: None,
            id: None,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("field") {
                if attrs.wire.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[field] attribute"));
                } else {
                    attrs.wire = Some(attr.parse_args()?);
                }
            } else if attr.path().is_ident("source") {
                if attrs.source.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[source] attribute"));
                } else {
                    let path: syn::LitStr = attr.parse_args()?;
                    if path.value().split('.').any(str::is_empty) {
                        errs.push(syn::Error::new_spanned(
                            &path,
                            "source path segments must not be empty",
                        ));
                    }
                    attrs.source = Some(path);
                }
            } else if attr.path().is_ident("id") {
                if attrs.id.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[id] attribute"));
                } else {
                    attrs.id = Some(attr.clone());
                }
            }
        }

        if matches!(attrs.wire, Some(Wire::Skip)) {
            if attrs.source.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[source] cannot be used on skipped fields",
                ));
            }

            if attrs.id.is_some() {
                errs.push(syn::Error::new_spanned(
                    field,
                    "#[id] cannot be used on skipped fields",
                ));
            }
        } else if attrs.wire.is_none() && attrs.source.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[source] requires a wire name: #[field(\"Name\")]",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs,
        })
    }

    pub(crate) fn wire_name(&self) -> Option<&syn::LitStr> {
        match &self.attrs.wire {
            Some(Wire::Name(name)) => Some(name),
            _ => None,
        }
    }

    /// Skipped fields are left out of the generated value and source views.
    pub(crate) fn is_skipped(&self) -> bool {
        matches!(self.attrs.wire, Some(Wire::Skip))
    }

    /// Field name as seen by source paths
    pub(crate) fn name(&self) -> String {
        self.ident.to_string()
    }
}
