use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// Remote object name: `#[object("Contact")]`
    pub(crate) object: Option<syn::LitStr>,

    /// External id wire name: `#[external_id("Ext_Id__c")]`
    pub(crate) external_id: Option<syn::LitStr>,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("object") {
                if self.object.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[object] attribute"));
                } else {
                    let object: syn::LitStr = attr.parse_args()?;
                    if object.value().is_empty() {
                        errs.push(syn::Error::new_spanned(&object, "object name must not be empty"));
                    }
                    self.object = Some(object);
                }
            } else if attr.path().is_ident("external_id") {
                if self.external_id.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[external_id] attribute",
                    ));
                } else {
                    self.external_id = Some(attr.parse_args()?);
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
