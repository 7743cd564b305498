use super::Config;
use crate::Record;

use forcemap_core::{
    err,
    stmt::{Source, Value},
    Result,
};
use indexmap::IndexMap;
use tracing::debug;

/// A record field's value after local resolution.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Resolved {
    pub(crate) value: Value,

    /// True if the value was read from the source record
    pub(crate) from_source: bool,
}

/// Resolves every wire field of `record`, keyed by (possibly renamed) wire
/// name.
pub(crate) fn resolve_record<R: Record>(
    record: &R,
    source: Option<&dyn Source>,
    config: &Config,
) -> Result<IndexMap<String, Resolved>> {
    let fields = R::fields();
    let mut resolved = IndexMap::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let mut value = record.field_value(index);
        let mut from_source = false;

        if let (Some(source), Some(path)) = (source, field.source) {
            let found = source.resolve(path).map_err(|e| {
                e.context(err!(
                    "resolving source path `{path}` for `{}.{}`",
                    R::OBJECT,
                    field.wire_name
                ))
            })?;

            if let Some(found) = found.filter(|found| !found.is_empty()) {
                value = found.coerce(field.kind);
                from_source = true;
            }
        }

        let (name, value) = localize(config, field.wire_name, value.into_identified(), R::declares);
        insert(&mut resolved, name, Resolved { value, from_source });
    }

    Ok(resolved)
}

/// Moves a country or region name held in a `...Country`/`...State` field to
/// its `...Code` sibling as a 2-letter code, when the record declares one.
fn localize(
    config: &Config,
    wire_name: &str,
    value: Value,
    declares: impl Fn(&str) -> bool,
) -> (String, Value) {
    let is_region = config
        .region_suffixes
        .iter()
        .any(|suffix| wire_name.ends_with(suffix.as_str()));

    let code = match &value {
        Value::String(name) if is_region && !name.is_empty() => {
            if name.chars().count() == 2 {
                Some(name.clone())
            } else {
                config.regions.alpha2(name)
            }
        }
        _ => None,
    };

    if let Some(code) = code.filter(|code| code.chars().count() == 2) {
        let code_field = format!("{wire_name}Code");
        if declares(&code_field) {
            debug!(field = wire_name, code = %code, "writing region code");
            return (code_field, Value::String(code));
        }
    }

    (wire_name.to_string(), value)
}

/// Last write wins, except that an empty value never replaces a non-empty
/// one.
fn insert(resolved: &mut IndexMap<String, Resolved>, name: String, entry: Resolved) {
    match resolved.get_mut(&name) {
        Some(existing) if entry.value.is_empty() && !existing.value.is_empty() => {}
        Some(existing) => *existing = entry,
        None => {
            resolved.insert(name, entry);
        }
    }
}
