//! Dotted source paths.
//!
//! A path such as `customer.address.city` is followed one segment at a time
//! through structured records. Once a string-keyed map is reached, the rest
//! of the path is used as a single key.

use super::{Source, Value};
use crate::{Error, Result};

/// Splits the first segment off `path`.
pub fn split(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (path, None),
    }
}

/// Continues resolving `rest` from `value`, the value of field `segment` of
/// the structured type `owner`.
///
/// Empty values end the lookup as absent, wherever they occur on the path.
pub fn descend(owner: &str, segment: &str, value: &Value, rest: Option<&str>) -> Result<Option<Value>> {
    if value.is_empty() {
        return Ok(None);
    }

    let Some(rest) = rest else {
        return Ok(Some(value.clone()));
    };

    match value {
        Value::Record(record) => record.resolve(rest),
        Value::Map(map) => map.resolve(rest),
        _ => Err(Error::field_access(
            format!("{owner}.{segment} ({})", value.type_name()),
            rest,
        )),
    }
}
