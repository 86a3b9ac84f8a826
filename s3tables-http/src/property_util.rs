use crate::http_client_properties::PropertyBag;
use crate::{unwrap_or_return, HttpConfigErr};

/// `Ok(None)` when `key` is absent. A present value must be a non-negative
/// integer; anything else (empty, signed, fractional, overflowing) is an error
/// rather than a silent fallback to the default.
pub fn property_as_nullable_u64(
    properties: &PropertyBag,
    key: &str,
) -> Result<Option<u64>, HttpConfigErr> {
    let value = unwrap_or_return!(properties.get(key), Ok(None));

    value
        .parse::<u64>()
        .map(Some)
        .map_err(|e| HttpConfigErr::parse_error(key, value, e.to_string()))
}

pub fn property_as_string<'a>(properties: &'a PropertyBag, key: &str) -> Option<&'a str> {
    properties.get(key).map(String::as_str)
}
