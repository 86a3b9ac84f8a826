use s3tables_http::PropertyBag;

pub fn property_bag(entries: &[(&str, &str)]) -> PropertyBag {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
