#![allow(dead_code)]

use cors_negotiator::Headers;
use cors_negotiator::constants::RESPONSE_HEADERS;
use std::collections::BTreeSet;

pub fn header_value(headers: &Headers, name: &str) -> Option<String> {
    headers.get_joined(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn header_set(headers: &Headers, name: &str) -> BTreeSet<String> {
    headers
        .get(name)
        .map(|values| values.iter().cloned().collect())
        .unwrap_or_default()
}

pub fn has_any_cors_header(headers: &Headers) -> bool {
    RESPONSE_HEADERS.iter().any(|name| headers.contains(name))
}
