use crate::util::is_token_byte;

pub fn normalize_method(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

pub fn canonical_header_key(value: &str) -> String {
    if !value.bytes().all(is_token_byte) {
        return value.to_owned();
    }

    let mut upper = true;
    let mut canonical = String::with_capacity(value.len());
    for byte in value.bytes() {
        let ch = if upper {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        canonical.push(ch as char);
        upper = byte == b'-';
    }
    canonical
}

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;
