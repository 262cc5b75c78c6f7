use crate::case::normalize_method;
use crate::constants::method;
use indexmap::IndexSet;

/// Whitelist checked against `Access-Control-Request-Method`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedMethods {
    methods: IndexSet<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = values
            .into_iter()
            .map(|value| normalize_method(&value.into()))
            .filter(|value| !value.is_empty())
            .collect();

        Self { methods }
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        if requested.bytes().any(|byte| byte.is_ascii_lowercase()) {
            self.methods.contains(&normalize_method(requested))
        } else {
            self.methods.contains(requested)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

pub fn default_methods() -> Vec<String> {
    [
        method::GET,
        method::HEAD,
        method::PUT,
        method::PATCH,
        method::POST,
        method::DELETE,
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
