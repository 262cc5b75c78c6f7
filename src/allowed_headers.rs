use crate::case::canonical_header_key;
use indexmap::IndexSet;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AllowedHeaders {
    headers: IndexSet<String>,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers = values
            .into_iter()
            .map(|value| canonical_header_key(value.into().trim()))
            .filter(|value| !value.is_empty())
            .collect();

        Self { headers }
    }

    pub fn allows_header(&self, name: &str) -> bool {
        self.headers.contains(&canonical_header_key(name.trim()))
    }

    /// Returns the first requested header missing from the whitelist.
    pub fn first_disallowed<'a, I>(&self, requested: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        requested
            .into_iter()
            .find(|header| !self.allows_header(header))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
