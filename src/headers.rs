use indexmap::IndexMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn set<S: Into<String>>(&mut self, name: &str, value: S) {
        match self.key_index(name) {
            Some(index) => {
                if let Some((_, values)) = self.entries.get_index_mut(index) {
                    values.clear();
                    values.push(value.into());
                }
            }
            None => {
                self.entries.insert(name.to_owned(), vec![value.into()]);
            }
        }
    }

    pub(crate) fn append<S: Into<String>>(&mut self, name: &str, value: S) {
        match self.key_index(name) {
            Some(index) => {
                if let Some((_, values)) = self.entries.get_index_mut(index) {
                    values.push(value.into());
                }
            }
            None => {
                self.entries.insert(name.to_owned(), vec![value.into()]);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.key_index(name)
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, values)| values.as_slice())
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn get_joined(&self, name: &str) -> Option<String> {
        self.get(name).map(|values| values.join(", "))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.key_index(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(name, values)| {
            values
                .iter()
                .map(move |value| (name.as_str(), value.as_str()))
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key_index(&self, name: &str) -> Option<usize> {
        self.entries
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
