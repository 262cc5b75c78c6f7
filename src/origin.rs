use crate::context::RequestContext;
use crate::util::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Decides whether a cross-origin request's `Origin` is acceptable.
pub trait OriginValidator: Send + Sync {
    fn validate(&self, origin: &str, request: &RequestContext<'_>) -> bool;
}

impl<F> OriginValidator for F
where
    F: Fn(&str, &RequestContext<'_>) -> bool + Send + Sync,
{
    fn validate(&self, origin: &str, request: &RequestContext<'_>) -> bool {
        self(origin, request)
    }
}

pub fn predicate<F>(validator: F) -> Arc<dyn OriginValidator>
where
    F: Fn(&str, &RequestContext<'_>) -> bool + Send + Sync + 'static,
{
    Arc::new(validator)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnyOrigin;

impl OriginValidator for AnyOrigin {
    fn validate(&self, _origin: &str, _request: &RequestContext<'_>) -> bool {
        true
    }
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("compiling origin pattern exceeded the configured budget")]
    Timeout { elapsed: Duration, budget: Duration },
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Clone, Debug)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.len() > MAX_ORIGIN_LENGTH {
            return false;
        }

        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl OriginValidator for OriginMatcher {
    fn validate(&self, origin: &str, _request: &RequestContext<'_>) -> bool {
        self.matches(origin)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AllowedOrigins {
    matchers: Vec<OriginMatcher>,
}

impl AllowedOrigins {
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self {
            matchers: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.matchers.iter().any(|matcher| matcher.matches(origin))
    }

    pub fn matchers(&self) -> &[OriginMatcher] {
        &self.matchers
    }
}

impl OriginValidator for AllowedOrigins {
    fn validate(&self, origin: &str, _request: &RequestContext<'_>) -> bool {
        self.matches(origin)
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
