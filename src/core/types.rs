use std::fmt;

/// Verb used for an outbound command.
///
/// Parameters always travel in the URL query regardless of verb; POST is
/// reserved for the fixed set of state-mutating commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully assembled, signed outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self { method, url }
    }
}
