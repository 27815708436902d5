//! Image search error types.

/// Image search failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UnsplashErrorKind {
    /// Connection or protocol failure
    #[display("Image search request failed: {}", _0)]
    Transport(String),
    /// Non-success HTTP status
    #[display("Image search returned HTTP {}", _0)]
    Http(u16),
    /// Body was not JSON or had no usable URL
    #[display("Image search response unusable: {}", _0)]
    MalformedResponse(String),
}

/// Image search error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Unsplash Error: {} at line {} in {}", kind, line, file)]
pub struct UnsplashError {
    /// The error kind
    pub kind: UnsplashErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl UnsplashError {
    /// Create a new UnsplashError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UnsplashErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
