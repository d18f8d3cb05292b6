use atlas_kernel::error::{Context, format_context};
use std::borrow::Cow;

/// A specialized [`RegionsError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegionsError {
    /// The request was rejected before a body could be read (DNS, connection, CORS, ...).
    #[error("Regions network error{}: {source}", format_context(.context))]
    Network { source: reqwest::Error, context: Context },
    /// The body was not a JSON array of regions.
    #[error("Regions decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Context },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal regions error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Context },
}

pub type Result<T> = std::result::Result<T, RegionsError>;

impl From<reqwest::Error> for RegionsError {
    fn from(source: reqwest::Error) -> Self {
        Self::Network { source, context: None }
    }
}

impl From<serde_json::Error> for RegionsError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

impl From<&'static str> for RegionsError {
    fn from(message: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(message), context: None }
    }
}

impl From<String> for RegionsError {
    fn from(message: String) -> Self {
        Self::Internal { message: Cow::Owned(message), context: None }
    }
}

/// Adds `.context(..)` to results whose error converts into [`RegionsError`].
pub trait RegionsErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Passes the original error through, converted into [`RegionsError`].
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T>;
}

impl<T, E: Into<RegionsError>> RegionsErrorExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T> {
        self.map_err(|e| {
            let mut err = e.into();
            match &mut err {
                RegionsError::Network { context: c, .. }
                | RegionsError::Decode { context: c, .. }
                | RegionsError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            err
        })
    }
}

impl RegionsError {
    /// Short classification used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Decode { .. } => "decode",
            Self::Internal { .. } => "internal",
        }
    }
}
