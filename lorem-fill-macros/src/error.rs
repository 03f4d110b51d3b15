//! Errors for derive inputs that parse but cannot be implemented.

use proc_macro2::Span;
use thiserror::Error;

/// A rejected field or container, pointing at the offending tokens.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ParseError {
    span: Span,
    message: String,
    help: Option<String>,
}

impl ParseError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            help: None,
        }
    }

    /// Attach a `help:` note shown under the error.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn into_syn_error(self) -> syn::Error {
        let mut error = syn::Error::new(self.span, self.message);
        if let Some(help) = self.help {
            error.combine(syn::Error::new(self.span, format!("help: {help}")));
        }
        error
    }
}
