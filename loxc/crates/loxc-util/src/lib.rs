//! loxc-util - Shared Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate holds the pieces every loxc phase needs but none of them owns:
//! source locations and the diagnostic machinery used to report problems
//! without aborting the phase that found them.
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. PHASES NEVER PANIC ON BAD INPUT
//!    Malformed source is reported through a [`Handler`] and the phase keeps
//!    going, so a single run surfaces every problem in the file.
//!
//! 2. DIAGNOSTICS ARE DATA
//!    A [`Diagnostic`] is a plain value (message, span, code). Rendering
//!    is a `Display` concern, so callers decide where the text goes.
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "[line 1] Error: Unterminated string."
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
