/// Parsing errors.
///
/// Defines all error types that can occur during parsing of source code.
/// Parse errors include syntax mistakes, unexpected tokens, and references
/// to classes that were never declared. The lexer itself never fails.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution, such as unknown names, type mismatches, failed method
/// dispatch, or undefined comparisons.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
