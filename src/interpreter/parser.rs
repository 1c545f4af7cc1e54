/// The parser state and program structure.
///
/// Contains the `Parser` over the token stream, its buffered lookahead, the
/// table of declared classes, and the parsing of whole programs and indented
/// suites.
pub mod core;

/// Statement parsing.
///
/// Implements assignments, field assignments, `print`, `return`, `if`/`else`,
/// class definitions with their methods, and expression statements.
pub mod statement;

/// Expression parsing.
///
/// Implements the precedence chain from logical `or` down to primaries,
/// dotted name chains, method calls, instantiation, and `str(...)`.
pub mod expression;
