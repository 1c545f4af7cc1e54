//! # pyrite
//!
//! pyrite is an interpreter for a small, indentation-structured scripting
//! language written in Rust. The language is dynamically typed and supports
//! integers, strings, booleans, `None`, classes with single inheritance,
//! methods with an explicit `self`, and `if`/`else` control flow. Blocks are
//! delimited by indentation, two spaces per level.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{execute, Context, Flow},
        lexer::Lexer,
        parser::core::Parser,
        value::core::Closure,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` enum and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for all language constructs.
/// - Carries the classes and literals embedded in the program text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Executes a program, writing its output to the given stream.
///
/// The source is tokenized and parsed as a whole, then executed statement by
/// statement against a fresh top-level scope. Everything the program prints
/// goes to `output`.
///
/// # Errors
/// Returns an error if parsing fails, if any runtime error occurs, or if a
/// `return` statement runs outside of a method.
pub fn run(source: &str, output: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let program = Parser::new(Lexer::new(source)).parse_program()?;

    let mut closure = Closure::new();
    let mut ctx = Context::new(output);
    match execute(&program, &mut closure, &mut ctx)? {
        Flow::Normal(_) => Ok(()),
        Flow::Returning(_) => Err(RuntimeError::ReturnOutsideMethod.into()),
    }
}

/// Executes a program and returns everything it printed.
///
/// # Errors
/// Returns an error if parsing or execution fails. See [`run`].
///
/// # Examples
/// ```
/// use pyrite::run_to_string;
///
/// let output = run_to_string("print 20 + 22").unwrap();
/// assert_eq!(output, "42\n");
///
/// // An intentional error: 'y' is not defined.
/// assert!(run_to_string("x = y + 1").is_err());
/// ```
pub fn run_to_string(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    run(source, &mut output)?;
    Ok(String::from_utf8(output)?)
}
