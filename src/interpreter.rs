/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages scope frames, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles scopes, objects, and control flow, including the non-local
///   `return` transfer.
/// - Reports runtime errors such as unknown names or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, identifiers, operators, keywords, and the virtual tokens that
/// encode line structure. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Synthesizes `Indent` and `Dedent` tokens from leading whitespace.
/// - Handles numeric and string literals, identifiers, comments, and
///   operators.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of the program.
/// This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors.
/// - Resolves class references at parse time.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// numbers, strings, booleans, classes, and class instances, together with
/// the ownership handle that ties them to scopes and fields. It also
/// provides truthiness, printing, and comparison over those types.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `ObjectHolder` ownership handle.
/// - Implements the class and instance model with method dispatch.
/// - Implements equality, ordering, and conversion to printed form.
pub mod value;
