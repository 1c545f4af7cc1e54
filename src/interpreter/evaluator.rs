/// Core evaluation logic and context management.
///
/// Contains the execution context, the control-flow result type, the central
/// node dispatch, and the evaluation of scopes, variables, and conditionals.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation, the only unary operation of the language.
pub mod unary;

/// Object model evaluation.
///
/// Handles class definitions, instantiation, method calls, field assignment,
/// and the `return` control transfer with its catch point.
pub mod object;

/// Output statements.
///
/// Implements `print` and the `str(...)` conversion.
pub mod print;
