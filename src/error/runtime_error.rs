#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Tried to read a field that was never assigned.
    UnknownField {
        /// The name of the field.
        name: String,
    },
    /// Tried to access a field of a value that is not a class instance.
    NotAnInstance {
        /// The name of the field that was accessed.
        name: String,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Method resolution failed by name or by argument count.
    MethodNotFound {
        /// The class of the receiver.
        class:  String,
        /// The name of the method.
        method: String,
    },
    /// Two values have no defined comparison.
    CompareError {
        /// The comparison operator that was applied.
        operator: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow,
    /// A `return` statement ran outside of any method body.
    ReturnOutsideMethod,
    /// A non-owning object reference outlived the object it refers to.
    ExpiredReference,
    /// Writing to the output stream failed.
    OutputError {
        /// Details reported by the stream.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),
            Self::UnknownField { name } => write!(f, "Unknown field '{name}'."),
            Self::NotAnInstance { name } => {
                write!(f, "Cannot access field '{name}' of a value that is not an object.")
            },
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::MethodNotFound { class, method } => write!(f,
                                                             "Class '{class}' has no method \
                                                              '{method}' matching the number of \
                                                              arguments."),
            Self::CompareError { operator } => {
                write!(f, "Values cannot be compared with '{operator}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },
            Self::ReturnOutsideMethod => write!(f, "Return outside of a method."),
            Self::ExpiredReference => {
                write!(f, "An object reference outlived the object it refers to.")
            },
            Self::OutputError { details } => {
                write!(f, "Failed to write program output: {details}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
