use std::io;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, object, print, unary},
        value::core::{is_true, Closure, ObjectHolder},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Result of executing a single AST node: a control-flow outcome, or a
/// runtime error.
pub type ExecResult = EvalResult<Flow>;

/// The control-flow outcome of executing an AST node.
///
/// A `return` statement does not unwind; it produces a `Returning` flow that
/// every node forwards outward until the enclosing method body converts it
/// back into a normal value. Errors travel on the `Err` channel instead and
/// pass through method bodies untouched.
#[derive(Debug)]
pub enum Flow {
    /// The node completed and produced a value.
    Normal(ObjectHolder),
    /// A `return` is in flight, carrying the returned value.
    Returning(ObjectHolder),
}

/// Unwraps the value of a normal flow, forwarding a pending `return` to the
/// caller's own result.
macro_rules! flow_value {
    ($flow:expr) => {
        match $flow {
            $crate::interpreter::evaluator::core::Flow::Normal(value) => value,
            returning @ $crate::interpreter::evaluator::core::Flow::Returning(_) => {
                return Ok(returning);
            }
        }
    };
}
pub(crate) use flow_value;

/// Stores the host environment of a program run.
///
/// The context carries the output stream consumed by `print` and by `__str__`
/// dispatch. The stream is injected by the caller, so tests and embedders can
/// capture everything a program writes.
pub struct Context<'out> {
    output: &'out mut dyn io::Write,
}

impl<'out> Context<'out> {
    /// Creates a context writing program output to `output`.
    pub fn new(output: &'out mut dyn io::Write) -> Self {
        Self { output }
    }

    /// Returns the output stream of the program run.
    pub fn output(&mut self) -> &mut dyn io::Write {
        self.output
    }
}

/// Executes a single AST node against a scope frame.
///
/// This is the central dispatch of the interpreter: every node kind maps to
/// one evaluation function. Children are always evaluated left to right,
/// depth first.
///
/// # Errors
/// Propagates every runtime error raised while executing the node.
pub fn execute(statement: &Statement, closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    match statement {
        Statement::Literal { value } => Ok(Flow::Normal(ObjectHolder::from(value))),
        Statement::Variable { name, path } => eval_variable(name, path, closure),
        Statement::Assignment { name, value } => eval_assignment(name, value, closure, ctx),
        Statement::FieldAssignment { object, field, value } => {
            object::eval_field_assignment(object, field, value, closure, ctx)
        },
        Statement::Print { args } => print::eval_print(args, closure, ctx),
        Statement::Stringify { arg } => print::eval_stringify(arg, closure, ctx),
        Statement::BinaryOp { op, left, right } => {
            binary::core::eval_binary_op(*op, left, right, closure, ctx)
        },
        Statement::Not { arg } => unary::eval_not(arg, closure, ctx),
        Statement::IfElse { condition, then_body, else_body } => {
            eval_if_else(condition, then_body, else_body.as_deref(), closure, ctx)
        },
        Statement::Compound { statements } => eval_compound(statements, closure, ctx),
        Statement::ClassDefinition { class } => object::eval_class_definition(class, closure),
        Statement::NewInstance { class, args } => {
            object::eval_new_instance(class, args, closure, ctx)
        },
        Statement::MethodCall { object, method, args } => {
            object::eval_method_call(object, method, args, closure, ctx)
        },
        Statement::Return { value } => object::eval_return(value, closure, ctx),
        Statement::MethodBody { body } => object::eval_method_body(body, closure, ctx),
    }
}

/// Executes a sequence of statements in order, discarding their values.
///
/// The sequence itself yields `None`; a pending `return` from any child stops
/// the sequence and is forwarded.
fn eval_compound(statements: &[Statement], closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    for statement in statements {
        flow_value!(execute(statement, closure, ctx)?);
    }
    Ok(Flow::Normal(ObjectHolder::none()))
}

/// Binds a name in the current scope frame and yields the bound value.
fn eval_assignment(name: &str,
                   value: &Statement,
                   closure: &mut Closure,
                   ctx: &mut Context)
                   -> ExecResult {
    let object = flow_value!(execute(value, closure, ctx)?);
    closure.insert(name.to_string(), object.clone());
    Ok(Flow::Normal(object))
}

/// Looks up a name in the current scope frame and applies the dotted field
/// path to it.
fn eval_variable(name: &str, path: &[String], closure: &Closure) -> ExecResult {
    let Some(mut object) = closure.get(name).cloned() else {
        return Err(RuntimeError::UnknownVariable { name: name.to_string() });
    };

    for segment in path {
        let instance = object.as_instance()?
                             .ok_or_else(|| RuntimeError::NotAnInstance { name: segment.clone() })?;
        object = instance.field(segment)
                         .ok_or_else(|| RuntimeError::UnknownField { name: segment.clone() })?;
    }

    Ok(Flow::Normal(object))
}

/// Executes one of the two branches of an `if` statement.
///
/// The branch's own flow is forwarded unchanged, so a `return` inside a
/// branch travels on. Without an `else`, a false condition yields `None`.
fn eval_if_else(condition: &Statement,
                then_body: &Statement,
                else_body: Option<&Statement>,
                closure: &mut Closure,
                ctx: &mut Context)
                -> ExecResult {
    let decision = flow_value!(execute(condition, closure, ctx)?);

    if is_true(&decision) {
        execute(then_body, closure, ctx)
    } else if let Some(else_body) = else_body {
        execute(else_body, closure, ctx)
    } else {
        Ok(Flow::Normal(ObjectHolder::none()))
    }
}
