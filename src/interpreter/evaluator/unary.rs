use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{execute, flow_value, Context, ExecResult, Flow},
        value::core::{is_true, Closure, ObjectHolder, Value},
    },
};

/// Evaluates logical negation: yields the opposite of the operand's
/// truthiness as a fresh boolean.
///
/// # Errors
/// Propagates operand evaluation errors.
pub fn eval_not(arg: &Statement, closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    let value = flow_value!(execute(arg, closure, ctx)?);
    Ok(Flow::Normal(ObjectHolder::own(Value::Bool(!is_true(&value)))))
}
