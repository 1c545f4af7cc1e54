use crate::{
    ast::{BinaryOperator, Statement},
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison, logic},
            core::{execute, flow_value, Context, ExecResult, Flow},
        },
        value::core::Closure,
    },
};

/// Evaluates both operands of a binary operation and dispatches to the
/// operator family.
///
/// Operands are evaluated left to right. The logical operators receive both
/// evaluated operands as well: `and` and `or` do not short-circuit.
///
/// # Errors
/// Propagates operand evaluation errors and any error raised by the operator
/// itself.
pub fn eval_binary_op(op: BinaryOperator,
                      left: &Statement,
                      right: &Statement,
                      closure: &mut Closure,
                      ctx: &mut Context)
                      -> ExecResult {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };

    let lhs = flow_value!(execute(left, closure, ctx)?);
    let rhs = flow_value!(execute(right, closure, ctx)?);

    let value = match op {
        Add | Sub | Mul | Div => arithmetic::eval_arithmetic(op, &lhs, &rhs, ctx)?,
        Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
            comparison::eval_comparison(op, &lhs, &rhs, ctx)?
        },
        And | Or => logic::eval_logic(op, &lhs, &rhs),
    };

    Ok(Flow::Normal(value))
}
