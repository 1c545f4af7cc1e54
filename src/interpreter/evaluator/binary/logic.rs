use crate::{
    ast::BinaryOperator,
    interpreter::value::core::{is_true, ObjectHolder, Value},
};

/// Evaluates a logical operation over two evaluated operands and yields a
/// fresh boolean.
///
/// The operands are interpreted through truthiness. Both operands have
/// already been evaluated by the time this runs, so `and` and `or` never
/// short-circuit.
#[must_use]
pub fn eval_logic(op: BinaryOperator, lhs: &ObjectHolder, rhs: &ObjectHolder) -> ObjectHolder {
    use BinaryOperator::{And, Or};

    let verdict = match op {
        And => is_true(lhs) && is_true(rhs),
        Or => is_true(lhs) || is_true(rhs),
        _ => unreachable!(),
    };

    ObjectHolder::own(Value::Bool(verdict))
}
