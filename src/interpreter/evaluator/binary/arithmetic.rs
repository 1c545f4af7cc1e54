use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{ClassInstance, ADD_METHOD},
            core::{ObjectHolder, Value},
        },
    },
};

/// Evaluates an arithmetic operation over two evaluated operands.
///
/// `-`, `*` and `/` are defined for numbers only; `+` additionally
/// concatenates strings and, when the left operand is an instance, delegates
/// to its one-argument `__add__` method. All number arithmetic is checked.
///
/// # Errors
/// - [`RuntimeError::TypeError`] for unsupported operand kinds.
/// - [`RuntimeError::DivisionByZero`] for a zero divisor.
/// - [`RuntimeError::Overflow`] when a result does not fit into an `i64`.
pub fn eval_arithmetic(op: BinaryOperator,
                       lhs: &ObjectHolder,
                       rhs: &ObjectHolder,
                       ctx: &mut Context)
                       -> EvalResult<ObjectHolder> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if op == Add {
        return eval_add(lhs, rhs, ctx);
    }

    let (Some(Value::Number(left)), Some(Value::Number(right))) = (lhs.value(), rhs.value()) else {
        return Err(RuntimeError::TypeError { details: format!("operands of '{op}' must be \
                                                               numbers"), });
    };

    let result = match op {
        Sub => left.checked_sub(*right).ok_or(RuntimeError::Overflow)?,
        Mul => left.checked_mul(*right).ok_or(RuntimeError::Overflow)?,
        Div => {
            if *right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(*right).ok_or(RuntimeError::Overflow)?
        },
        _ => unreachable!(),
    };

    Ok(ObjectHolder::own(Value::Number(result)))
}

/// Evaluates `+` over two evaluated operands.
fn eval_add(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<ObjectHolder> {
    match (lhs.value(), rhs.value()) {
        (Some(Value::Number(left)), Some(Value::Number(right))) => {
            let sum = left.checked_add(*right).ok_or(RuntimeError::Overflow)?;
            Ok(ObjectHolder::own(Value::Number(sum)))
        },
        (Some(Value::String(left)), Some(Value::String(right))) => {
            Ok(ObjectHolder::own(Value::String(format!("{left}{right}"))))
        },
        _ => {
            if let Some(instance) = lhs.as_instance()? {
                return ClassInstance::call(&instance, ADD_METHOD, vec![rhs.clone()], ctx);
            }
            Err(RuntimeError::TypeError { details: "operands of '+' must be two numbers, two \
                                                    strings, or an object with __add__ and its \
                                                    argument"
                                                             .to_string(), })
        },
    }
}
