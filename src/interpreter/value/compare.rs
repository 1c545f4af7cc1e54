use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            class::{ClassInstance, EQ_METHOD, LT_METHOD},
            core::{is_true, ObjectHolder, Value},
        },
    },
};

/// Decides whether two values are equal.
///
/// Two empty holders are equal; values of the same primitive kind compare
/// structurally. When the left operand is an instance with a one-argument
/// `__eq__`, the decision is delegated to it and its result is interpreted
/// through truthiness.
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when no rule applies.
pub fn equal(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<bool> {
    if lhs.is_empty() && rhs.is_empty() {
        return Ok(true);
    }

    if let (Some(left), Some(right)) = (lhs.value(), rhs.value()) {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => return Ok(l == r),
            (Value::String(l), Value::String(r)) => return Ok(l == r),
            (Value::Bool(l), Value::Bool(r)) => return Ok(l == r),
            _ => {}
        }
    }

    if let Some(instance) = lhs.as_instance()?
        && instance.class().has_method(EQ_METHOD, 1)
    {
        let verdict = ClassInstance::call(&instance, EQ_METHOD, vec![rhs.clone()], ctx)?;
        return Ok(is_true(&verdict));
    }

    Err(RuntimeError::CompareError { operator: "==".to_string() })
}

/// Decides whether the left value orders strictly before the right one.
///
/// Numbers compare arithmetically, strings lexicographically, and booleans
/// with `False` before `True`. When the left operand is an instance with a
/// one-argument `__lt__`, the decision is delegated to it and its result is
/// interpreted through truthiness.
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when no rule applies.
pub fn less(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<bool> {
    if let (Some(left), Some(right)) = (lhs.value(), rhs.value()) {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => return Ok(l < r),
            (Value::String(l), Value::String(r)) => return Ok(l < r),
            (Value::Bool(l), Value::Bool(r)) => return Ok(l < r),
            _ => {}
        }
    }

    if let Some(instance) = lhs.as_instance()?
        && instance.class().has_method(LT_METHOD, 1)
    {
        let verdict = ClassInstance::call(&instance, LT_METHOD, vec![rhs.clone()], ctx)?;
        return Ok(is_true(&verdict));
    }

    Err(RuntimeError::CompareError { operator: "<".to_string() })
}

/// The negation of [`equal`].
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when equality is undefined for the
/// operands.
pub fn not_equal(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<bool> {
    Ok(!equal(lhs, rhs, ctx)?)
}

/// Derived ordering: neither less nor equal.
///
/// A class defining only `__lt__` cannot be compared with `>`, since the
/// derivation also needs `__eq__`.
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when ordering or equality is
/// undefined for the operands.
pub fn greater(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<bool> {
    Ok(!less(lhs, rhs, ctx)? && !equal(lhs, rhs, ctx)?)
}

/// Derived ordering: not greater.
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when ordering or equality is
/// undefined for the operands.
pub fn less_or_equal(lhs: &ObjectHolder, rhs: &ObjectHolder, ctx: &mut Context) -> EvalResult<bool> {
    Ok(!greater(lhs, rhs, ctx)?)
}

/// Derived ordering: not less.
///
/// # Errors
/// Returns [`RuntimeError::CompareError`] when ordering is undefined for the
/// operands.
pub fn greater_or_equal(lhs: &ObjectHolder,
                        rhs: &ObjectHolder,
                        ctx: &mut Context)
                        -> EvalResult<bool> {
    Ok(!less(lhs, rhs, ctx)?)
}
