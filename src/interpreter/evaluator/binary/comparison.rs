use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            compare,
            core::{ObjectHolder, Value},
        },
    },
};

/// Evaluates a comparison over two evaluated operands and wraps the verdict
/// in a fresh boolean.
///
/// The six comparators are built from the two primitives `equal` and `less`:
/// `!=` negates equality, `>` is neither-less-nor-equal, `<=` is not-greater,
/// and `>=` is not-less.
///
/// # Errors
/// Propagates comparison errors for operands with no defined comparison.
pub fn eval_comparison(op: BinaryOperator,
                       lhs: &ObjectHolder,
                       rhs: &ObjectHolder,
                       ctx: &mut Context)
                       -> EvalResult<ObjectHolder> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let verdict = match op {
        Equal => compare::equal(lhs, rhs, ctx)?,
        NotEqual => compare::not_equal(lhs, rhs, ctx)?,
        Less => compare::less(lhs, rhs, ctx)?,
        Greater => compare::greater(lhs, rhs, ctx)?,
        LessEqual => compare::less_or_equal(lhs, rhs, ctx)?,
        GreaterEqual => compare::greater_or_equal(lhs, rhs, ctx)?,
        _ => unreachable!(),
    };

    Ok(ObjectHolder::own(Value::Bool(verdict)))
}
