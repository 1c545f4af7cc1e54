use std::io::Write;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{execute, flow_value, Context, EvalResult, ExecResult, Flow},
        value::core::{stringify, Closure, ObjectHolder, Value},
    },
};

/// Executes a `print` statement.
///
/// Arguments are evaluated and written one after another in order, separated
/// by single spaces and terminated by a newline. An empty holder prints as
/// `None`; `print` without arguments writes just the newline. The statement
/// yields `None`.
///
/// # Errors
/// Propagates evaluation errors and failed writes to the output stream.
pub fn eval_print(args: &[Statement], closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            write_output(ctx, " ")?;
        }
        let value = flow_value!(execute(arg, closure, ctx)?);
        let text = stringify(&value, ctx)?;
        write_output(ctx, &text)?;
    }
    write_output(ctx, "\n")?;

    Ok(Flow::Normal(ObjectHolder::none()))
}

/// Executes a `str(...)` conversion: yields the printed form of the argument
/// as a string value.
///
/// The produced text is exactly what `print` would write for the same value.
///
/// # Errors
/// Propagates evaluation errors.
pub fn eval_stringify(arg: &Statement, closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    let value = flow_value!(execute(arg, closure, ctx)?);
    let text = stringify(&value, ctx)?;
    Ok(Flow::Normal(ObjectHolder::own(Value::String(text))))
}

/// Writes a piece of program output.
fn write_output(ctx: &mut Context, text: &str) -> EvalResult<()> {
    ctx.output()
       .write_all(text.as_bytes())
       .map_err(|source| RuntimeError::OutputError { details: source.to_string() })
}
