use std::rc::Rc;

use crate::{
    ast::Statement,
    interpreter::{
        evaluator::core::{execute, flow_value, Context, ExecResult, Flow},
        value::{
            class::{Class, ClassInstance, INIT_METHOD},
            core::{Closure, InstanceRef, ObjectHolder, Value},
        },
    },
};

/// Binds the class under its own name in the current scope frame and yields
/// the class value.
pub fn eval_class_definition(class: &Rc<Class>, closure: &mut Closure) -> ExecResult {
    let object = ObjectHolder::own(Value::Class(Rc::clone(class)));
    closure.insert(class.name().to_string(), object.clone());
    Ok(Flow::Normal(object))
}

/// Constructs a fresh instance of a class.
///
/// When the class (directly or through inheritance) has an `__init__` whose
/// arity matches the argument count, the arguments are evaluated and the
/// initializer is invoked on the new instance; otherwise the arguments are
/// left untouched.
///
/// # Errors
/// Propagates argument evaluation errors and any error raised by `__init__`.
pub fn eval_new_instance(class: &Rc<Class>,
                         args: &[Statement],
                         closure: &mut Closure,
                         ctx: &mut Context)
                         -> ExecResult {
    let instance = Rc::new(ClassInstance::new(Rc::clone(class)));

    if class.has_method(INIT_METHOD, args.len()) {
        let mut actual_args = Vec::with_capacity(args.len());
        for arg in args {
            actual_args.push(flow_value!(execute(arg, closure, ctx)?));
        }
        ClassInstance::call(&instance, INIT_METHOD, actual_args, ctx)?;
    }

    Ok(Flow::Normal(ObjectHolder::own(Value::Instance(InstanceRef::Own(instance)))))
}

/// Calls a method on the value of the receiver expression.
///
/// A receiver that is not a class instance yields `None` without an error,
/// and the arguments are not evaluated.
///
/// # Errors
/// Propagates evaluation errors and method dispatch failures.
pub fn eval_method_call(object: &Statement,
                        method: &str,
                        args: &[Statement],
                        closure: &mut Closure,
                        ctx: &mut Context)
                        -> ExecResult {
    let receiver = flow_value!(execute(object, closure, ctx)?);
    let Some(instance) = receiver.as_instance()? else {
        return Ok(Flow::Normal(ObjectHolder::none()));
    };

    let mut actual_args = Vec::with_capacity(args.len());
    for arg in args {
        actual_args.push(flow_value!(execute(arg, closure, ctx)?));
    }

    Ok(Flow::Normal(ClassInstance::call(&instance, method, actual_args, ctx)?))
}

/// Writes a field of the object named by the target expression.
///
/// A target that is not a class instance yields `None` without an error, and
/// the right-hand side is not evaluated.
///
/// # Errors
/// Propagates evaluation errors.
pub fn eval_field_assignment(object: &Statement,
                             field: &str,
                             value: &Statement,
                             closure: &mut Closure,
                             ctx: &mut Context)
                             -> ExecResult {
    let target = flow_value!(execute(object, closure, ctx)?);
    let Some(instance) = target.as_instance()? else {
        return Ok(Flow::Normal(ObjectHolder::none()));
    };

    let assigned = flow_value!(execute(value, closure, ctx)?);
    instance.set_field(field.to_string(), assigned.clone());
    Ok(Flow::Normal(assigned))
}

/// Starts a non-local return carrying the value of the expression.
///
/// # Errors
/// Propagates evaluation errors.
pub fn eval_return(value: &Statement, closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    let object = flow_value!(execute(value, closure, ctx)?);
    Ok(Flow::Returning(object))
}

/// Executes a method body, catching a pending `return`.
///
/// A body that completes normally yields `None`; a `return` transfer that
/// reaches this frame yields the transferred value. Errors are not caught
/// here and keep propagating.
///
/// # Errors
/// Propagates every error raised by the body.
pub fn eval_method_body(body: &Statement, closure: &mut Closure, ctx: &mut Context) -> ExecResult {
    match execute(body, closure, ctx)? {
        Flow::Returning(value) => Ok(Flow::Normal(value)),
        Flow::Normal(_) => Ok(Flow::Normal(ObjectHolder::none())),
    }
}
