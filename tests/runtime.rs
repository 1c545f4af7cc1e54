use std::rc::Rc;

use pyrite::{
    ast::{LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::Context,
        value::{
            class::{Class, ClassInstance, Method},
            compare,
            core::{is_true, stringify, InstanceRef, ObjectHolder, Value},
        },
    },
};

fn number(value: i64) -> ObjectHolder {
    ObjectHolder::own(Value::Number(value))
}

fn text(value: &str) -> ObjectHolder {
    ObjectHolder::own(Value::String(value.to_string()))
}

fn boolean(value: bool) -> ObjectHolder {
    ObjectHolder::own(Value::Bool(value))
}

/// A zero-parameter method whose body is `return <literal>`.
fn method_returning(name: &str, value: LiteralValue) -> Method {
    let literal = Statement::Literal { value };
    let body = Statement::Return { value: Box::new(literal) };
    Method { name:          name.to_string(),
             formal_params: Vec::new(),
             body:          Statement::MethodBody { body: Box::new(body) }, }
}

/// A one-parameter comparison method whose body is `return <verdict>`.
fn verdict_method(name: &str, verdict: bool) -> Method {
    let literal = Statement::Literal { value: LiteralValue::Bool(verdict) };
    let body = Statement::Return { value: Box::new(literal) };
    Method { name:          name.to_string(),
             formal_params: vec!["other".to_string()],
             body:          Statement::MethodBody { body: Box::new(body) }, }
}

fn instance_of(class: &Rc<Class>) -> ObjectHolder {
    let instance = Rc::new(ClassInstance::new(Rc::clone(class)));
    ObjectHolder::own(Value::Instance(InstanceRef::Own(instance)))
}

#[test]
fn truthiness_of_primitives() {
    assert!(!is_true(&ObjectHolder::none()));
    assert!(!is_true(&number(0)));
    assert!(is_true(&number(7)));
    assert!(is_true(&number(-1)));
    assert!(!is_true(&text("")));
    assert!(is_true(&text("x")));
    assert!(!is_true(&boolean(false)));
    assert!(is_true(&boolean(true)));
}

#[test]
fn instances_and_classes_are_never_truthy() {
    let class = Rc::new(Class::new("A".to_string(), Vec::new(), None));
    assert!(!is_true(&ObjectHolder::own(Value::Class(Rc::clone(&class)))));
    assert!(!is_true(&instance_of(&class)));
}

#[test]
fn primitive_equality_is_structural() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    assert!(compare::equal(&number(3), &number(3), &mut ctx).unwrap());
    assert!(!compare::equal(&number(3), &number(4), &mut ctx).unwrap());
    assert!(compare::equal(&text("ab"), &text("ab"), &mut ctx).unwrap());
    assert!(compare::equal(&boolean(true), &boolean(true), &mut ctx).unwrap());
    assert!(compare::equal(&ObjectHolder::none(), &ObjectHolder::none(), &mut ctx).unwrap());
}

#[test]
fn mixed_kinds_have_no_equality() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    assert!(matches!(compare::equal(&number(1), &text("1"), &mut ctx),
                     Err(RuntimeError::CompareError { .. })));
    assert!(matches!(compare::equal(&number(1), &ObjectHolder::none(), &mut ctx),
                     Err(RuntimeError::CompareError { .. })));
}

#[test]
fn primitive_ordering() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    assert!(compare::less(&number(1), &number(2), &mut ctx).unwrap());
    assert!(!compare::less(&number(2), &number(2), &mut ctx).unwrap());
    assert!(compare::less(&text("abc"), &text("abd"), &mut ctx).unwrap());
    assert!(compare::less(&boolean(false), &boolean(true), &mut ctx).unwrap());
    assert!(matches!(compare::less(&ObjectHolder::none(), &ObjectHolder::none(), &mut ctx),
                     Err(RuntimeError::CompareError { .. })));
}

#[test]
fn derived_comparators_follow_their_definitions() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let pairs = [(1, 2), (2, 2), (3, 2)];
    for (l, r) in pairs {
        let less = compare::less(&number(l), &number(r), &mut ctx).unwrap();
        let equal = compare::equal(&number(l), &number(r), &mut ctx).unwrap();

        assert_eq!(compare::not_equal(&number(l), &number(r), &mut ctx).unwrap(), !equal);
        assert_eq!(compare::greater(&number(l), &number(r), &mut ctx).unwrap(), !less && !equal);
        assert_eq!(compare::greater_or_equal(&number(l), &number(r), &mut ctx).unwrap(), !less);
        assert_eq!(compare::less_or_equal(&number(l), &number(r), &mut ctx).unwrap(),
                   less || equal);
    }
}

#[test]
fn instance_equality_delegates_to_eq() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let class = Rc::new(Class::new("A".to_string(), vec![verdict_method("__eq__", true)], None));
    let a = instance_of(&class);
    let b = instance_of(&class);

    assert!(compare::equal(&a, &b, &mut ctx).unwrap());
    assert!(!compare::not_equal(&a, &b, &mut ctx).unwrap());
}

#[test]
fn lt_alone_orders_but_cannot_derive_equality() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let class = Rc::new(Class::new("A".to_string(), vec![verdict_method("__lt__", true)], None));
    let a = instance_of(&class);
    let b = instance_of(&class);

    assert!(compare::less(&a, &b, &mut ctx).unwrap());
    assert!(compare::greater_or_equal(&b, &a, &mut ctx).is_ok());
    // `>` and `<=` also need `__eq__`, which the class does not define.
    assert!(compare::greater(&a, &b, &mut ctx).is_err());
    assert!(compare::less_or_equal(&a, &b, &mut ctx).is_err());
}

#[test]
fn method_lookup_walks_the_parent_chain() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let parent = Rc::new(Class::new("Parent".to_string(),
                                    vec![method_returning("m", LiteralValue::Number(1)),
                                         method_returning("only", LiteralValue::Number(3))],
                                    None));
    let child = Rc::new(Class::new("Child".to_string(),
                                   vec![method_returning("m", LiteralValue::Number(2))],
                                   Some(Rc::clone(&parent))));

    let instance = Rc::new(ClassInstance::new(Rc::clone(&child)));
    let overridden = ClassInstance::call(&instance, "m", Vec::new(), &mut ctx).unwrap();
    assert!(matches!(overridden.value(), Some(Value::Number(2))));

    let inherited = ClassInstance::call(&instance, "only", Vec::new(), &mut ctx).unwrap();
    assert!(matches!(inherited.value(), Some(Value::Number(3))));
}

#[test]
fn dispatch_fails_on_unknown_name_or_arity() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let class = Rc::new(Class::new("A".to_string(),
                                   vec![method_returning("m", LiteralValue::Number(1))],
                                   None));
    let instance = Rc::new(ClassInstance::new(Rc::clone(&class)));

    assert!(matches!(ClassInstance::call(&instance, "missing", Vec::new(), &mut ctx),
                     Err(RuntimeError::MethodNotFound { .. })));
    assert!(matches!(ClassInstance::call(&instance, "m", vec![number(1)], &mut ctx),
                     Err(RuntimeError::MethodNotFound { .. })));
}

#[test]
fn fields_are_created_on_first_assignment() {
    let class = Rc::new(Class::new("A".to_string(), Vec::new(), None));
    let instance = ClassInstance::new(class);

    assert!(instance.field("x").is_none());
    instance.set_field("x".to_string(), number(5));
    assert!(matches!(instance.field("x").unwrap().value(), Some(Value::Number(5))));
}

#[test]
fn a_share_does_not_keep_the_instance_alive() {
    let class = Rc::new(Class::new("A".to_string(), Vec::new(), None));
    let instance = Rc::new(ClassInstance::new(class));

    let share = ObjectHolder::share(&instance);
    assert!(share.as_instance().unwrap().is_some());

    drop(instance);
    assert!(matches!(share.as_instance(), Err(RuntimeError::ExpiredReference)));
}

#[test]
fn stringify_produces_the_printed_form() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    assert_eq!(stringify(&number(42), &mut ctx).unwrap(), "42");
    assert_eq!(stringify(&number(-3), &mut ctx).unwrap(), "-3");
    assert_eq!(stringify(&text("plain, unquoted"), &mut ctx).unwrap(), "plain, unquoted");
    assert_eq!(stringify(&boolean(true), &mut ctx).unwrap(), "True");
    assert_eq!(stringify(&boolean(false), &mut ctx).unwrap(), "False");
    assert_eq!(stringify(&ObjectHolder::none(), &mut ctx).unwrap(), "None");

    let class = Rc::new(Class::new("Box".to_string(), Vec::new(), None));
    assert_eq!(stringify(&ObjectHolder::own(Value::Class(class)), &mut ctx).unwrap(), "Class Box");
}

#[test]
fn instances_without_str_render_a_stable_opaque_form() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let class = Rc::new(Class::new("A".to_string(), Vec::new(), None));
    let instance = instance_of(&class);

    let first = stringify(&instance, &mut ctx).unwrap();
    let second = stringify(&instance, &mut ctx).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn instances_with_str_delegate_to_it() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let class = Rc::new(Class::new("A".to_string(),
                                   vec![method_returning("__str__",
                                                         LiteralValue::String("hi".to_string()))],
                                   None));
    assert_eq!(stringify(&instance_of(&class), &mut ctx).unwrap(), "hi");
}

#[test]
fn method_body_without_return_yields_none() {
    let mut output = Vec::new();
    let mut ctx = Context::new(&mut output);

    let body = Statement::Compound { statements: Vec::new() };
    let method = Method { name:          "noop".to_string(),
                          formal_params: Vec::new(),
                          body:          Statement::MethodBody { body: Box::new(body) }, };
    let class = Rc::new(Class::new("A".to_string(), vec![method], None));
    let instance = Rc::new(ClassInstance::new(class));

    let result = ClassInstance::call(&instance, "noop", Vec::new(), &mut ctx).unwrap();
    assert!(result.is_empty());
}
