use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{execute, Context, EvalResult, Flow},
        value::core::{Closure, ObjectHolder},
    },
};

/// The method invoked by instantiation when its arity matches.
pub const INIT_METHOD: &str = "__init__";
/// The method consulted when printing an instance.
pub const STR_METHOD: &str = "__str__";
/// The method backing `+` when the left operand is an instance.
pub const ADD_METHOD: &str = "__add__";
/// The method backing `==` when the left operand is an instance.
pub const EQ_METHOD: &str = "__eq__";
/// The method backing `<` when the left operand is an instance.
pub const LT_METHOD: &str = "__lt__";

/// The implicit receiver binding inside method bodies.
const SELF_VARIABLE: &str = "self";

/// A named callable attached to a class.
///
/// The formal parameters are positional and do not include the receiver;
/// arity is determined solely by their count.
#[derive(Debug)]
pub struct Method {
    /// The method name.
    pub name:          String,
    /// The formal parameter names, excluding `self`.
    pub formal_params: Vec<String>,
    /// The method body, a [`Statement::MethodBody`] node.
    pub body:          Statement,
}

/// A class descriptor: a name, a method table, and an optional parent class.
///
/// The method table is immutable after construction. The parent is always
/// constructed before its children, so the back-reference can never dangle.
#[derive(Debug)]
pub struct Class {
    name:    String,
    methods: HashMap<String, Method>,
    parent:  Option<Rc<Class>>,
}

impl Class {
    /// Creates a class from its parsed methods.
    ///
    /// When several methods share a name, the one declared last wins.
    #[must_use]
    pub fn new(name: String, methods: Vec<Method>, parent: Option<Rc<Self>>) -> Self {
        let methods = methods.into_iter()
                             .map(|method| (method.name.clone(), method))
                             .collect();
        Self { name, methods, parent }
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds the nearest method with the given name, walking the parent
    /// chain. Own methods shadow parent methods by name regardless of arity.
    #[must_use]
    pub fn resolve_method(&self, name: &str) -> Option<&Method> {
        match self.methods.get(name) {
            Some(method) => Some(method),
            None => self.parent.as_deref().and_then(|parent| parent.resolve_method(name)),
        }
    }

    /// Decides whether the class (directly or through inheritance) has a
    /// method with the given name and parameter count.
    #[must_use]
    pub fn has_method(&self, name: &str, parameter_count: usize) -> bool {
        self.resolve_method(name)
            .is_some_and(|method| method.formal_params.len() == parameter_count)
    }
}

/// A binding of a class with its own mutable field scope.
///
/// Fields are created lazily on first assignment.
#[derive(Debug)]
pub struct ClassInstance {
    class:  Rc<Class>,
    fields: RefCell<Closure>,
}

impl ClassInstance {
    /// Creates an instance of `class` with no fields.
    #[must_use]
    pub fn new(class: Rc<Class>) -> Self {
        Self { class, fields: RefCell::new(Closure::new()) }
    }

    /// Returns the class of the instance.
    #[must_use]
    pub fn class(&self) -> &Class {
        &self.class
    }

    /// Reads a field, or `None` if it was never assigned.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<ObjectHolder> {
        self.fields.borrow().get(name).cloned()
    }

    /// Writes a field, creating it on first assignment.
    pub fn set_field(&self, name: String, value: ObjectHolder) {
        self.fields.borrow_mut().insert(name, value);
    }

    /// Calls a method on `instance`.
    ///
    /// The method is resolved by name through the parent chain; the resolved
    /// method must match the number of actual arguments. The body runs in a
    /// fresh scope frame holding only `self` (a non-owning view of the
    /// instance) and the formal parameters, and its `return` value becomes
    /// the result of the call.
    ///
    /// # Errors
    /// Returns [`RuntimeError::MethodNotFound`] if no method resolves or the
    /// arity does not match, and propagates any error raised by the body.
    pub fn call(instance: &Rc<Self>,
                method_name: &str,
                args: Vec<ObjectHolder>,
                ctx: &mut Context)
                -> EvalResult<ObjectHolder> {
        let method = instance.class
                             .resolve_method(method_name)
                             .filter(|method| method.formal_params.len() == args.len())
                             .ok_or_else(|| {
                                 RuntimeError::MethodNotFound { class:  instance.class
                                                                                .name()
                                                                                .to_string(),
                                                                method: method_name.to_string(), }
                             })?;

        let mut closure = Closure::new();
        closure.insert(SELF_VARIABLE.to_string(), ObjectHolder::share(instance));
        for (parameter, argument) in method.formal_params.iter().zip(args) {
            closure.insert(parameter.clone(), argument);
        }

        match execute(&method.body, &mut closure, ctx)? {
            Flow::Normal(value) | Flow::Returning(value) => Ok(value),
        }
    }
}
