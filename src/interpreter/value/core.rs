use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::class::{Class, ClassInstance, STR_METHOD},
    },
};

/// A flat mapping from identifier to value representing one scope frame.
///
/// A closure holds either the top-level scope or the locals of a single
/// method call (`self` plus the formal parameters). Enclosing scopes are
/// never captured.
pub type Closure = HashMap<String, ObjectHolder>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, method returns, and conditional evaluations. The absent
/// value `None` has no variant of its own; it is represented by an empty
/// [`ObjectHolder`].
#[derive(Debug, Clone)]
pub enum Value {
    /// A signed 64-bit integer.
    Number(i64),
    /// An immutable string.
    String(String),
    /// A boolean value, `True` or `False`.
    Bool(bool),
    /// A class declared by a `class` statement.
    Class(Rc<Class>),
    /// An instance of a class.
    Instance(InstanceRef),
}

/// A reference to a class instance.
///
/// Instances are shared: every variable bound to an instance observes the
/// field writes made through any other. The `Share` mode is a non-owning
/// view used exclusively to bind `self` during a method call, so that the
/// method's scope frame never extends the instance's lifetime and no
/// reference cycle between an instance and its own call frames can form.
#[derive(Debug, Clone)]
pub enum InstanceRef {
    /// An owning (reference-counted) handle.
    Own(Rc<ClassInstance>),
    /// A non-owning view; the instance must outlive the use.
    Share(Weak<ClassInstance>),
}

impl InstanceRef {
    /// Returns an owning handle to the instance.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ExpiredReference`] if a shared view outlived
    /// the instance it refers to.
    pub fn resolve(&self) -> EvalResult<Rc<ClassInstance>> {
        match self {
            Self::Own(instance) => Ok(Rc::clone(instance)),
            Self::Share(instance) => instance.upgrade().ok_or(RuntimeError::ExpiredReference),
        }
    }
}

/// The ownership handle for a runtime value.
///
/// An empty holder represents `None`. Holders are cheap to clone: primitive
/// values are copied, classes and instances are shared.
#[derive(Debug, Clone, Default)]
pub struct ObjectHolder(Option<Value>);

impl ObjectHolder {
    /// Creates a holder that owns `value`.
    #[must_use]
    pub const fn own(value: Value) -> Self {
        Self(Some(value))
    }

    /// Creates the empty holder, `None`.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Creates a non-owning view of `instance`.
    ///
    /// Used to bind `self` inside method calls; the view does not keep the
    /// instance alive and is validated on every dereference.
    #[must_use]
    pub fn share(instance: &Rc<ClassInstance>) -> Self {
        Self(Some(Value::Instance(InstanceRef::Share(Rc::downgrade(instance)))))
    }

    /// Returns the held value, or `None` for the empty holder.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.0.as_ref()
    }

    /// Returns `true` if the holder is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the class instance held by `self`, or `None` for any other
    /// kind of value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::ExpiredReference`] if the holder is a shared
    /// view whose instance is gone.
    pub fn as_instance(&self) -> EvalResult<Option<Rc<ClassInstance>>> {
        match &self.0 {
            Some(Value::Instance(reference)) => reference.resolve().map(Some),
            _ => Ok(None),
        }
    }
}

impl From<&LiteralValue> for ObjectHolder {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(value) => Self::own(Value::Number(*value)),
            LiteralValue::String(value) => Self::own(Value::String(value.clone())),
            LiteralValue::Bool(value) => Self::own(Value::Bool(*value)),
            LiteralValue::None => Self::none(),
        }
    }
}

/// Decides the truthiness of a value.
///
/// `None`, zero, the empty string, `False`, classes, and class instances are
/// falsy; everything else is truthy. Instances are never coerced to truthy,
/// regardless of their methods.
///
/// # Example
/// ```
/// use pyrite::interpreter::value::core::{is_true, ObjectHolder, Value};
///
/// assert!(is_true(&ObjectHolder::own(Value::Number(7))));
/// assert!(!is_true(&ObjectHolder::own(Value::Number(0))));
/// assert!(!is_true(&ObjectHolder::none()));
/// ```
#[must_use]
pub fn is_true(object: &ObjectHolder) -> bool {
    match object.value() {
        Some(Value::Number(value)) => *value != 0,
        Some(Value::String(value)) => !value.is_empty(),
        Some(Value::Bool(value)) => *value,
        Some(Value::Class(_) | Value::Instance(_)) | None => false,
    }
}

/// Converts a value into its printed form.
///
/// Numbers print in decimal, strings print their raw characters without
/// quoting, booleans print as `True`/`False`, the empty holder prints as
/// `None`, and classes print as `Class <name>`. An instance delegates to its
/// zero-argument `__str__` method when one exists; otherwise it prints an
/// opaque address-like form that is stable for the lifetime of the instance.
///
/// # Errors
/// Propagates any runtime error raised by a `__str__` method, and failures
/// to dereference an expired instance view.
pub fn stringify(object: &ObjectHolder, ctx: &mut Context) -> EvalResult<String> {
    let Some(value) = object.value() else {
        return Ok("None".to_string());
    };

    match value {
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text.clone()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Class(class) => Ok(format!("Class {}", class.name())),
        Value::Instance(reference) => {
            let instance = reference.resolve()?;
            if instance.class().has_method(STR_METHOD, 0) {
                let rendered = ClassInstance::call(&instance, STR_METHOD, Vec::new(), ctx)?;
                stringify(&rendered, ctx)
            } else {
                Ok(format!("<{} object at {:p}>", instance.class().name(), Rc::as_ptr(&instance)))
            }
        }
    }
}
