/// Core value representation.
///
/// Defines the `Value` enum, the `ObjectHolder` ownership handle, scope
/// frames, truthiness, and the conversion of values into their printed form.
pub mod core;

/// The class and instance model.
///
/// Defines classes with single inheritance, their methods, instances with
/// lazily created fields, and method dispatch.
pub mod class;

/// Value comparison.
///
/// Implements equality and ordering over the primitive value domains and the
/// delegation to user-defined `__eq__` and `__lt__` methods, plus the four
/// comparators derived from them.
pub mod compare;
