//! Read-only typed access into a decoded value tree.
//!
//! An [`Accessor`] wraps one borrowed [`Value`] plus the [`KeyPath`] that
//! reached it. Calling [`Accessor::index`] descends one step and yields an
//! [`Accessed`]: either a new accessor over the child value, or a
//! [`MissingAccessor`] when the key does not resolve. Both variants expose
//! the same getter surface, so a whole descent chain can be written first
//! and checked once at the terminal getter call — any failure along the way
//! reports the exact path it happened at.
//!
//! Two getter disciplines exist side by side:
//!
//! - **strict** (`get_int`, `get_list_of_string`, ...): the wrapped value
//!   must already have the exact requested type.
//! - **coercive** (`get_as_int`, `get_as_list_of_string`, ...): the value is
//!   converted through the fixed rule set in [`crate::coerce`] if possible.
//!
//! Every `get_*` has a non-raising `find_*` counterpart returning `Option`.
//!
//! Accessors are immutable value objects: indexing never touches the parent,
//! and the wrapped tree is only ever borrowed, never written. The `set` /
//! `remove` compatibility shims exist for container-style consumers and
//! always fail with [`AccessError::CannotModify`].

use crate::coerce;
use crate::error::{AccessError, Result};
use crate::path::KeyPath;
use crate::value::{Key, Value};

/// Immutable read-only view of one decoded value plus its access path.
#[derive(Debug, Clone, PartialEq)]
pub struct Accessor<'a> {
    value: &'a Value,
    path: KeyPath,
}

/// Sentinel for a path that does not resolve to any value. Carries only the
/// path; every getter fails with [`AccessError::MissingValue`], every
/// `find_*` returns `None`, and indexing keeps accumulating keys while
/// staying missing.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingAccessor {
    path: KeyPath,
}

/// Result of one indexing step: the key resolved to a value, or the path ran
/// off the tree. Both variants satisfy the identical getter contract; this
/// union dispatches by match.
#[derive(Debug, Clone, PartialEq)]
pub enum Accessed<'a> {
    Found(Accessor<'a>),
    Missing(MissingAccessor),
}

impl<'a> Accessor<'a> {
    /// Wrap the root of a decoded document. The path starts empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use loupe_core::{Accessor, Value};
    ///
    /// let doc = Value::from_json(r#"{"port": "8080"}"#).unwrap();
    /// let root = Accessor::new(&doc);
    /// assert_eq!(root.index("port").get_as_int().unwrap(), 8080);
    /// ```
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            path: KeyPath::root(),
        }
    }

    pub(crate) fn with_path(value: &'a Value, path: KeyPath) -> Self {
        Self { value, path }
    }

    /// The keys indexed to reach this accessor, in order.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    // ------------------------------------------------------------------
    // Strict getters: exact runtime type required
    // ------------------------------------------------------------------

    /// The wrapped integer, or [`AccessError::UnexpectedType`].
    pub fn get_int(&self) -> Result<i64> {
        self.find_int().ok_or_else(|| self.unexpected_type("int"))
    }

    /// The wrapped boolean, or [`AccessError::UnexpectedType`].
    pub fn get_bool(&self) -> Result<bool> {
        self.find_bool().ok_or_else(|| self.unexpected_type("bool"))
    }

    /// The wrapped string, or [`AccessError::UnexpectedType`].
    pub fn get_string(&self) -> Result<&'a str> {
        self.find_string()
            .ok_or_else(|| self.unexpected_type("string"))
    }

    pub fn find_int(&self) -> Option<i64> {
        match self.value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn find_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn find_string(&self) -> Option<&'a str> {
        match self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of a list-shaped value, every one already an integer.
    /// The returned vector is freshly collected — element types are
    /// guaranteed by construction, not asserted. Fails with
    /// [`AccessError::UncastableValue`].
    pub fn get_list_of_int(&self) -> Result<Vec<i64>> {
        self.find_list_of_int()
            .ok_or_else(|| self.uncastable("list_of_int"))
    }

    /// The elements of a list-shaped value, every one already a string.
    /// Fails with [`AccessError::UncastableValue`].
    pub fn get_list_of_string(&self) -> Result<Vec<&'a str>> {
        self.find_list_of_string()
            .ok_or_else(|| self.uncastable("list_of_string"))
    }

    pub fn find_list_of_int(&self) -> Option<Vec<i64>> {
        self.value
            .elements()?
            .into_iter()
            .map(|element| match element {
                Value::Int(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    pub fn find_list_of_string(&self) -> Option<Vec<&'a str>> {
        self.value
            .elements()?
            .into_iter()
            .map(|element| match element {
                Value::String(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Coercive getters: fixed conversion rules, see crate::coerce
    // ------------------------------------------------------------------

    /// The value coerced to an integer, or [`AccessError::UncastableValue`].
    pub fn get_as_int(&self) -> Result<i64> {
        self.find_as_int().ok_or_else(|| self.uncastable("int"))
    }

    /// The value coerced to a boolean, or [`AccessError::UncastableValue`].
    pub fn get_as_bool(&self) -> Result<bool> {
        self.find_as_bool().ok_or_else(|| self.uncastable("bool"))
    }

    /// The value coerced to a string, or [`AccessError::UncastableValue`].
    pub fn get_as_string(&self) -> Result<String> {
        self.find_as_string()
            .ok_or_else(|| self.uncastable("string"))
    }

    pub fn find_as_int(&self) -> Option<i64> {
        coerce::to_int(self.value)
    }

    pub fn find_as_bool(&self) -> Option<bool> {
        coerce::to_bool(self.value)
    }

    pub fn find_as_string(&self) -> Option<String> {
        coerce::to_string(self.value)
    }

    /// A list-shaped value with every element coerced through the int rule.
    /// One element failing fails the whole list — no partial results.
    pub fn get_as_list_of_int(&self) -> Result<Vec<i64>> {
        self.find_as_list_of_int()
            .ok_or_else(|| self.uncastable("list_of_int"))
    }

    /// A list-shaped value with every element coerced through the string
    /// rule. One element failing fails the whole list — no partial results.
    pub fn get_as_list_of_string(&self) -> Result<Vec<String>> {
        self.find_as_list_of_string()
            .ok_or_else(|| self.uncastable("list_of_string"))
    }

    pub fn find_as_list_of_int(&self) -> Option<Vec<i64>> {
        self.value
            .elements()?
            .into_iter()
            .map(coerce::to_int)
            .collect()
    }

    pub fn find_as_list_of_string(&self) -> Option<Vec<String>> {
        self.value
            .elements()?
            .into_iter()
            .map(coerce::to_string)
            .collect()
    }

    // ------------------------------------------------------------------
    // Escape hatch
    // ------------------------------------------------------------------

    /// The raw wrapped value, untyped.
    pub fn get_mixed(&self) -> Result<&'a Value> {
        Ok(self.value)
    }

    /// The raw wrapped value, untyped. Never fails on a present value.
    pub fn find_mixed(&self) -> Option<&'a Value> {
        Some(self.value)
    }

    // ------------------------------------------------------------------
    // Indexing
    // ------------------------------------------------------------------

    /// Descend one step. A resolving key yields a child accessor; a key that
    /// does not resolve — absent from the map, out of range for the list, or
    /// aimed at a non-container — yields a missing accessor. Either way the
    /// result's path is this accessor's path with `key` appended, and this
    /// accessor itself is unchanged and reusable.
    pub fn index(&self, key: impl Into<Key>) -> Accessed<'a> {
        let key = key.into();
        let child_path = self.path.child(key.clone());
        match self.value.lookup(&key) {
            Some(child) => Accessed::Found(Accessor::with_path(child, child_path)),
            None => Accessed::Missing(MissingAccessor::new(child_path)),
        }
    }

    /// Descend with a key that itself comes from decoded data. String and
    /// integer keys behave exactly like [`Accessor::index`]; any other kind
    /// fails with [`AccessError::UnexpectedKeyType`] before any lookup.
    pub fn index_value(&self, key: &Value) -> Result<Accessed<'a>> {
        match key {
            Value::String(s) => Ok(self.index(s.as_str())),
            Value::Int(i) => Ok(self.index(*i)),
            other => Err(AccessError::UnexpectedKeyType {
                key: other.clone(),
                path: self.path.clone(),
            }),
        }
    }

    /// Whether `key` resolves, without constructing a child. `false` for
    /// non-containers.
    pub fn contains(&self, key: impl Into<Key>) -> bool {
        self.value.lookup(&key.into()).is_some()
    }

    // ------------------------------------------------------------------
    // Mutation guard: compatibility shims, always refused
    // ------------------------------------------------------------------

    /// Compatibility shim for container-style consumers. The accessor is a
    /// read-only view; this always fails with [`AccessError::CannotModify`]
    /// and never touches the data.
    pub fn set(&self, _key: impl Into<Key>, _value: impl Into<Value>) -> Result<()> {
        Err(self.cannot_modify())
    }

    /// Compatibility shim; always fails with [`AccessError::CannotModify`].
    pub fn remove(&self, _key: impl Into<Key>) -> Result<()> {
        Err(self.cannot_modify())
    }

    fn unexpected_type(&self, expected: &'static str) -> AccessError {
        AccessError::UnexpectedType {
            expected,
            found: self.value.clone(),
            path: self.path.clone(),
        }
    }

    fn uncastable(&self, target: &'static str) -> AccessError {
        AccessError::UncastableValue {
            target,
            value: self.value.clone(),
            path: self.path.clone(),
        }
    }

    fn cannot_modify(&self) -> AccessError {
        AccessError::CannotModify {
            path: self.path.clone(),
        }
    }
}

impl MissingAccessor {
    pub(crate) fn new(path: KeyPath) -> Self {
        Self { path }
    }

    /// The keys indexed to reach this position, in order.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    fn missing(&self) -> AccessError {
        AccessError::MissingValue {
            path: self.path.clone(),
        }
    }

    fn cannot_modify(&self) -> AccessError {
        AccessError::CannotModify {
            path: self.path.clone(),
        }
    }

    pub fn get_int(&self) -> Result<i64> {
        Err(self.missing())
    }

    pub fn get_bool(&self) -> Result<bool> {
        Err(self.missing())
    }

    pub fn get_string(&self) -> Result<&str> {
        Err(self.missing())
    }

    pub fn get_list_of_int(&self) -> Result<Vec<i64>> {
        Err(self.missing())
    }

    pub fn get_list_of_string(&self) -> Result<Vec<&str>> {
        Err(self.missing())
    }

    pub fn get_as_int(&self) -> Result<i64> {
        Err(self.missing())
    }

    pub fn get_as_bool(&self) -> Result<bool> {
        Err(self.missing())
    }

    pub fn get_as_string(&self) -> Result<String> {
        Err(self.missing())
    }

    pub fn get_as_list_of_int(&self) -> Result<Vec<i64>> {
        Err(self.missing())
    }

    pub fn get_as_list_of_string(&self) -> Result<Vec<String>> {
        Err(self.missing())
    }

    pub fn get_mixed(&self) -> Result<&Value> {
        Err(self.missing())
    }

    pub fn find_int(&self) -> Option<i64> {
        None
    }

    pub fn find_bool(&self) -> Option<bool> {
        None
    }

    pub fn find_string(&self) -> Option<&str> {
        None
    }

    pub fn find_list_of_int(&self) -> Option<Vec<i64>> {
        None
    }

    pub fn find_list_of_string(&self) -> Option<Vec<&str>> {
        None
    }

    pub fn find_as_int(&self) -> Option<i64> {
        None
    }

    pub fn find_as_bool(&self) -> Option<bool> {
        None
    }

    pub fn find_as_string(&self) -> Option<String> {
        None
    }

    pub fn find_as_list_of_int(&self) -> Option<Vec<i64>> {
        None
    }

    pub fn find_as_list_of_string(&self) -> Option<Vec<String>> {
        None
    }

    pub fn find_mixed(&self) -> Option<&Value> {
        None
    }

    /// Descent through missing stays missing: the key is appended to the
    /// path and no value is ever recovered.
    pub fn index(&self, key: impl Into<Key>) -> MissingAccessor {
        MissingAccessor::new(self.path.child(key.into()))
    }

    /// Key-kind validation still applies on a missing accessor: a dynamic
    /// key that is neither string nor integer fails with
    /// [`AccessError::UnexpectedKeyType`] rather than descending.
    pub fn index_value(&self, key: &Value) -> Result<MissingAccessor> {
        match key {
            Value::String(s) => Ok(self.index(s.as_str())),
            Value::Int(i) => Ok(self.index(*i)),
            other => Err(AccessError::UnexpectedKeyType {
                key: other.clone(),
                path: self.path.clone(),
            }),
        }
    }

    pub fn contains(&self, _key: impl Into<Key>) -> bool {
        false
    }

    /// Compatibility shim; always fails with [`AccessError::CannotModify`].
    pub fn set(&self, _key: impl Into<Key>, _value: impl Into<Value>) -> Result<()> {
        Err(self.cannot_modify())
    }

    /// Compatibility shim; always fails with [`AccessError::CannotModify`].
    pub fn remove(&self, _key: impl Into<Key>) -> Result<()> {
        Err(self.cannot_modify())
    }
}

impl<'a> Accessed<'a> {
    /// The keys indexed to reach this position, in order.
    pub fn path(&self) -> &KeyPath {
        match self {
            Accessed::Found(accessor) => accessor.path(),
            Accessed::Missing(missing) => missing.path(),
        }
    }

    /// `true` when the last indexing step resolved to a value.
    pub fn is_found(&self) -> bool {
        matches!(self, Accessed::Found(_))
    }

    /// `true` when the path ran off the tree.
    pub fn is_missing(&self) -> bool {
        matches!(self, Accessed::Missing(_))
    }

    /// The present accessor, if the path resolved.
    pub fn found(self) -> Option<Accessor<'a>> {
        match self {
            Accessed::Found(accessor) => Some(accessor),
            Accessed::Missing(_) => None,
        }
    }

    pub fn get_int(&self) -> Result<i64> {
        match self {
            Accessed::Found(accessor) => accessor.get_int(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_bool(&self) -> Result<bool> {
        match self {
            Accessed::Found(accessor) => accessor.get_bool(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_string(&self) -> Result<&'a str> {
        match self {
            Accessed::Found(accessor) => accessor.get_string(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_list_of_int(&self) -> Result<Vec<i64>> {
        match self {
            Accessed::Found(accessor) => accessor.get_list_of_int(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_list_of_string(&self) -> Result<Vec<&'a str>> {
        match self {
            Accessed::Found(accessor) => accessor.get_list_of_string(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_as_int(&self) -> Result<i64> {
        match self {
            Accessed::Found(accessor) => accessor.get_as_int(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_as_bool(&self) -> Result<bool> {
        match self {
            Accessed::Found(accessor) => accessor.get_as_bool(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_as_string(&self) -> Result<String> {
        match self {
            Accessed::Found(accessor) => accessor.get_as_string(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_as_list_of_int(&self) -> Result<Vec<i64>> {
        match self {
            Accessed::Found(accessor) => accessor.get_as_list_of_int(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_as_list_of_string(&self) -> Result<Vec<String>> {
        match self {
            Accessed::Found(accessor) => accessor.get_as_list_of_string(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn get_mixed(&self) -> Result<&'a Value> {
        match self {
            Accessed::Found(accessor) => accessor.get_mixed(),
            Accessed::Missing(missing) => Err(missing.missing()),
        }
    }

    pub fn find_int(&self) -> Option<i64> {
        self.as_found().and_then(Accessor::find_int)
    }

    pub fn find_bool(&self) -> Option<bool> {
        self.as_found().and_then(Accessor::find_bool)
    }

    pub fn find_string(&self) -> Option<&'a str> {
        self.as_found().and_then(Accessor::find_string)
    }

    pub fn find_list_of_int(&self) -> Option<Vec<i64>> {
        self.as_found().and_then(Accessor::find_list_of_int)
    }

    pub fn find_list_of_string(&self) -> Option<Vec<&'a str>> {
        self.as_found().and_then(Accessor::find_list_of_string)
    }

    pub fn find_as_int(&self) -> Option<i64> {
        self.as_found().and_then(Accessor::find_as_int)
    }

    pub fn find_as_bool(&self) -> Option<bool> {
        self.as_found().and_then(Accessor::find_as_bool)
    }

    pub fn find_as_string(&self) -> Option<String> {
        self.as_found().and_then(Accessor::find_as_string)
    }

    pub fn find_as_list_of_int(&self) -> Option<Vec<i64>> {
        self.as_found().and_then(Accessor::find_as_list_of_int)
    }

    pub fn find_as_list_of_string(&self) -> Option<Vec<String>> {
        self.as_found().and_then(Accessor::find_as_list_of_string)
    }

    pub fn find_mixed(&self) -> Option<&'a Value> {
        self.as_found().and_then(Accessor::find_mixed)
    }

    /// Descend one step from either variant. Missing stays missing, with the
    /// key appended either way.
    pub fn index(&self, key: impl Into<Key>) -> Accessed<'a> {
        match self {
            Accessed::Found(accessor) => accessor.index(key),
            Accessed::Missing(missing) => Accessed::Missing(missing.index(key)),
        }
    }

    /// Descend with a dynamic key; see [`Accessor::index_value`].
    pub fn index_value(&self, key: &Value) -> Result<Accessed<'a>> {
        match self {
            Accessed::Found(accessor) => accessor.index_value(key),
            Accessed::Missing(missing) => missing.index_value(key).map(Accessed::Missing),
        }
    }

    pub fn contains(&self, key: impl Into<Key>) -> bool {
        match self {
            Accessed::Found(accessor) => accessor.contains(key),
            Accessed::Missing(_) => false,
        }
    }

    /// Compatibility shim; always fails with [`AccessError::CannotModify`].
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        match self {
            Accessed::Found(accessor) => accessor.set(key, value),
            Accessed::Missing(missing) => missing.set(key, value),
        }
    }

    /// Compatibility shim; always fails with [`AccessError::CannotModify`].
    pub fn remove(&self, key: impl Into<Key>) -> Result<()> {
        match self {
            Accessed::Found(accessor) => accessor.remove(key),
            Accessed::Missing(missing) => missing.remove(key),
        }
    }

    fn as_found(&self) -> Option<&Accessor<'a>> {
        match self {
            Accessed::Found(accessor) => Some(accessor),
            Accessed::Missing(_) => None,
        }
    }
}

impl<'a> From<Accessor<'a>> for Accessed<'a> {
    fn from(accessor: Accessor<'a>) -> Self {
        Accessed::Found(accessor)
    }
}

impl From<MissingAccessor> for Accessed<'_> {
    fn from(missing: MissingAccessor) -> Self {
        Accessed::Missing(missing)
    }
}
