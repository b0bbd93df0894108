//! Ordered-choice parsing combinators.
//!
//! A [`Schema<T>`] looks at the input from a byte offset and either produces
//! a value together with the offset just past what it consumed, or fails.
//! Offsets are plain values, so a failing schema leaves nothing behind and the
//! caller simply retries the next alternative from the offset it already
//! holds. [`choice`] returns the first alternative that matches, in the order
//! given (PEG semantics): neither the longest nor the shortest match wins.
//!
//! Rules that take part in a cycle are declared up front as [`Deferred`]
//! placeholders, used while building the concrete rules, then bound once the
//! concrete rules exist.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

/// The value produced by a schema and the offset just past it.
pub type Parsed<T> = Option<(T, usize)>;

trait Rule<T>: Send + Sync {
    fn apply(&self, input: &str, offset: usize) -> Parsed<T>;
}

impl<T, F> Rule<T> for F
where
    F: Fn(&str, usize) -> Parsed<T> + Send + Sync,
{
    fn apply(&self, input: &str, offset: usize) -> Parsed<T> {
        self(input, offset)
    }
}

/// A grammar rule producing values of type `T`.
///
/// Cloning a schema is cheap and shares the underlying rule.
pub struct Schema<T> {
    rule: Arc<dyn Rule<T>>,
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Schema<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> Schema<T> {
    /// Wrap a function reading `input` from `offset`. The function must not
    /// report success with an offset before the one it was given.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&str, usize) -> Parsed<T> + Send + Sync + 'static,
    {
        Self { rule: Arc::new(f) }
    }

    /// A schema that consumes nothing and always produces `value`.
    pub fn succeed(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Schema::from_fn(move |_, offset| Some((value.clone(), offset)))
    }

    pub fn parse_at(&self, input: &str, offset: usize) -> Parsed<T> {
        self.rule.apply(input, offset)
    }

    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Schema<U> {
        Schema::from_fn(move |input, offset| {
            self.parse_at(input, offset)
                .map(|(value, end)| (f(value), end))
        })
    }

    /// Like [`Schema::map`], but `None` turns the match into a failure.
    pub fn filter_map<U: 'static>(
        self,
        f: impl Fn(T) -> Option<U> + Send + Sync + 'static,
    ) -> Schema<U> {
        Schema::from_fn(move |input, offset| {
            let (value, end) = self.parse_at(input, offset)?;
            Some((f(value)?, end))
        })
    }

    /// Replace the produced value with a constant.
    pub fn to<U: Clone + Send + Sync + 'static>(self, value: U) -> Schema<U> {
        self.map(move |_| value.clone())
    }

    /// Sequence: both must match, in order.
    pub fn then<U: 'static>(self, next: Schema<U>) -> Schema<(T, U)> {
        Schema::from_fn(move |input, offset| {
            let (first, offset) = self.parse_at(input, offset)?;
            let (second, offset) = next.parse_at(input, offset)?;
            Some(((first, second), offset))
        })
    }

    /// Sequence, keeping only the value of `next`.
    pub fn ignore_then<U: 'static>(self, next: Schema<U>) -> Schema<U> {
        self.then(next).map(|(_, second)| second)
    }

    /// Sequence, keeping only the value of `self`.
    pub fn then_ignore<U: 'static>(self, next: Schema<U>) -> Schema<T> {
        self.then(next).map(|(first, _)| first)
    }

    /// Ordered choice between two alternatives. See [`choice`].
    pub fn or(self, other: Schema<T>) -> Schema<T> {
        choice(vec![self, other])
    }

    /// Always succeeds, consuming nothing when `self` does not match.
    pub fn optional(self) -> Schema<Option<T>> {
        Schema::from_fn(move |input, offset| match self.parse_at(input, offset) {
            Some((value, end)) => Some((Some(value), end)),
            None => Some((None, offset)),
        })
    }

    /// Zero or more repetitions, as many as match.
    pub fn repeated(self) -> Schema<Vec<T>> {
        Schema::from_fn(move |input, mut offset| {
            let mut values = Vec::new();
            while let Some((value, end)) = self.parse_at(input, offset) {
                values.push(value);
                // An empty match would repeat forever.
                if end == offset {
                    break;
                }
                offset = end;
            }
            Some((values, offset))
        })
    }

    /// One or more items with `separator` between them. A trailing separator
    /// is not consumed.
    pub fn separated_by<S: 'static>(self, separator: Schema<S>) -> Schema<Vec<T>> {
        let rest = separator.ignore_then(self.clone()).repeated();
        self.then(rest).map(|(first, rest)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            items
        })
    }

    /// One precedence level: `self (operator self)*`, folded from the left.
    pub fn fold_left<O: 'static>(
        self,
        operator: Schema<O>,
        fold: impl Fn(T, O, T) -> T + Send + Sync + 'static,
    ) -> Schema<T> {
        let tail = operator.then(self.clone()).repeated();
        self.then(tail).map(move |(first, tail)| {
            tail.into_iter()
                .fold(first, |left, (operator, right)| fold(left, operator, right))
        })
    }
}

/// Try each alternative in order and return the first match.
pub fn choice<T: 'static>(alternatives: Vec<Schema<T>>) -> Schema<T> {
    Schema::from_fn(move |input, offset| {
        alternatives
            .iter()
            .find_map(|alternative| alternative.parse_at(input, offset))
    })
}

/// A forward-declared rule.
///
/// [`Deferred::schema`] can be used as often as needed before the real rule
/// exists; [`Deferred::bind`] then attaches the real rule, exactly once. The
/// placeholder keeps only a weak reference to what it is bound to, so the
/// owner of the grammar must keep the bound schema alive. Parsing through an
/// unbound placeholder is a bug in grammar construction and panics.
pub struct Deferred<T> {
    name: &'static str,
    slot: Arc<OnceLock<Weak<dyn Rule<T>>>>,
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("name", &self.name)
            .field("bound", &self.slot.get().is_some())
            .finish()
    }
}

impl<T: 'static> Deferred<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// A schema that forwards to whatever this placeholder gets bound to.
    pub fn schema(&self) -> Schema<T> {
        let name = self.name;
        let slot = Arc::clone(&self.slot);
        Schema::from_fn(move |input, offset| {
            let rule = slot
                .get()
                .unwrap_or_else(|| panic!("deferred rule `{name}` used before being bound"))
                .upgrade()
                .unwrap_or_else(|| panic!("deferred rule `{name}` outlived the rule it was bound to"));
            rule.apply(input, offset)
        })
    }

    /// Attach the real rule. Panics if already bound.
    pub fn bind(&self, schema: &Schema<T>) {
        if self.slot.set(Arc::downgrade(&schema.rule)).is_err() {
            panic!("deferred rule `{}` bound twice", self.name);
        }
    }
}

/// Type-erased view of a [`Deferred`], to check a whole set of placeholders.
pub trait Binding {
    fn name(&self) -> &'static str;
    fn is_bound(&self) -> bool;
}

impl<T> Binding for Deferred<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// Panic naming every placeholder that was left unbound.
pub fn ensure_bound(rules: &[&dyn Binding]) {
    let unbound: Vec<&str> = rules
        .iter()
        .filter(|rule| !rule.is_bound())
        .map(|rule| rule.name())
        .collect();
    assert!(
        unbound.is_empty(),
        "grammar construction left rules unbound: {}",
        unbound.join(", ")
    );
}
