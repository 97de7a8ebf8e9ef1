//! The single truthiness predicate used for branch selection.
//!
//! Falsy values:
//!
//! | value                        | truthy |
//! |------------------------------|--------|
//! | key absent (`None`)          | no     |
//! | `null`                       | no     |
//! | `false`                      | no     |
//! | `0`, `0.0`, `-0.0`           | no     |
//! | `""`                         | no     |
//! | `[]`                         | no     |
//! | `{}`                         | no     |
//!
//! Everything else is truthy, including `"0"`, `"false"`, `" "`, any non-zero
//! number, `[null]` and `{"k": null}`. Only the container itself is inspected,
//! never its elements.

use serde_json::Value;

/// Truthiness test over a looked-up state value.
pub trait Truthiness {
    /// Non-empty, non-zero, non-false, non-null.
    fn is_truthy(&self) -> bool;
}

impl Truthiness for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i != 0
                } else if let Some(u) = n.as_u64() {
                    u != 0
                } else {
                    n.as_f64().map_or(true, |f| f != 0.0)
                }
            }
            Value::String(s) => !s.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

/// An absent key is falsy.
impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().map_or(false, Truthiness::is_truthy)
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
