//! [`Database`] implementations of [`Memory`].
//!
//! [`Database`]: crate::infra::Database
//! [`Memory`]: super::Memory

mod employee;
mod leave;

/// Inserts the `value` into the `values`, replacing the one with the same key
/// in place, if any.
fn upsert<T, K>(values: &mut Vec<T>, value: T, key: impl Fn(&T) -> K)
where
    K: PartialEq,
{
    let k = key(&value);
    match values.iter().position(|v| key(v) == k) {
        Some(i) => values[i] = value,
        None => values.push(value),
    }
}
