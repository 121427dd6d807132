//! Collision-free labels

use std::collections::HashSet;

/// Pick a name that does not collide with `existing`
///
/// Returns `base` if it is free, otherwise `"{base} ({n})"` for the smallest
/// `n >= 1` that is free.
///
/// ```
/// use modelshift_util::allocate_name;
///
/// assert_eq!(allocate_name("grid", &["other"]), "grid");
/// assert_eq!(allocate_name("grid", &["grid", "grid (1)"]), "grid (2)");
/// ```
pub fn allocate_name<S: AsRef<str>>(base: &str, existing: &[S]) -> String {
    let taken: HashSet<&str> = existing.iter().map(|s| s.as_ref()).collect();
    if !taken.contains(base) {
        return base.to_string();
    }
    (1u64..)
        .map(|n| format!("{} ({})", base, n))
        .find(|candidate| !taken.contains(candidate.as_str()))
        .unwrap_or_else(|| base.to_string())
}
