//! Field-path merge engine
//!
//! Applies one scalar edit to one leaf of a [`UserData`] and returns the
//! updated record. The input is never mutated; callers replace their draft
//! with the result. Every leaf other than the addressed one is carried over
//! unchanged, so editing `address.city` keeps `address.geo` intact.

use crate::domain::result::Result;
use crate::domain::{FieldPath, UserData};

/// Return a copy of `draft` with the leaf at `path` set to `value`
///
/// Any string is accepted, including the empty string.
pub fn apply_edit(draft: &UserData, path: FieldPath, value: impl Into<String>) -> UserData {
    let mut next = draft.clone();
    *path.slot(&mut next) = value.into();
    next
}

/// Same as [`apply_edit`] for a dotted path string
///
/// Fails with `Error::UnknownFieldPath` if `path` does not name a leaf.
pub fn apply_edit_str(draft: &UserData, path: &str, value: impl Into<String>) -> Result<UserData> {
    let path: FieldPath = path.parse()?;
    Ok(apply_edit(draft, path, value))
}
