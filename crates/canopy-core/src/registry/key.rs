//! Composite key labels.
//!
//! The registry keys on structural tuples, never on these strings. Labels are
//! for logs and display, so encoding refuses any field that would make the
//! label ambiguous.

use crate::error::{CanopyError, CanopyResult};

/// Join key fields into a label, e.g. `"Oak-Green-Rough"`.
///
/// Fails with `MalformedKey` if any field contains `separator`.
pub fn encode(fields: &[&str], separator: char) -> CanopyResult<String> {
    if let Some(bad) = fields.iter().find(|f| f.contains(separator)) {
        return Err(CanopyError::malformed_key(*bad, separator));
    }

    let mut label = String::with_capacity(fields.iter().map(|f| f.len() + 1).sum());
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            label.push(separator);
        }
        label.push_str(field);
    }
    Ok(label)
}

/// Split a label produced by [`encode`] back into `arity` fields.
pub fn decode(label: &str, separator: char, arity: usize) -> CanopyResult<Vec<String>> {
    // `split` yields one empty field for "", which is the encoding of zero fields.
    if arity == 0 && label.is_empty() {
        return Ok(Vec::new());
    }

    let fields: Vec<String> = label.split(separator).map(str::to_string).collect();
    if fields.len() != arity {
        return Err(CanopyError::key_arity(label, separator));
    }
    Ok(fields)
}
