//! Field name translation between the model and the daemon's grammar.
//!
//! The model names fields with underscores (`valid_lifetime`); the daemon's
//! configuration file uses hyphens (`valid-lifetime`). The only exception is
//! `output_options`, which the daemon spells with an underscore.
//!
//! # Examples
//!
//! ```
//! use kea_render::kea::alias::{to_external, to_internal};
//!
//! assert_eq!(to_external("lfc_interval"), "lfc-interval");
//! assert_eq!(to_internal("lfc-interval"), "lfc_interval");
//! assert_eq!(to_external("output_options"), "output_options");
//! ```

use std::borrow::Cow;

/// Field names emitted exactly as written.
const VERBATIM: &[&str] = &["output_options"];

/// Translates a model field name to its hyphenated configuration key.
#[must_use]
pub fn to_external(field: &str) -> Cow<'_, str> {
    if VERBATIM.contains(&field) || !field.contains('_') {
        Cow::Borrowed(field)
    } else {
        Cow::Owned(field.replace('_', "-"))
    }
}

/// Translates a configuration key back to the model field name.
#[must_use]
pub fn to_internal(key: &str) -> Cow<'_, str> {
    if VERBATIM.contains(&key) || !key.contains('-') {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(key.replace('-', "_"))
    }
}
