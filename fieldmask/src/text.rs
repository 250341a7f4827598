//! Case conversion for the wire text form.
//!
//! Registered paths use `snake_case` segments; the transport form uses
//! `camelCase`, matching the protobuf JSON encoding. Both directions are
//! strict: input already in the wrong convention for its direction is an
//! error rather than a best-effort fixup.

use crate::error::MaskError;

/// Converts one `snake_case` path to `camelCase`.
///
/// Uppercase ASCII anywhere in the input is rejected, as is an underscore
/// followed by anything but a lowercase ASCII letter, or a trailing
/// underscore.
pub(crate) fn snake_to_camel(path: &str) -> Result<String, MaskError> {
    let mut result = String::with_capacity(path.len());
    let mut after_underscore = false;
    for ch in path.chars() {
        if ch.is_ascii_uppercase() {
            return Err(MaskError::SnakeCaseContainsUppercase { path: path.to_owned() });
        }
        if after_underscore {
            if ch.is_ascii_lowercase() {
                result.push(ch.to_ascii_uppercase());
                after_underscore = false;
            } else {
                return Err(MaskError::CharAfterUnderscoreMustBeLowercase {
                    path: path.to_owned(),
                });
            }
        } else if ch == '_' {
            after_underscore = true;
        } else {
            result.push(ch);
        }
    }
    if after_underscore {
        return Err(MaskError::TrailingUnderscore { path: path.to_owned() });
    }
    Ok(result)
}

/// Converts one `camelCase` path back to `snake_case`.
///
/// An underscore in the input is rejected; each uppercase ASCII letter
/// becomes an underscore plus its lowercase form.
pub(crate) fn camel_to_snake(path: &str) -> Result<String, MaskError> {
    let mut result = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '_' {
            return Err(MaskError::CamelCaseContainsUnderscore { path: path.to_owned() });
        }
        if ch.is_ascii_uppercase() {
            result.push('_');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }
    Ok(result)
}
