/// Errors that can occur when constructing or applying field masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A typed field reference did not resolve against its type's registry.
    FieldNotFound {
        /// The path recorded on the reference.
        path: String,
    },

    /// A path string is not registered on the message type it was used with.
    PathNotFound {
        /// The path that failed to resolve.
        path: String,
    },

    /// The runtime value behind an accessor did not match the type the field
    /// was registered with.
    TypeMismatch {
        /// The path of the field being read or written.
        path: String,
        /// The name of the value kind the accessor expected.
        expected: &'static str,
    },

    /// A field registered as a message did not hold a message value.
    MessageExpected {
        /// The path of the offending field.
        path: String,
    },

    /// A field registered as repeated did not hold a sequence value.
    RepeatedExpected {
        /// The path of the offending field.
        path: String,
    },

    /// Merge was attempted between two messages of different registered types.
    MergeTypeMismatch {
        /// The message name of the destination.
        expected: &'static str,
        /// The message name of the source.
        actual: &'static str,
    },

    /// A snake_case path contained an uppercase ASCII character.
    SnakeCaseContainsUppercase {
        /// The offending path.
        path: String,
    },

    /// An underscore in a snake_case path was not followed by a lowercase
    /// ASCII letter.
    CharAfterUnderscoreMustBeLowercase {
        /// The offending path.
        path: String,
    },

    /// A snake_case path ended with an underscore.
    TrailingUnderscore {
        /// The offending path.
        path: String,
    },

    /// A camelCase path contained an underscore.
    CamelCaseContainsUnderscore {
        /// The offending path.
        path: String,
    },
}

impl core::fmt::Display for MaskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MaskError::FieldNotFound { path } => {
                write!(f, "Field reference {path:?} not found in registry")
            }
            MaskError::PathNotFound { path } => {
                write!(f, "Path {path:?} not found in registry")
            }
            MaskError::TypeMismatch { path, expected } => {
                write!(f, "Field {path:?} did not hold the expected {expected} value")
            }
            MaskError::MessageExpected { path } => {
                write!(f, "Field {path:?} is registered as a message but held no message value")
            }
            MaskError::RepeatedExpected { path } => {
                write!(f, "Field {path:?} is registered as repeated but held no sequence value")
            }
            MaskError::MergeTypeMismatch { expected, actual } => {
                write!(f, "Cannot merge a {actual} into a {expected}")
            }
            MaskError::SnakeCaseContainsUppercase { path } => {
                write!(f, "snake_case path {path:?} contains an uppercase character")
            }
            MaskError::CharAfterUnderscoreMustBeLowercase { path } => {
                write!(
                    f,
                    "Underscore in path {path:?} is not followed by a lowercase letter"
                )
            }
            MaskError::TrailingUnderscore { path } => {
                write!(f, "Path {path:?} ends with an underscore")
            }
            MaskError::CamelCaseContainsUnderscore { path } => {
                write!(f, "camelCase path {path:?} contains an underscore")
            }
        }
    }
}

impl core::error::Error for MaskError {}
