use core::fmt;

use bytes::Bytes;

use crate::message::Message;

/// A field value erased to a closed set of kinds.
///
/// Accessors move `FieldValue`s between messages: a getter erases a typed
/// field into one of these variants, a setter recovers the typed value through
/// [`FieldType::from_value`]. The set is closed on purpose — merge and trim
/// only ever see these shapes, so the registry's static knowledge of a field
/// (scalar, message, repeated) is enough to dispatch without open-ended
/// dynamic casts.
#[derive(Debug)]
pub enum FieldValue {
    /// A `bool` value.
    Bool(bool),
    /// An `i32` value. Enum fields are carried as their wire representation.
    I32(i32),
    /// An `i64` value.
    I64(i64),
    /// A `u32` value.
    U32(u32),
    /// A `u64` value.
    U64(u64),
    /// An `f32` value.
    F32(f32),
    /// An `f64` value.
    F64(f64),
    /// A string value.
    String(String),
    /// A bytes value.
    Bytes(Bytes),
    /// A nested message value.
    Message(Box<dyn Message>),
    /// A repeated field's elements, one entry per element.
    Repeated(Vec<FieldValue>),
    /// An optional field, `None` when unset.
    Optional(Option<Box<FieldValue>>),
}

impl Clone for FieldValue {
    fn clone(&self) -> Self {
        match self {
            FieldValue::Bool(v) => FieldValue::Bool(*v),
            FieldValue::I32(v) => FieldValue::I32(*v),
            FieldValue::I64(v) => FieldValue::I64(*v),
            FieldValue::U32(v) => FieldValue::U32(*v),
            FieldValue::U64(v) => FieldValue::U64(*v),
            FieldValue::F32(v) => FieldValue::F32(*v),
            FieldValue::F64(v) => FieldValue::F64(*v),
            FieldValue::String(v) => FieldValue::String(v.clone()),
            FieldValue::Bytes(v) => FieldValue::Bytes(v.clone()),
            FieldValue::Message(v) => FieldValue::Message(v.boxed_clone()),
            FieldValue::Repeated(v) => FieldValue::Repeated(v.clone()),
            FieldValue::Optional(v) => FieldValue::Optional(v.clone()),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::I32(a), FieldValue::I32(b)) => a == b,
            (FieldValue::I64(a), FieldValue::I64(b)) => a == b,
            (FieldValue::U32(a), FieldValue::U32(b)) => a == b,
            (FieldValue::U64(a), FieldValue::U64(b)) => a == b,
            (FieldValue::F32(a), FieldValue::F32(b)) => a == b,
            (FieldValue::F64(a), FieldValue::F64(b)) => a == b,
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Bytes(a), FieldValue::Bytes(b)) => a == b,
            (FieldValue::Message(a), FieldValue::Message(b)) => a.message_eq(b.as_ref()),
            (FieldValue::Repeated(a), FieldValue::Repeated(b)) => a == b,
            (FieldValue::Optional(a), FieldValue::Optional(b)) => a == b,
            _ => false,
        }
    }
}

impl FieldValue {
    /// Short name of this value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::I32(_) => "int32",
            FieldValue::I64(_) => "int64",
            FieldValue::U32(_) => "uint32",
            FieldValue::U64(_) => "uint64",
            FieldValue::F32(_) => "float",
            FieldValue::F64(_) => "double",
            FieldValue::String(_) => "string",
            FieldValue::Bytes(_) => "bytes",
            FieldValue::Message(_) => "message",
            FieldValue::Repeated(_) => "repeated",
            FieldValue::Optional(_) => "optional",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::I32(v) => write!(f, "{v}"),
            FieldValue::I64(v) => write!(f, "{v}"),
            FieldValue::U32(v) => write!(f, "{v}"),
            FieldValue::U64(v) => write!(f, "{v}"),
            FieldValue::F32(v) => write!(f, "{v}"),
            FieldValue::F64(v) => write!(f, "{v}"),
            FieldValue::String(v) => write!(f, "{v:?}"),
            FieldValue::Bytes(v) => write!(f, "{} bytes", v.len()),
            FieldValue::Message(v) => write!(f, "{}", v.message_name()),
            FieldValue::Repeated(v) => write!(f, "[{} elements]", v.len()),
            FieldValue::Optional(None) => write!(f, "unset"),
            FieldValue::Optional(Some(v)) => write!(f, "{v}"),
        }
    }
}

/// Capability implemented by every type usable as a message field value.
///
/// Provides the zero value written by trim, and the conversions between the
/// typed field and its erased [`FieldValue`] form used by accessors. Scalars,
/// `String`, [`Bytes`], `Vec<V>` and `Option<V>` are covered here; message
/// types get their implementation from [`message_field_type!`].
///
/// [`message_field_type!`]: crate::message_field_type
pub trait FieldType: Sized + 'static {
    /// Name of the value kind this type expects, used in type errors.
    const EXPECTED: &'static str;

    /// The zero/default value trim writes into cleared fields.
    fn zero() -> Self;

    /// Erase this value into its [`FieldValue`] form.
    fn into_value(self) -> FieldValue;

    /// Recover a typed value, `None` when the variant does not match.
    fn from_value(value: FieldValue) -> Option<Self>;
}

macro_rules! scalar_field_type {
    ($ty:ty, $variant:ident, $expected:literal) => {
        impl FieldType for $ty {
            const EXPECTED: &'static str = $expected;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn into_value(self) -> FieldValue {
                FieldValue::$variant(self)
            }

            fn from_value(value: FieldValue) -> Option<Self> {
                match value {
                    FieldValue::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

scalar_field_type!(bool, Bool, "bool");
scalar_field_type!(i32, I32, "int32");
scalar_field_type!(i64, I64, "int64");
scalar_field_type!(u32, U32, "uint32");
scalar_field_type!(u64, U64, "uint64");
scalar_field_type!(f32, F32, "float");
scalar_field_type!(f64, F64, "double");
scalar_field_type!(String, String, "string");
scalar_field_type!(Bytes, Bytes, "bytes");

impl<V: FieldType> FieldType for Vec<V> {
    const EXPECTED: &'static str = "repeated";

    fn zero() -> Self {
        Vec::new()
    }

    fn into_value(self) -> FieldValue {
        FieldValue::Repeated(self.into_iter().map(V::into_value).collect())
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Repeated(items) => {
                items.into_iter().map(V::from_value).collect::<Option<Vec<V>>>()
            }
            _ => None,
        }
    }
}

impl<V: FieldType> FieldType for Option<V> {
    const EXPECTED: &'static str = "optional";

    fn zero() -> Self {
        None
    }

    fn into_value(self) -> FieldValue {
        FieldValue::Optional(self.map(|v| Box::new(v.into_value())))
    }

    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Optional(None) => Some(None),
            FieldValue::Optional(Some(inner)) => V::from_value(*inner).map(Some),
            _ => None,
        }
    }
}

/// Implements [`FieldType`] for a [`Maskable`] message type, letting it be
/// stored in message-typed fields of other registered types.
///
/// The type must also be `Default`, `Clone`, `PartialEq`, `Debug` and `Send`
/// so it satisfies the [`Message`] object bound.
///
/// ```
/// use fieldmask::{DescriptorBuilder, Maskable, MessageDescriptor, message_field_type};
/// use std::sync::LazyLock;
///
/// #[derive(Clone, Debug, Default, PartialEq)]
/// struct Inner {
///     label: String,
/// }
///
/// static INNER: LazyLock<MessageDescriptor<Inner>> = LazyLock::new(|| {
///     DescriptorBuilder::new()
///         .scalar("label", |m: &Inner| m.label.clone(), |m, v| m.label = v)
///         .build()
/// });
///
/// impl Maskable for Inner {
///     const FULL_NAME: &'static str = "example.Inner";
///
///     fn descriptor() -> &'static MessageDescriptor<Self> {
///         &INNER
///     }
/// }
///
/// message_field_type!(Inner);
/// ```
///
/// [`Maskable`]: crate::Maskable
/// [`Message`]: crate::Message
#[macro_export]
macro_rules! message_field_type {
    ($ty:ty) => {
        impl $crate::FieldType for $ty {
            const EXPECTED: &'static str = <$ty as $crate::Maskable>::FULL_NAME;

            fn zero() -> Self {
                <$ty as ::core::default::Default>::default()
            }

            fn into_value(self) -> $crate::FieldValue {
                $crate::FieldValue::Message(::std::boxed::Box::new(self))
            }

            fn from_value(value: $crate::FieldValue) -> ::core::option::Option<Self> {
                match value {
                    $crate::FieldValue::Message(message) => {
                        $crate::Message::into_any(message)
                            .downcast::<$ty>()
                            .ok()
                            .map(|boxed| *boxed)
                    }
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}
