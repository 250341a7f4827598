//! Wrapper types and the small leaf messages: `Duration`, `Timestamp`,
//! `Empty`.

use std::sync::LazyLock;

use bytes::Bytes;

use crate::message_field_type;
use crate::{DescriptorBuilder, FieldRef, Maskable, MessageDescriptor};

/// Declares one `google.protobuf.*Value` wrapper: the struct, its
/// single-entry registry and its field-reference module.
macro_rules! scalar_wrapper {
    ($ty:ident, $registry:ident, $fields_mod:ident, $full_name:literal, $value_ty:ty) => {
        #[doc = concat!("`", $full_name, "`: a `", stringify!($value_ty), "` with message presence.")]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $ty {
            /// The wrapped value.
            pub value: $value_ty,
        }

        #[allow(clippy::clone_on_copy)]
        static $registry: LazyLock<MessageDescriptor<$ty>> = LazyLock::new(|| {
            DescriptorBuilder::new()
                .scalar(
                    "value",
                    |m: &$ty| m.value.clone(),
                    |m: &mut $ty, v| m.value = v,
                )
                .build()
        });

        impl Maskable for $ty {
            const FULL_NAME: &'static str = $full_name;

            fn descriptor() -> &'static MessageDescriptor<Self> {
                &$registry
            }
        }

        message_field_type!($ty);

        #[doc = concat!("Typed references to [`", stringify!($ty), "`]'s fields.")]
        pub mod $fields_mod {
            use super::{$ty, FieldRef};

            /// `value`
            pub const VALUE: FieldRef<$ty> = FieldRef::new(0, "value");
        }
    };
}

scalar_wrapper!(DoubleValue, DOUBLE_VALUE, double_value_fields, "google.protobuf.DoubleValue", f64);
scalar_wrapper!(FloatValue, FLOAT_VALUE, float_value_fields, "google.protobuf.FloatValue", f32);
scalar_wrapper!(Int64Value, INT64_VALUE, int64_value_fields, "google.protobuf.Int64Value", i64);
scalar_wrapper!(UInt64Value, UINT64_VALUE, uint64_value_fields, "google.protobuf.UInt64Value", u64);
scalar_wrapper!(Int32Value, INT32_VALUE, int32_value_fields, "google.protobuf.Int32Value", i32);
scalar_wrapper!(UInt32Value, UINT32_VALUE, uint32_value_fields, "google.protobuf.UInt32Value", u32);
scalar_wrapper!(BoolValue, BOOL_VALUE, bool_value_fields, "google.protobuf.BoolValue", bool);
scalar_wrapper!(StringValue, STRING_VALUE, string_value_fields, "google.protobuf.StringValue", String);
scalar_wrapper!(BytesValue, BYTES_VALUE, bytes_value_fields, "google.protobuf.BytesValue", Bytes);

/// `google.protobuf.Duration`: a signed span of time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Duration {
    /// Signed seconds of the span.
    pub seconds: i64,
    /// Signed fractions of a second at nanosecond resolution.
    pub nanos: i32,
}

static DURATION: LazyLock<MessageDescriptor<Duration>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "seconds",
            |m: &Duration| m.seconds,
            |m: &mut Duration, v| m.seconds = v,
        )
        .scalar("nanos", |m: &Duration| m.nanos, |m: &mut Duration, v| m.nanos = v)
        .build()
});

impl Maskable for Duration {
    const FULL_NAME: &'static str = "google.protobuf.Duration";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &DURATION
    }
}

message_field_type!(Duration);

/// Typed references to [`Duration`]'s fields.
pub mod duration_fields {
    use super::{Duration, FieldRef};

    /// `seconds`
    pub const SECONDS: FieldRef<Duration> = FieldRef::new(0, "seconds");
    /// `nanos`
    pub const NANOS: FieldRef<Duration> = FieldRef::new(1, "nanos");
}

/// `google.protobuf.Timestamp`: a point in time, as seconds and nanoseconds
/// since the Unix epoch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timestamp {
    /// Seconds since the epoch.
    pub seconds: i64,
    /// Non-negative fractions of a second at nanosecond resolution.
    pub nanos: i32,
}

static TIMESTAMP: LazyLock<MessageDescriptor<Timestamp>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "seconds",
            |m: &Timestamp| m.seconds,
            |m: &mut Timestamp, v| m.seconds = v,
        )
        .scalar(
            "nanos",
            |m: &Timestamp| m.nanos,
            |m: &mut Timestamp, v| m.nanos = v,
        )
        .build()
});

impl Maskable for Timestamp {
    const FULL_NAME: &'static str = "google.protobuf.Timestamp";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &TIMESTAMP
    }
}

message_field_type!(Timestamp);

/// Typed references to [`Timestamp`]'s fields.
pub mod timestamp_fields {
    use super::{FieldRef, Timestamp};

    /// `seconds`
    pub const SECONDS: FieldRef<Timestamp> = FieldRef::new(0, "seconds");
    /// `nanos`
    pub const NANOS: FieldRef<Timestamp> = FieldRef::new(1, "nanos");
}

/// `google.protobuf.Empty`: a message with no fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Empty {}

static EMPTY: LazyLock<MessageDescriptor<Empty>> =
    LazyLock::new(|| DescriptorBuilder::new().build());

impl Maskable for Empty {
    const FULL_NAME: &'static str = "google.protobuf.Empty";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &EMPTY
    }
}

message_field_type!(Empty);
