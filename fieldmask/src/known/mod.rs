//! Well-known message types with hand-written descriptor tables.
//!
//! These mirror the `google.protobuf` catalogue a schema generator would
//! target: each type is a plain struct, a [`Maskable`] implementation backed
//! by a `LazyLock` table, and a `*_fields` module of [`FieldRef`] constants.
//! They double as the reference for what generated registration code looks
//! like — in particular how a singular message field imports its nested
//! type's table to make deep paths such as `source_context.file_name`
//! first-class.
//!
//! Maps are not represented: the value model has no map variant, so
//! `google.protobuf.Struct` is absent and `Value` carries only its scalar
//! and list arms.
//!
//! [`Maskable`]: crate::Maskable
//! [`FieldRef`]: crate::FieldRef

mod api;
mod mask;
mod type_;
mod value;
mod wrappers;

pub use api::{Api, Method, Mixin, api_fields, method_fields, mixin_fields};
pub use mask::field_mask_fields;
pub use type_::{
    Any, Field, OptionProto, SourceContext, Syntax, Type, any_fields, field_fields,
    option_fields, source_context_fields, type_fields,
};
pub use value::{ListValue, Value, list_value_fields, value_fields};
pub use wrappers::{
    BoolValue, BytesValue, DoubleValue, Duration, Empty, FloatValue, Int32Value, Int64Value,
    StringValue, Timestamp, UInt32Value, UInt64Value, bool_value_fields, bytes_value_fields,
    double_value_fields, duration_fields, float_value_fields, int32_value_fields,
    int64_value_fields, string_value_fields, timestamp_fields, uint32_value_fields,
    uint64_value_fields,
};
