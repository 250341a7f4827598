//! `google.protobuf.Value` and `google.protobuf.ListValue`.

use std::sync::LazyLock;

use crate::message_field_type;
use crate::{DescriptorBuilder, FieldRef, Maskable, MessageDescriptor};

/// `google.protobuf.Value`: a dynamically typed JSON-like value.
///
/// The proto `kind` oneof is flattened into sibling fields, one per arm, so
/// each arm is independently addressable by a mask path. The `struct_value`
/// arm is absent because the value model has no map representation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Value {
    /// The null arm, as the `google.protobuf.NullValue` wire value (always
    /// `0`).
    pub null_value: i32,
    /// The number arm.
    pub number_value: f64,
    /// The string arm.
    pub string_value: String,
    /// The boolean arm.
    pub bool_value: bool,
    /// The list arm.
    pub list_value: ListValue,
}

/// `google.protobuf.ListValue`: a repeated [`Value`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListValue {
    /// The values in the list.
    pub values: Vec<Value>,
}

static VALUE: LazyLock<MessageDescriptor<Value>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "null_value",
            |m: &Value| m.null_value,
            |m: &mut Value, v| m.null_value = v,
        )
        .scalar(
            "number_value",
            |m: &Value| m.number_value,
            |m: &mut Value, v| m.number_value = v,
        )
        .scalar(
            "string_value",
            |m: &Value| m.string_value.clone(),
            |m: &mut Value, v| m.string_value = v,
        )
        .scalar(
            "bool_value",
            |m: &Value| m.bool_value,
            |m: &mut Value, v| m.bool_value = v,
        )
        .message(
            "list_value",
            |m: &Value| m.list_value.clone(),
            |m: &mut Value, v| m.list_value = v,
        )
        .import_nested(
            "list_value",
            |m: &Value| &m.list_value,
            |m: &mut Value| &mut m.list_value,
        )
        .build()
});

impl Maskable for Value {
    const FULL_NAME: &'static str = "google.protobuf.Value";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &VALUE
    }
}

message_field_type!(Value);

/// Typed references to [`Value`]'s fields, deep imports included.
pub mod value_fields {
    use super::{FieldRef, Value};

    /// `null_value`
    pub const NULL_VALUE: FieldRef<Value> = FieldRef::new(0, "null_value");
    /// `number_value`
    pub const NUMBER_VALUE: FieldRef<Value> = FieldRef::new(1, "number_value");
    /// `string_value`
    pub const STRING_VALUE: FieldRef<Value> = FieldRef::new(2, "string_value");
    /// `bool_value`
    pub const BOOL_VALUE: FieldRef<Value> = FieldRef::new(3, "bool_value");
    /// `list_value`
    pub const LIST_VALUE: FieldRef<Value> = FieldRef::new(4, "list_value");
    /// `list_value.values`
    pub const LIST_VALUE_VALUES: FieldRef<Value> = FieldRef::new(5, "list_value.values");
}

static LIST_VALUE: LazyLock<MessageDescriptor<ListValue>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .repeated_message(
            "values",
            |m: &ListValue| m.values.clone(),
            |m: &mut ListValue, v| m.values = v,
        )
        .build()
});

impl Maskable for ListValue {
    const FULL_NAME: &'static str = "google.protobuf.ListValue";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &LIST_VALUE
    }
}

message_field_type!(ListValue);

/// Typed references to [`ListValue`]'s fields.
pub mod list_value_fields {
    use super::{FieldRef, ListValue};

    /// `values`
    pub const VALUES: FieldRef<ListValue> = FieldRef::new(0, "values");
}
