//! `google.protobuf.Type` and the types its fields reach.

use std::sync::LazyLock;

use bytes::Bytes;

use crate::message_field_type;
use crate::{DescriptorBuilder, FieldRef, Maskable, MessageDescriptor};

/// The syntax in which a protocol buffer element is defined, stored on the
/// wire as an `i32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum Syntax {
    /// `syntax = "proto2"`.
    #[default]
    Proto2 = 0,
    /// `syntax = "proto3"`.
    Proto3 = 1,
    /// `edition = ...`.
    Editions = 2,
}

impl Syntax {
    /// The proto enum value name.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Syntax::Proto2 => "SYNTAX_PROTO2",
            Syntax::Proto3 => "SYNTAX_PROTO3",
            Syntax::Editions => "SYNTAX_EDITIONS",
        }
    }

    /// Converts a wire value back to the enum, if it names a variant.
    pub fn from_i32(value: i32) -> Option<Syntax> {
        match value {
            0 => Some(Syntax::Proto2),
            1 => Some(Syntax::Proto3),
            2 => Some(Syntax::Editions),
            _ => None,
        }
    }
}

/// `google.protobuf.SourceContext`: where a protobuf element is defined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceContext {
    /// Path of the `.proto` file that defines the element.
    pub file_name: String,
}

static SOURCE_CONTEXT: LazyLock<MessageDescriptor<SourceContext>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "file_name",
            |m: &SourceContext| m.file_name.clone(),
            |m: &mut SourceContext, v| m.file_name = v,
        )
        .build()
});

impl Maskable for SourceContext {
    const FULL_NAME: &'static str = "google.protobuf.SourceContext";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &SOURCE_CONTEXT
    }
}

message_field_type!(SourceContext);

/// Typed references to [`SourceContext`]'s fields.
pub mod source_context_fields {
    use super::{FieldRef, SourceContext};

    /// `file_name`
    pub const FILE_NAME: FieldRef<SourceContext> = FieldRef::new(0, "file_name");
}

/// `google.protobuf.Any`: a serialized message plus a URL describing its
/// type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Any {
    /// URL uniquely identifying the serialized type.
    pub type_url: String,
    /// Valid serialized protocol buffer of the named type.
    pub value: Bytes,
}

static ANY: LazyLock<MessageDescriptor<Any>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "type_url",
            |m: &Any| m.type_url.clone(),
            |m: &mut Any, v| m.type_url = v,
        )
        .scalar("value", |m: &Any| m.value.clone(), |m: &mut Any, v| m.value = v)
        .build()
});

impl Maskable for Any {
    const FULL_NAME: &'static str = "google.protobuf.Any";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &ANY
    }
}

message_field_type!(Any);

/// Typed references to [`Any`]'s fields.
pub mod any_fields {
    use super::{Any, FieldRef};

    /// `type_url`
    pub const TYPE_URL: FieldRef<Any> = FieldRef::new(0, "type_url");
    /// `value`
    pub const VALUE: FieldRef<Any> = FieldRef::new(1, "value");
}

/// `google.protobuf.Option`: a named protocol buffer option attached to a
/// type, field, method or API.
///
/// Named `OptionProto` to stay clear of [`core::option::Option`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionProto {
    /// The option's name, e.g. `"map_entry"`.
    pub name: String,
    /// The option's value, packed in an [`Any`].
    pub value: Any,
}

static OPTION: LazyLock<MessageDescriptor<OptionProto>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar(
            "name",
            |m: &OptionProto| m.name.clone(),
            |m: &mut OptionProto, v| m.name = v,
        )
        .message(
            "value",
            |m: &OptionProto| m.value.clone(),
            |m: &mut OptionProto, v| m.value = v,
        )
        .build()
});

impl Maskable for OptionProto {
    const FULL_NAME: &'static str = "google.protobuf.Option";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &OPTION
    }
}

message_field_type!(OptionProto);

/// Typed references to [`OptionProto`]'s fields.
pub mod option_fields {
    use super::{FieldRef, OptionProto};

    /// `name`
    pub const NAME: FieldRef<OptionProto> = FieldRef::new(0, "name");
    /// `value`
    pub const VALUE: FieldRef<OptionProto> = FieldRef::new(1, "value");
}

/// `google.protobuf.Field`: a single field of a message type.
///
/// The `kind` and `cardinality` enums are stored as their `i32` wire values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Field {
    /// The field type, as a `google.protobuf.Field.Kind` wire value.
    pub kind: i32,
    /// The field cardinality, as a `google.protobuf.Field.Cardinality` wire
    /// value.
    pub cardinality: i32,
    /// The field number.
    pub number: i32,
    /// The field name.
    pub name: String,
    /// Type URL of the field's message or enum type, without a scheme.
    pub type_url: String,
    /// Index of the containing oneof in the enclosing type's `oneofs` list.
    pub oneof_index: i32,
    /// Whether to use alternative packed wire representation.
    pub packed: bool,
    /// The protocol buffer options.
    pub options: Vec<OptionProto>,
    /// The field JSON name.
    pub json_name: String,
    /// String value of the default, proto2 only.
    pub default_value: String,
}

static FIELD: LazyLock<MessageDescriptor<Field>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("kind", |m: &Field| m.kind, |m: &mut Field, v| m.kind = v)
        .scalar(
            "cardinality",
            |m: &Field| m.cardinality,
            |m: &mut Field, v| m.cardinality = v,
        )
        .scalar("number", |m: &Field| m.number, |m: &mut Field, v| m.number = v)
        .scalar("name", |m: &Field| m.name.clone(), |m: &mut Field, v| m.name = v)
        .scalar(
            "type_url",
            |m: &Field| m.type_url.clone(),
            |m: &mut Field, v| m.type_url = v,
        )
        .scalar(
            "oneof_index",
            |m: &Field| m.oneof_index,
            |m: &mut Field, v| m.oneof_index = v,
        )
        .scalar("packed", |m: &Field| m.packed, |m: &mut Field, v| m.packed = v)
        .repeated_message(
            "options",
            |m: &Field| m.options.clone(),
            |m: &mut Field, v| m.options = v,
        )
        .scalar(
            "json_name",
            |m: &Field| m.json_name.clone(),
            |m: &mut Field, v| m.json_name = v,
        )
        .scalar(
            "default_value",
            |m: &Field| m.default_value.clone(),
            |m: &mut Field, v| m.default_value = v,
        )
        .build()
});

impl Maskable for Field {
    const FULL_NAME: &'static str = "google.protobuf.Field";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &FIELD
    }
}

message_field_type!(Field);

/// Typed references to [`Field`]'s fields.
pub mod field_fields {
    use super::{Field, FieldRef};

    /// `kind`
    pub const KIND: FieldRef<Field> = FieldRef::new(0, "kind");
    /// `cardinality`
    pub const CARDINALITY: FieldRef<Field> = FieldRef::new(1, "cardinality");
    /// `number`
    pub const NUMBER: FieldRef<Field> = FieldRef::new(2, "number");
    /// `name`
    pub const NAME: FieldRef<Field> = FieldRef::new(3, "name");
    /// `type_url`
    pub const TYPE_URL: FieldRef<Field> = FieldRef::new(4, "type_url");
    /// `oneof_index`
    pub const ONEOF_INDEX: FieldRef<Field> = FieldRef::new(5, "oneof_index");
    /// `packed`
    pub const PACKED: FieldRef<Field> = FieldRef::new(6, "packed");
    /// `options`
    pub const OPTIONS: FieldRef<Field> = FieldRef::new(7, "options");
    /// `json_name`
    pub const JSON_NAME: FieldRef<Field> = FieldRef::new(8, "json_name");
    /// `default_value`
    pub const DEFAULT_VALUE: FieldRef<Field> = FieldRef::new(9, "default_value");
}

/// `google.protobuf.Type`: a protocol buffer message type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Type {
    /// The fully qualified message name.
    pub name: String,
    /// The list of fields.
    pub fields: Vec<Field>,
    /// The list of oneof definition names.
    pub oneofs: Vec<String>,
    /// The protocol buffer options.
    pub options: Vec<OptionProto>,
    /// The source context.
    pub source_context: SourceContext,
    /// The source syntax, as a [`Syntax`] wire value.
    pub syntax: i32,
    /// The source edition string, set only when `syntax` is
    /// [`Syntax::Editions`].
    pub edition: String,
}

impl Type {
    /// The `syntax` field interpreted as its enum.
    pub fn syntax(&self) -> Syntax {
        Syntax::from_i32(self.syntax).unwrap_or_default()
    }

    /// Sets the `syntax` field from the enum.
    pub fn set_syntax(&mut self, value: Syntax) {
        self.syntax = value as i32;
    }
}

static TYPE: LazyLock<MessageDescriptor<Type>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("name", |m: &Type| m.name.clone(), |m: &mut Type, v| m.name = v)
        .repeated_message(
            "fields",
            |m: &Type| m.fields.clone(),
            |m: &mut Type, v| m.fields = v,
        )
        .repeated_scalar(
            "oneofs",
            |m: &Type| m.oneofs.clone(),
            |m: &mut Type, v| m.oneofs = v,
        )
        .repeated_message(
            "options",
            |m: &Type| m.options.clone(),
            |m: &mut Type, v| m.options = v,
        )
        .message(
            "source_context",
            |m: &Type| m.source_context.clone(),
            |m: &mut Type, v| m.source_context = v,
        )
        .import_nested(
            "source_context",
            |m: &Type| &m.source_context,
            |m: &mut Type| &mut m.source_context,
        )
        .scalar("syntax", |m: &Type| m.syntax, |m: &mut Type, v| m.syntax = v)
        .scalar(
            "edition",
            |m: &Type| m.edition.clone(),
            |m: &mut Type, v| m.edition = v,
        )
        .build()
});

impl Maskable for Type {
    const FULL_NAME: &'static str = "google.protobuf.Type";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &TYPE
    }
}

message_field_type!(Type);

/// Typed references to [`Type`]'s fields, deep imports included.
pub mod type_fields {
    use super::{FieldRef, Type};

    /// `name`
    pub const NAME: FieldRef<Type> = FieldRef::new(0, "name");
    /// `fields`
    pub const FIELDS: FieldRef<Type> = FieldRef::new(1, "fields");
    /// `oneofs`
    pub const ONEOFS: FieldRef<Type> = FieldRef::new(2, "oneofs");
    /// `options`
    pub const OPTIONS: FieldRef<Type> = FieldRef::new(3, "options");
    /// `source_context`
    pub const SOURCE_CONTEXT: FieldRef<Type> = FieldRef::new(4, "source_context");
    /// `source_context.file_name`
    pub const SOURCE_CONTEXT_FILE_NAME: FieldRef<Type> =
        FieldRef::new(5, "source_context.file_name");
    /// `syntax`
    pub const SYNTAX: FieldRef<Type> = FieldRef::new(6, "syntax");
    /// `edition`
    pub const EDITION: FieldRef<Type> = FieldRef::new(7, "edition");
}
