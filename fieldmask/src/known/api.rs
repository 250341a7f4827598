//! `google.protobuf.Api` and its supporting types.

use std::sync::LazyLock;

use crate::message_field_type;
use crate::{DescriptorBuilder, FieldRef, Maskable, MessageDescriptor};

use super::{OptionProto, SourceContext, Syntax};

/// `google.protobuf.Method`: one method of an API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Method {
    /// The simple name of this method.
    pub name: String,
    /// A URL of the input message type.
    pub request_type_url: String,
    /// Whether the request is streamed.
    pub request_streaming: bool,
    /// The URL of the output message type.
    pub response_type_url: String,
    /// Whether the response is streamed.
    pub response_streaming: bool,
    /// Any metadata attached to the method.
    pub options: Vec<OptionProto>,
    /// The source syntax of this method, as a [`Syntax`] wire value.
    pub syntax: i32,
}

impl Method {
    /// The `syntax` field interpreted as its enum.
    pub fn syntax(&self) -> Syntax {
        Syntax::from_i32(self.syntax).unwrap_or_default()
    }

    /// Sets the `syntax` field from the enum.
    pub fn set_syntax(&mut self, value: Syntax) {
        self.syntax = value as i32;
    }
}

static METHOD: LazyLock<MessageDescriptor<Method>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("name", |m: &Method| m.name.clone(), |m: &mut Method, v| m.name = v)
        .scalar(
            "request_type_url",
            |m: &Method| m.request_type_url.clone(),
            |m: &mut Method, v| m.request_type_url = v,
        )
        .scalar(
            "request_streaming",
            |m: &Method| m.request_streaming,
            |m: &mut Method, v| m.request_streaming = v,
        )
        .scalar(
            "response_type_url",
            |m: &Method| m.response_type_url.clone(),
            |m: &mut Method, v| m.response_type_url = v,
        )
        .scalar(
            "response_streaming",
            |m: &Method| m.response_streaming,
            |m: &mut Method, v| m.response_streaming = v,
        )
        .repeated_message(
            "options",
            |m: &Method| m.options.clone(),
            |m: &mut Method, v| m.options = v,
        )
        .scalar("syntax", |m: &Method| m.syntax, |m: &mut Method, v| m.syntax = v)
        .build()
});

impl Maskable for Method {
    const FULL_NAME: &'static str = "google.protobuf.Method";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &METHOD
    }
}

message_field_type!(Method);

/// Typed references to [`Method`]'s fields.
pub mod method_fields {
    use super::{FieldRef, Method};

    /// `name`
    pub const NAME: FieldRef<Method> = FieldRef::new(0, "name");
    /// `request_type_url`
    pub const REQUEST_TYPE_URL: FieldRef<Method> = FieldRef::new(1, "request_type_url");
    /// `request_streaming`
    pub const REQUEST_STREAMING: FieldRef<Method> = FieldRef::new(2, "request_streaming");
    /// `response_type_url`
    pub const RESPONSE_TYPE_URL: FieldRef<Method> = FieldRef::new(3, "response_type_url");
    /// `response_streaming`
    pub const RESPONSE_STREAMING: FieldRef<Method> = FieldRef::new(4, "response_streaming");
    /// `options`
    pub const OPTIONS: FieldRef<Method> = FieldRef::new(5, "options");
    /// `syntax`
    pub const SYNTAX: FieldRef<Method> = FieldRef::new(6, "syntax");
}

/// `google.protobuf.Mixin`: declares that an API is included in another API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mixin {
    /// The fully qualified name of the included API.
    pub name: String,
    /// Path where the mixed-in methods are rooted, if other than `""`.
    pub root: String,
}

static MIXIN: LazyLock<MessageDescriptor<Mixin>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("name", |m: &Mixin| m.name.clone(), |m: &mut Mixin, v| m.name = v)
        .scalar("root", |m: &Mixin| m.root.clone(), |m: &mut Mixin, v| m.root = v)
        .build()
});

impl Maskable for Mixin {
    const FULL_NAME: &'static str = "google.protobuf.Mixin";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &MIXIN
    }
}

message_field_type!(Mixin);

/// Typed references to [`Mixin`]'s fields.
pub mod mixin_fields {
    use super::{FieldRef, Mixin};

    /// `name`
    pub const NAME: FieldRef<Mixin> = FieldRef::new(0, "name");
    /// `root`
    pub const ROOT: FieldRef<Mixin> = FieldRef::new(1, "root");
}

/// `google.protobuf.Api`: a protocol buffer service, serializable as an API
/// surface description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Api {
    /// The fully qualified name of this interface.
    pub name: String,
    /// The methods of this interface, in unspecified order.
    pub methods: Vec<Method>,
    /// Any metadata attached to the interface.
    pub options: Vec<OptionProto>,
    /// A version string for this interface.
    pub version: String,
    /// Source context for the protocol buffer service.
    pub source_context: SourceContext,
    /// Included interfaces.
    pub mixins: Vec<Mixin>,
    /// The source syntax of the service, as a [`Syntax`] wire value.
    pub syntax: i32,
}

impl Api {
    /// The `syntax` field interpreted as its enum.
    pub fn syntax(&self) -> Syntax {
        Syntax::from_i32(self.syntax).unwrap_or_default()
    }

    /// Sets the `syntax` field from the enum.
    pub fn set_syntax(&mut self, value: Syntax) {
        self.syntax = value as i32;
    }
}

static API: LazyLock<MessageDescriptor<Api>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("name", |m: &Api| m.name.clone(), |m: &mut Api, v| m.name = v)
        .repeated_message(
            "methods",
            |m: &Api| m.methods.clone(),
            |m: &mut Api, v| m.methods = v,
        )
        .repeated_message(
            "options",
            |m: &Api| m.options.clone(),
            |m: &mut Api, v| m.options = v,
        )
        .scalar(
            "version",
            |m: &Api| m.version.clone(),
            |m: &mut Api, v| m.version = v,
        )
        .message(
            "source_context",
            |m: &Api| m.source_context.clone(),
            |m: &mut Api, v| m.source_context = v,
        )
        .import_nested(
            "source_context",
            |m: &Api| &m.source_context,
            |m: &mut Api| &mut m.source_context,
        )
        .repeated_message(
            "mixins",
            |m: &Api| m.mixins.clone(),
            |m: &mut Api, v| m.mixins = v,
        )
        .scalar("syntax", |m: &Api| m.syntax, |m: &mut Api, v| m.syntax = v)
        .build()
});

impl Maskable for Api {
    const FULL_NAME: &'static str = "google.protobuf.Api";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &API
    }
}

message_field_type!(Api);

/// Typed references to [`Api`]'s fields, deep imports included.
pub mod api_fields {
    use super::{Api, FieldRef};

    /// `name`
    pub const NAME: FieldRef<Api> = FieldRef::new(0, "name");
    /// `methods`
    pub const METHODS: FieldRef<Api> = FieldRef::new(1, "methods");
    /// `options`
    pub const OPTIONS: FieldRef<Api> = FieldRef::new(2, "options");
    /// `version`
    pub const VERSION: FieldRef<Api> = FieldRef::new(3, "version");
    /// `source_context`
    pub const SOURCE_CONTEXT: FieldRef<Api> = FieldRef::new(4, "source_context");
    /// `source_context.file_name`
    pub const SOURCE_CONTEXT_FILE_NAME: FieldRef<Api> =
        FieldRef::new(5, "source_context.file_name");
    /// `mixins`
    pub const MIXINS: FieldRef<Api> = FieldRef::new(6, "mixins");
    /// `syntax`
    pub const SYNTAX: FieldRef<Api> = FieldRef::new(7, "syntax");
}
