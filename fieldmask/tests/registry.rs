use std::sync::LazyLock;

use fieldmask::known::{
    api_fields, type_fields, value_fields, Api, BoolValue, ListValue, SourceContext, StringValue,
    Timestamp, Type, Value,
};
use fieldmask::{
    message_field_type, DescriptorBuilder, FieldMask, FieldValue, MaskError, MaskedMessage,
    Maskable, Message, MessageDescriptor, TrimOptions,
};

#[test]
fn descriptors_expose_paths_in_registration_order() {
    fieldmask_testhelpers::setup();

    let paths: Vec<&str> = Type::descriptor().paths().collect();
    assert_eq!(
        paths,
        [
            "name",
            "fields",
            "oneofs",
            "options",
            "source_context",
            "source_context.file_name",
            "syntax",
            "edition",
        ]
    );
    assert_eq!(Type::descriptor().len(), 8);
    assert_eq!(Type::descriptor().full_name(), "google.protobuf.Type");
}

#[test]
fn field_lookup_exposes_the_registered_flags() {
    fieldmask_testhelpers::setup();

    let descriptor = Type::descriptor();

    let fields = descriptor.field("fields").unwrap();
    assert!(fields.is_repeated());
    assert!(fields.is_message());
    assert_eq!(fields.nested_type(), Some("google.protobuf.Field"));

    let source_context = descriptor.field("source_context").unwrap();
    assert!(source_context.is_message());
    assert!(!source_context.is_repeated());
    assert_eq!(source_context.nested_type(), Some("google.protobuf.SourceContext"));

    let name = descriptor.field("name").unwrap();
    assert!(!name.is_message());
    assert!(!name.is_repeated());
    assert!(!name.is_required());
    assert_eq!(name.nested_type(), None);

    assert!(descriptor.field("no_such_field").is_none());
}

#[test]
fn is_valid_path_includes_imported_nested_paths() {
    fieldmask_testhelpers::setup();

    assert!(Type::is_valid_path("source_context.file_name"));
    assert!(Type::is_valid_path("syntax"));
    assert!(!Type::is_valid_path("source_context.no_such_field"));
    assert!(!Type::is_valid_path(""));
}

#[test]
fn fields_read_and_write_through_the_descriptor() {
    fieldmask_testhelpers::setup();

    let mut proto = Type { name: "example.Sample".to_owned(), ..Default::default() };
    let descriptor = Type::descriptor();
    let name = descriptor.field("name").unwrap();

    assert_eq!(name.read(&proto), FieldValue::String("example.Sample".to_owned()));

    name.write(&mut proto, FieldValue::String("example.Renamed".to_owned())).unwrap();
    assert_eq!(proto.name, "example.Renamed");

    let err = name.write(&mut proto, FieldValue::I64(7)).unwrap_err();
    assert_eq!(err, MaskError::TypeMismatch { path: "name".to_owned(), expected: "string" });
    assert_eq!(proto.name, "example.Renamed");

    assert_eq!(name.zero_value(), FieldValue::String(String::new()));
}

#[test]
fn imported_paths_read_and_write_through_the_parent() {
    fieldmask_testhelpers::setup();

    let mut proto = Type {
        source_context: SourceContext { file_name: "example/sample.proto".to_owned() },
        ..Default::default()
    };
    let file_name = Type::descriptor().field("source_context.file_name").unwrap();

    assert_eq!(
        file_name.read(&proto),
        FieldValue::String("example/sample.proto".to_owned())
    );

    file_name
        .write(&mut proto, FieldValue::String("example/renamed.proto".to_owned()))
        .unwrap();
    assert_eq!(proto.source_context.file_name, "example/renamed.proto");
}

#[test]
fn path_of_resolves_typed_references() {
    fieldmask_testhelpers::setup();

    let descriptor = Type::descriptor();
    assert_eq!(descriptor.path_of(&type_fields::NAME).unwrap(), "name");
    assert_eq!(
        descriptor.path_of(&type_fields::SOURCE_CONTEXT_FILE_NAME).unwrap(),
        "source_context.file_name"
    );

    let err = descriptor.path_of(&fieldmask::FieldRef::new(0, "syntax")).unwrap_err();
    assert_eq!(err, MaskError::FieldNotFound { path: "syntax".to_owned() });
}

#[test]
fn covers_field_goes_through_the_registry() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("source_context");
    assert!(mask.covers_field(&type_fields::SOURCE_CONTEXT_FILE_NAME).unwrap());
    assert!(!mask.covers_field(&type_fields::NAME).unwrap());
    assert!(mask.covers_field(&fieldmask::FieldRef::<Type>::new(2, "syntax")).is_err());
}

#[test]
fn deep_references_exist_across_the_catalogue() {
    fieldmask_testhelpers::setup();

    let api = Api::descriptor();
    assert_eq!(
        api.path_of(&api_fields::SOURCE_CONTEXT_FILE_NAME).unwrap(),
        "source_context.file_name"
    );

    let value = Value::descriptor();
    assert_eq!(
        value.path_of(&value_fields::LIST_VALUE_VALUES).unwrap(),
        "list_value.values"
    );
}

#[test]
fn wrapper_registries_expose_their_value_field() {
    fieldmask_testhelpers::setup();

    assert_eq!(FieldMask::all::<BoolValue>().to_string(), "value");
    assert_eq!(FieldMask::all::<StringValue>().to_string(), "value");
    assert_eq!(StringValue::FULL_NAME, "google.protobuf.StringValue");
    assert_eq!(FieldMask::all::<Timestamp>().to_string(), "nanos,seconds");
}

#[test]
fn field_masks_are_messages_in_their_own_registry() {
    fieldmask_testhelpers::setup();

    assert_eq!(<FieldMask as Maskable>::FULL_NAME, "google.protobuf.FieldMask");
    assert_eq!(FieldMask::all::<FieldMask>().to_string(), "paths");

    let mut mask = FieldMask::from("a,b");
    let changed = mask.trim(&FieldMask::from("paths"), &TrimOptions::default()).unwrap();
    assert!(changed);
    assert!(mask.is_empty());
}

#[test]
fn erased_messages_clone_and_compare() {
    fieldmask_testhelpers::setup();

    let context = SourceContext { file_name: "a.proto".to_owned() };
    let boxed: Box<dyn Message> = Box::new(context.clone());

    assert_eq!(boxed.message_name(), "google.protobuf.SourceContext");
    assert!(boxed.message_eq(&context));
    assert!(boxed.boxed_clone().message_eq(&context));

    // Different concrete types never compare equal.
    assert!(!boxed.message_eq(&Type::default()));

    let unboxed = boxed.into_any().downcast::<SourceContext>().unwrap();
    assert_eq!(*unboxed, context);
}

#[test]
fn erased_merge_rejects_mismatched_types() {
    fieldmask_testhelpers::setup();

    let mut destination = SourceContext::default();
    let source = Type::default();
    let err = destination
        .merge_message_from(&source, &fieldmask::MergeOptions::default())
        .unwrap_err();
    assert_eq!(
        err,
        MaskError::MergeTypeMismatch {
            expected: "google.protobuf.SourceContext",
            actual: "google.protobuf.Type",
        }
    );
}

/// A two-level fixture registered the way a generator would emit it, with a
/// composed message field and an optional scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Inner {
    label: String,
}

static INNER: LazyLock<MessageDescriptor<Inner>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("label", |m: &Inner| m.label.clone(), |m: &mut Inner, v| m.label = v)
        .build()
});

impl Maskable for Inner {
    const FULL_NAME: &'static str = "test.Inner";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &INNER
    }
}

message_field_type!(Inner);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Outer {
    inner: Inner,
    note: Option<String>,
}

static OUTER: LazyLock<MessageDescriptor<Outer>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .message("inner", |m: &Outer| m.inner.clone(), |m: &mut Outer, v| m.inner = v)
        .import_nested("inner", |m: &Outer| &m.inner, |m: &mut Outer| &mut m.inner)
        .scalar("note", |m: &Outer| m.note.clone(), |m: &mut Outer, v| m.note = v)
        .build()
});

impl Maskable for Outer {
    const FULL_NAME: &'static str = "test.Outer";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &OUTER
    }
}

#[test]
fn composed_registries_import_their_nested_fields() {
    fieldmask_testhelpers::setup();

    let paths: Vec<&str> = Outer::descriptor().paths().collect();
    assert_eq!(paths, ["inner", "inner.label", "note"]);

    let mut outer = Outer::default();
    let label = Outer::descriptor().field("inner.label").unwrap();
    label.write(&mut outer, FieldValue::String("tagged".to_owned())).unwrap();
    assert_eq!(outer.inner.label, "tagged");
}

#[test]
fn optional_fields_round_trip_as_field_values() {
    fieldmask_testhelpers::setup();

    let mut outer = Outer { note: Some("present".to_owned()), ..Default::default() };
    let note = Outer::descriptor().field("note").unwrap();

    assert_eq!(
        note.read(&outer),
        FieldValue::Optional(Some(Box::new(FieldValue::String("present".to_owned()))))
    );

    note.write(&mut outer, FieldValue::Optional(None)).unwrap();
    assert_eq!(outer.note, None);

    // A masked merge carries the whole option across, including None.
    let source = Outer { note: Some("restored".to_owned()), ..Default::default() };
    outer.merge_from(&source, &FieldMask::from("note"), &Default::default()).unwrap();
    assert_eq!(outer.note, Some("restored".to_owned()));
}

#[test]
fn list_values_nest_recursively() {
    fieldmask_testhelpers::setup();

    let inner = Value { string_value: "leaf".to_owned(), ..Default::default() };
    let list = ListValue { values: vec![inner] };
    let value = Value { list_value: list, ..Default::default() };

    let values = Value::descriptor().field("list_value.values").unwrap();
    match values.read(&value) {
        FieldValue::Repeated(items) => assert_eq!(items.len(), 1),
        other => panic!("expected a repeated value, got {other:?}"),
    }
}
