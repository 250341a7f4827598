use std::sync::LazyLock;

use fieldmask::known::{Field, SourceContext, Syntax, Type};
use fieldmask::{
    DescriptorBuilder, FieldMask, MaskError, MaskedMessage, Maskable, MessageDescriptor,
    TrimOptions,
};

fn sample_type() -> Type {
    let mut proto = Type {
        name: "example.Sample".to_owned(),
        fields: vec![Field { name: "id".to_owned(), number: 1, ..Default::default() }],
        source_context: SourceContext { file_name: "example/sample.proto".to_owned() },
        edition: "2023".to_owned(),
        ..Default::default()
    };
    proto.set_syntax(Syntax::Editions);
    proto
}

#[test]
fn trim_clears_exactly_the_masked_fields() {
    fieldmask_testhelpers::setup();

    let mut proto = sample_type();
    let changed = proto
        .trim(&FieldMask::from("name,fields"), &TrimOptions::default())
        .unwrap();

    assert!(changed);
    assert_eq!(proto.name, "");
    assert!(proto.fields.is_empty());
    assert_eq!(proto.source_context.file_name, "example/sample.proto");
    assert_eq!(proto.syntax(), Syntax::Editions);
}

#[test]
fn trim_reports_when_nothing_changed() {
    fieldmask_testhelpers::setup();

    let mut proto = Type::default();
    let changed = proto.trim(&FieldMask::from("name"), &TrimOptions::default()).unwrap();
    assert!(!changed);
    assert_eq!(proto, Type::default());
}

#[test]
fn trim_fails_on_an_unknown_path() {
    fieldmask_testhelpers::setup();

    let mut proto = sample_type();
    let err = proto
        .trim(&FieldMask::from("no_such_field"), &TrimOptions::default())
        .unwrap_err();
    assert_eq!(err, MaskError::PathNotFound { path: "no_such_field".to_owned() });
}

#[test]
fn deep_paths_trim_one_nested_field() {
    fieldmask_testhelpers::setup();

    let mut proto = sample_type();
    let changed = proto
        .trim(&FieldMask::from("source_context.file_name"), &TrimOptions::default())
        .unwrap();

    assert!(changed);
    assert_eq!(proto.source_context, SourceContext::default());
    assert_eq!(proto.name, "example.Sample");
}

#[test]
fn trim_clears_a_whole_message_subtree() {
    fieldmask_testhelpers::setup();

    let mut proto = sample_type();
    proto.trim(&FieldMask::from("source_context"), &TrimOptions::default()).unwrap();
    assert_eq!(proto.source_context, SourceContext::default());
}

#[test]
fn trimmed_returns_a_copy_and_leaves_the_receiver_alone() {
    fieldmask_testhelpers::setup();

    let proto = sample_type();
    let trimmed = proto.trimmed(&FieldMask::from("edition"), &TrimOptions::default()).unwrap();

    assert_eq!(trimmed.edition, "");
    assert_eq!(proto.edition, "2023");
}

/// A message with a field marked required in its registry, the shape a
/// generator would emit for a proto2 required field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Account {
    id: String,
    nickname: String,
}

static ACCOUNT: LazyLock<MessageDescriptor<Account>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .scalar("id", |m: &Account| m.id.clone(), |m: &mut Account, v| m.id = v)
        .required()
        .scalar(
            "nickname",
            |m: &Account| m.nickname.clone(),
            |m: &mut Account, v| m.nickname = v,
        )
        .build()
});

impl Maskable for Account {
    const FULL_NAME: &'static str = "test.Account";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &ACCOUNT
    }
}

#[test]
fn keep_required_fields_skips_required_registry_entries() {
    fieldmask_testhelpers::setup();

    let account = Account { id: "acct-1".to_owned(), nickname: "prod".to_owned() };

    let mut kept = account.clone();
    let options = TrimOptions { keep_required_fields: true };
    let changed = kept.trim(&FieldMask::from("id,nickname"), &options).unwrap();

    assert!(changed);
    assert_eq!(kept.id, "acct-1");
    assert_eq!(kept.nickname, "");

    let mut cleared = account.clone();
    cleared.trim(&FieldMask::from("id,nickname"), &TrimOptions::default()).unwrap();
    assert_eq!(cleared, Account::default());
}
