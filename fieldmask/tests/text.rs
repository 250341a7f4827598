use fieldmask::{FieldMask, MaskError};

#[test]
fn wire_form_is_camel_case() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("source_context.file_name,name,field1_name");
    insta::assert_snapshot!(mask.to_wire().unwrap(), @"sourceContext.fileName,name,field1Name");
    assert_eq!(FieldMask::new().to_wire().unwrap(), "");
}

#[test]
fn wire_form_round_trips() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("source_context.file_name,name,syntax");
    let wire = mask.to_wire().unwrap();
    assert_eq!(FieldMask::from_wire(&wire).unwrap(), mask);
}

#[test]
fn from_wire_skips_empty_segments() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from_wire("sourceContext.fileName,,name,").unwrap();
    assert_eq!(mask.paths, ["source_context.file_name", "name"]);
    assert_eq!(FieldMask::from_wire("").unwrap(), FieldMask::new());
}

#[test]
fn to_wire_rejects_paths_that_are_not_snake_case() {
    fieldmask_testhelpers::setup();

    let err = FieldMask::from("fooBar").to_wire().unwrap_err();
    assert_eq!(err, MaskError::SnakeCaseContainsUppercase { path: "fooBar".to_owned() });

    let err = FieldMask::from("foo__bar").to_wire().unwrap_err();
    assert_eq!(
        err,
        MaskError::CharAfterUnderscoreMustBeLowercase { path: "foo__bar".to_owned() }
    );

    let err = FieldMask::from("foo_1bar").to_wire().unwrap_err();
    assert_eq!(
        err,
        MaskError::CharAfterUnderscoreMustBeLowercase { path: "foo_1bar".to_owned() }
    );

    let err = FieldMask::from("foo_").to_wire().unwrap_err();
    assert_eq!(err, MaskError::TrailingUnderscore { path: "foo_".to_owned() });
}

#[test]
fn from_wire_rejects_underscores() {
    fieldmask_testhelpers::setup();

    let err = FieldMask::from_wire("foo_bar").unwrap_err();
    assert_eq!(err, MaskError::CamelCaseContainsUnderscore { path: "foo_bar".to_owned() });
}

#[cfg(feature = "serde")]
mod serde_form {
    use fieldmask::FieldMask;

    #[test]
    fn serializes_as_one_comma_joined_string() {
        fieldmask_testhelpers::setup();

        let mask = FieldMask::from("name,source_context.file_name");
        let json = serde_json::to_string(&mask).unwrap();
        insta::assert_snapshot!(json, @r#""name,source_context.file_name""#);
    }

    #[test]
    fn deserializes_from_the_same_string() {
        fieldmask_testhelpers::setup();

        let mask: FieldMask = serde_json::from_str(r#""name,source_context.file_name""#).unwrap();
        assert_eq!(mask.paths, ["name", "source_context.file_name"]);

        let empty: FieldMask = serde_json::from_str(r#""""#).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn rejects_non_string_json() {
        fieldmask_testhelpers::setup();

        assert!(serde_json::from_str::<FieldMask>("[\"name\"]").is_err());
        assert!(serde_json::from_str::<FieldMask>("42").is_err());
    }
}
