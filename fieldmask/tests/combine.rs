use fieldmask::known::{SourceContext, Type};
use fieldmask::FieldMask;

#[test]
fn canonical_form_sorts_dedups_and_collapses() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("b,a.c,a.c,a.b");
    insta::assert_snapshot!(mask.canonical_form(), @"a.b,a.c,b");

    // A coarser path swallows everything beneath it.
    let mask = FieldMask::from("a.b.c,a,b.x");
    insta::assert_snapshot!(mask.canonical_form(), @"a,b.x");
}

#[test]
fn canonical_form_is_idempotent() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("z,a.b,a").canonical_form();
    assert_eq!(mask.canonical_form(), mask);
    assert_eq!(FieldMask::new().canonical_form(), FieldMask::new());
}

#[test]
fn union_combines_selections_from_both_sides() {
    fieldmask_testhelpers::setup();

    let lhs = FieldMask::from("a.b,x");
    let rhs = FieldMask::from("a.c,y");
    insta::assert_snapshot!(lhs.union(&rhs), @"a.b,a.c,x,y");

    // Union is symmetric once canonicalized.
    assert_eq!(lhs.union(&rhs), rhs.union(&lhs));
}

#[test]
fn union_lets_a_coarser_path_subsume_across_operands() {
    fieldmask_testhelpers::setup();

    let coarse = FieldMask::from("a");
    let fine = FieldMask::from("a.b,a.c");
    insta::assert_snapshot!(coarse.union(&fine), @"a");
    insta::assert_snapshot!(fine.union(&coarse), @"a");
}

#[test]
fn intersect_keeps_what_both_masks_cover() {
    fieldmask_testhelpers::setup();

    let lhs = FieldMask::from("a,b.c");
    let rhs = FieldMask::from("a.x,b,z");
    insta::assert_snapshot!(lhs.intersect(&rhs), @"a.x,b.c");

    assert!(FieldMask::from("a").intersect(&FieldMask::from("b")).is_empty());
    assert!(FieldMask::new().intersect(&FieldMask::from("a")).is_empty());
}

#[test]
fn intersect_resolves_overlap_to_the_finer_path() {
    fieldmask_testhelpers::setup();

    let coarse = FieldMask::from("a");
    let fine = FieldMask::from("a.b");
    insta::assert_snapshot!(coarse.intersect(&fine), @"a.b");
    insta::assert_snapshot!(fine.intersect(&coarse), @"a.b");
}

#[test]
fn intersect_with_itself_is_canonicalization() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("name,source_context.file_name,name");
    assert_eq!(mask.intersect(&mask), mask.canonical_form());
}

#[test]
fn intersecting_a_mask_with_its_union_gives_the_mask_back() {
    fieldmask_testhelpers::setup();

    let a = FieldMask::from("name,source_context.file_name");
    let b = FieldMask::from("syntax,edition");
    assert_eq!(a.intersect(&a.union(&b)), a.canonical_form());
}

#[test]
fn subtract_removes_exact_selections() {
    fieldmask_testhelpers::setup();

    let base = FieldMask::from("name,syntax,edition");
    let removed = base.subtract::<Type>(&FieldMask::from("syntax"));
    insta::assert_snapshot!(removed, @"edition,name");
}

#[test]
fn subtract_removes_a_coarse_path_with_its_subtree() {
    fieldmask_testhelpers::setup();

    let base = FieldMask::from("source_context.file_name,name");
    let removed = base.subtract::<Type>(&FieldMask::from("source_context"));
    insta::assert_snapshot!(removed, @"name");
}

#[test]
fn subtract_leaves_coarser_coverage_alone() {
    fieldmask_testhelpers::setup();

    // "source_context" stays a leaf even when a finer path under it is
    // subtracted; the mask still covers the whole subtree.
    let base = FieldMask::from("source_context,name");
    let removed = base.subtract::<Type>(&FieldMask::from("source_context.file_name"));
    insta::assert_snapshot!(removed, @"name,source_context");
}

#[test]
fn subtract_ignores_unknown_paths_and_empty_bases() {
    fieldmask_testhelpers::setup();

    let base = FieldMask::from("name");
    assert_eq!(base.subtract::<Type>(&FieldMask::from("no_such_field")), base);

    let empty = FieldMask::new();
    assert!(empty.subtract::<Type>(&FieldMask::from("name")).is_empty());
}

#[test]
fn all_selects_one_path_per_direct_field() {
    fieldmask_testhelpers::setup();

    insta::assert_snapshot!(FieldMask::all::<SourceContext>(), @"file_name");

    // Imported nested paths collapse under their top-level field.
    insta::assert_snapshot!(
        FieldMask::all::<Type>(),
        @"edition,fields,name,oneofs,options,source_context,syntax"
    );
}

#[test]
fn is_valid_checks_every_path_against_the_registry() {
    fieldmask_testhelpers::setup();

    assert!(FieldMask::from("name,source_context.file_name").is_valid::<Type>());
    assert!(!FieldMask::from("name,no_such_field").is_valid::<Type>());
    assert!(!FieldMask::from("source_context.no_such_field").is_valid::<Type>());
    assert!(FieldMask::new().is_valid::<Type>());
}

#[test]
fn covers_path_requires_a_segment_boundary() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("a,b.c");
    assert!(mask.covers_path("a"));
    assert!(mask.covers_path("a.x"));
    assert!(mask.covers_path("b.c"));
    assert!(mask.covers_path("b.c.d"));

    assert!(!mask.covers_path("ab"));
    assert!(!mask.covers_path("b"));
    assert!(!mask.covers_path("b.cd"));
}

#[test]
fn contains_is_exact_membership() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("a,b.c");
    assert!(mask.contains("a"));
    assert!(mask.contains("b.c"));
    assert!(!mask.contains("a.x"));
    assert!(!mask.contains("b"));
}

#[test]
fn stripping_projects_into_a_subtree() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("source_context.file_name,name,source_context,other.file_name");
    let projected = mask.stripping("source_context");

    // Exact and unrelated paths drop out; matching paths lose the prefix.
    assert_eq!(projected.paths, ["file_name"]);
    assert!(mask.stripping("name").is_empty());
}

#[test]
fn add_path_validates_and_dedupes() {
    fieldmask_testhelpers::setup();

    let mut mask = FieldMask::new();
    assert!(mask.add_path::<Type>("name").unwrap());
    assert!(!mask.add_path::<Type>("name").unwrap());

    // Already covered through the coarser selection.
    assert!(mask.add_path::<Type>("source_context").unwrap());
    assert!(!mask.add_path::<Type>("source_context.file_name").unwrap());
    assert_eq!(mask.paths, ["name", "source_context"]);

    let err = mask.add_path::<Type>("no_such_field").unwrap_err();
    assert_eq!(
        err,
        fieldmask::MaskError::PathNotFound { path: "no_such_field".to_owned() }
    );
}

#[test]
fn typed_references_build_and_project_masks() {
    fieldmask_testhelpers::setup();

    use fieldmask::known::type_fields;

    let mask = FieldMask::from_fields(&[
        type_fields::NAME,
        type_fields::SOURCE_CONTEXT_FILE_NAME,
    ])
    .unwrap();
    assert_eq!(mask.paths, ["name", "source_context.file_name"]);

    let mut mask = mask;
    assert!(mask.add_field(&type_fields::SYNTAX).unwrap());
    assert!(!mask.add_field(&type_fields::NAME).unwrap());

    let projected = mask.stripping_field(&type_fields::SOURCE_CONTEXT).unwrap();
    assert_eq!(projected.paths, ["file_name"]);
}

#[test]
fn parsing_skips_empty_segments() {
    fieldmask_testhelpers::setup();

    let mask = FieldMask::from("a,,b,");
    assert_eq!(mask.paths, ["a", "b"]);
    assert_eq!(FieldMask::from(""), FieldMask::new());

    let parsed: FieldMask = "a.b,c".parse().unwrap();
    assert_eq!(parsed.to_string(), "a.b,c");
}
