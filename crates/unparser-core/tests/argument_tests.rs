use unparser_core::{BeginPolicy, Tag, UnparserConfig};
use unparser_test_helpers::*;

#[test]
fn test_named_splat() {
    assert_eq!(unparse(&restarg("args")).unwrap(), "*args");
}

#[test]
fn test_anonymous_splat() {
    assert_eq!(unparse(&bare_restarg()).unwrap(), "*");
}

#[test]
fn test_block_argument() {
    assert_eq!(unparse(&blockarg("blk")).unwrap(), "&blk");
}

#[test]
fn test_optional_argument() {
    assert_eq!(unparse(&optarg("x", int(5))).unwrap(), "x = 5");
}

#[test]
fn test_mixed_argument_list() {
    let node = args(vec![arg("a"), optarg("b", int(1)), restarg("c")]);
    assert_eq!(unparse(&node).unwrap(), "a, b = 1, *c");
}

#[test]
fn test_destructuring_group_in_argument_list() {
    let node = args(vec![mlhs(vec![arg("x"), arg("y")])]);
    assert_eq!(unparse(&node).unwrap(), "(x, y)");
}

#[test]
fn test_full_parameter_list() {
    let node = args(vec![
        arg("a"),
        mlhs(vec![arg("b"), restarg("c")]),
        optarg("d", string("x")),
        bare_restarg(),
        kwarg("e"),
        kwoptarg("f", nil()),
        kwrestarg("opts"),
        blockarg("blk"),
    ]);
    insta::assert_snapshot!(
        unparse(&node).unwrap(),
        @r#"a, (b, *c), d = "x", *, e:, f: nil, **opts, &blk"#
    );
}

#[test]
fn test_block_pass_renders_value() {
    assert_eq!(unparse(&block_pass(sym("upcase"))).unwrap(), "&:upcase");
    assert_eq!(unparse(&block_pass(lvar("callback"))).unwrap(), "&callback");
}

#[test]
fn test_every_argument_shape_renders() {
    let shapes = vec![
        arg("a"),
        optarg("a", int(1)),
        restarg("a"),
        bare_restarg(),
        blockarg("a"),
        block_pass(lvar("a")),
        arg_expr(mlhs(vec![arg("a")])),
        args(vec![arg("a")]),
        args(vec![mlhs(vec![arg("a"), arg("b")])]),
    ];
    for node in shapes {
        assert!(unparse(&node).is_ok(), "failed to render {node:?}");
    }
}

#[test]
fn test_group_normalization_matches_explicit_arg_expr() {
    let group = mlhs(vec![arg("x"), restarg("y")]);
    let bare = args(vec![group.clone()]);
    let wrapped = args(vec![arg_expr(group.clone())]);

    assert_eq!(unparse(&bare).unwrap(), unparse(&wrapped).unwrap());
    assert_eq!(
        unparse(&bare).unwrap(),
        format!("({})", unparse(&group).unwrap())
    );
}

#[test]
fn test_begin_is_transparent() {
    let inner = optarg("limit", float(1.5));
    assert_eq!(
        unparse(&begin(vec![inner.clone()])).unwrap(),
        unparse(&inner).unwrap()
    );
}

#[test]
fn test_begin_arity_follows_policy() {
    let node = begin(vec![int(1), int(2)]);
    assert!(unparse(&node).is_err());

    let config = UnparserConfig {
        begin_policy: BeginPolicy::FirstChild,
        ..UnparserConfig::default()
    };
    assert_eq!(unparse_with_config(&node, &config).unwrap(), "1");
}

#[test]
fn test_unmodeled_tag_renders_verbatim() {
    let source = "def run(a = compute(1, 2)); end";
    let node = args(vec![optarg("a", sourced("send", source, 12, 25))]);
    assert_eq!(unparse(&node).unwrap(), "a = compute(1, 2)");
}

#[test]
fn test_unmodeled_tag_without_range_fails() {
    let node = args(vec![arg("a"), optarg("b", s("send", vec![]))]);
    assert_eq!(unparse(&node).unwrap_err(), "no emitter for node: send");
}

#[test]
fn test_verbatim_tags_from_config() {
    let source = "'raw'";
    let mut node = string("raw");
    node.location = sourced("str", source, 0, source.len()).location;

    assert_eq!(unparse(&node).unwrap(), "\"raw\"");

    let config = UnparserConfig {
        verbatim_tags: vec!["str".to_string()],
        ..UnparserConfig::default()
    };
    assert_eq!(unparse_with_config(&node, &config).unwrap(), "'raw'");
}

#[test]
fn test_malformed_children_abort_the_render() {
    let node = args(vec![arg("a"), s("arg", vec![])]);
    assert_eq!(
        unparse(&node).unwrap_err(),
        "malformed `arg` node: expected 1 children, found 0"
    );

    let node = s("blockarg", vec![name("a"), name("b")]);
    assert!(unparse(&node).is_err());
}

#[test]
fn test_errors_carry_the_offending_tag() {
    let err = unparser_core::render(&args(vec![s("lambda", vec![])])).unwrap_err();
    assert_eq!(err.tag(), &Tag::from("lambda"));
}
