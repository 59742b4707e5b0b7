use proptest::prelude::*;
use unparser_core::Node;
use unparser_test_helpers::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

fn argument() -> impl Strategy<Value = Node> {
    prop_oneof![
        identifier().prop_map(|n| arg(&n)),
        (identifier(), any::<i32>()).prop_map(|(n, v)| optarg(&n, int(v as i64))),
        identifier().prop_map(|n| restarg(&n)),
        Just(bare_restarg()),
        identifier().prop_map(|n| blockarg(&n)),
        identifier().prop_map(|n| kwarg(&n)),
        (identifier(), identifier()).prop_map(|(a, b)| mlhs(vec![arg(&a), arg(&b)])),
    ]
}

proptest! {
    #[test]
    fn delimiter_count_matches_arity(items in prop::collection::vec(argument(), 0..8)) {
        let count = items.len();
        let output = unparse(&args(items)).unwrap();

        // Generated names, defaults and groups never contain ", " themselves,
        // except for the delimiter inside each two-element group.
        let groups = output.matches('(').count();
        prop_assert_eq!(output.matches(", ").count(), count.saturating_sub(1) + groups);
        prop_assert!(!output.starts_with(", "));
        prop_assert!(!output.ends_with(", "));
        if count == 0 {
            prop_assert_eq!(output, "");
        }
    }

    #[test]
    fn rendering_is_deterministic(items in prop::collection::vec(argument(), 0..8)) {
        let first = args(items.clone());
        let second = args(items);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(unparse(&first).unwrap(), unparse(&second).unwrap());
    }

    #[test]
    fn begin_is_transparent_for_any_argument(item in argument()) {
        prop_assert_eq!(
            unparse(&begin(vec![item.clone()])).unwrap(),
            unparse(&item).unwrap()
        );
    }

    #[test]
    fn fallback_copies_exact_range(
        text in "[ -~]{0,40}",
        a in 0usize..40,
        b in 0usize..40,
    ) {
        let (begin, end) = (a.min(b).min(text.len()), a.max(b).min(text.len()));
        let node = sourced("send", &text, begin, end);
        prop_assert_eq!(unparse(&node).unwrap(), &text[begin..end]);
    }
}
