use manifest_fs::NormalizedPath;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        Just(String::new()),
        "[a-z0-9_-]{1,8}",
    ]
}

fn relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..8).prop_map(|segments| segments.join("/"))
}

proptest! {
    #[test]
    fn normalized_paths_have_no_dot_segments(rel in relative_path()) {
        let path = NormalizedPath::new(format!("/base/{rel}"));

        prop_assert!(path.is_absolute());
        prop_assert!(!path.as_str().contains('\\'));
        prop_assert!(!path.as_str().contains("//"));
        prop_assert!(path.segments().all(|s| s != "." && s != ".."));
    }

    #[test]
    fn normalization_is_idempotent(rel in relative_path()) {
        let once = NormalizedPath::new(format!("/base/{rel}"));
        let twice = NormalizedPath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn joining_plain_segments_stays_below_base(parts in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let base = NormalizedPath::new("/base");
        let rel = parts.join("/");
        let joined = base.join(&rel);

        prop_assert_eq!(joined.relative_to(&base), Some(rel.as_str()));
    }
}
