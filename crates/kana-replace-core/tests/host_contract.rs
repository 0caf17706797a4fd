//! Host-visible behaviour of the two entry points

use kana_replace_core::{
    replace, replace_entry, validate, validate_entry, KanaReplacer, Limits, INVALID_ARGUMENTS,
};

#[test]
fn test_documented_substitution() {
    let outcome = replace("ねこ", "いぬ", "ねこがねこを見る");
    assert_eq!(outcome.text(), "いぬがいぬを見る");
    assert_eq!(outcome.error(), "");
}

#[test]
fn test_replacement_bound_enforced() {
    let long = "x".repeat(31);
    let outcome = replace("あ", &long, "あいう");
    assert_eq!(outcome.text(), "あいう");
    assert_eq!(outcome.error(), "30文字以内で入力してください");
}

#[test]
fn test_resumes_after_match() {
    assert_eq!(replace("ああ", "あ", "ああああ").text(), "ああ");
    assert_eq!(replace("アア", "ア", "アアアアア").text(), "アアア");
}

#[test]
fn test_argument_count_guard() {
    let no_args: Vec<String> = Vec::new();
    let outcome = validate_entry(&no_args);
    assert!(!outcome.is_valid());
    assert_eq!(outcome.message(), INVALID_ARGUMENTS);

    let outcome = replace_entry(&["a", "b"]);
    assert_eq!(outcome.text(), "");
    assert_eq!(outcome.error(), INVALID_ARGUMENTS);
}

#[test]
fn test_outcomes_serialize_with_host_names() {
    let outcome = validate("cat");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["message"], "ひらがなまたはカタカナのみ入力できます");

    let outcome = replace("ねこ", "いぬ", "ねこ");
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["displayText"], "いぬ");
    assert_eq!(json["error"], "");
}

#[test]
fn test_repeated_calls_are_independent() {
    let replacer = KanaReplacer::default();
    let first = replacer.replace("ねこ", "いぬ", "ねこ");
    let _ = replacer.replace("abc", "x", "abc");
    let again = replacer.replace("ねこ", "いぬ", "ねこ");
    assert_eq!(first, again);
}

#[test]
fn test_shared_across_threads() {
    let replacer = KanaReplacer::new(Limits::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || replacer.replace("ねこ", "いぬ", "ねこねこ").into_text())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "いぬいぬ");
    }
}
