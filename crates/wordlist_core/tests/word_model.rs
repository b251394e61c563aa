use wordlist_core::{Word, WordValidationError};

#[test]
fn new_rejects_empty_text() {
    let err = Word::new("").unwrap_err();
    assert_eq!(err, WordValidationError::EmptyText);
}

#[test]
fn new_preserves_text_without_trimming() {
    let word = Word::new(" apple ").unwrap();
    assert_eq!(word.text, " apple ");
}

#[test]
fn validate_catches_struct_literal_bypass() {
    let word = Word {
        text: String::new(),
    };
    assert_eq!(word.validate().unwrap_err(), WordValidationError::EmptyText);
}

#[test]
fn words_order_by_text() {
    let mut words = vec![
        Word::new("cherry").unwrap(),
        Word::new("apple").unwrap(),
        Word::new("banana").unwrap(),
    ];
    words.sort();

    let texts: Vec<&str> = words.iter().map(|word| word.text.as_str()).collect();
    assert_eq!(texts, ["apple", "banana", "cherry"]);
}

#[test]
fn word_serializes_as_single_text_field() {
    let word = Word::new("apple").unwrap();
    let json = serde_json::to_string(&word).unwrap();
    assert_eq!(json, r#"{"text":"apple"}"#);

    let back: Word = serde_json::from_str(&json).unwrap();
    assert_eq!(back, word);
}
