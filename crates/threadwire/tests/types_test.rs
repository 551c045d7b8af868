use serde_json::json;
use threadwire::{Content, ContentPart, MessageQuery, Role};

#[test]
fn test_content_text_creation() {
    let content = Content::text("Hello, world!");
    assert_eq!(content.as_text(), Some("Hello, world!"));
}

#[test]
fn test_content_from_string() {
    let content: Content = "Test".into();
    assert_eq!(content, Content::Text("Test".to_string()));
}

#[test]
fn test_content_string_serialization() {
    let json = serde_json::to_string(&Content::text("some text")).unwrap();
    assert_eq!(json, r#""some text""#);
}

#[test]
fn test_content_array_serialization() {
    let content = Content::Parts(vec![
        ContentPart::text("look"),
        ContentPart::image_file("file-1"),
        ContentPart::image_url("https://example.com/cat.png"),
    ]);

    let value = serde_json::to_value(&content).unwrap();
    assert_eq!(
        value,
        json!([
            {"type": "text", "text": "look"},
            {"type": "image_file", "image_file": {"file_id": "file-1"}},
            {"type": "image_url", "image_url": {"url": "https://example.com/cat.png"}}
        ])
    );
}

#[test]
fn test_content_string_never_becomes_parts() {
    let content: Content = serde_json::from_str(r#""hello""#).unwrap();
    assert_eq!(content, Content::text("hello"));
}

#[test]
fn test_content_roundtrip() {
    let values = vec![
        Content::text(""),
        Content::text("plain"),
        Content::Parts(vec![]),
        Content::Parts(vec![
            ContentPart::image_url("u1"),
            ContentPart::text("t"),
            ContentPart::image_file("f1"),
        ]),
    ];

    for content in values {
        let json = serde_json::to_string(&content).unwrap();
        let decoded: Content = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, content);
    }
}

#[test]
fn test_content_rejects_other_shapes() {
    for raw in ["42", "null", "true", r#"{"type":"text","text":"x"}"#] {
        let err = serde_json::from_str::<Content>(raw).unwrap_err();
        assert!(
            err.to_string()
                .contains("content must be either a string or an array of content parts"),
            "unexpected error for {raw}: {err}"
        );
    }
}

#[test]
fn test_content_part_unknown_type() {
    let result = serde_json::from_value::<ContentPart>(json!({"type": "video", "video": {}}));
    assert!(result.is_err());
}

#[test]
fn test_message_query_serialization() {
    let query = MessageQuery::new(Role::User, "hi", None);
    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(value, json!({"role": "user", "content": "hi"}));
}

#[test]
fn test_message_query_attachment_order() {
    let query = MessageQuery::new(
        Role::User,
        "describe",
        Some(vec!["f1".to_string(), "f2".to_string()]),
    );

    let value = serde_json::to_value(&query).unwrap();
    assert_eq!(
        value,
        json!({
            "role": "user",
            "content": [
                {"type": "text", "text": "describe"},
                {"type": "image_file", "image_file": {"file_id": "f1"}},
                {"type": "image_file", "image_file": {"file_id": "f2"}}
            ]
        })
    );
}

#[test]
fn test_message_query_explicit_parts_roundtrip() {
    let query = MessageQuery::with_parts(
        Role::User,
        vec![ContentPart::image_url("u1"), ContentPart::text("t")],
    );

    let json = serde_json::to_string(&query).unwrap();
    assert_eq!(
        json,
        r#"{"role":"user","content":[{"type":"image_url","image_url":{"url":"u1"}},{"type":"text","text":"t"}]}"#
    );

    let decoded: MessageQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, query);
}

#[test]
fn test_message_query_explicit_parts_keeps_duplicates() {
    let parts = vec![
        ContentPart::text("a"),
        ContentPart::image_url("u"),
        ContentPart::text("a"),
    ];
    let query = MessageQuery::with_parts(Role::User, parts.clone());
    assert_eq!(query.content().parts(), Some(parts.as_slice()));

    let json = serde_json::to_string(&query).unwrap();
    let decoded: MessageQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.content().parts(), Some(parts.as_slice()));
    assert_eq!(
        serde_json::to_value(decoded.content()).unwrap(),
        json!([
            {"type": "text", "text": "a"},
            {"type": "image_url", "image_url": {"url": "u"}},
            {"type": "text", "text": "a"}
        ])
    );
}

#[test]
fn test_message_query_deserialization() {
    let json = r#"{"role":"assistant","content":"Test"}"#;
    let query: MessageQuery = serde_json::from_str(json).unwrap();
    assert_eq!(query.role(), Role::Assistant);
    assert_eq!(query.content().as_text(), Some("Test"));
}
