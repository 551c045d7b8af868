use anyhow::Result;
use threadwire::{decode_message, encode_message, ContentPart, MessageQuery, Role};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("threadwire=debug")),
        )
        .init();

    let plain = MessageQuery::new(Role::User, "What is in this picture?", None);
    println!("Plain: {}", encode_message(&plain)?);

    let attached = MessageQuery::new(
        Role::User,
        "What is in this picture?",
        Some(vec!["file-abc123".to_string()]),
    );
    println!("With attachment: {}", encode_message(&attached)?);

    let explicit = MessageQuery::with_parts(
        Role::User,
        vec![
            ContentPart::image_url("https://example.com/cat.png"),
            ContentPart::text("Describe the cat"),
        ],
    );
    let json = encode_message(&explicit)?;
    println!("Explicit parts: {}", json);
    assert_eq!(decode_message(&json)?, explicit);

    // Logged at debug and returned as an error
    let bad = r#"{"role":"user","content":[{"type":"video","video":{}}]}"#;
    if let Err(e) = decode_message(bad) {
        println!("Rejected: {}", e);
    }

    Ok(())
}
