// crates/logging/tests/json_format.rs
mod support;

use logging::{LogFormat, SubscriberConfig, subscriber_with_writer};
use serde_json::Value;
use support::Captured;
use tracing::subscriber::with_default;

#[test]
fn json_formatting_works() {
    let out = Captured::default();
    let writer = out.clone();
    let cfg = SubscriberConfig::builder()
        .format(LogFormat::Json)
        .verbose(1)
        .build();
    let sub = subscriber_with_writer(cfg, move || writer.clone());
    with_default(sub, || {
        tracing::info!(target: "test", foo = 1, "hello");
    });
    let contents = out.contents();
    let v: Value = serde_json::from_str(contents.trim_end()).unwrap();
    assert_eq!(v["fields"]["message"], "hello");
    assert_eq!(v["fields"]["foo"], 1);
    assert_eq!(v["level"], "INFO");
    assert_eq!(v["target"], "test");
    assert!(v.get("timestamp").is_none());
}
