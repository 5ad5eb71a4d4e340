use super::*;

#[test]
fn feature_flags_default_all_off() {
    let flags = FeatureFlags::default();
    assert!(!flags.chat);
}

#[test]
fn feature_flags_parse_enabled_chat() {
    let flags: FeatureFlags = serde_json::from_str(r#"{"chat":true}"#).expect("flags should parse");
    assert!(flags.chat);
}

#[test]
fn feature_flags_missing_field_stays_off() {
    let flags: FeatureFlags = serde_json::from_str("{}").expect("empty flags should parse");
    assert!(!flags.chat);
}

#[test]
fn feature_flags_ignore_unknown_fields() {
    let flags: FeatureFlags =
        serde_json::from_str(r#"{"chat":true,"spectators":false,"maxPlayers":8}"#)
            .expect("flags with extra fields should parse");
    assert!(flags.chat);
}
