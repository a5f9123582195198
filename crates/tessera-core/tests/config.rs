use tessera_core::config::{ENV_MAX_CAPACITY, ENV_MAX_RETAINED, PoolConfig};
use tessera_core::error::CoreError;

#[test]
fn missing_variables_keep_defaults() {
    let config = PoolConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, PoolConfig::default());
}

#[test]
fn variables_override_defaults() {
    let config = PoolConfig::from_lookup(|key| match key {
        ENV_MAX_RETAINED => Some("8".to_string()),
        ENV_MAX_CAPACITY => Some(" 4096 ".to_string()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.max_retained, 8);
    assert_eq!(config.max_capacity, 4096);
}

#[test]
fn invalid_value_is_rejected() {
    let err = PoolConfig::from_lookup(|key| (key == ENV_MAX_RETAINED).then(|| "lots".to_string()))
        .unwrap_err();

    assert!(matches!(err, CoreError::InvalidConfig(msg) if msg.contains(ENV_MAX_RETAINED)));
}

#[test]
fn deserializes_with_partial_fields() {
    let config: PoolConfig = serde_json::from_str(r#"{ "max_retained": 3 }"#).unwrap();
    assert_eq!(config.max_retained, 3);
    assert_eq!(config.max_capacity, PoolConfig::default().max_capacity);
}
