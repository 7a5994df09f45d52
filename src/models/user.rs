use serde::{Deserialize, Serialize};

/// Profile returned by the auth gateway alongside the token.
///
/// The gateway guarantees `username`; anything else it sends (display name,
/// role, ...) is carried through the flattened map so it survives a
/// save/load round trip without this client having to know about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_round_trip() {
        let raw = r#"{"username":"akash","role":"admin","team":"platform"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.username, "akash");
        assert_eq!(profile.extra["role"], "admin");

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["team"], "platform");
    }

    #[test]
    fn missing_username_is_rejected() {
        let raw = r#"{"role":"admin"}"#;
        assert!(serde_json::from_str::<UserProfile>(raw).is_err());
    }
}
