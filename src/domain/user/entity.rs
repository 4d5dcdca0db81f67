// src/domain/user/entity.rs
use serde::{Deserialize, Serialize};

/// Public author profile as seen by the current reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub following: bool,
}

impl Profile {
    /// The profile carried by the unloaded article sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_realworld_profile() {
        let profile: Profile = serde_json::from_str(
            r#"{"username":"jake","bio":null,"image":"https://i.example/jake.png","following":true}"#,
        )
        .unwrap();
        assert_eq!(profile.username, "jake");
        assert!(profile.bio.is_none());
        assert!(profile.following);
        assert!(!profile.is_empty());
    }
}
