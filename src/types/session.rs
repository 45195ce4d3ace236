use serde::{Deserialize, Serialize};

/// Session types accepted by the service.
pub const SESSION_TYPE_DESKTOP: i32 = 1;
pub const SESSION_TYPE_WEB: i32 = 2;
pub const SESSION_TYPE_WS: i32 = 3;

/// An authenticated session as returned by `createSession`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSession {
    pub session_id: String,
    pub username: String,
    pub user_id: i64,
    pub session_type: i32,
}

impl RemoteSession {
    pub fn new(session_id: impl Into<String>, username: impl Into<String>, user_id: i64) -> Self {
        Self {
            session_id: session_id.into(),
            username: username.into(),
            user_id,
            session_type: SESSION_TYPE_WS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_round_trip() {
        let session = RemoteSession::new("s-abc", "admin", 1);
        let json = serde_json::to_string(&session).unwrap();
        let back: RemoteSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, back);
        assert_eq!(back.session_type, SESSION_TYPE_WS);
    }
}
