use crate::config::MOCK_ONLINE_PLAYERS;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerStatus {
    Online,
    Offline,
}

impl ServerStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServerStatus::Online => "Online",
            ServerStatus::Offline => "Offline",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    pub online_players: u32,
    pub server_time: String,
    pub status: ServerStatus,
}

impl ServerInfo {
    /// There is no server to ask; the numbers are fixed. An offline server
    /// reports nobody connected.
    pub fn mock(now: DateTime<Utc>, status: ServerStatus) -> Self {
        let online_players = match status {
            ServerStatus::Online => MOCK_ONLINE_PLAYERS,
            ServerStatus::Offline => 0,
        };
        Self {
            online_players,
            server_time: now.format("%H:%M:%S").to_string(),
            status,
        }
    }
}
