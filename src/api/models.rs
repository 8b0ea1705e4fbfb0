use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Hindi,
    Bhojpuri,
    English,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Bhojpuri => "Bhojpuri",
            Self::English => "English",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(alias = "coverUrl")]
    pub cover_url: String,
    /// Display duration, `m:ss`.
    pub duration: String,
    #[serde(alias = "audioUrl")]
    pub audio_url: String,
    pub genre: String,
    #[serde(default)]
    pub language: Option<Language>,
}

impl Track {
    /// Nominal length in seconds, parsed from the display duration.
    pub fn duration_secs(&self) -> Option<u32> {
        parse_duration(&self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(alias = "coverUrl")]
    pub cover_url: String,
    /// Track ids in play order. Ids are not required to resolve.
    pub songs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub liked_song_ids: HashSet<String>,
    pub playlists: Vec<Playlist>,
    pub signed_in_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: &str, playlists: Vec<Playlist>) -> Self {
        let username = username.trim().to_string();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            avatar_url: format!(
                "https://picsum.photos/seed/{}/100/100",
                urlencoding::encode(&username)
            ),
            username,
            liked_song_ids: HashSet::new(),
            playlists,
            signed_in_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Parse a `m:ss` (or `h:mm:ss`) display string into seconds.
pub fn parse_duration(value: &str) -> Option<u32> {
    let parts = value.trim().split(':').collect::<Vec<_>>();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let mut total = 0u32;
    for (idx, part) in parts.iter().enumerate() {
        let number = part.parse::<u32>().ok()?;
        if idx > 0 && number >= 60 {
            return None;
        }
        total = total.checked_mul(60)?.checked_add(number)?;
    }
    Some(total)
}

pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_durations() {
        assert_eq!(parse_duration("3:45"), Some(225));
        assert_eq!(parse_duration("3:20"), Some(200));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration(" 0:07 "), Some(7));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("245"), None);
        assert_eq!(parse_duration("3:75"), None);
        assert_eq!(parse_duration("a:bc"), None);
    }

    #[test]
    fn formats_durations_like_the_player_bar() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(225), "3:45");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn new_user_starts_with_empty_likes() {
        let user = User::new("  sludge fan ", Vec::new());
        assert_eq!(user.username, "sludge fan");
        assert!(user.liked_song_ids.is_empty());
        assert!(user.avatar_url.contains("sludge%20fan"));
    }

    #[test]
    fn chat_roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
