use std::fmt;
use thiserror::Error;

/// 取得失敗。`Display` がそのまま埋め込み先に出力される文字列になる
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error fetching post from Bluesky: {0}")]
    Network(#[from] reqwest::Error),

    #[error(
        "Error fetching post from Bluesky (status: {}). Details: {}",
        status_line(.status),
        .details
    )]
    Upstream { status: u16, details: ErrorDetails },

    /// 2xx だが本文がフィードとして読めなかった
    #[error(
        "Error fetching post from Bluesky (status: {}). Details: {}",
        status_line(.status),
        .body
    )]
    MalformedPayload {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error fetching post from Bluesky: invalid limit {0:?}")]
    InvalidLimit(String),

    #[error("Error fetching post from Bluesky: {0}")]
    Runtime(#[source] std::io::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } | Self::MalformedPayload { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidLimit(_) | Self::Runtime(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}

/// "400 Bad Request" のようにステータスコードと理由句を並べる
fn status_line(status: &u16) -> String {
    match reqwest::StatusCode::from_u16(*status)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

/// エラー本文。JSON として読めればその値、読めなければ生のテキスト
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    Structured(serde_json::Value),
    Raw(String),
}

impl ErrorDetails {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str(body) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Raw(body.to_string()),
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured(value) => write!(f, "{}", value),
            Self::Raw(text) => f.write_str(text),
        }
    }
}
