/// Browser Profiles
///
/// Each profile is a device/browser fingerprint the rotator can present:
/// - `Windows` → Chrome
/// - `MacOS` → Safari
/// - `IOS` → Safari on iPhone
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrowserProfile {
    /// Chrome on Windows (most popular desktop platform)
    Windows,

    /// Safari on macOS
    MacOS,

    /// Safari on iPhone
    IOS,
}

impl BrowserProfile {
    pub const ALL: [BrowserProfile; 3] = [Self::Windows, Self::MacOS, Self::IOS];

    pub fn user_agent(&self) -> &'static str {
        match self {
            Self::Windows => "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            Self::MacOS => "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_3) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
            Self::IOS => "Mozilla/5.0 (iPhone; CPU iPhone OS 17_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        }
    }

    /// User agents of every profile, default profile first.
    pub fn default_pool() -> Vec<String> {
        Self::ALL.iter().map(|p| p.user_agent().to_string()).collect()
    }
}
