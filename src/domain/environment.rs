/// The browser identity an attempt runs under, captured once at page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEnvironment {
    pub user_agent: String,
}

// Browsers that embed "Chrome" in their user agent but ship their own
// payment stack (or none at all).
const IMPOSTOR_TOKENS: &[&str] = &["Edg/", "OPR/", "SamsungBrowser/", "Firefox/", "UCBrowser/"];

const MIN_CHROME_MAJOR: u32 = 60;

impl ClientEnvironment {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// Whether this device/browser combination is expected to support the
    /// wallet's deep-link fallback: Chrome 60+ on Android.
    ///
    /// Advisory only. The page-load hook uses it to decide whether to show a
    /// hint; it never gates an actual attempt.
    pub fn supports_wallet_deep_link(&self) -> bool {
        let ua = &self.user_agent;
        if !ua.contains("Android") {
            return false;
        }
        if IMPOSTOR_TOKENS.iter().any(|token| ua.contains(token)) {
            return false;
        }
        chrome_major_version(ua).is_some_and(|major| major >= MIN_CHROME_MAJOR)
    }
}

fn chrome_major_version(user_agent: &str) -> Option<u32> {
    let rest = user_agent.split("Chrome/").nth(1)?;
    let major = rest.split(['.', ' ']).next()?;
    major.parse().ok()
}
