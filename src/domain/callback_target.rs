use std::fmt;

use reqwest::Url;

/// Caller-supplied URL that receives the terminal outcome in asynchronous mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackTarget(Url);

impl CallbackTarget {
    pub fn parse(raw: &str) -> Result<Self, InvalidCallbackTarget> {
        let url = Url::parse(raw.trim())
            .map_err(|e| InvalidCallbackTarget(format!("{}: {}", raw.trim(), e)))?;

        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(InvalidCallbackTarget(format!(
                "unsupported scheme '{}', expected http or https",
                other
            ))),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CallbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid callbackUrl: {0}")]
pub struct InvalidCallbackTarget(pub String);
