use std::fmt;
use std::path::Path;

/// Extraction strategy selected for an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Video,
    Pdf,
    Image,
}

impl Lane {
    /// Classifies an upload by its extension first, then by its declared content type.
    ///
    /// Returns `None` when neither signal names a supported lane.
    pub fn classify(filename: &str, content_type: Option<&str>) -> Option<Self> {
        extension_of(filename)
            .as_deref()
            .and_then(Self::from_extension)
            .or_else(|| content_type.and_then(Self::from_content_type))
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".mp4" => Some(Self::Video),
            ".pdf" => Some(Self::Pdf),
            ".jpg" | ".jpeg" | ".png" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let content_type = content_type.trim().to_ascii_lowercase();
        if content_type.contains("video") {
            Some(Self::Video)
        } else if content_type == "application/pdf" {
            Some(Self::Pdf)
        } else if content_type.starts_with("image/") {
            Some(Self::Image)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Image => "image",
        }
    }

    pub fn produces_transcript(&self) -> bool {
        matches!(self, Self::Video)
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased extension including the leading dot, e.g. `.pdf`.
pub fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}
