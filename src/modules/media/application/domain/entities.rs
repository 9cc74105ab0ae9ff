use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

/// Destination directories an upload may target. Nothing else is writable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UploadCategory {
    Blog,
    Projects,
    Certifications,
    Training,
    Profile,
}

impl UploadCategory {
    pub const ALL: [UploadCategory; 5] = [
        UploadCategory::Blog,
        UploadCategory::Projects,
        UploadCategory::Certifications,
        UploadCategory::Training,
        UploadCategory::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadCategory::Blog => "blog",
            UploadCategory::Projects => "projects",
            UploadCategory::Certifications => "certifications",
            UploadCategory::Training => "training",
            UploadCategory::Profile => "profile",
        }
    }
}

impl fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid upload type: {0}")]
pub struct InvalidUploadType(pub String);

impl FromStr for UploadCategory {
    type Err = InvalidUploadType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UploadCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidUploadType(s.to_string()))
    }
}

/// A file part as received from the client.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    /// Bytes the client sent; may exceed `bytes.len()` when the stream was cut off.
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoredImage {
    /// Public path under `/images`
    #[schema(example = "/images/blog/1735689600000-123456789.png")]
    pub url: String,
}
