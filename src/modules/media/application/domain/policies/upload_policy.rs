use std::path::Path;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
    pub allowed_extensions: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileTypeError {
    #[error("Invalid mime type: {0}")]
    InvalidMimeType(String),

    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),

    #[error("Mime type does not match file extension (mime={mime_type}, ext={ext})")]
    MimeExtensionMismatch { mime_type: String, ext: String },
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/jpg",
        "image/png",
        "image/webp",
        "image/gif",
    ];
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "webp", "gif"];

    /// Size cap from `UPLOAD_MAX_BYTES`, falling back to 5 MiB.
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("UPLOAD_MAX_BYTES")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    pub fn exceeds_limit(&self, size_bytes: u64) -> bool {
        size_bytes > self.max_file_size_bytes
    }

    /// Checks MIME type, extension and that the two agree. Returns the
    /// lowercased extension without the dot.
    pub fn check_file_type(&self, file_name: &str, mime_type: &str) -> Result<String, FileTypeError> {
        let mime_type = mime_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&mime_type.as_str()) {
            return Err(FileTypeError::InvalidMimeType(mime_type));
        }

        let ext = ext_lower(file_name);
        if !self.allowed_extensions.contains(&ext.as_str()) {
            return Err(FileTypeError::InvalidExtension(ext));
        }

        let matches = match mime_type.as_str() {
            "image/jpeg" | "image/jpg" => matches!(ext.as_str(), "jpg" | "jpeg"),
            "image/png" => ext == "png",
            "image/webp" => ext == "webp",
            "image/gif" => ext == "gif",
            _ => false,
        };
        if !matches {
            return Err(FileTypeError::MimeExtensionMismatch { mime_type, ext });
        }

        Ok(ext)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }
}

fn ext_lower(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}
