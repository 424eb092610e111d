//! Media library classification and display helpers.

/// Storage bucket holding media library uploads.
pub const MEDIA_BUCKET: &str = "media";

pub const MEDIA_IMAGE: &str = "image";
pub const MEDIA_VIDEO: &str = "video";

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Kind of media library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    /// Classify an upload by its MIME type. Anything that is not `video/*`
    /// is filed as an image.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.trim().to_ascii_lowercase().starts_with("video/") {
            Self::Video
        } else {
            Self::Image
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => MEDIA_IMAGE,
            Self::Video => MEDIA_VIDEO,
        }
    }
}

/// Human-readable size using 1024-based units, at most two decimals.
///
/// ```
/// use unbenched_core::media::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(245_760), "240 KB");
/// assert_eq!(format_file_size(1_536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rendered = format!("{value:.2}");
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{rendered} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_content_types() {
        assert_eq!(MediaType::from_content_type("video/mp4"), MediaType::Video);
        assert_eq!(MediaType::from_content_type("VIDEO/webm"), MediaType::Video);
        assert_eq!(MediaType::from_content_type("image/png"), MediaType::Image);
        assert_eq!(
            MediaType::from_content_type("application/octet-stream"),
            MediaType::Image
        );
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(512_000), "500 KB");
        assert_eq!(format_file_size(15_728_640), "15 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn sizes_beyond_gigabytes_stay_in_gigabytes() {
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }
}
