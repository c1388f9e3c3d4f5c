//! Path utilities

use std::path::Path;

use crate::domain::model::JobId;

const FALLBACK_STEM: &str = "video";

/// Path helpers for naming job outputs
pub struct PathUtils;

impl PathUtils {
    /// `<stem>_cut_<job id>.<ext>`.
    ///
    /// The stem comes from the last segment of `source` (URL or path), the
    /// extension from the fetched file so it matches the real container.
    pub fn default_output_name(source: &str, fetched: &Path, job_id: JobId) -> String {
        let extension = fetched
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| "mp4".to_string());

        format!("{}_cut_{}.{}", Self::source_stem(source), job_id, extension)
    }

    /// File stem of a URL or path, restricted to filename-safe characters
    pub fn source_stem(source: &str) -> String {
        let without_query = source.split(['?', '#']).next().unwrap_or(source);
        let name = without_query
            .trim_end_matches('/')
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or("");
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        };

        let cleaned: String = stem
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        if cleaned.trim_matches('_').is_empty() {
            FALLBACK_STEM.to_string()
        } else {
            cleaned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_stem_from_url() {
        assert_eq!(
            PathUtils::source_stem("https://cdn.example.com/media/talk.mp4?token=abc"),
            "talk"
        );
        assert_eq!(PathUtils::source_stem("https://example.com/videos/"), "videos");
        assert_eq!(PathUtils::source_stem("https://example.com/%%.mp4"), "video");
    }

    #[test]
    fn test_source_stem_from_path() {
        assert_eq!(PathUtils::source_stem("/home/me/My Clip.mov"), "My_Clip");
        assert_eq!(PathUtils::source_stem("clip"), "clip");
        assert_eq!(PathUtils::source_stem(".hidden"), "_hidden");
    }

    #[test]
    fn test_default_output_name() {
        let job_id = JobId::new();
        let name = PathUtils::default_output_name(
            "https://example.com/a/lecture.webm",
            Path::new("/work/job/source.webm"),
            job_id,
        );
        assert_eq!(name, format!("lecture_cut_{}.webm", job_id));
    }
}
