// SPDX-License-Identifier: MPL-2.0
//! Endpoint URLs of the Supabase-compatible backend.
//!
//! Pure string building, kept apart from the client so the exact routes and
//! query filters are testable without a server.

use crate::domain::portfolio::{ProjectId, UploadFile};

/// Base URL, public key and bucket of one backend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    anon_key: String,
    bucket: String,
}

impl Endpoint {
    /// Returns `None` when the URL or key is blank.
    #[must_use]
    pub fn new(base_url: &str, anon_key: &str, bucket: &str) -> Option<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        let anon_key = anon_key.trim();
        if base_url.is_empty() || anon_key.is_empty() {
            return None;
        }
        Some(Self {
            base_url: base_url.to_string(),
            anon_key: anon_key.to_string(),
            bucket: bucket.trim().trim_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    #[must_use]
    pub fn sign_in(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }

    /// Projects, newest first.
    #[must_use]
    pub fn list_projects(&self) -> String {
        format!(
            "{}/rest/v1/projects?select=*&order=created_at.desc",
            self.base_url
        )
    }

    #[must_use]
    pub fn projects(&self) -> String {
        format!("{}/rest/v1/projects", self.base_url)
    }

    #[must_use]
    pub fn project(&self, id: ProjectId) -> String {
        format!("{}/rest/v1/projects?id=eq.{}", self.base_url, id)
    }

    /// The newest info page record only.
    #[must_use]
    pub fn current_info_page(&self) -> String {
        format!(
            "{}/rest/v1/info_page?select=*&order=id.desc&limit=1",
            self.base_url
        )
    }

    #[must_use]
    pub fn info_pages(&self) -> String {
        format!("{}/rest/v1/info_page", self.base_url)
    }

    /// Every info page record (row filters are mandatory for deletes).
    #[must_use]
    pub fn all_info_pages(&self) -> String {
        format!("{}/rest/v1/info_page?id=gt.0", self.base_url)
    }

    #[must_use]
    pub fn upload(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, object
        )
    }

    #[must_use]
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object
        )
    }
}

/// Storage object name: content hash plus extension.
///
/// Identical files map to the same object, so re-uploading a photo
/// overwrites it in place instead of piling up copies.
#[must_use]
pub fn object_name(file: &UploadFile) -> String {
    let hash = blake3::hash(&file.bytes).to_hex();
    let extension = file
        .extension()
        .or_else(|| {
            image_rs::ImageFormat::from_mime_type(&file.content_type)
                .and_then(|format| format.extensions_str().first())
                .map(|ext| (*ext).to_string())
        })
        .unwrap_or_else(|| "bin".to_string());
    format!("{hash}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://abc.supabase.co/", "anon", "portfolio").unwrap()
    }

    #[test]
    fn blank_settings_are_not_an_endpoint() {
        assert!(Endpoint::new("", "key", "portfolio").is_none());
        assert!(Endpoint::new("https://abc.supabase.co", "  ", "portfolio").is_none());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        assert_eq!(
            endpoint().projects(),
            "https://abc.supabase.co/rest/v1/projects"
        );
    }

    #[test]
    fn rest_filters() {
        let endpoint = endpoint();
        assert_eq!(
            endpoint.list_projects(),
            "https://abc.supabase.co/rest/v1/projects?select=*&order=created_at.desc"
        );
        assert_eq!(
            endpoint.project(ProjectId(42)),
            "https://abc.supabase.co/rest/v1/projects?id=eq.42"
        );
        assert_eq!(
            endpoint.current_info_page(),
            "https://abc.supabase.co/rest/v1/info_page?select=*&order=id.desc&limit=1"
        );
        assert_eq!(
            endpoint.all_info_pages(),
            "https://abc.supabase.co/rest/v1/info_page?id=gt.0"
        );
    }

    #[test]
    fn storage_urls() {
        let endpoint = endpoint();
        assert_eq!(
            endpoint.upload("f00.jpg"),
            "https://abc.supabase.co/storage/v1/object/portfolio/f00.jpg"
        );
        assert_eq!(
            endpoint.public_url("f00.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/portfolio/f00.jpg"
        );
    }

    #[test]
    fn object_name_is_content_addressed() {
        let a = UploadFile {
            file_name: "DSC_001.JPG".into(),
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".into(),
        };
        let renamed = UploadFile {
            file_name: "other.jpg".into(),
            ..a.clone()
        };
        let name = object_name(&a);
        assert!(name.ends_with(".jpg"));
        assert_eq!(name.len(), 64 + 4);
        assert_eq!(name, object_name(&renamed));
    }

    #[test]
    fn object_name_falls_back_to_mime_type() {
        let file = UploadFile {
            file_name: "clipboard".into(),
            bytes: vec![9],
            content_type: "image/png".into(),
        };
        assert!(object_name(&file).ends_with(".png"));
    }
}
