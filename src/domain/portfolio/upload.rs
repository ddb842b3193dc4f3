// SPDX-License-Identifier: MPL-2.0
//! Files picked in the admin panel, ready to upload.

/// An image file read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name as picked by the user.
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// MIME type, e.g. `image/jpeg`.
    pub content_type: String,
}

impl UploadFile {
    /// Lower-case extension of the original file name, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("content_type", &self.content_type)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.into(),
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".into(),
        }
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file("IMG_0001.JPG").extension().as_deref(), Some("jpg"));
        assert_eq!(file("a.b.webp").extension().as_deref(), Some("webp"));
    }

    #[test]
    fn missing_extension_is_none() {
        assert!(file("README").extension().is_none());
        assert!(file(".hidden").extension().is_none());
        assert!(file("trailing.").extension().is_none());
    }

    #[test]
    fn debug_omits_bytes() {
        let text = format!("{:?}", file("a.jpg"));
        assert!(text.contains("len: 3"));
        assert!(!text.contains("[1, 2, 3]"));
    }
}
