// SPDX-License-Identifier: MPL-2.0
//! Reading picked image files into upload payloads.

use crate::domain::portfolio::UploadFile;
use crate::error::UploadError;
use std::path::Path;

/// Largest file accepted for upload (the storage bucket's default limit).
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Extensions offered by the file pickers.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// Reads `path` and checks it holds an image.
///
/// # Errors
///
/// Returns [`UploadError`] when the file cannot be read, is too large, or
/// its content is not a recognised image format.
pub async fn read_upload(path: &Path) -> Result<UploadFile, UploadError> {
    let size = tokio::fs::metadata(path)
        .await
        .map_err(|e| UploadError::Unreadable(e.to_string()))?
        .len();
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| UploadError::Unreadable(e.to_string()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    upload_from_bytes(file_name, bytes)
}

/// Reads several files, stopping at the first failure. Order is kept.
///
/// # Errors
///
/// Returns the first [`UploadError`] met.
pub async fn read_uploads(paths: &[impl AsRef<Path>]) -> Result<Vec<UploadFile>, UploadError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_upload(path.as_ref()).await?);
    }
    Ok(files)
}

/// Builds the payload, taking the MIME type from the content rather than
/// the file name.
///
/// # Errors
///
/// Returns [`UploadError::NotAnImage`] if the content is not an image.
pub fn upload_from_bytes(file_name: String, bytes: Vec<u8>) -> Result<UploadFile, UploadError> {
    let format = image_rs::guess_format(&bytes).map_err(|_| UploadError::NotAnImage)?;
    if !format.reading_enabled() {
        return Err(UploadError::NotAnImage);
    }
    Ok(UploadFile {
        file_name,
        content_type: format.to_mime_type().to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const JPEG_HEADER: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    #[test]
    fn png_content_is_detected() {
        let file = upload_from_bytes("shot.jpg".into(), PNG_HEADER.to_vec()).unwrap();
        assert_eq!(file.content_type, "image/png");
        assert_eq!(file.file_name, "shot.jpg");
    }

    #[test]
    fn jpeg_content_is_detected() {
        let file = upload_from_bytes("a.jpeg".into(), JPEG_HEADER.to_vec()).unwrap();
        assert_eq!(file.content_type, "image/jpeg");
    }

    #[test]
    fn text_is_not_an_image() {
        assert_eq!(
            upload_from_bytes("notes.jpg".into(), b"hello world".to_vec()),
            Err(UploadError::NotAnImage)
        );
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let mut tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        tmp.write_all(PNG_HEADER).unwrap();

        let file = read_upload(tmp.path()).await.unwrap();
        assert_eq!(file.bytes, PNG_HEADER);
        assert!(file.file_name.ends_with(".png"));
    }

    #[tokio::test]
    async fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_upload(&dir.path().join("gone.png")).await;
        assert!(matches!(result, Err(UploadError::Unreadable(_))));
    }

    #[tokio::test]
    async fn batch_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<_> = ["b.png", "a.png"]
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::write(&path, PNG_HEADER).unwrap();
                path
            })
            .collect();

        let files = read_uploads(&paths).await.unwrap();
        let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.png", "a.png"]);
    }
}
