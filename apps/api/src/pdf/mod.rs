//! PDF-to-image adapter.
//!
//! Rasterizes the first page of an uploaded resume and packages it twice:
//! raw JPEG bytes for the on-screen preview, and a base64 payload for the
//! LLM request. Everything stays in memory; nothing is written to disk.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{codecs::jpeg::JpegEncoder, DynamicImage};
use pdfium_render::prelude::*;
use thiserror::Error;

/// Target width in pixels for the rasterized page. Height follows the
/// page's aspect ratio.
const RENDER_WIDTH: i32 = 1000;
const JPEG_QUALITY: u8 = 85;

/// MIME type of every payload this adapter produces.
pub const JPEG_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Could not load PDFium library: {0}")]
    Library(String),

    #[error("Could not rasterize PDF: {0}")]
    Rasterize(String),

    #[error("Could not encode page image: {0}")]
    Encode(#[from] image::ImageError),
}

/// The exact image structure transmitted to the AI service.
#[derive(Debug, Clone)]
pub struct InlinePayload {
    /// Always `image/jpeg`.
    pub mime_type: String,
    /// Base64-encoded JPEG bytes (standard alphabet, padded).
    pub data: String,
}

/// First page of an uploaded resume, ready for preview and transmission.
/// Derived per interaction and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ResumeSnapshot {
    /// Raw JPEG bytes served to the preview region.
    pub jpeg: Vec<u8>,
    /// Transport payload for the generate call.
    pub payload: InlinePayload,
}

/// Binds PDFium dynamically: a library next to the binary wins, then the
/// system-wide installation.
fn bind_pdfium() -> Result<Pdfium, PdfError> {
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| PdfError::Library(format!("{e:?}")))?;
    Ok(Pdfium::new(bindings))
}

/// Rasterizes page 1 of the uploaded PDF at the default resolution.
/// Pages beyond the first never influence the output, so any page count is
/// handled uniformly. Empty input fails immediately.
pub fn rasterize_first_page(bytes: &[u8]) -> Result<DynamicImage, PdfError> {
    if bytes.is_empty() {
        return Err(PdfError::MissingFile);
    }

    let pdfium = bind_pdfium()?;
    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| PdfError::Rasterize(format!("{e:?}")))?;
    let first_page = document
        .pages()
        .first()
        .map_err(|e| PdfError::Rasterize(format!("{e:?}")))?;

    let config = PdfRenderConfig::new().set_target_width(RENDER_WIDTH);
    let bitmap = first_page
        .render_with_config(&config)
        .map_err(|e| PdfError::Rasterize(format!("{e:?}")))?;

    Ok(bitmap.as_image())
}

/// Encodes a rasterized page as an in-memory JPEG and wraps it in the
/// transport payload.
pub fn encode_snapshot(page: &DynamicImage) -> Result<ResumeSnapshot, PdfError> {
    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder.encode_image(&page.to_rgb8())?;

    let data = STANDARD.encode(&jpeg);
    Ok(ResumeSnapshot {
        jpeg,
        payload: InlinePayload {
            mime_type: JPEG_MIME.to_string(),
            data,
        },
    })
}

/// Full adapter contract: uploaded bytes in, preview plus payload out.
pub fn prepare_resume(bytes: &[u8]) -> Result<ResumeSnapshot, PdfError> {
    let page = rasterize_first_page(bytes)?;
    encode_snapshot(&page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_is_missing_file() {
        let err = rasterize_first_page(&[]).unwrap_err();
        assert!(matches!(err, PdfError::MissingFile));
    }

    #[test]
    fn test_snapshot_payload_is_jpeg_base64() {
        let page = DynamicImage::new_rgb8(40, 60);
        let snapshot = encode_snapshot(&page).unwrap();

        assert_eq!(snapshot.payload.mime_type, "image/jpeg");
        // JPEG SOI marker on the preview bytes.
        assert_eq!(&snapshot.jpeg[..2], &[0xFF, 0xD8]);
        // The transport payload decodes back to the exact preview bytes.
        let decoded = STANDARD.decode(&snapshot.payload.data).unwrap();
        assert_eq!(decoded, snapshot.jpeg);
    }

    #[test]
    fn test_identical_pages_encode_identically() {
        let page = DynamicImage::new_rgb8(40, 60);
        let a = encode_snapshot(&page).unwrap();
        let b = encode_snapshot(&page).unwrap();
        assert_eq!(a.payload.data, b.payload.data);
    }
}
