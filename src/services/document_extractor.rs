use std::borrow::Cow;

pub struct DocumentExtractor;

impl DocumentExtractor {
    /// Decodes uploaded bytes as UTF-8 text verbatim. There is no
    /// format-specific extraction: PDF/DOC/DOCX uploads are decoded the same
    /// way as plain text, which is a known scope limitation of the endpoint,
    /// not something to paper over here.
    pub fn extract_text(bytes: &[u8]) -> String {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => text.to_string(),
            Cow::Owned(text) => text,
        }
    }
}
