//! Text extraction — turns raw upload bytes into a flat text block.
//!
//! Documents are treated as a linear sequence of text lines; visual layout
//! is discarded. PDF decoding is attempted first, with a lossy UTF-8
//! fallback for everything else.

/// Minimum number of non-whitespace characters for extracted text to count
/// as readable.
pub const MIN_SIGNIFICANT_CHARS: usize = 10;

/// Counts non-whitespace characters.
pub fn significant_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Extracts text from an uploaded document.
///
/// Tries PDF decoding first (pages concatenated in order). If decoding fails,
/// or the result has fewer than [`MIN_SIGNIFICANT_CHARS`] non-whitespace
/// characters, the raw bytes are decoded as UTF-8 with undecodable sequences
/// dropped. Decoding failures are swallowed; the caller decides what an
/// effectively empty result means.
pub fn extract_text(bytes: &[u8]) -> String {
    if let Ok(text) = pdf_extract::extract_text_from_mem(bytes) {
        if significant_chars(&text) >= MIN_SIGNIFICANT_CHARS {
            return text;
        }
    }
    String::from_utf8_lossy(bytes).replace('\u{FFFD}', "")
}
