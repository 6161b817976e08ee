//! Markdown link fragments for attachments.
//!
//! The writer references attachments by literal markdown links in the source
//! buffer: `![pic.png](pic.png)` for images, `[doc.pdf](doc.pdf)` for
//! everything else. Removal matches the exact fragment that insertion
//! produced, so both forms live here.

/// Fragment used when removing or matching an attachment reference.
pub fn removal_fragment(filename: &str, is_image: bool) -> String {
    let bang = if is_image { "!" } else { "" };
    format!("{bang}[{filename}]({filename})")
}

/// Fragment used when inserting an attachment reference.
///
/// Image insertions carry a leading newline so the image starts its own line.
pub fn insertion_fragment(filename: &str, is_image: bool) -> String {
    if is_image {
        format!("\n{}", removal_fragment(filename, true))
    } else {
        removal_fragment(filename, false)
    }
}
