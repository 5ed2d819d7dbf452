//! Triple-backtick code fence splitting for message rendering.

/// A rendered segment of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Prose outside any fence
    Text(String),
    /// A fenced code block
    Code {
        /// Language tag from the opening fence, if any
        lang: Option<String>,
        /// The code body, without the fence lines
        body: String,
    },
}

/// Split message content on triple-backtick fences.
///
/// An unclosed fence runs to the end of the message. Fence lines themselves
/// are not part of any segment.
///
/// # Examples
///
/// ```
/// use palaver_tui::{Segment, split_fences};
///
/// let segments = split_fences("Use this:\n```rust\nfn main() {}\n```\nDone.");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(
///     segments[1],
///     Segment::Code { lang: Some("rust".to_string()), body: "fn main() {}".to_string() }
/// );
/// ```
pub fn split_fences(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut in_code = false;
    let mut lang: Option<String> = None;

    let flush = |segments: &mut Vec<Segment>, buffer: &mut Vec<&str>, in_code: bool, lang: &mut Option<String>| {
        if in_code {
            segments.push(Segment::Code {
                lang: lang.take(),
                body: buffer.join("\n"),
            });
        } else if !buffer.is_empty() {
            segments.push(Segment::Text(buffer.join("\n")));
        }
        buffer.clear();
    };

    for line in content.lines() {
        if let Some(rest) = line.trim_start().strip_prefix("```") {
            flush(&mut segments, &mut buffer, in_code, &mut lang);
            if !in_code {
                let tag = rest.trim();
                lang = (!tag.is_empty()).then(|| tag.to_string());
            }
            in_code = !in_code;
        } else {
            buffer.push(line);
        }
    }
    flush(&mut segments, &mut buffer, in_code, &mut lang);

    segments
}
