//! Embed-markup rendering for story content.
//!
//! Story content is free text with an inline token grammar for media embeds:
//! the exact literals `[[IMG:url]]` and `[[VID:url]]` mark the point where an
//! image or video should appear in the reading flow. [`MarkupService::render`]
//! splits a content string into an ordered sequence of [`Segment`]s so the
//! reading surface can interleave paragraphs and media exactly as authored.
//!
//! The grammar match must be exact before a token is extracted: an unterminated
//! `[[IMG:` or an unknown tag name is not a token and flows through as literal
//! text. Rendering never fails.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one embed token: `[[IMG:url]]` or `[[VID:url]]`.
///
/// The url is the shortest run of characters up to the closing `]]`, and cannot
/// cross a line break (`.` does not match `\n`). These are the semantics any
/// previously authored content was written against, so the pattern is part of
/// the stored-content contract.
static EMBED_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(IMG|VID):(.*?)\]\]").expect("embed token pattern is valid"));

/// One renderable unit of a story's content.
///
/// Derived at render time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// One non-blank line of plain text.
    Paragraph(String),
    /// An embedded image, by url.
    Image(String),
    /// An embedded video, by url.
    Video(String),
}

/// The kind of media an embed token carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Returns the tag name used inside the token literal.
    pub fn tag(&self) -> &'static str {
        match self {
            MediaKind::Image => "IMG",
            MediaKind::Video => "VID",
        }
    }

    /// Builds the literal embed token for `url`.
    ///
    /// The write-side inverse of [`MarkupService::render`], used by the editor
    /// buffer when splicing media into draft content. No url validation is
    /// performed; any string is embedded verbatim.
    pub fn token(&self, url: &str) -> String {
        format!("[[{}:{}]]", self.tag(), url)
    }
}

/// Service for rendering story content into display segments.
#[derive(Debug, Clone, Default)]
pub struct MarkupService;

impl MarkupService {
    /// Creates a new `MarkupService` instance.
    pub fn new() -> Self {
        Self
    }

    /// Splits `content` into an ordered sequence of display segments.
    ///
    /// The content is split on embed tokens non-destructively: both the
    /// in-between plain-text spans and the tokens appear in the output, in
    /// original left-to-right order. Each recognised token becomes an
    /// [`Segment::Image`] or [`Segment::Video`]; each plain-text span is split
    /// further on newlines, and every non-blank line becomes one
    /// [`Segment::Paragraph`]. Blank lines contribute no segment — they act
    /// purely as paragraph separators.
    ///
    /// This is a pure function: it never fails, and identical input always
    /// yields an identical sequence.
    pub fn render(&self, content: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for capture in EMBED_TOKEN.captures_iter(content) {
            let token = capture.get(0).expect("capture group 0 always exists");
            push_paragraphs(&content[cursor..token.start()], &mut segments);

            let url = capture[2].to_string();
            match &capture[1] {
                "IMG" => segments.push(Segment::Image(url)),
                _ => segments.push(Segment::Video(url)),
            }

            cursor = token.end();
        }

        push_paragraphs(&content[cursor..], &mut segments);
        segments
    }
}

/// Emits one `Paragraph` per non-blank line of `text`, in order.
fn push_paragraphs(text: &str, segments: &mut Vec<Segment>) {
    for line in text.split('\n') {
        if !line.trim().is_empty() {
            segments.push(Segment::Paragraph(line.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_text_one_paragraph_per_line() {
        let service = MarkupService::new();
        let segments = service.render("First line\nSecond line\nThird line");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("First line".to_string()),
                Segment::Paragraph("Second line".to_string()),
                Segment::Paragraph("Third line".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_empty_content_yields_no_segments() {
        let service = MarkupService::new();
        assert!(service.render("").is_empty());
    }

    #[test]
    fn test_render_extracts_image_token_between_paragraphs() {
        let service = MarkupService::new();
        let segments = service.render("A\n[[IMG:http://x/1.png]]\nB");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("A".to_string()),
                Segment::Image("http://x/1.png".to_string()),
                Segment::Paragraph("B".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_extracts_video_token() {
        let service = MarkupService::new();
        let segments = service.render("[[VID:http://x/clip.mp4]]");
        assert_eq!(segments, vec![Segment::Video("http://x/clip.mp4".to_string())]);
    }

    #[test]
    fn test_render_token_mid_line_keeps_surrounding_text() {
        let service = MarkupService::new();
        let segments = service.render("before [[IMG:http://x/1.png]] after");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("before ".to_string()),
                Segment::Image("http://x/1.png".to_string()),
                Segment::Paragraph(" after".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_multiple_tokens_in_order() {
        let service = MarkupService::new();
        let segments =
            service.render("[[IMG:http://x/1.png]][[VID:http://x/2.mp4]][[IMG:http://x/3.png]]");
        assert_eq!(
            segments,
            vec![
                Segment::Image("http://x/1.png".to_string()),
                Segment::Video("http://x/2.mp4".to_string()),
                Segment::Image("http://x/3.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_unterminated_token_passes_through_as_text() {
        let service = MarkupService::new();
        let segments = service.render("[[IMG:no-close");
        assert_eq!(segments, vec![Segment::Paragraph("[[IMG:no-close".to_string())]);
    }

    #[test]
    fn test_render_unknown_tag_passes_through_as_text() {
        let service = MarkupService::new();
        let segments = service.render("[[GIF:http://x/1.gif]]");
        assert_eq!(
            segments,
            vec![Segment::Paragraph("[[GIF:http://x/1.gif]]".to_string())]
        );
    }

    #[test]
    fn test_render_token_does_not_cross_line_breaks() {
        let service = MarkupService::new();
        let segments = service.render("[[IMG:http://x/\n1.png]]");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("[[IMG:http://x/".to_string()),
                Segment::Paragraph("1.png]]".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_collapses_blank_lines() {
        let service = MarkupService::new();
        let segments = service.render("A\n\n\nB");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("A".to_string()),
                Segment::Paragraph("B".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_whitespace_only_lines_are_blank() {
        let service = MarkupService::new();
        let segments = service.render("A\n   \t\nB");
        assert_eq!(
            segments,
            vec![
                Segment::Paragraph("A".to_string()),
                Segment::Paragraph("B".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let service = MarkupService::new();
        let content = "Intro\n\n[[IMG:http://x/1.png]]\nOutro\n[[VID:http://x/2.mp4]]";
        assert_eq!(service.render(content), service.render(content));
    }

    #[test]
    fn test_media_kind_token_literals() {
        assert_eq!(
            MediaKind::Image.token("http://x/1.png"),
            "[[IMG:http://x/1.png]]"
        );
        assert_eq!(
            MediaKind::Video.token("http://x/2.mp4"),
            "[[VID:http://x/2.mp4]]"
        );
    }

    #[test]
    fn test_token_then_render_round_trip() {
        let service = MarkupService::new();
        let token = MediaKind::Image.token("http://x/1.png");
        assert_eq!(
            service.render(&token),
            vec![Segment::Image("http://x/1.png".to_string())]
        );
    }
}
