use crate::config::MarkConfig;

/// One run of tokenized text.
///
/// `text` is `None` only for an empty marked span (`[]`); plain segments always carry text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Segment {
    pub text: Option<String>,
    /// True if the segment came from a bracket-delimited span.
    pub mark: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            mark: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            mark: true,
        }
    }

    pub fn empty_mark() -> Self {
        Self {
            text: None,
            mark: true,
        }
    }

    pub fn is_empty_mark(&self) -> bool {
        self.mark && self.text.is_none()
    }

    pub fn as_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Rebuilds the run this segment was scanned from.
    pub fn surface_with(&self, open: char, close: char) -> String {
        if !self.mark {
            return self.as_str().to_string();
        }

        let mut surface = String::with_capacity(self.as_str().len() + 2);
        surface.push(open);
        surface.push_str(self.as_str());
        surface.push(close);
        surface
    }

    pub fn surface(&self) -> String {
        self.surface_with('[', ']')
    }
}

pub fn reconstruct(segments: &[Segment]) -> String {
    reconstruct_with(segments, &MarkConfig::default())
}

pub fn reconstruct_with(segments: &[Segment], config: &MarkConfig) -> String {
    segments
        .iter()
        .map(|segment| segment.surface_with(config.open, config.close))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_surface() {
        assert_eq!(Segment::plain("hello").surface(), "hello");
    }

    #[test]
    fn test_marked_surface() {
        assert_eq!(Segment::marked("abc").surface(), "[abc]");
    }

    #[test]
    fn test_empty_mark_surface() {
        let segment = Segment::empty_mark();
        assert!(segment.is_empty_mark());
        assert_eq!(segment.as_str(), "");
        assert_eq!(segment.surface(), "[]");
    }

    #[test]
    fn test_marked_empty_string_is_not_empty_mark() {
        // Only the absence of text denotes `[]`
        assert!(!Segment::marked("").is_empty_mark());
    }

    #[test]
    fn test_surface_with_custom_delimiters() {
        assert_eq!(Segment::marked("x").surface_with('{', '}'), "{x}");
        assert_eq!(Segment::empty_mark().surface_with('<', '>'), "<>");
    }

    #[test]
    fn test_reconstruct_mixed() {
        let segments = vec![
            Segment::plain("x"),
            Segment::empty_mark(),
            Segment::plain("y"),
            Segment::marked("z"),
        ];
        assert_eq!(reconstruct(&segments), "x[]y[z]");
    }

    #[test]
    fn test_reconstruct_with_config() {
        let config = MarkConfig::default().with_delimiters('<', '>');
        let segments = vec![Segment::marked("a"), Segment::plain(" b")];
        assert_eq!(reconstruct_with(&segments, &config), "<a> b");
    }

    #[test]
    fn test_reconstruct_empty() {
        assert_eq!(reconstruct(&[]), "");
    }
}
