//! Segment-level account of a transliteration.
//!
//! A `Composition` is the transliterated text plus the ordered segments that
//! produced it. Each segment ties a byte range of the source to a byte range
//! of the output, so callers can highlight or explain individual conversions.

use std::ops::Range;

/// Which rule produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Multi-character cluster table entry.
    Cluster,
    /// Base character with no following vowel sign.
    Base,
    /// Base character followed by a dependent vowel sign.
    BaseWithSign,
    /// Vowel sign with no base character in front of it.
    VowelSign,
    /// Character found in no table, copied unchanged.
    Passthrough,
}

/// One step of the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Byte range in the source text
    pub source: Range<usize>,
    /// Byte range in the output text
    pub output: Range<usize>,
    pub kind: SegmentKind,
}

/// Transliterated text with its segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    text: String,
    segments: Vec<Segment>,
}

impl Composition {
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            text: String::with_capacity(bytes),
            segments: Vec::new(),
        }
    }

    /// Append the output for the source bytes `source`.
    pub fn push(&mut self, source: Range<usize>, output: &str, kind: SegmentKind) {
        let start = self.text.len();
        self.text.push_str(output);
        self.segments.push(Segment {
            source,
            output: start..self.text.len(),
            kind,
        });
    }

    /// Append a base value followed by a vowel sign value as one segment.
    pub fn push_pair(&mut self, source: Range<usize>, base: &str, sign: &str) {
        let start = self.text.len();
        self.text.push_str(base);
        self.text.push_str(sign);
        self.segments.push(Segment {
            source,
            output: start..self.text.len(),
            kind: SegmentKind::BaseWithSign,
        });
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Output text of one segment.
    pub fn output_of(&self, segment: &Segment) -> &str {
        &self.text[segment.output.clone()]
    }

    /// Pair each segment's source slice with its output slice.
    ///
    /// `source` must be the text this composition was built from.
    pub fn pairs<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str, SegmentKind)> + 'a {
        self.segments.iter().map(move |s| {
            (
                &source[s.source.clone()],
                &self.text[s.output.clone()],
                s.kind,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_tracks_output_ranges() {
        let mut c = Composition::default();
        assert!(c.is_empty());
        c.push(0..1, "AB", SegmentKind::Base);
        c.push_pair(1..3, "C", "D");
        c.push(3..4, " ", SegmentKind::Passthrough);

        assert_eq!(c.text(), "ABCD ");
        assert_eq!(c.segments().len(), 3);
        assert_eq!(c.segments()[1].output, 2..4);
        assert_eq!(c.segments()[1].kind, SegmentKind::BaseWithSign);
        assert_eq!(c.output_of(&c.segments()[0]), "AB");

        let pairs: Vec<_> = c.pairs("abc ").collect();
        assert_eq!(pairs[1], ("bc", "CD", SegmentKind::BaseWithSign));
        assert_eq!(c.into_string(), "ABCD ");
    }
}
