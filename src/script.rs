//! Ordered buffer of generated script text.

/// Text segments of the script being generated, in emission order.
///
/// Nothing is written anywhere until [`ScriptBuffer::render`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuffer {
    segments: Vec<String>,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment. Empty segments are dropped.
    pub fn push(&mut self, segment: impl Into<String>) {
        let segment = segment.into();
        if !segment.is_empty() {
            self.segments.push(segment);
        }
    }

    /// Move the last `count` segments, in their order, to the front.
    ///
    /// Used once, right before rendering, to put the self-deletion preamble
    /// of a temporary script ahead of everything else.
    pub fn hoist_tail(&mut self, count: usize) {
        let count = count.min(self.segments.len());
        self.segments.rotate_right(count);
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenate all segments.
    pub fn render(&self) -> String {
        self.segments.concat()
    }
}
