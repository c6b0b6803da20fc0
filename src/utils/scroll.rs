/// Scroll position reported by the list renderer, in rows
#[derive(Debug, Clone, Copy)]
pub struct ScrollMetrics {
    /// First visible row
    pub offset: usize,
    /// Total rendered rows
    pub content_len: usize,
    /// Visible rows
    pub viewport_len: usize,
}

impl ScrollMetrics {
    /// Rows between the bottom of the viewport and the end of the content
    pub fn distance_from_end(&self) -> usize {
        self.content_len
            .saturating_sub(self.offset.saturating_add(self.viewport_len))
    }

    /// End-reached fires once the remaining distance drops below
    /// `threshold` viewports (0.4 on the transactions screen)
    pub fn is_near_end(&self, threshold: f64) -> bool {
        (self.distance_from_end() as f64) < threshold * self.viewport_len as f64
    }
}
