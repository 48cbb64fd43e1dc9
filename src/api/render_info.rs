use serde::{Deserialize, Serialize};

use crate::core::PixelRect;

/// Layout produced by the most recent render pass.
///
/// Every pixel/coordinate query reads `data_rect` from here. Before the
/// first render the rectangles are the unit rectangle and `rendered` is
/// `false`, so queries stay total. The render coordinator replaces the whole
/// value at the end of a successful pass; a failed pass leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderInfo {
    pub figure_rect: PixelRect,
    pub data_rect: PixelRect,
    pub rendered: bool,
    pub render_count: u64,
}

impl Default for RenderInfo {
    fn default() -> Self {
        Self {
            figure_rect: PixelRect::unit(),
            data_rect: PixelRect::unit(),
            rendered: false,
            render_count: 0,
        }
    }
}
