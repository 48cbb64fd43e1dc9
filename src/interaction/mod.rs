use serde::{Deserialize, Serialize};

use crate::core::{MultiAxisLimits, Pixel, PixelRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
    Zooming,
}

/// Drag gesture classes that mutate axis ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragKind {
    /// Content follows the cursor.
    Pan,
    /// Horizontal drag scales X, vertical drag scales Y.
    Zoom,
}

/// State of one drag gesture, alive from mouse-down to mouse-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    kind: DragKind,
    baseline: MultiAxisLimits,
    mouse_down: Pixel,
}

impl DragSession {
    #[must_use]
    pub fn new(kind: DragKind, baseline: MultiAxisLimits, mouse_down: Pixel) -> Self {
        Self {
            kind,
            baseline,
            mouse_down,
        }
    }

    #[must_use]
    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Axis limits captured at mouse-down.
    #[must_use]
    pub fn baseline(&self) -> &MultiAxisLimits {
        &self.baseline
    }

    #[must_use]
    pub fn mouse_down(&self) -> Pixel {
        self.mouse_down
    }
}

/// Drag-selected rectangle preview.
///
/// This only tracks geometry for drawing; turning it into new axis limits
/// is left to the caller once the gesture completes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomRectangle {
    mouse_down: Pixel,
    mouse_now: Pixel,
    /// Shade the full data height between the two X positions.
    pub vertical_span: bool,
    /// Shade the full data width between the two Y positions.
    pub horizontal_span: bool,
    visible: bool,
}

impl ZoomRectangle {
    pub fn update(&mut self, mouse_down: Pixel, mouse_now: Pixel) {
        self.mouse_down = mouse_down;
        self.mouse_now = mouse_now;
        self.visible = true;
    }

    pub fn clear(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn corners(&self) -> (Pixel, Pixel) {
        (self.mouse_down, self.mouse_now)
    }

    /// Pixel rectangle to shade, with span flags stretched to `data_rect`.
    #[must_use]
    pub fn rect(&self, data_rect: PixelRect) -> PixelRect {
        let mut rect = PixelRect::from_corners(self.mouse_down, self.mouse_now);
        if self.vertical_span {
            rect.top = data_rect.top;
            rect.bottom = data_rect.bottom;
        }
        if self.horizontal_span {
            rect.left = data_rect.left;
            rect.right = data_rect.right;
        }
        rect
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    session: Option<DragSession>,
    zoom_rectangle: ZoomRectangle,
}

impl InteractionState {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        match self.session.as_ref().map(DragSession::kind) {
            None => InteractionMode::Idle,
            Some(DragKind::Pan) => InteractionMode::Panning,
            Some(DragKind::Zoom) => InteractionMode::Zooming,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts a drag, replacing any session that was never ended.
    pub fn begin_drag(&mut self, session: DragSession) {
        self.session = Some(session);
    }

    /// Ends the drag and hands back its baseline.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    #[must_use]
    pub fn zoom_rectangle(&self) -> ZoomRectangle {
        self.zoom_rectangle
    }

    pub fn zoom_rectangle_mut(&mut self) -> &mut ZoomRectangle {
        &mut self.zoom_rectangle
    }
}
