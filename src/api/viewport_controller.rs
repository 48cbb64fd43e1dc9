use tracing::{debug, trace};

use crate::core::{Axis, MultiAxisLimits, Pixel, PixelRect};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{DragKind, DragSession, ZoomRectangle};
use crate::render::Renderer;

use super::Plot;

impl<R: Renderer> Plot<R> {
    /// Starts a pan or zoom drag, recording every axis as the baseline.
    pub fn begin_drag(&mut self, kind: DragKind, mouse_down: Pixel) {
        let baseline = self.multi_axis_limits();
        debug!(?kind, x = mouse_down.x, y = mouse_down.y, "begin drag");
        self.interaction
            .begin_drag(DragSession::new(kind, baseline, mouse_down));
    }

    /// Applies the drag from mouse-down to `mouse_now` on top of the
    /// baseline. Without an active drag this is a no-op.
    pub fn drag_to(&mut self, mouse_now: Pixel) {
        let data_rect = self.render_info.data_rect;
        let Some(session) = self.interaction.session() else {
            trace!("drag_to without active drag session");
            return;
        };
        trace!(kind = ?session.kind(), x = mouse_now.x, y = mouse_now.y, "drag to");
        match session.kind() {
            DragKind::Pan => apply_pan(
                &mut self.axes,
                session.baseline(),
                session.mouse_down(),
                mouse_now,
                data_rect,
            ),
            DragKind::Zoom => apply_drag_zoom(
                &mut self.axes,
                session.baseline(),
                session.mouse_down(),
                mouse_now,
                data_rect,
            ),
        }
    }

    /// Ends the active drag and returns its session, keeping current limits.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        let session = self.interaction.end_drag();
        if session.is_some() {
            debug!("end drag");
        }
        session
    }

    /// Click-drag pan against an explicit baseline.
    ///
    /// X moves opposite to the mouse so content follows the cursor. Y uses
    /// the raw delta because the Y transform is already inverted.
    pub fn mouse_pan(&mut self, original_limits: &MultiAxisLimits, mouse_down: Pixel, mouse_now: Pixel) {
        let data_rect = self.render_info.data_rect;
        apply_pan(&mut self.axes, original_limits, mouse_down, mouse_now, data_rect);
    }

    /// Click-drag zoom against an explicit baseline.
    ///
    /// Dragging right zooms X in and dragging up zooms Y in.
    pub fn mouse_zoom(&mut self, original_limits: &MultiAxisLimits, mouse_down: Pixel, mouse_now: Pixel) {
        let data_rect = self.render_info.data_rect;
        apply_drag_zoom(&mut self.axes, original_limits, mouse_down, mouse_now, data_rect);
    }

    /// Zooms every axis around the coordinate under `pixel`.
    ///
    /// Fractions above 1 zoom in and below 1 zoom out. Pivots are captured
    /// before any range changes, so the point under the cursor stays put.
    pub fn zoom_at_pixel(&mut self, fraction_x: f64, fraction_y: f64, pixel: Pixel) -> PlotResult<()> {
        for fraction in [fraction_x, fraction_y] {
            if !fraction.is_finite() || fraction <= 0.0 {
                return Err(PlotError::InvalidData(
                    "zoom fraction must be finite and > 0".to_owned(),
                ));
            }
        }

        if !pixel.x.is_finite() || !pixel.y.is_finite() {
            return Err(PlotError::InvalidData(
                "zoom pixel must be finite".to_owned(),
            ));
        }

        let data_rect = self.render_info.data_rect;
        let pivots: Vec<f64> = self
            .axes
            .iter()
            .map(|axis| axis_coordinate(axis, pixel, data_rect))
            .collect();

        for (axis, pivot) in self.axes.iter_mut().zip(pivots) {
            let fraction = if axis.is_horizontal() {
                fraction_x
            } else {
                fraction_y
            };
            axis.range_mut().zoom_frac_at(fraction, pivot)?;
        }
        trace!(fraction_x, fraction_y, x = pixel.x, y = pixel.y, "zoom at pixel");
        Ok(())
    }

    /// Updates the zoom rectangle preview.
    ///
    /// `vertical_span` shades the full height between the two X positions,
    /// `horizontal_span` the full width between the two Y positions.
    pub fn mouse_zoom_rectangle(
        &mut self,
        mouse_down: Pixel,
        mouse_now: Pixel,
        vertical_span: bool,
        horizontal_span: bool,
    ) {
        let rectangle = self.interaction.zoom_rectangle_mut();
        rectangle.update(mouse_down, mouse_now);
        rectangle.vertical_span = vertical_span;
        rectangle.horizontal_span = horizontal_span;
    }

    pub fn clear_zoom_rectangle(&mut self) {
        self.interaction.zoom_rectangle_mut().clear();
    }

    #[must_use]
    pub fn zoom_rectangle(&self) -> ZoomRectangle {
        self.interaction.zoom_rectangle()
    }
}

fn axis_coordinate(axis: &Axis, pixel: Pixel, data_rect: PixelRect) -> f64 {
    if axis.is_horizontal() {
        axis.get_coordinate(pixel.x, data_rect)
    } else {
        axis.get_coordinate(pixel.y, data_rect)
    }
}

fn restore_all(axes: &mut [Axis], baseline: &MultiAxisLimits) {
    for axis in axes.iter_mut() {
        baseline.restore(axis);
    }
}

fn apply_pan(
    axes: &mut [Axis],
    baseline: &MultiAxisLimits,
    mouse_down: Pixel,
    mouse_now: Pixel,
    data_rect: PixelRect,
) {
    let delta_x = -f64::from(mouse_now.x - mouse_down.x);
    let delta_y = f64::from(mouse_now.y - mouse_down.y);

    restore_all(axes, baseline);
    for axis in axes.iter_mut() {
        if axis.is_horizontal() {
            axis.range_mut()
                .pan_mouse(delta_x, f64::from(data_rect.width()));
        } else {
            axis.range_mut()
                .pan_mouse(delta_y, f64::from(data_rect.height()));
        }
    }
}

fn apply_drag_zoom(
    axes: &mut [Axis],
    baseline: &MultiAxisLimits,
    mouse_down: Pixel,
    mouse_now: Pixel,
    data_rect: PixelRect,
) {
    let delta_x = f64::from(mouse_now.x - mouse_down.x);
    let delta_y = -f64::from(mouse_now.y - mouse_down.y);

    restore_all(axes, baseline);
    for axis in axes.iter_mut() {
        if axis.is_horizontal() {
            axis.range_mut()
                .zoom_mouse_delta(delta_x, f64::from(data_rect.width()));
        } else {
            axis.range_mut()
                .zoom_mouse_delta(delta_y, f64::from(data_rect.height()));
        }
    }
}
