#![forbid(unsafe_code)]

//! The per-tick drawing seam.
//!
//! A [`Frame`] is borrowed from the backend for exactly one draw call.
//! It knows the drawable area and clips every widget render to it; the
//! actual glyph painting happens behind the [`Surface`] the backend
//! owns. Widgets are pure data-to-glyph mappers with no layout
//! responsibility - regions come from the layout engine, content from
//! the controller.

use cadence_core::Rect;

/// Backend-owned glyph sink.
///
/// The one capability cadence requires for painting: place a string of
/// cells at a position. Everything richer (styling, diffing, damage
/// tracking) belongs to the backend behind this trait.
pub trait Surface {
    /// Write `content` starting at column `x`, row `y`.
    fn set_string(&mut self, x: u16, y: u16, content: &str);
}

/// A widget: maps its data onto glyphs within an assigned area.
pub trait Widget {
    /// Render into `area` on the given surface.
    ///
    /// `area` has already been clipped to the frame; implementations
    /// must not draw outside it.
    fn render(self, area: Rect, surface: &mut dyn Surface);
}

/// The drawable target for one tick.
pub struct Frame<'a> {
    area: Rect,
    surface: &'a mut dyn Surface,
}

impl<'a> Frame<'a> {
    /// Wrap a backend surface for one draw call.
    pub fn new(area: Rect, surface: &'a mut dyn Surface) -> Self {
        Self { area, surface }
    }

    /// The full drawable area of this frame.
    #[inline]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Render a widget into `area`, clipped to the frame.
    ///
    /// A widget assigned a zero-area region (a degenerate layout on a
    /// tiny terminal) is skipped entirely.
    pub fn render_widget(&mut self, widget: impl Widget, area: Rect) {
        let clipped = area.intersection(&self.area);
        if clipped.is_empty() {
            return;
        }
        widget.render(clipped, self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(u16, u16, String)>,
    }

    impl Surface for Recorder {
        fn set_string(&mut self, x: u16, y: u16, content: &str) {
            self.writes.push((x, y, content.to_owned()));
        }
    }

    struct Fill(char);

    impl Widget for Fill {
        fn render(self, area: Rect, surface: &mut dyn Surface) {
            let line: String = std::iter::repeat_n(self.0, area.width as usize).collect();
            for row in area.y..area.bottom() {
                surface.set_string(area.x, row, &line);
            }
        }
    }

    #[test]
    fn widget_renders_within_assigned_area() {
        let mut recorder = Recorder::default();
        let mut frame = Frame::new(Rect::from_size(10, 4), &mut recorder);
        frame.render_widget(Fill('x'), Rect::new(1, 1, 3, 2));

        assert_eq!(
            recorder.writes,
            vec![(1, 1, "xxx".to_owned()), (1, 2, "xxx".to_owned())]
        );
    }

    #[test]
    fn render_clips_to_frame_area() {
        let mut recorder = Recorder::default();
        let mut frame = Frame::new(Rect::from_size(5, 5), &mut recorder);
        frame.render_widget(Fill('y'), Rect::new(3, 4, 10, 10));

        // Only the overlapping 2x1 strip is painted.
        assert_eq!(recorder.writes, vec![(3, 4, "yy".to_owned())]);
    }

    #[test]
    fn zero_area_region_renders_nothing() {
        let mut recorder = Recorder::default();
        let mut frame = Frame::new(Rect::from_size(5, 5), &mut recorder);
        frame.render_widget(Fill('z'), Rect::new(2, 2, 0, 3));
        frame.render_widget(Fill('z'), Rect::new(20, 20, 4, 4));

        assert!(recorder.writes.is_empty());
    }
}
