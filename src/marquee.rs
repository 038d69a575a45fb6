use crate::geometry::{rect_hit_test, BoundsProvider, WorldRect};
use crate::overlay::{OverlayFrame, MARQUEE_FILL_COLOR, MARQUEE_STROKE_COLOR};
use crate::store::SceneStore;
use glam::Vec2;

#[derive(Clone, Copy, Debug)]
struct MarqueeDrag {
    start: Vec2,
    end: Vec2,
    additive: bool,
}

/// Rubber-band rectangle select. The rectangle lives only for the duration
/// of the drag; releasing turns it into a selection and discards it.
#[derive(Default)]
pub struct MarqueeSelection {
    drag: Option<MarqueeDrag>,
}

impl MarqueeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// `additive` is latched from the multi-select modifier at drag start.
    pub fn start(&mut self, world: Vec2, additive: bool) {
        self.drag = Some(MarqueeDrag { start: world, end: world, additive });
    }

    pub fn update(&mut self, world: Vec2) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.end = world;
                true
            }
            None => false,
        }
    }

    pub fn rect(&self) -> Option<WorldRect> {
        self.drag.map(|drag| WorldRect::from_corners(drag.start, drag.end))
    }

    /// Applies the selection: replace, or union with the existing set when
    /// the drag started additive. An empty, non-additive marquee clears.
    pub fn finish(&mut self, store: &mut dyn SceneStore, bounds: &dyn BoundsProvider) {
        let Some(drag) = self.drag.take() else { return };
        let rect = WorldRect::from_corners(drag.start, drag.end);
        let hits = rect_hit_test(store, bounds, &rect);
        if drag.additive {
            let mut selection = store.selected_entities();
            for id in hits {
                if !selection.contains(&id) {
                    selection.push(id);
                }
            }
            store.select_entities(selection);
        } else {
            store.select_entities(hits.into_vec());
        }
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn draw(&self, zoom: f32, frame: &mut OverlayFrame) {
        let Some(rect) = self.rect() else { return };
        frame.rect_fill(rect, MARQUEE_FILL_COLOR);
        frame.rect_outline(rect, 1.0 / zoom.max(f32::EPSILON), MARQUEE_STROKE_COLOR);
    }
}
