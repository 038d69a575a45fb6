use crate::camera::{CameraController, ViewportRect};
use crate::collider::ColliderOverlay;
use crate::config::EditorConfig;
use crate::geometry::{footprint_of, BoundsProvider};
use crate::gizmo::GizmoManager;
use crate::input::InputEvent;
use crate::marquee::MarqueeSelection;
use crate::overlay::{OverlayFrame, SELECTION_COLOR};
use crate::render_loop::{FramePlan, RenderScheduler};
use crate::router::{DragListenerHost, InputRouter, RouterContext};
use crate::store::SceneStore;
use winit::window::CursorIcon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelResponse {
    /// True when the host must schedule an animation frame now.
    pub schedule_frame: bool,
    pub cursor: CursorIcon,
}

/// The scene viewport orchestrator: owns the camera, the manipulators, the
/// router, and the render scheduler, and wires them to the host's store,
/// bounds provider, and listener registration. It never draws the scene
/// itself; it emits overlay commands and redraw requests.
pub struct SceneViewPanel {
    camera: CameraController,
    gizmos: GizmoManager,
    colliders: ColliderOverlay,
    marquee: MarqueeSelection,
    router: InputRouter,
    scheduler: RenderScheduler,
    config: EditorConfig,
    viewport: ViewportRect,
    show_colliders: bool,
}

impl SceneViewPanel {
    pub fn new(config: EditorConfig) -> Self {
        let mut camera = CameraController::new();
        camera.set_zoom_limits(config.camera_zoom_min, config.camera_zoom_max);
        let scheduler = RenderScheduler::new(config.continuous_render);
        let show_colliders = config.show_colliders;
        Self {
            camera,
            gizmos: GizmoManager::with_builtin_modes(),
            colliders: ColliderOverlay::new(),
            marquee: MarqueeSelection::new(),
            router: InputRouter::new(),
            scheduler,
            config,
            viewport: ViewportRect::default(),
            show_colliders,
        }
    }

    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.scheduler.request_render();
        }
    }

    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    pub fn gizmos(&self) -> &GizmoManager {
        &self.gizmos
    }

    pub fn gizmos_mut(&mut self) -> &mut GizmoManager {
        &mut self.gizmos
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn show_colliders(&self) -> bool {
        self.show_colliders
    }

    pub fn set_show_colliders(&mut self, show: bool) {
        if self.show_colliders != show {
            self.show_colliders = show;
            self.scheduler.request_render();
        }
    }

    /// Feeds one input event through the router.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        store: &mut dyn SceneStore,
        bounds: &dyn BoundsProvider,
        listeners: &mut dyn DragListenerHost,
    ) -> PanelResponse {
        let Self {
            camera,
            gizmos,
            colliders,
            marquee,
            router,
            scheduler,
            config,
            viewport,
            show_colliders,
        } = self;
        let mut ctx = RouterContext {
            store,
            bounds,
            listeners,
            camera,
            gizmos,
            colliders,
            marquee,
            viewport: *viewport,
            config,
            show_colliders: *show_colliders,
        };
        let response = router.handle_event(event, &mut ctx);
        let schedule_frame = if response.redraw { scheduler.request_render() } else { false };
        PanelResponse { schedule_frame, cursor: response.cursor }
    }

    /// Store-change notification from the host; coalesced like any other
    /// redraw request.
    pub fn request_render(&mut self) -> bool {
        self.scheduler.request_render()
    }

    pub fn begin_frame(&mut self) -> FramePlan {
        self.scheduler.begin_frame()
    }

    pub fn set_continuous_render(&mut self, continuous: bool) -> bool {
        self.scheduler.set_continuous(continuous)
    }

    /// Panel teardown. Any active drag ends and document listeners are
    /// released even mid-drag.
    pub fn dispose(
        &mut self,
        store: &mut dyn SceneStore,
        bounds: &dyn BoundsProvider,
        listeners: &mut dyn DragListenerHost,
    ) {
        let Self {
            camera,
            gizmos,
            colliders,
            marquee,
            router,
            config,
            viewport,
            show_colliders,
            ..
        } = self;
        let mut ctx = RouterContext {
            store,
            bounds,
            listeners,
            camera,
            gizmos,
            colliders,
            marquee,
            viewport: *viewport,
            config,
            show_colliders: *show_colliders,
        };
        router.dispose(&mut ctx);
    }

    /// Overlay pass: selection outlines, the active gizmo, collider handles,
    /// and the marquee, as world-space commands for the host painter.
    pub fn draw_overlay(
        &self,
        store: &dyn SceneStore,
        bounds: &dyn BoundsProvider,
        frame: &mut OverlayFrame,
    ) {
        let zoom = self.camera.zoom();
        let outline_width = 1.0 / zoom.max(f32::EPSILON);
        for id in store.selected_entities() {
            if let Some(footprint) = footprint_of(store, bounds, id) {
                frame.rect_outline(footprint, outline_width, SELECTION_COLOR);
            }
        }
        self.gizmos.draw(store, zoom, &self.config.gizmo_settings(), frame);
        if self.show_colliders {
            self.colliders.draw(store, zoom, frame);
        }
        self.marquee.draw(zoom, frame);
    }
}
