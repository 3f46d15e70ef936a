use crate::constants::{SCENE_LAYER_ID, SCENE_UNIT_PX, SCENE_VIEWPORT_ID};
use crate::dom;
use crate::input::perspective_px;
use invite_core::{css_matrix3d, pose_at, Camera, CameraPose};
use web_sys as web;

/// CSS 3D layer standing in for the background scene: the camera's view
/// matrix becomes the layer transform and the field of view its perspective.
pub struct SceneLayer {
    viewport: web::HtmlElement,
    layer: web::HtmlElement,
    last_pose: Option<CameraPose>,
    last_size: (f32, f32),
}

impl SceneLayer {
    pub fn find(document: &web::Document) -> Option<Self> {
        let viewport = dom::element::<web::HtmlElement>(document, SCENE_VIEWPORT_ID)?;
        let layer = dom::element::<web::HtmlElement>(document, SCENE_LAYER_ID)?;
        Some(Self {
            viewport,
            layer,
            last_pose: None,
            last_size: (0.0, 0.0),
        })
    }

    /// Place the camera for `percent`; skipped when nothing changed.
    pub fn update(&mut self, percent: f32, viewport_size: (f32, f32)) {
        let pose = pose_at(percent);
        if self.last_pose == Some(pose) && self.last_size == viewport_size {
            return;
        }
        let (w, h) = viewport_size;
        let aspect = if h > 0.0 { w / h } else { 1.0 };
        let camera = Camera::from_pose(pose, aspect);
        if self.last_size != viewport_size {
            let d = perspective_px(h, camera.fovy_radians);
            _ = self
                .viewport
                .style()
                .set_property("perspective", &format!("{:.1}px", d));
        }
        let transform = css_matrix3d(&camera.view_matrix(), SCENE_UNIT_PX);
        _ = self.layer.style().set_property("transform", &transform);
        self.last_pose = Some(pose);
        self.last_size = viewport_size;
    }
}
