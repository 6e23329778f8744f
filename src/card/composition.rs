//! Card scene assembly
//!
//! Ties the viewer state machine, the material pipeline and the loaded asset
//! together, and produces everything the renderer needs for one frame.

use std::sync::Arc;

use super::status::StatusTier;
use crate::{
    animation::{Transform, ViewerStateMachine},
    gfx::{
        material_pipeline::MaterialPipeline,
        resources::{Color, MaterialConfig, MeshMaterial, PhysicalMaterial},
        scene::SceneGraph,
    },
    input::EventDisposition,
};

const LABEL_FONT: &str = "GTAmericaMonoVF.ttf";
const LABEL_FONT_SIZE: f32 = 0.105;
const UPPER_ROW_Y: f32 = -4.72;
const LOWER_ROW_Y: f32 = -7.32;
const FRONT_Z: f32 = 0.009;
const BACK_Z: f32 = 0.051;

/// Static text placed in card space
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: [f32; 3],
    pub rotation_y: f32,
    /// Negative x mirrors the glyphs, for text read from the back face
    pub scale: [f32; 3],
    pub font: &'static str,
    pub font_size: f32,
    pub color: Color,
}

impl TextLabel {
    fn front(text: String, y: f32) -> Self {
        Self {
            text,
            position: [0.0, y, FRONT_Z],
            rotation_y: std::f32::consts::PI,
            scale: [1.0, 1.0, 1.0],
            font: LABEL_FONT,
            font_size: LABEL_FONT_SIZE,
            color: Color::from_rgb8(0xef, 0xef, 0xef),
        }
    }

    fn back(text: String, y: f32) -> Self {
        Self {
            position: [0.0, y, BACK_Z],
            scale: [-1.0, 1.0, 1.0],
            ..Self::front(text, y)
        }
    }
}

/// Printed identity of the card holder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHolder {
    pub name: String,
    pub location: String,
    pub member_since: String,
}

impl Default for CardHolder {
    fn default() -> Self {
        Self {
            name: "THEO MASON".to_string(),
            location: "West Village".to_string(),
            member_since: "Member Since '22".to_string(),
        }
    }
}

/// Mesh state handed to the renderer
#[derive(Debug, Clone)]
pub struct RenderedMesh {
    pub name: String,
    pub material: MeshMaterial,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl RenderedMesh {
    pub fn physical(&self) -> Option<&Arc<PhysicalMaterial>> {
        self.material.as_physical()
    }
}

/// Everything the renderer consumes for one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub transform: Transform,
    pub meshes: Vec<RenderedMesh>,
    pub labels: Vec<TextLabel>,
    pub is_dragging: bool,
}

pub struct CardComposition {
    viewer: ViewerStateMachine,
    pipeline: MaterialPipeline,
    scene: Option<SceneGraph>,
    status_label: String,
    holder: CardHolder,
}

impl Default for CardComposition {
    /// Blue Member label over the default accent; the tier color only
    /// applies once a status is selected
    fn default() -> Self {
        Self::new(MaterialConfig::default())
    }
}

impl CardComposition {
    pub fn new(config: MaterialConfig) -> Self {
        Self {
            viewer: ViewerStateMachine::default(),
            pipeline: MaterialPipeline::new(config),
            scene: None,
            status_label: StatusTier::default().name().to_string(),
            holder: CardHolder::default(),
        }
    }

    /// Builder pattern: Use a preconfigured viewer
    pub fn with_viewer(mut self, viewer: ViewerStateMachine) -> Self {
        self.viewer = viewer;
        self
    }

    /// Builder pattern: Use a preconfigured material pipeline
    pub fn with_pipeline(mut self, pipeline: MaterialPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Builder pattern: Set the printed holder details
    pub fn with_holder(mut self, holder: CardHolder) -> Self {
        self.holder = holder;
        self
    }

    /// Takes a loaded asset and dresses it with the current config
    pub fn load_scene(&mut self, mut scene: SceneGraph) {
        self.pipeline.on_meshes_loaded(&mut scene);
        self.scene = Some(scene);
    }

    /// Applies a new material configuration; returns true if it differed
    pub fn set_material_config(&mut self, config: MaterialConfig) -> bool {
        match self.scene.as_mut() {
            Some(scene) => self.pipeline.on_config_changed(scene, config),
            // Nothing to rebuild yet; remembered for the next load
            None => self.pipeline.set_config(config),
        }
    }

    pub fn set_status_label(&mut self, label: &str) {
        self.status_label = label.to_string();
    }

    /// Switches tier: status label and accent color change together
    pub fn select_status(&mut self, tier: StatusTier) {
        self.set_status_label(tier.name());
        let config = self.pipeline.config().with_color(tier.color());
        self.set_material_config(config);
    }

    pub fn on_pointer_down(&mut self, pointer_x: f64) -> EventDisposition {
        self.viewer.on_pointer_down(pointer_x)
    }

    pub fn on_pointer_move(&mut self, pointer_x: f64) {
        self.viewer.on_pointer_move(pointer_x);
    }

    pub fn on_pointer_up(&mut self) {
        self.viewer.on_pointer_up();
    }

    /// Advances the card by `delta` seconds
    pub fn frame(&mut self, delta: f64) -> FrameOutput {
        let transform = self.viewer.tick(delta);
        FrameOutput {
            transform,
            meshes: self.rendered_meshes(),
            labels: self.labels(),
            is_dragging: self.viewer.is_dragging(),
        }
    }

    fn rendered_meshes(&self) -> Vec<RenderedMesh> {
        let Some(scene) = self.scene.as_ref() else {
            return Vec::new();
        };
        scene
            .meshes()
            .into_iter()
            .map(|mesh| RenderedMesh {
                name: mesh.name.clone(),
                material: mesh.material.clone(),
                cast_shadow: mesh.cast_shadow,
                receive_shadow: mesh.receive_shadow,
            })
            .collect()
    }

    /// Text overlays: status and holder on the front, mirrored details on the back
    pub fn labels(&self) -> Vec<TextLabel> {
        vec![
            TextLabel::front(self.status_label.to_uppercase(), UPPER_ROW_Y),
            TextLabel::front(self.holder.name.clone(), LOWER_ROW_Y),
            TextLabel::back(self.holder.location.clone(), UPPER_ROW_Y),
            TextLabel::back(self.holder.member_since.clone(), LOWER_ROW_Y),
        ]
    }

    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    pub fn viewer(&self) -> &ViewerStateMachine {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerStateMachine {
        &mut self.viewer
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    pub fn material_config(&self) -> &MaterialConfig {
        self.pipeline.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        animation::ViewerPhase,
        gfx::{
            resources::AuthoredMaterial,
            scene::{MeshNode, SceneNode},
        },
    };

    fn five_mesh_scene() -> SceneGraph {
        let children = (0..5)
            .map(|i| {
                SceneNode::mesh(MeshNode::new(
                    &format!("part_{i}"),
                    MeshMaterial::Authored(AuthoredMaterial::new(
                        "authored",
                        Color::rgb(0.1 * i as f32, 0.2, 0.3),
                        0.0,
                        0.5,
                    )),
                ))
            })
            .collect();
        SceneGraph::new(SceneNode::group("card", children))
    }

    #[test]
    fn test_load_scene_applies_materials() {
        let mut card = CardComposition::default();
        card.load_scene(five_mesh_scene());

        let frame = card.frame(1.0 / 60.0);
        assert_eq!(frame.meshes.len(), 5);
        assert!(frame.meshes.iter().all(|m| m.physical().is_some()));
        assert!(frame.meshes.iter().all(|m| m.cast_shadow && m.receive_shadow));
        assert_eq!(
            frame.meshes[2].physical().unwrap().base_color,
            Color::from_hex("#356DA0").unwrap()
        );
        assert_eq!(frame.labels[0].text, "BLUE MEMBER");
    }

    #[test]
    fn test_selecting_blue_switches_to_tier_color() {
        let mut card = CardComposition::default();
        card.load_scene(five_mesh_scene());
        card.select_status(StatusTier::Blue);

        let frame = card.frame(1.0 / 60.0);
        assert_eq!(
            frame.meshes[2].physical().unwrap().base_color,
            StatusTier::Blue.color()
        );
        assert_eq!(card.status_label(), "Blue Member");
    }

    #[test]
    fn test_select_status_updates_label_and_accent() {
        let mut card = CardComposition::default();
        card.load_scene(five_mesh_scene());
        card.select_status(StatusTier::Gold);

        assert_eq!(card.status_label(), "Gold Elite Status");
        let frame = card.frame(1.0 / 60.0);
        assert_eq!(frame.labels[0].text, "GOLD ELITE STATUS");
        assert_eq!(
            frame.meshes[2].physical().unwrap().base_color,
            StatusTier::Gold.color()
        );
        assert_eq!(
            frame.meshes[0].physical().unwrap().base_color,
            Color::rgb(0.0, 0.2, 0.3)
        );
    }

    #[test]
    fn test_config_before_load_is_kept() {
        let mut card = CardComposition::default();
        let config = MaterialConfig::default().with_color(Color::RED);
        assert!(card.set_material_config(config));
        assert!(!card.set_material_config(config));

        card.load_scene(five_mesh_scene());
        let frame = card.frame(1.0 / 60.0);
        assert_eq!(frame.meshes[2].physical().unwrap().base_color, Color::RED);
    }

    #[test]
    fn test_label_layout() {
        let card = CardComposition::default();
        let labels = card.labels();

        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].text, "BLUE MEMBER");
        assert_eq!(labels[1].text, "THEO MASON");
        assert_eq!(labels[1].position, [0.0, -7.32, 0.009]);
        assert_eq!(labels[2].text, "West Village");
        assert_eq!(labels[2].position, [0.0, -4.72, 0.051]);
        assert_eq!(labels[2].scale, [-1.0, 1.0, 1.0]);
        assert_eq!(labels[3].text, "Member Since '22");
        assert!(labels.iter().all(|l| l.font_size == 0.105));
    }

    #[test]
    fn test_frame_without_scene() {
        let mut card = CardComposition::default();
        let frame = card.frame(1.0 / 60.0);
        assert!(frame.meshes.is_empty());
        assert_eq!(card.viewer().phase(), ViewerPhase::Entering);
    }

    #[test]
    fn test_drag_flag_in_frame() {
        let mut card = CardComposition::default();
        while card.viewer().phase() == ViewerPhase::Entering {
            card.frame(1.0 / 60.0);
        }
        assert!(card.on_pointer_down(10.0).is_consumed());
        assert!(card.frame(1.0 / 60.0).is_dragging);
        card.on_pointer_up();
        assert!(!card.frame(1.0 / 60.0).is_dragging);
    }
}
