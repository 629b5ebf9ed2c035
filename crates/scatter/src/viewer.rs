use crate::scene::{cloud_scene, mask_scene, Color, ScatterScene};
use lidarviz_core::CoreError;
use std::path::Path;
use thiserror::Error;

/// Marker color for groups that do not pick one.
pub const DEFAULT_COLOR: Color = Color::rgb(99, 110, 250);

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to load point cloud: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[cfg(feature = "rerun")]
    #[error(transparent)]
    Rerun(#[from] rerun::RecordingStreamError),
}

/// Something that can display a scatter scene.
pub trait SceneViewer {
    fn show(&self, scene: &ScatterScene) -> Result<(), ViewerError>;
}

/// Writes a one-line summary per group to the log instead of opening a window.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogViewer;

impl SceneViewer for LogViewer {
    fn show(&self, scene: &ScatterScene) -> Result<(), ViewerError> {
        let bounds = scene.bounds();
        let layout = &scene.layout;
        log::info!(
            "scatter scene: {} groups, {} points, extent {:?}",
            scene.groups.len(),
            scene.point_count(),
            bounds.extent()
        );
        log::info!(
            "  layout: axes {:?} visible={} equal_aspect={}",
            layout.axis_titles,
            layout.axes_visible,
            layout.equal_aspect
        );
        if let Some(gizmo) = scene.axis_gizmo() {
            log::debug!("  axis arrows at {:?}, length {}", gizmo.origin, gizmo.length);
        }
        for group in &scene.groups {
            let [r, g, b, a] = group.color.unwrap_or(DEFAULT_COLOR).with_opacity(group.opacity);
            log::info!(
                "  {:<16} {:>8} points  rgba({}, {}, {}, {})  size {}  legend {}",
                group.name,
                group.len(),
                r,
                g,
                b,
                a,
                group.size,
                group.legend_label().is_some()
            );
        }
        Ok(())
    }
}

/// Spawns a rerun viewer and logs every group as a `Points3D` entity.
#[cfg(feature = "rerun")]
#[derive(Debug, Clone)]
pub struct RerunViewer {
    pub app_id: String,
}

#[cfg(feature = "rerun")]
impl RerunViewer {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }
}

#[cfg(feature = "rerun")]
impl SceneViewer for RerunViewer {
    fn show(&self, scene: &ScatterScene) -> Result<(), ViewerError> {
        let rec = rerun::RecordingStreamBuilder::new(self.app_id.as_str()).spawn()?;
        // The 3D view always scales axes uniformly.
        if !scene.layout.equal_aspect {
            log::warn!("rerun viewer ignores equal_aspect = false");
        }
        rec.log_static("scene", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

        if let Some(gizmo) = scene.axis_gizmo() {
            rec.log_static(
                "scene/axes",
                &rerun::Arrows3D::from_vectors(gizmo.vectors())
                    .with_origins([gizmo.origin; 3])
                    .with_labels(gizmo.titles.clone()),
            )?;
        }

        for group in &scene.groups {
            let [r, g, b, a] = group.color.unwrap_or(DEFAULT_COLOR).with_opacity(group.opacity);
            let entity = format!("scene/{}", group.name.replace(' ', "_"));
            let mut points = rerun::Points3D::new(group.positions.iter().copied())
                .with_colors([rerun::Color::from_unmultiplied_rgba(r, g, b, a)])
                .with_radii([rerun::Radius::new_ui_points(group.size)]);
            if let Some(label) = group.legend_label() {
                points = points.with_labels([label.to_string()]);
            }
            rec.log(entity, &points)?;
        }
        Ok(())
    }
}

/// Loads a PCD file and shows all of its points.
pub fn visualize_pcd(path: impl AsRef<Path>, viewer: &dyn SceneViewer) -> Result<(), ViewerError> {
    let cloud = lidarviz_io::read_pcd(path)?;
    viewer.show(&cloud_scene(&cloud))
}

/// Loads a PCD file and shows the points at `mask_indexes` against the rest.
pub fn visualize_3d_masks(
    path: impl AsRef<Path>,
    mask_indexes: &[usize],
    viewer: &dyn SceneViewer,
) -> Result<(), ViewerError> {
    let cloud = lidarviz_io::read_pcd(path)?;
    viewer.show(&mask_scene(&cloud, mask_indexes)?)
}
