use lidarviz_core::{Aabb, CoreError, PointCloud};

pub const MARKER_SIZE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// RGBA with `opacity` (0..=1) mapped to the alpha channel.
    pub fn with_opacity(self, opacity: f32) -> [u8; 4] {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        [self.r, self.g, self.b, alpha]
    }
}

/// One named set of markers in a scatter scene.
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    pub name: String,
    pub positions: Vec<[f32; 3]>,
    /// `None` leaves the choice to the viewer's default palette.
    pub color: Option<Color>,
    pub opacity: f32,
    pub size: f32,
    pub show_legend: bool,
}

impl PointGroup {
    pub fn from_cloud(name: impl Into<String>, cloud: &PointCloud) -> Self {
        Self {
            name: name.into(),
            positions: cloud.iter_points().collect(),
            color: None,
            opacity: 1.0,
            size: MARKER_SIZE,
            show_legend: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_legend(mut self) -> Self {
        self.show_legend = true;
        self
    }

    /// Legend text for this group, if it asked for one.
    pub fn legend_label(&self) -> Option<&str> {
        self.show_legend.then_some(self.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub axis_titles: [String; 3],
    /// Scale all axes alike so the cloud keeps its real proportions.
    pub equal_aspect: bool,
    pub axes_visible: bool,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            axis_titles: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            equal_aspect: true,
            axes_visible: false,
        }
    }
}

/// Three labelled axis arrows drawn from the middle of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGizmo {
    pub origin: [f32; 3],
    pub length: f32,
    pub titles: [String; 3],
}

impl AxisGizmo {
    /// Arrow vectors along +X, +Y and +Z.
    pub fn vectors(&self) -> [[f32; 3]; 3] {
        let l = self.length;
        [[l, 0.0, 0.0], [0.0, l, 0.0], [0.0, 0.0, l]]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterScene {
    pub groups: Vec<PointGroup>,
    pub layout: SceneLayout,
}

impl ScatterScene {
    pub fn new(groups: Vec<PointGroup>) -> Self {
        Self {
            groups,
            layout: SceneLayout::default(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(
            self.groups
                .iter()
                .flat_map(|g| g.positions.iter().copied()),
        )
    }

    pub fn point_count(&self) -> usize {
        self.groups.iter().map(PointGroup::len).sum()
    }

    /// Axis arrows for the layout, or `None` when axes are hidden or there
    /// is nothing to measure them against.
    pub fn axis_gizmo(&self) -> Option<AxisGizmo> {
        if !self.layout.axes_visible {
            return None;
        }
        let bounds = self.bounds();
        if bounds.is_empty() {
            return None;
        }
        let longest = bounds.extent().into_iter().fold(0.0f32, f32::max);
        Some(AxisGizmo {
            origin: bounds.center(),
            length: if longest > 0.0 { 0.5 * longest } else { 1.0 },
            titles: self.layout.axis_titles.clone(),
        })
    }
}

/// A whole cloud as a single group.
pub fn cloud_scene(cloud: &PointCloud) -> ScatterScene {
    ScatterScene::new(vec![PointGroup::from_cloud("points", cloud).with_opacity(0.8)])
}

/// Splits a cloud into the points selected by `mask_indexes` (red) and the
/// rest (royal blue), both with legend entries.
pub fn mask_scene(cloud: &PointCloud, mask_indexes: &[usize]) -> Result<ScatterScene, CoreError> {
    let masked = cloud.select_by_index(mask_indexes, false)?;
    let unmasked = cloud.select_by_index(mask_indexes, true)?;

    Ok(ScatterScene::new(vec![
        PointGroup::from_cloud("masked points", &masked)
            .with_color(Color::RED)
            .with_opacity(1.0)
            .with_legend(),
        PointGroup::from_cloud("other points", &unmasked)
            .with_color(Color::ROYAL_BLUE)
            .with_opacity(0.8)
            .with_legend(),
    ]))
}
