use crate::{draw_filled_circle, DepthColorMap, RenderError};
use image::RgbImage;
use lidarviz_core::{CoreError, ImageSize, ProjectedPoints};
use lidarviz_filters::preprocess;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Drop negative-depth and off-image points before drawing.
    pub preprocess: bool,
    /// Restrict drawing to these point indexes. `None` draws every point,
    /// `Some(vec![])` draws nothing. Indexes address the point set after
    /// preprocessing.
    pub indexes: Option<Vec<usize>>,
    /// Circle radius in pixels; 0 paints a single pixel per point.
    /// Negative values are rejected.
    pub point_radius: i32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            preprocess: true,
            indexes: None,
            point_radius: 1,
        }
    }
}

impl OverlayOptions {
    pub fn with_indexes(indexes: Vec<usize>) -> Self {
        Self {
            indexes: Some(indexes),
            ..Self::default()
        }
    }

    pub fn unfiltered() -> Self {
        Self {
            preprocess: false,
            ..Self::default()
        }
    }
}

/// Draws depth-colored projected points onto `image` and returns how many
/// points were drawn.
///
/// Points are drawn in increasing index order; a later point overwrites an
/// earlier one at the same pixel. Pixel coordinates are truncated toward
/// zero. Without preprocessing, pixels falling off the image are clipped.
///
/// Out-of-range `indexes` and a negative `point_radius` are rejected before
/// the image is touched.
pub fn render_projections(
    points: &ProjectedPoints,
    image: &mut RgbImage,
    options: &OverlayOptions,
) -> Result<usize, RenderError> {
    if options.point_radius < 0 {
        return Err(RenderError::NegativeRadius(options.point_radius));
    }

    let filtered;
    let points = if options.preprocess {
        filtered = preprocess(points, ImageSize::new(image.width(), image.height()));
        &filtered
    } else {
        points
    };

    let order = draw_order(points.len(), options.indexes.as_deref())?;
    let color_map = DepthColorMap::shared();
    for &i in &order {
        let [u, v, z] = points.point(i);
        draw_filled_circle(
            image,
            (u as i32, v as i32),
            options.point_radius,
            color_map.color(z),
        );
    }

    log::debug!("drew {} of {} projected points", order.len(), points.len());
    Ok(order.len())
}

/// Renders the projections onto `image` (mutated in place) and writes the
/// result to `output_path`. Nothing is written if drawing fails.
pub fn draw_projections_on_image(
    points: &ProjectedPoints,
    image: &mut RgbImage,
    output_path: impl AsRef<Path>,
    options: &OverlayOptions,
) -> Result<(), RenderError> {
    let output_path = output_path.as_ref();
    let drawn = render_projections(points, image, options)?;

    lidarviz_io::save_image(image, output_path).map_err(|source| RenderError::Save {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote overlay with {} points to {}",
        drawn,
        output_path.display()
    );
    Ok(())
}

fn draw_order(len: usize, indexes: Option<&[usize]>) -> Result<Vec<usize>, CoreError> {
    let Some(indexes) = indexes else {
        return Ok((0..len).collect());
    };

    if let Some(&index) = indexes.iter().find(|&&i| i >= len) {
        return Err(CoreError::IndexOutOfRange { index, len });
    }
    let mut order = indexes.to_vec();
    order.sort_unstable();
    order.dedup();
    Ok(order)
}
