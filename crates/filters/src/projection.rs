use lidarviz_core::{ImageSize, ProjectedPoints};

/// Drops points behind the sensor (`z < 0`) and points without a finite depth.
pub fn remove_negative_depth(points: &ProjectedPoints) -> ProjectedPoints {
    let keep: Vec<usize> = points
        .z()
        .iter()
        .enumerate()
        .filter(|(_, z)| **z >= 0.0)
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "depth filter removed {} of {} points",
        points.len() - keep.len(),
        points.len()
    );
    points.select(&keep)
}

/// Drops points whose pixel falls outside `[0, width) x [0, height)`.
pub fn remove_out_of_bounds(points: &ProjectedPoints, size: ImageSize) -> ProjectedPoints {
    let keep: Vec<usize> = points
        .u()
        .iter()
        .zip(points.v())
        .enumerate()
        .filter(|(_, (u, v))| size.contains(**u, **v))
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "bounds filter ({}x{}) removed {} of {} points",
        size.width,
        size.height,
        points.len() - keep.len(),
        points.len()
    );
    points.select(&keep)
}

/// Depth filter followed by the image-bounds filter.
pub fn preprocess(points: &ProjectedPoints, size: ImageSize) -> ProjectedPoints {
    if points.is_empty() {
        return ProjectedPoints::default();
    }
    remove_out_of_bounds(&remove_negative_depth(points), size)
}

#[cfg(test)]
mod tests {
    use super::{preprocess, remove_negative_depth, remove_out_of_bounds};
    use lidarviz_core::{ImageSize, ProjectedPoints};
    use proptest::prelude::*;

    fn pts(u: Vec<f32>, v: Vec<f32>, z: Vec<f32>) -> ProjectedPoints {
        ProjectedPoints::new(u, v, z).unwrap()
    }

    #[test]
    fn negative_depth_removed() {
        let out = remove_negative_depth(&pts(
            vec![1.0, 2.0, 3.0],
            vec![1.0, 2.0, 3.0],
            vec![0.0, -0.5, 7.0],
        ));
        assert_eq!(out.u(), &[1.0, 3.0]);
        assert_eq!(out.z(), &[0.0, 7.0]);
    }

    #[test]
    fn nan_depth_removed() {
        let out = remove_negative_depth(&pts(vec![1.0, 2.0], vec![1.0, 2.0], vec![f32::NAN, 1.0]));
        assert_eq!(out.len(), 1);
        assert_eq!(out.point(0), [2.0, 2.0, 1.0]);
    }

    #[test]
    fn upper_edge_is_out_of_bounds() {
        let size = ImageSize::new(10, 20);
        let out = remove_out_of_bounds(
            &pts(
                vec![0.0, 10.0, 9.5, 3.0],
                vec![0.0, 5.0, 19.9, 20.0],
                vec![1.0, 2.0, 3.0, 4.0],
            ),
            size,
        );
        assert_eq!(out.z(), &[1.0, 3.0]);
    }

    #[test]
    fn mixed_scene_keeps_only_valid_point() {
        let size = ImageSize::new(100, 100);
        let out = preprocess(
            &pts(
                vec![5.0, 150.0, -3.0, 5.0],
                vec![5.0, 60.0, 10.0, 200.0],
                vec![2.0, -1.0, 3.0, 4.0],
            ),
            size,
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out.point(0), [5.0, 5.0, 2.0]);
    }

    #[test]
    fn empty_input() {
        let out = preprocess(&ProjectedPoints::default(), ImageSize::new(10, 10));
        assert!(out.is_empty());
    }

    proptest! {
        #[test]
        fn survivors_are_valid_and_ordered(
            raw in prop::collection::vec(
                (-50.0f32..150.0f32, -50.0f32..150.0f32, -10.0f32..10.0f32),
                0..300
            ),
            width in 1u32..120,
            height in 1u32..120,
        ) {
            let points = pts(
                raw.iter().map(|p| p.0).collect(),
                raw.iter().map(|p| p.1).collect(),
                raw.iter().map(|p| p.2).collect(),
            );
            let size = ImageSize::new(width, height);
            let out = preprocess(&points, size);

            prop_assert_eq!(out.u().len(), out.v().len());
            prop_assert_eq!(out.u().len(), out.z().len());
            for [u, v, z] in out.iter_points() {
                prop_assert!(z >= 0.0);
                prop_assert!(u >= 0.0 && u < width as f32, "u={} width={}", u, width);
                prop_assert!(v >= 0.0 && v < height as f32, "v={} height={}", v, height);
            }

            let expected: Vec<[f32; 3]> = points
                .iter_points()
                .filter(|[u, v, z]| *z >= 0.0 && size.contains(*u, *v))
                .collect();
            let actual: Vec<[f32; 3]> = out.iter_points().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
