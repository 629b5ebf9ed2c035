use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use image::RgbImage;
use log::LevelFilter;

use lidarviz::core::{CoreError, ProjectedPoints};
use lidarviz::io::load_image;
use lidarviz::render::{draw_projections_on_image, OverlayOptions};

/// A synthetic 32-beam sweep projected through a 640x480 pinhole camera.
fn synthetic_projection() -> Result<ProjectedPoints, CoreError> {
    let (focal, cx, cy) = (500.0f32, 320.0f32, 240.0f32);
    let mut u = Vec::new();
    let mut v = Vec::new();
    let mut z = Vec::new();

    for beam in 0..32 {
        let elevation = (beam as f32 - 16.0).to_radians() * 0.8;
        for step in 0..720 {
            let azimuth = (step as f32 * 0.5).to_radians();
            // ground at 1.7 m below the sensor, walls at 40 m
            let range = if elevation < 0.0 {
                (1.7 / -elevation.tan()).min(40.0)
            } else {
                40.0
            };
            let x = range * azimuth.sin();
            let y = -range * elevation.tan();
            let depth = range * azimuth.cos();
            if depth.abs() < 1e-3 {
                continue;
            }
            u.push(focal * x / depth + cx);
            v.push(focal * y / depth + cy);
            z.push(depth);
        }
    }

    // behind-camera points keep negative depth and are dropped by preprocessing
    ProjectedPoints::new(u, v, z)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Debug)
        .init();

    let mut args = std::env::args().skip(1);
    let mut image = match args.next() {
        Some(path) => load_image(path)?,
        None => RgbImage::new(640, 480),
    };
    let output = args.next().unwrap_or_else(|| "overlay.png".to_string());

    let points = synthetic_projection()?;
    log::info!("projected {} points", points.len());

    draw_projections_on_image(&points, &mut image, &output, &OverlayOptions::default())?;
    Ok(())
}
