use std::io::Write;

use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;

use lidarviz::scatter::{visualize_3d_masks, visualize_pcd, SceneViewer};

fn viewer() -> Box<dyn SceneViewer> {
    #[cfg(feature = "rerun")]
    {
        Box::new(lidarviz::scatter::RerunViewer::new("lidarviz_mask_scene"))
    }
    #[cfg(not(feature = "rerun"))]
    {
        Box::new(lidarviz::scatter::LogViewer)
    }
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
        .filter(None, LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(pcd_path) = args.next() else {
        eprintln!("usage: mask_scene <cloud.pcd> [index,index,...]");
        std::process::exit(2);
    };

    let viewer = viewer();
    match args.next() {
        Some(list) => {
            let mask: Vec<usize> = list
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::parse)
                .collect::<Result<_, _>>()?;
            visualize_3d_masks(&pcd_path, &mask, viewer.as_ref())?;
        }
        None => visualize_pcd(&pcd_path, viewer.as_ref())?,
    }
    Ok(())
}
