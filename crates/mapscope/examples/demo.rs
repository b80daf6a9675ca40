//! Demo showing basic mapscope usage.
//!
//! Composes a small antigenic map plot from JSON, attaches bootstrap
//! uncertainty clouds, and walks through selection-driven overlay
//! visibility.

use mapscope::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut viewer = Viewer::new(MapData::default());
    viewer
        .clip_planes
        .push_ambient(ClipPlane::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X));
    viewer
        .clip_planes
        .push_ambient(ClipPlane::new(Vec3::new(5.0, 0.0, 0.0), -Vec3::X));

    let data = PlotData::from_json(
        r#"{
            "plot": [
                {
                    "type": "glpoints",
                    "ID": [1, 2, 3],
                    "coords": [[0.0, 0.0], [1.5, 0.3], [-0.8, 2.1]],
                    "properties": {
                        "interactive": true,
                        "toggle": "antigens",
                        "color": { "r": 0.2, "g": 0.5, "b": 0.8 }
                    }
                },
                {
                    "type": "text",
                    "ID": [4, 5],
                    "coords": [[0.0, -3.2, 0.0], [0.0, 3.2, 0.0]],
                    "text": ["-3", "3"],
                    "properties": { "faces": "x-", "xpd": true }
                },
                {
                    "type": "grid",
                    "ID": [6],
                    "properties": { "toggle": "grid", "renderOrder": -1 }
                }
            ]
        }"#,
    )?;
    viewer.populate_plot(&data)?;

    println!(
        "composed {} elements, {} toggles",
        viewer.elements.len(),
        viewer.toggles.len()
    );

    // Each map point gets a bootstrap cloud, shown only while selected.
    for i in 0..3 {
        viewer.add_point(PointKind::Antigen, i);
    }
    viewer.show_bootstrap_points(&BootstrapData {
        ag_noise: vec![vec![1.2, -0.4, 0.0], vec![0.8, 0.1, -2.2]],
        coords: vec![
            vec![vec![0.1, 0.1], vec![1.4, 0.4], vec![-0.7, 2.0]],
            vec![vec![-0.1, 0.05], vec![1.6, 0.2], vec![-0.9, 2.3]],
        ],
    })?;

    viewer.set_point_selected(0, true);
    println!(
        "scene members with point 0 selected: {}",
        viewer.scene.members().len()
    );
    viewer.set_point_selected(0, false);

    viewer.set_toggle("grid", false);
    println!("grid hidden; done");
    Ok(())
}
