//! Prints the wireframe models to stdout.
//!
//! Usage:
//! ```text
//! cargo run --example wireframe                 # every model
//! cargo run --example wireframe -- pyramid 4 3  # subdivided pyramid, n = 4, k = 3
//! RUST_LOG=wireframe_models=debug cargo run --example wireframe
//! ```

use wireframe_models::{
    MeshMaker, Result, Scene, TriangularPrism, TriangularPyramid, ViewFrustum, Wireframe,
};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for wireframe_models.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("wireframe_models=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("pyramid") {
        let count = |i: usize| args.get(i).and_then(|s| s.parse().ok()).unwrap_or(1);
        let pyramid = TriangularPyramid::default().remake(count(1), count(2))?;
        print!("{}", pyramid.execute()?);
        return Ok(());
    }

    let mut scene = Scene::new();
    scene.insert_wireframe(&TriangularPrism::default())?;
    scene.insert_wireframe(&TriangularPrism::from_height(0.5, 0.6, 0.2, 2, false)?)?;
    scene.insert_wireframe(&TriangularPyramid::default())?;
    scene.insert_wireframe(&TriangularPyramid::subdivided(1.0, 1.5, 3, 2)?)?;
    scene.insert_wireframe(&ViewFrustum::perspective(60.0, 16.0 / 9.0, 0.5, 4.0))?;

    for (_, model) in scene.iter() {
        let report = model.mesh.check();
        println!("{}", model.mesh);
        if !report.is_ok() {
            println!("  problems: {report:?}");
        }
    }

    let combined = scene.flatten("Scene");
    println!(
        "{}: {} vertices, {} line segments",
        combined.name(),
        combined.vertex_count(),
        combined.edge_count()
    );
    Ok(())
}
