use rand::Rng;

use voronoimg::{BoundingBox, Error, Point, Voronoi, VoronoiBuilder, rasterize};

const IMAGE_WIDTH: usize = 1900;
const IMAGE_HEIGHT: usize = 1080;
const NUM_SITES: usize = 256;
const LLOYD_ROUNDS: usize = 1;
const OUTPUT_PATH: &str = "voronoi.png";

fn main() {
    let diagram = match build_diagram() {
        Ok(diagram) => diagram,
        Err(e) => {
            // construction errors leave nothing worth rasterizing
            eprintln!("failed to build voronoi diagram: {}", e);
            std::process::exit(1);
        }
    };

    println!("Rasterizing {} cells onto a {}x{} canvas", diagram.sites().len(), IMAGE_WIDTH, IMAGE_HEIGHT);
    let buffer = rasterize(&diagram, IMAGE_WIDTH, IMAGE_HEIGHT);

    if let Err(e) = buffer.save(OUTPUT_PATH) {
        // the render is lost but nothing is corrupted; report and exit quietly
        eprintln!("failed to write {}: {}", OUTPUT_PATH, e);
        return;
    }

    println!("Wrote {}", OUTPUT_PATH);
}

/// Samples random sites over the canvas and builds the relaxed diagram.
fn build_diagram() -> Result<Voronoi, Error> {
    let mut rng = rand::thread_rng();
    let x_range = rand::distributions::Uniform::new(0.0, IMAGE_WIDTH as f64);
    let y_range = rand::distributions::Uniform::new(0.0, IMAGE_HEIGHT as f64);
    let sites = (0..NUM_SITES)
        .map(|_| Point { x: rng.sample(x_range), y: rng.sample(y_range) })
        .collect();

    println!("Generating voronoi diagram for {} sites with {} relaxation round(s)", NUM_SITES, LLOYD_ROUNDS);
    VoronoiBuilder::default()
        .set_sites(sites)
        .set_bounding_box(BoundingBox::new(0.0, IMAGE_WIDTH as f64, 0.0, IMAGE_HEIGHT as f64)?)
        .set_lloyd_relaxation_iterations(LLOYD_ROUNDS)
        .build()
}
