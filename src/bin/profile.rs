use std::time::Instant;

use mazegen::{Generator, Maze, MazeConfig};

fn main() {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(100);
    let iterations = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);

    for generator in Generator::ALL {
        let started = Instant::now();
        for seed in 0..iterations {
            let maze = Maze::build(MazeConfig {
                width: size,
                height: size,
                seed: Some(seed),
                generator,
                ..MazeConfig::default()
            })
            .expect("profiling configuration is valid");
            std::hint::black_box(maze);
        }
        tracing::info!(
            %generator,
            size,
            iterations,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generation timing"
        );
    }
}
