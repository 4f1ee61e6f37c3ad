use std::hint::black_box;
use std::time::Instant;

use gallery_catalog::{BiomeType, Catalog};
use gallery_clock::FrameQueue;
use gallery_common::Size;
use gallery_render::{RecordingSurface, SceneHost, render_frame};

const SIZE: Size = Size::new(800.0, 500.0);

fn bench_render_frame(biome: BiomeType, iterations: u64) {
    let mut surface = RecordingSurface::new(SIZE);

    let start = Instant::now();
    for frame in 0..iterations {
        render_frame(black_box(biome), black_box(frame), &mut surface);
        surface.take_commands();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  render_frame ({biome}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}");
}

fn bench_host_ticks(iterations: usize) {
    let catalog = Catalog::builtin();
    let mut host = SceneHost::new(FrameQueue::new());

    let start = Instant::now();
    for (i, world) in catalog.iter().cycle().take(iterations / 10).enumerate() {
        if i == 0 {
            host.bind(*world, Some(RecordingSurface::new(SIZE)));
        } else {
            host.rebind(*world);
        }
        for _ in 0..10 {
            black_box(host.tick());
        }
        if let Some(surface) = host.surface_mut() {
            surface.take_commands();
        }
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  host tick with rebinds ({iterations} ticks): {per_iter:?}/tick, total {elapsed:?}"
    );
}

fn main() {
    println!("=== Scene Frame Benchmarks ===\n");

    println!("[render_frame]");
    for biome in BiomeType::KNOWN {
        bench_render_frame(biome, 2_000);
    }
    bench_render_frame(BiomeType::Unrecognized, 2_000);

    println!("\n[host]");
    bench_host_ticks(10_000);

    println!("\nDone.");
}
