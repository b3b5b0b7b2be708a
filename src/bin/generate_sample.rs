use std::fs;
use std::path::Path;

use benchplot::{Operation, Pipeline};

/// Synthetic cost of one operation at sweep position `x`: a fixed floor,
/// a per-node term that shrinks as `x` grows and a scan term that grows
/// with it, plus measurement noise.
fn timing(operation: Operation, x: f64, rng: &mut SimpleRng) -> f64 {
    let (base, decay, slope) = match operation {
        Operation::Insert => (0.9, 16.0, 0.0024),
        Operation::Search => (0.4, 9.0, 0.0011),
        Operation::Delete => (0.7, 12.0, 0.0019),
    };
    let value = base + decay / x + slope * x + rng.gauss(0.0, 0.02);
    value.max(0.001)
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_series(path: &Path, values: &[f64]) {
    let parent = path.parent().expect("series path has a parent");
    fs::create_dir_all(parent).expect("Failed to create input directory");
    let lines: String = values.iter().map(|v| format!("{v:.3}\n")).collect();
    fs::write(path, lines).expect("Failed to write timing file");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let mut written = 0;

    for pipeline in [Pipeline::degree(), Pipeline::threads()] {
        for (operation, file) in Operation::ALL.into_iter().zip(pipeline.inputs) {
            let series: Vec<f64> = pipeline
                .sweep
                .values()
                .map(|x| timing(operation, x, &mut rng))
                .collect();
            write_series(Path::new(file), &series);
            written += 1;
        }
        println!(
            "{}: {} samples per operation",
            pipeline.name,
            pipeline.sweep.len()
        );
    }

    // The exporters expect the figure directory to exist already.
    fs::create_dir_all("doc/res").expect("Failed to create output directory");

    println!("Wrote {written} timing files; run the degree and thread binaries to plot them");
}
