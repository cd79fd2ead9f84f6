use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// One scan: peaks on a sloped background plus noise.
fn generate_scan(
    energies: &[f64],
    peaks: &[(f64, f64, f64)],
    background: (f64, f64),
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    let (slope, offset) = background;
    energies
        .iter()
        .map(|&e| {
            let signal: f64 = peaks
                .iter()
                .map(|&(mu, sigma, amp)| gaussian(e, mu, sigma, amp))
                .sum();
            signal + slope * e + offset + rng.gauss(0.0, noise_level)
        })
        .collect()
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

fn main() {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    fs::create_dir_all(&out_dir).expect("Failed to create output folder");

    let mut rng = SimpleRng::new(42);

    // Binding energy: 280.0 → 295.0 eV, step 0.05
    let energies: Vec<f64> = (0..=300).map(|i| 280.0 + i as f64 * 0.05).collect();

    // C 1s envelope: C-C, C-O, O-C=O
    let peaks = [(284.8, 0.45, 120.0), (286.4, 0.5, 35.0), (288.9, 0.55, 18.0)];

    let n_scans = 4;
    for scan in 1..=n_scans {
        let background = (-1.5, 460.0 + scan as f64);
        let counts = generate_scan(&energies, &peaks, background, 1.5, &mut rng);

        let mut text = String::from("# binding_energy_eV counts\n");
        for (e, c) in energies.iter().zip(&counts) {
            writeln!(text, "{e:.2} {c:.3}").expect("writing to String cannot fail");
        }
        let path = out_dir.join(format!("scan_{scan:02}.txt"));
        fs::write(&path, text).expect("Failed to write scan");
    }

    // Entries the loader is expected to skip.
    fs::write(out_dir.join("broken.txt"), "280.00 12.0 extra\n").expect("Failed to write broken.txt");
    fs::write(out_dir.join("notes.md"), "Synthetic C 1s scans\n").expect("Failed to write notes.md");

    println!(
        "Wrote {n_scans} scans ({} points each) plus 2 faulty entries to {}",
        energies.len(),
        out_dir.display()
    );
}
