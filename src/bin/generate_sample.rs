use chrono::{Duration, NaiveDate};
use serde_json::json;

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

/// Baseline + slow trend + two seasonal components.
fn signal(day: usize) -> f64 {
    let t = day as f64;
    50.0 + 0.05 * t
        + 18.0 * (t / 58.0).sin()
        + 6.0 * (t / 9.0).sin()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let first_day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    let n_days = 365usize;

    let records: Vec<serde_json::Value> = (0..n_days)
        .map(|i| {
            let timestamp = first_day + Duration::days(i as i64);
            let value = signal(i) + rng.gauss(0.0, 2.5);
            json!({
                "timestamp": timestamp.format("%Y-%m-%d").to_string(),
                "value": (value * 100.0).round() / 100.0,
            })
        })
        .collect();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/chartData.json".to_string());
    let text = serde_json::to_string_pretty(&records).expect("serializing records");
    std::fs::write(&output_path, text).expect("writing output file");

    println!("Wrote {n_days} daily observations to {output_path}");
}
