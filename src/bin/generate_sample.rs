use anyhow::Context;

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

// ---------------------------------------------------------------------------
// k-means clustering
// ---------------------------------------------------------------------------

const MAX_ITERATIONS: usize = 100;

/// Naive k-means over 2-d feature points.  Begin with random centroids drawn
/// from the data.  Repeatedly assign each point to the nearest centroid, then
/// update the centroids to be the mean of all corresponding points.  Stop at
/// a maximum number of iterations, or when the assignment stops changing.
///
/// Returns the cluster index of each point, in input order.
fn kmeans(points: &[[f64; 2]], k: usize, rng: &mut SimpleRng) -> Vec<usize> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut centroids: Vec<[f64; 2]> = (0..k).map(|_| random_datum(points, rng)).collect();
    let mut assignment = vec![0usize; points.len()];
    assign_centroids(points, &centroids, &mut assignment);

    for _ in 0..MAX_ITERATIONS {
        centroids = new_centroids(points, &assignment, k, rng);
        if !assign_centroids(points, &centroids, &mut assignment) {
            break;
        }
    }

    assignment
}

/// For each point, compute the closest centroid.  Returns whether any point
/// changed cluster.
fn assign_centroids(
    points: &[[f64; 2]],
    centroids: &[[f64; 2]],
    assignment: &mut [usize],
) -> bool {
    let mut changed = false;

    for (point, slot) in points.iter().zip(assignment.iter_mut()) {
        let nearest = centroids
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                distance_sq(point, a).total_cmp(&distance_sq(point, b))
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        changed = changed || nearest != *slot;
        *slot = nearest;
    }

    changed
}

/// Compute new centroids via arithmetic mean.  A cluster that lost all of its
/// points gets a random data point as its new centroid.
fn new_centroids(
    points: &[[f64; 2]],
    assignment: &[usize],
    k: usize,
    rng: &mut SimpleRng,
) -> Vec<[f64; 2]> {
    let mut sums = vec![[0.0f64; 2]; k];
    let mut counts = vec![0usize; k];

    for (point, &cluster) in points.iter().zip(assignment) {
        sums[cluster][0] += point[0];
        sums[cluster][1] += point[1];
        counts[cluster] += 1;
    }

    sums.iter()
        .zip(&counts)
        .map(|(sum, &count)| {
            if count == 0 {
                random_datum(points, rng)
            } else {
                [sum[0] / count as f64, sum[1] / count as f64]
            }
        })
        .collect()
}

fn random_datum(points: &[[f64; 2]], rng: &mut SimpleRng) -> [f64; 2] {
    let idx = ((rng.next_f64() * points.len() as f64) as usize).min(points.len() - 1);
    points[idx]
}

fn distance_sq(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

/// Min-max rescale each dimension to [0, 1] so duration does not dominate
/// the distance metric.  A dimension with zero spread collapses to 0.
fn normalized(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut rescaled = points.to_vec();
    for dim in 0..2 {
        let min = points.iter().map(|p| p[dim]).fold(f64::INFINITY, f64::min);
        let max = points
            .iter()
            .map(|p| p[dim])
            .fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        for p in &mut rescaled {
            p[dim] = if range.abs() < f64::EPSILON {
                0.0
            } else {
                (p[dim] - min) / range
            };
        }
    }
    rescaled
}

// ---------------------------------------------------------------------------
// Sample generation
// ---------------------------------------------------------------------------

/// Per-genre feature profile: (name, duration mean, duration sd, danceability mean)
const GENRES: [(&str, f64, f64, f64); 4] = [
    ("ambient", 320.0, 60.0, 0.18),
    ("jazz", 260.0, 45.0, 0.45),
    ("house", 210.0, 30.0, 0.82),
    ("drum_and_bass", 180.0, 25.0, 0.75),
];

const TRACKS_PER_GENRE: usize = 40;
const CLUSTERS: usize = 4;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // Generate per-genre feature points.
    let mut names = Vec::new();
    let mut points: Vec<[f64; 2]> = Vec::new();
    for (genre, dur_mean, dur_sd, dance_mean) in GENRES {
        for i in 0..TRACKS_PER_GENRE {
            let duration = rng.gauss(dur_mean, dur_sd).max(30.0);
            let danceability = rng.gauss(dance_mean, 0.08).clamp(0.0, 1.0);
            names.push(format!("{genre}_{i:03}"));
            points.push([duration, danceability]);
        }
    }

    // The centroid column is the k-means cluster of each track.
    let assignment = kmeans(&normalized(&points), CLUSTERS, &mut rng);

    std::fs::create_dir_all("data").context("creating data directory")?;
    let output_path = "data/out.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record(["track", "duration", "danceability", "centroid"])
        .context("writing header")?;

    for ((name, point), cluster) in names.iter().zip(&points).zip(&assignment) {
        writer
            .write_record([
                name.clone(),
                format!("{:.2}", point[0]),
                format!("{:.4}", point[1]),
                format!("{cluster}"),
            ])
            .context("writing row")?;
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {} tracks to {output_path}", names.len());
    Ok(())
}
