use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sensorcore::codec::write_points;
use sensorcore::geometry::Point;
use serde::{Deserialize, Serialize};

/// Configuration for generating a synthetic sensor field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub threshold: f64,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            width: 100.0,
            height: 100.0,
            threshold: 10.0,
            seed: 0,
        }
    }
}

/// Scatters `count` sensors uniformly over `[0, width) x [0, height)`.
/// Both dimensions must be finite and positive.
/// The same seed always yields the same field.
pub fn build_sensor_field(config: &FieldConfig) -> anyhow::Result<Vec<Point>> {
    ensure!(
        config.width.is_finite()
            && config.width > 0.0
            && config.height.is_finite()
            && config.height > 0.0,
        "field dimensions must be finite and positive, got {}x{}",
        config.width,
        config.height
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let sensors = (0..config.count)
        .map(|_| {
            Point::new(
                rng.gen_range(0.0..config.width),
                rng.gen_range(0.0..config.height),
            )
        })
        .collect();
    Ok(sensors)
}

/// Renders a threshold line and one `x,y` line per sensor, ready to be piped
/// back into the finder.
pub fn render_input(threshold: f64, sensors: &[Point]) -> anyhow::Result<String> {
    let mut buffer = format!("{:?}\n", threshold).into_bytes();
    write_points(&mut buffer, sensors)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn build_input_from_config(config: &FieldConfig) -> anyhow::Result<String> {
    ensure!(
        config.threshold >= 0.0,
        "threshold must be non-negative, got {}",
        config.threshold
    );
    let sensors = build_sensor_field(config)?;
    render_input(config.threshold, &sensors)
}
