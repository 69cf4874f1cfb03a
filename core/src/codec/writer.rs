use crate::geometry::Point;
use crate::prelude::{SensorError, SensorResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one `x,y` line per point.
pub fn write_points<W: Write>(writer: &mut W, points: &[Point]) -> io::Result<()> {
    for point in points {
        writeln!(writer, "{}", point)?;
    }
    Ok(())
}

/// Creates (or truncates) `path` and writes the chosen sensors to it.
pub fn write_chosen<P: AsRef<Path>>(path: P, points: &[Point]) -> SensorResult<()> {
    let path = path.as_ref();
    let wrap = |source: io::Error| SensorError::OutputWrite {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    write_points(&mut writer, points).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_point_per_line() {
        let mut buffer: Vec<u8> = Vec::new();
        write_points(&mut buffer, &[Point::new(0.0, 0.0), Point::new(0.5, -1.25)]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0.0,0.0\n0.5,-1.25\n");
    }

    #[test]
    fn empty_selection_writes_nothing() {
        let mut buffer: Vec<u8> = Vec::new();
        write_points(&mut buffer, &[]).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn missing_directory_is_reported_as_output_error() {
        let path = std::env::temp_dir()
            .join("sensorcore-missing-dir-7f3a")
            .join("chosen.txt");
        let err = write_chosen(&path, &[Point::new(1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, SensorError::OutputWrite { .. }));
    }
}
