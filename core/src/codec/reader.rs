use crate::geometry::Point;
use crate::prelude::{SensorError, SensorInput, SensorResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

fn parse_error(line: usize, text: &str, reason: impl Into<String>) -> SensorError {
    SensorError::InputParse {
        line,
        text: text.to_string(),
        reason: reason.into(),
    }
}

/// Non-finite values are only spelled `Infinity` or `NaN` (with an optional
/// sign). `inf`, `infinity` and other letter cases are rejected.
fn is_accepted_spelling(field: &str) -> bool {
    let body = field.trim_start_matches(['+', '-']);
    let special = ["inf", "infinity", "nan"]
        .iter()
        .any(|word| body.eq_ignore_ascii_case(word));
    !special || body == "Infinity" || body == "NaN"
}

fn parse_number(line: usize, text: &str, field: &str) -> SensorResult<f64> {
    let trimmed = field.trim();
    if !is_accepted_spelling(trimmed) {
        return Err(parse_error(line, text, format!("{:?} is not a number", field)));
    }
    trimmed
        .parse::<f64>()
        .map_err(|err| parse_error(line, text, format!("{:?} is not a number ({})", field, err)))
}

/// Parses one `x,y` line. `line` is the 1-based line number used in errors.
pub fn parse_coordinates(line: usize, text: &str) -> SensorResult<Point> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 2 {
        return Err(parse_error(
            line,
            text,
            format!("expected 2 comma-separated fields, found {}", fields.len()),
        ));
    }

    let x = parse_number(line, text, fields[0])?;
    let y = parse_number(line, text, fields[1])?;
    if x.is_nan() || y.is_nan() {
        return Err(parse_error(line, text, "coordinates must not be NaN"));
    }
    Ok(Point::new(x, y))
}

/// Reads the threshold line followed by one `x,y` line per sensor.
///
/// Every line after the first must hold a coordinate pair; a blank line is
/// an error like any other malformed line.
pub fn parse_input<R: BufRead>(reader: R) -> SensorResult<SensorInput> {
    let mut lines = reader.lines();

    let first = lines
        .next()
        .transpose()
        .map_err(SensorError::InputRead)?
        .ok_or_else(|| parse_error(1, "", "missing threshold line"))?;
    let threshold = parse_number(1, &first, &first)?;
    if threshold.is_nan() || threshold < 0.0 {
        return Err(SensorError::InvalidThreshold(threshold));
    }

    let mut sensors = Vec::new();
    for (index, line) in lines.enumerate() {
        let text = line.map_err(SensorError::InputRead)?;
        sensors.push(parse_coordinates(index + 2, &text)?);
    }

    if sensors.is_empty() {
        return Err(SensorError::NoSensors);
    }

    Ok(SensorInput::new(threshold, sensors))
}

pub fn parse_str(contents: &str) -> SensorResult<SensorInput> {
    parse_input(contents.as_bytes())
}

pub fn read_input_file<P: AsRef<Path>>(path: P) -> SensorResult<SensorInput> {
    let file = File::open(path.as_ref()).map_err(SensorError::InputRead)?;
    parse_input(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_threshold_and_sensors() {
        let input = parse_str("1.0\n0,0\n0.5,0\n10,10\n0.9,0").unwrap();
        assert_eq!(input.threshold, 1.0);
        assert_eq!(
            input.sensors,
            vec![
                Point::new(0.0, 0.0),
                Point::new(0.5, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.9, 0.0),
            ]
        );
    }

    #[test]
    fn tolerates_trailing_newline_and_crlf() {
        let input = parse_str("2.5\r\n1,2\r\n-3, 4.5\r\n").unwrap();
        assert_eq!(input.threshold, 2.5);
        assert_eq!(input.sensors[1], Point::new(-3.0, 4.5));
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        let err = parse_str("5.0\nabc,def").unwrap_err();
        assert!(matches!(err, SensorError::InputParse { line: 2, .. }));
    }

    #[test]
    fn rejects_blank_line() {
        let err = parse_str("5.0\n1,1\n\n").unwrap_err();
        assert!(matches!(err, SensorError::InputParse { line: 3, .. }));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse_coordinates(4, "1.0"),
            Err(SensorError::InputParse { line: 4, .. })
        ));
        assert!(parse_coordinates(4, "1,2,3").is_err());
    }

    #[test]
    fn rejects_nan_coordinate() {
        assert!(parse_coordinates(2, "NaN,1").is_err());
    }

    #[test]
    fn rejects_bad_threshold() {
        assert!(matches!(
            parse_str("far\n1,1"),
            Err(SensorError::InputParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_str("-1\n1,1"),
            Err(SensorError::InvalidThreshold(_))
        ));
        assert!(parse_str("").is_err());
    }

    #[test]
    fn only_exact_infinity_spelling_is_accepted() {
        assert!(parse_str("inf\n1,1\n2,2").is_err());
        assert!(parse_str("INFINITY\n1,1").is_err());
        assert!(parse_coordinates(2, "1,-inf").is_err());
        assert!(parse_coordinates(2, "nan,1").is_err());

        let input = parse_str("Infinity\n1,1\n2,2").unwrap();
        assert_eq!(input.threshold, f64::INFINITY);
        assert_eq!(
            parse_coordinates(2, "-Infinity,+Infinity").unwrap(),
            Point::new(f64::NEG_INFINITY, f64::INFINITY)
        );
    }

    #[test]
    fn threshold_without_sensors_is_an_error() {
        assert!(matches!(parse_str("3.0\n"), Err(SensorError::NoSensors)));
    }
}
