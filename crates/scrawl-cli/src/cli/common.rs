//! Shared CLI plumbing: argument parsing, errors, SVG and JSON output.

use std::fmt;

use serde::Serialize;

use scrawl::{FillOptions, Op, OpSet, Point};

/// Errors surfaced to the user with a non-zero exit code.
#[derive(Debug)]
pub enum CliError {
    Usage(String),
    BadNumber(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::BadNumber(arg) => write!(f, "not a number: {}", arg),
        }
    }
}

impl std::error::Error for CliError {}

/// Output format for fill results.
#[derive(Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Flags shared by the `polygon` and `ellipse` commands, plus the
/// positional arguments left over after flag parsing.
pub struct FillArgs {
    pub options: FillOptions,
    pub sketchy: bool,
    pub cross: bool,
    pub seed: u64,
    pub format: OutputFormat,
    pub positional: Vec<String>,
}

/// Parse flags out of `args`, collecting everything else as positionals.
pub fn parse_fill_args(args: &[String]) -> Result<FillArgs, CliError> {
    let mut options = FillOptions::default();
    let mut sketchy = false;
    let mut cross = false;
    let mut seed = 0u64;
    let mut format = OutputFormat::Svg;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-a" | "--angle" => options.angle = number(arg, iter.next())?,
            "-g" | "--gap" => options.gap = number(arg, iter.next())?,
            "-w" | "--weight" => options.fill_weight = number(arg, iter.next())?,
            "--stroke-width" => options.stroke_width = number(arg, iter.next())?,
            "--connect-ends" => options.connect_ends = true,
            "--cross" => cross = true,
            "--sketchy" => sketchy = true,
            "--seed" => {
                let value = required(arg, iter.next())?;
                seed = value
                    .parse()
                    .map_err(|_| CliError::BadNumber(value.clone()))?;
            }
            "-f" | "--format" => {
                let value = required(arg, iter.next())?;
                format = match value.as_str() {
                    "svg" => OutputFormat::Svg,
                    "json" => OutputFormat::Json,
                    other => {
                        return Err(CliError::Usage(format!(
                            "unknown format: {} (expected svg or json)",
                            other
                        )));
                    }
                };
            }
            // Bare negative numbers and negative x,y pairs are positionals,
            // not flags.
            other if other.starts_with('-')
                && !other.contains(',')
                && other.parse::<f64>().is_err() =>
            {
                return Err(CliError::Usage(format!("unknown option: {}", other)));
            }
            _ => positional.push(arg.clone()),
        }
    }

    Ok(FillArgs {
        options,
        sketchy,
        cross,
        seed,
        format,
        positional,
    })
}

fn required<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a String, CliError> {
    value.ok_or_else(|| CliError::Usage(format!("{} requires a value", flag)))
}

fn number(flag: &str, value: Option<&String>) -> Result<f64, CliError> {
    let value = required(flag, value)?;
    value
        .parse()
        .map_err(|_| CliError::BadNumber(value.clone()))
}

/// Parse an `x,y` pair.
pub fn parse_point(arg: &str) -> Result<Point, CliError> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| CliError::Usage(format!("expected x,y pair, got: {}", arg)))?;
    let x: f64 = x.parse().map_err(|_| CliError::BadNumber(arg.to_string()))?;
    let y: f64 = y.parse().map_err(|_| CliError::BadNumber(arg.to_string()))?;
    Ok(Point::new(x, y))
}

/// Render op sets as a standalone SVG document, one `<path>` per set.
pub fn op_sets_to_svg(sets: &[OpSet], stroke_width: f64) -> String {
    let (min_x, min_y, max_x, max_y) = ops_bounds(sets);
    let pad = 5.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.2} {:.2} {:.2} {:.2}">
<g stroke="black" stroke-width="{}" fill="none" stroke-linecap="round">
"#,
        min_x - pad,
        min_y - pad,
        (max_x - min_x) + pad * 2.0,
        (max_y - min_y) + pad * 2.0,
        stroke_width,
    ));

    for set in sets {
        svg.push_str(&format!("  <path d=\"{}\"/>\n", path_data(set)));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

/// Build SVG path data from a set's pen operations.
pub fn path_data(set: &OpSet) -> String {
    let mut d = String::new();
    for op in &set.ops {
        match op {
            Op::Move { x, y } => d.push_str(&format!("M{:.2} {:.2} ", x, y)),
            Op::Line { x, y } => d.push_str(&format!("L{:.2} {:.2} ", x, y)),
        }
    }
    d.trim_end().to_string()
}

fn ops_bounds(sets: &[OpSet]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for set in sets {
        for op in &set.ops {
            let (Op::Move { x, y } | Op::Line { x, y }) = op;
            min_x = min_x.min(*x);
            min_y = min_y.min(*y);
            max_x = max_x.max(*x);
            max_y = max_y.max(*y);
        }
    }

    if min_x > max_x {
        // No ops at all; emit a small empty canvas.
        (0.0, 0.0, 100.0, 100.0)
    } else {
        (min_x, min_y, max_x, max_y)
    }
}

/// JSON envelope for fill results.
#[derive(Serialize)]
pub struct JsonFill<'a> {
    pub shape: &'a str,
    pub op_sets: &'a [OpSet],
}

pub fn print_op_sets(shape: &str, sets: &[OpSet], format: OutputFormat, fill_weight: f64) {
    match format {
        OutputFormat::Svg => print!("{}", op_sets_to_svg(sets, fill_weight)),
        OutputFormat::Json => {
            let out = JsonFill {
                shape,
                op_sets: sets,
            };
            // Serialization of these plain structs cannot fail.
            println!("{}", serde_json::to_string_pretty(&out).unwrap());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrawl::OpSet;

    #[test]
    fn parse_point_pairs() {
        let p = parse_point("3.5,-2").unwrap();
        assert_eq!((p.x, p.y), (3.5, -2.0));
        assert!(parse_point("nope").is_err());
        assert!(parse_point("1;2").is_err());
    }

    #[test]
    fn parse_flags_and_positionals() {
        let args: Vec<String> = ["0,0", "10,0", "--angle", "45", "-g", "2.5", "--sketchy"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_fill_args(&args).unwrap();
        assert_eq!(parsed.options.angle, 45.0);
        assert_eq!(parsed.options.gap, 2.5);
        assert!(parsed.sketchy);
        assert_eq!(parsed.positional, vec!["0,0", "10,0"]);
    }

    #[test]
    fn negative_numbers_are_not_flags() {
        let args: Vec<String> = ["-5", "3", "--angle", "-41"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let parsed = parse_fill_args(&args).unwrap();
        assert_eq!(parsed.options.angle, -41.0);
        assert_eq!(parsed.positional, vec!["-5", "3"]);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let args = vec!["--frobnicate".to_string()];
        assert!(parse_fill_args(&args).is_err());
    }

    #[test]
    fn svg_output_shape() {
        let set = OpSet::fill_sketch(vec![
            Op::Move { x: 0.0, y: 0.0 },
            Op::Line { x: 10.0, y: 10.0 },
        ]);
        let svg = op_sets_to_svg(&[set], 0.5);
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<path d=\"M0.00 0.00 L10.00 10.00\"/>"));
        assert!(svg.contains("</svg>"));
    }
}
