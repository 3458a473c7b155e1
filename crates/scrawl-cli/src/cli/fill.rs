//! Fill command implementations.

use scrawl::{
    fill_ellipse, fill_polygon, fill_polygon_crosshatch, FillOptions, NoJitter, OpSet,
    PlainStroke, Point, Polygon, Rng, SketchyStroke, StrokeRenderer,
};

use super::common::{parse_fill_args, parse_point, print_op_sets, CliError, FillArgs};

/// `scrawl polygon <x,y> <x,y> <x,y> ...`
pub fn cmd_polygon(args: &[String]) -> Result<(), CliError> {
    let parsed = parse_fill_args(args)?;
    if parsed.positional.len() < 3 {
        return Err(CliError::Usage(
            "polygon needs at least three x,y vertices".to_string(),
        ));
    }

    let points = parsed
        .positional
        .iter()
        .map(|arg| parse_point(arg))
        .collect::<Result<Vec<Point>, CliError>>()?;
    let polygon = Polygon::new(points);

    let set = with_renderer(&parsed, |options, mut renderer| {
        if parsed.cross {
            fill_polygon_crosshatch(&polygon, options, &mut renderer)
        } else {
            fill_polygon(&polygon, options, &mut renderer)
        }
    });

    print_op_sets(
        "polygon",
        &[set],
        parsed.format,
        parsed.options.effective_fill_weight(),
    );
    Ok(())
}

/// `scrawl ellipse <cx> <cy> <width> <height>`
pub fn cmd_ellipse(args: &[String]) -> Result<(), CliError> {
    let parsed = parse_fill_args(args)?;
    if parsed.positional.len() != 4 {
        return Err(CliError::Usage(
            "ellipse needs exactly: <cx> <cy> <width> <height>".to_string(),
        ));
    }

    let mut values = [0.0f64; 4];
    for (slot, arg) in values.iter_mut().zip(&parsed.positional) {
        *slot = arg
            .parse()
            .map_err(|_| CliError::BadNumber(arg.clone()))?;
    }
    let [cx, cy, width, height] = values;

    let set = with_renderer(&parsed, |options, mut renderer| {
        if parsed.sketchy {
            fill_ellipse(cx, cy, width, height, options, &mut Rng::new(parsed.seed), &mut renderer)
        } else {
            fill_ellipse(cx, cy, width, height, options, &mut NoJitter, &mut renderer)
        }
    });

    print_op_sets(
        "ellipse",
        &[set],
        parsed.format,
        parsed.options.effective_fill_weight(),
    );
    Ok(())
}

/// `scrawl demo` - a fixed sample scene: square, star, and circle.
pub fn cmd_demo() -> Result<(), CliError> {
    let options = FillOptions::default().with_gap(4.0);
    let mut renderer = SketchyStroke::new(42);
    let mut jitter = Rng::new(42);

    let square = Polygon::new(vec![
        Point::new(10.0, 10.0),
        Point::new(90.0, 10.0),
        Point::new(90.0, 90.0),
        Point::new(10.0, 90.0),
    ]);

    // A five-pointed star: concave, so sweep rows split into several strokes.
    let star = Polygon::new(
        (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { 40.0 } else { 16.0 };
                let theta = (i as f64) * std::f64::consts::PI / 5.0
                    - std::f64::consts::FRAC_PI_2;
                Point::new(150.0 + radius * theta.cos(), 50.0 + radius * theta.sin())
            })
            .collect(),
    );

    let sets = vec![
        fill_polygon(&square, &options, &mut renderer),
        fill_polygon_crosshatch(&star, &options.clone().with_angle(20.0), &mut renderer),
        fill_ellipse(260.0, 50.0, 70.0, 50.0, &options, &mut jitter, &mut renderer),
    ];

    print_op_sets(
        "demo",
        &sets,
        super::common::OutputFormat::Svg,
        options.effective_fill_weight(),
    );
    Ok(())
}

/// Run `fill` with the renderer selected by the parsed flags.
fn with_renderer<F>(parsed: &FillArgs, fill: F) -> OpSet
where
    F: FnOnce(&FillOptions, &mut dyn StrokeRenderer) -> OpSet,
{
    if parsed.sketchy {
        fill(&parsed.options, &mut SketchyStroke::new(parsed.seed))
    } else {
        fill(&parsed.options, &mut PlainStroke)
    }
}
