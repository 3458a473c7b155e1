//! scrawl - hachure fill CLI
//!
//! Usage:
//!   scrawl polygon <x,y> <x,y> <x,y> ... [options]   Fill a polygon ring
//!   scrawl ellipse <cx> <cy> <width> <height> [options]
//!   scrawl demo                                      Render a sample scene
//!
//! Options:
//!   -a, --angle <deg>       Hachure angle in degrees (default -41)
//!   -g, --gap <units>       Spacing between hachure lines (default 4 x stroke width)
//!   -w, --weight <units>    Fill stroke weight (default stroke width / 2)
//!       --stroke-width <u>  Ambient stroke width (default 1)
//!       --connect-ends      Join consecutive hachure rows
//!       --cross             Crosshatch: second pass at angle + 90 (polygon only)
//!       --sketchy           Hand-drawn doubled strokes instead of exact lines
//!       --seed <n>          Seed for sketchy strokes and ellipse jitter (default 0)
//!   -f, --format <svg|json> Output format (default svg)

mod cli;

use std::env;
use std::process;

use cli::common::CliError;

fn print_usage() {
    // Keep in sync with the module doc above.
    print!(
        "scrawl - hachure fill generator\n\n\
         Commands:\n\
         \x20 polygon <x,y> <x,y> <x,y> ...   Fill a polygon ring\n\
         \x20 ellipse <cx> <cy> <w> <h>       Fill an ellipse\n\
         \x20 demo                            Render a sample scene\n\n\
         Options:\n\
         \x20 -a, --angle <deg>        Hachure angle in degrees (default -41)\n\
         \x20 -g, --gap <units>        Line spacing (default 4 x stroke width)\n\
         \x20 -w, --weight <units>     Fill stroke weight (default stroke width / 2)\n\
         \x20     --stroke-width <u>   Ambient stroke width (default 1)\n\
         \x20     --connect-ends       Join consecutive hachure rows\n\
         \x20     --cross              Crosshatch (polygon only)\n\
         \x20     --sketchy            Hand-drawn doubled strokes\n\
         \x20     --seed <n>           Seed for sketchy strokes and jitter\n\
         \x20 -f, --format <svg|json>  Output format (default svg)\n"
    );
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("polygon") => cli::cmd_polygon(&args[1..]),
        Some("ellipse") => cli::cmd_ellipse(&args[1..]),
        Some("demo") => cli::cmd_demo(),
        Some("-h") | Some("--help") => {
            print_usage();
            return;
        }
        Some(other) => Err(CliError::Usage(format!("unknown command: {}", other))),
        None => {
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
