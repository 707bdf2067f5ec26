#!/usr/bin/env cargo
//! Print the Italian label (and the naming rule that fired) for hex colors
//! Usage: cargo run --example name_color -- <#RRGGBB> [#RRGGBB ...]

use room_palette::{ColorNamer, ColorSample};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <#RRGGBB> [#RRGGBB ...]", args[0]);
        eprintln!("Example: {} '#808080' '#3A7BD5'", args[0]);
        std::process::exit(1);
    }

    let namer = ColorNamer::new();
    let mut failed = false;

    for hex in &args[1..] {
        match ColorSample::from_hex(hex) {
            Ok(sample) => {
                let classification = namer.classify(&sample);
                let metrics = sample.metrics();
                println!(
                    "{}  {:<14} rule={:<19} lum={:.3} sat={:.3} hue={:.1}",
                    sample.to_hex(),
                    classification.name,
                    classification.rule,
                    metrics.luminance,
                    metrics.saturation,
                    metrics.hue
                );
            }
            Err(e) => {
                eprintln!("{}: {}", hex, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
