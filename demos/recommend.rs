#!/usr/bin/env cargo
//! Recommend catalog products for a room photo
//! Usage: cargo run --example recommend -- <room image> <products.json> <furniture type> [requirements] [--requirement-driven]
//!
//! Set RUST_LOG=debug (or trace) to follow the matcher's decisions.

use room_palette::{
    analyze_room, load_image, MatchPolicy, Product, RecommendationRequest, Recommender,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().collect();
    let policy = match args.iter().position(|a| a == "--requirement-driven") {
        Some(index) => {
            args.remove(index);
            MatchPolicy::RequirementDriven
        }
        None => MatchPolicy::StrictPalette,
    };

    if args.len() < 4 || args.len() > 5 {
        eprintln!(
            "Usage: {} <room image> <products.json> <furniture type> [requirements] [--requirement-driven]",
            args[0]
        );
        eprintln!("Example: {} soggiorno.jpg catalogo.json divano \"in velluto blu\"", args[0]);
        std::process::exit(1);
    }

    let room = load_image(Path::new(&args[1]))?;
    let catalog: Vec<Product> = serde_json::from_str(&std::fs::read_to_string(&args[2])?)?;

    let palette = analyze_room(&room)?;
    for color in &palette {
        eprintln!("{}  {}", color.hex, color.name);
    }

    let request = RecommendationRequest::new(args[3].as_str())
        .with_requirements(args.get(4).cloned().unwrap_or_default())
        .with_detected_colors(palette.into_iter().map(|c| c.hex))
        .with_policy(policy)
        .with_image_url(args[1].as_str());

    let response = Recommender::new().recommend(&request, &catalog)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
