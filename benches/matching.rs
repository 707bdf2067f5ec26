use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};
use room_palette::matching::NoopObserver;
use room_palette::{
    extract_color_requests, name_color, MatchPolicy, PaletteExtractor, Product, ProductMatcher,
};
use std::sync::Arc;

const NAMES: [&str; 6] = ["grigio", "rosso", "blu", "sabbia", "verde", "noce"];

fn catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| {
            let color = NAMES[i % NAMES.len()];
            let category = if i % 3 == 0 { "sedie" } else { "divani-letto" };
            Product::new(i.to_string(), format!("Divano {} {}", color, i))
                .with_description(format!("rivestimento {} in tessuto", color))
                .with_category(category)
                .with_material(if i % 2 == 0 { "velluto" } else { "lino" })
        })
        .collect()
}

fn room(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

fn benchmark_naming(c: &mut Criterion) {
    let hexes = ["#808080", "#DC1E1E", "#1E50C8", "#C8A59B", "#DCC8AA", "#50503E"];
    c.bench_function("name_color", |b| {
        b.iter(|| {
            for hex in hexes {
                black_box(name_color(black_box(hex)).ok());
            }
        })
    });
}

fn benchmark_extraction(c: &mut Criterion) {
    let image = room(1024, 768);
    let extractor = PaletteExtractor::new();
    c.bench_function("extract_dominant_colors_1024x768", |b| {
        b.iter(|| black_box(extractor.extract_dominant_colors(black_box(&image))))
    });
}

fn benchmark_matching(c: &mut Criterion) {
    let products = catalog(500);
    let matcher = ProductMatcher::new().with_observer(Arc::new(NoopObserver));
    let detected = ["#808080", "#DC1E1E", "#1E50C8"];

    c.bench_function("strict_palette_500", |b| {
        b.iter(|| {
            black_box(matcher.find_matching_products(
                black_box(&products),
                &detected,
                "divano",
                "",
                MatchPolicy::StrictPalette,
            ))
        })
    });

    c.bench_function("requirement_driven_500", |b| {
        b.iter(|| {
            black_box(matcher.find_matching_products(
                black_box(&products),
                &detected,
                "divano",
                "un divano rosso in velluto",
                MatchPolicy::RequirementDriven,
            ))
        })
    });

    c.bench_function("extract_color_requests", |b| {
        b.iter(|| black_box(extract_color_requests(black_box("Vorrei un divano nero e bianco"))))
    });
}

criterion_group!(benches, benchmark_naming, benchmark_extraction, benchmark_matching);
criterion_main!(benches);
