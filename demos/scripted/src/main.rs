//! scripted — smallest example for the globe-guess scoring core.
//!
//! Plays a fixed set of guesses against a handful of synthetic regions and
//! prints each result.  Swap the synthetic rings for decoded country
//! boundaries to run against the real dataset; the pipeline is identical.

mod regions;

use anyhow::Result;

use gg_core::{GeoPoint, SpherePoint};
use gg_region::RegionSet;
use gg_round::{RoundContext, TimeDecay};
use gg_score::ScoreConfig;

use regions::build_regions;

// ── Scripted rounds ───────────────────────────────────────────────────────────

/// (region name, guess lat, guess lon, seconds taken)
const ROUNDS: &[(&str, f64, f64, u64)] = &[
    ("Quadrania", 5.0, 5.0, 4),        // dead centre hit
    ("Quadrania", 20.0, 20.0, 18),     // wide miss
    ("Twin Isles", 40.5, 120.5, 9),    // hit on the second island
    ("Meridian Atoll", 0.8, 179.8, 25),// near-miss, forgiven by tolerance
    ("Lost Plateau", 1.0, 0.0, 7),     // fallback-only region
];

fn play(set: &RegionSet) -> Result<u32> {
    let score_cfg = ScoreConfig::default();
    let decay = TimeDecay::default();
    let mut total = 0u32;

    println!(
        "{:<16} {:<22} {:>5} {:>9} {:>6} {:>7}",
        "Region", "Guess", "Hit", "Dist km", "Raw", "Final"
    );
    println!("{}", "-".repeat(70));

    for &(name, lat, lon, secs) in ROUNDS {
        let region = set
            .find_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown region '{name}'"))?;
        let ctx = RoundContext::with_score_config(region, score_cfg);

        // The real game hands us a pointer-ray intersection; simulate one.
        let raw = SpherePoint::from_geo(GeoPoint::new(lat, lon));
        let result = ctx.evaluate(raw)?;
        let banked = decay.apply(result.score, secs);
        total += banked;

        println!(
            "{:<16} {:<22} {:>5} {:>9} {:>6} {:>7}",
            name,
            format!("({lat:.1}, {lon:.1}) in {secs}s"),
            if result.is_contained { "yes" } else { "no" },
            result.distance_km,
            result.score,
            banked,
        );
    }

    Ok(total)
}

fn main() -> Result<()> {
    println!("=== scripted — globe-guess scoring core ===");
    println!();

    let set = build_regions()?;
    println!("Loaded {} regions", set.len());

    // Precomputed centers double as camera targets; show one.
    if let Some(r) = set.find_by_name("Quadrania") {
        if let Some(c) = r.center() {
            println!("Quadrania camera target: {c} (radius {:.0} km)", r.radius_km());
        }
    }
    println!();

    let total = play(&set)?;
    println!("{}", "-".repeat(70));
    println!("Session total: {total}");

    Ok(())
}
