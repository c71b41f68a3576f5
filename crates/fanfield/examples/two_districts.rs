//! Plan two separated groups of portals and print the plan.
//!
//! Usage:
//!   cargo run -p fanfield --example two_districts -- [seed]

use fanfield::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let portals = vec![
        PortalInput::new("w1", "Old Mill", 52.5200, 13.4000),
        PortalInput::new("w2", "Chapel", 52.5212, 13.4031),
        PortalInput::new("w3", "Fountain", 52.5231, 13.4012),
        PortalInput::new("w4", "Library", 52.5219, 13.3978),
        PortalInput::new("e1", "Bridge", 52.5203, 13.4300),
        PortalInput::new("e2", "Statue", 52.5190, 13.4334),
        PortalInput::new("e3", "Mural", 52.5226, 13.4329),
        PortalInput::new("e4", "Tower", 52.5232, 13.4290),
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    let result = match plan(&portals, &PlanCfg::with_clusters(2), &WebMercator::default(), &mut rng) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("plan failed: {e}");
            return;
        }
    };
    for section in &result.sections {
        println!("== {}", section.title);
        for step in &section.steps {
            println!("{:>4} {:<10} {}", step.label, step.name, step.actions.join(" | "));
        }
    }
    let s = &result.stats;
    println!(
        "portals={} links={} fields={} max_keys={} walk={} km ap={}",
        s.portals,
        s.links,
        s.fields,
        s.max_keys,
        s.walk_km(),
        s.ap
    );
}
