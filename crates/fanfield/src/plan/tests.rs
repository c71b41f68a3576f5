use super::*;
use crate::geo::{LatLng, WebMercator};
use crate::model::PortalInput;
use nalgebra::Vector2;
use rand::{rngs::StdRng, SeedableRng};

/// Planar stand-in for the host projector: x = lng, y = lat.
struct Flat;

impl GeoProjector for Flat {
    fn project(&self, at: LatLng) -> Vector2<f64> {
        Vector2::new(at.lng, at.lat)
    }
    fn distance(&self, a: LatLng, b: LatLng) -> f64 {
        ((a.lat - b.lat).powi(2) + (a.lng - b.lng).powi(2)).sqrt()
    }
}

fn inputs(raw: &[(f64, f64)]) -> Vec<PortalInput> {
    raw.iter()
        .enumerate()
        .map(|(i, &(lat, lng))| PortalInput::new(format!("id{i}"), format!("Portal {i}"), lat, lng))
        .collect()
}

fn pentagon() -> Vec<PortalInput> {
    let pts: Vec<(f64, f64)> = (0..5)
        .map(|k| {
            let th = (90.0 + 72.0 * k as f64).to_radians();
            (th.sin(), th.cos())
        })
        .collect();
    inputs(&pts)
}

fn two_groups() -> Vec<PortalInput> {
    inputs(&[
        (0.0, 0.0),
        (0.3, 2.0),
        (2.1, 2.2),
        (1.8, 0.1),
        (0.2, 10.0),
        (-0.1, 12.0),
        (2.0, 12.3),
        (1.9, 9.8),
    ])
}

fn farm_lines(result: &PlanResult) -> Vec<(String, String)> {
    result
        .sections
        .iter()
        .flat_map(|s| &s.steps)
        .flat_map(|st| {
            st.actions
                .iter()
                .filter(|a| a.starts_with("Farm "))
                .map(move |a| (st.id.clone(), a.clone()))
        })
        .collect()
}

#[test]
fn fewer_than_three_portals_is_an_empty_plan() {
    let mut rng = StdRng::seed_from_u64(0);
    for n in 0..3 {
        let inp = inputs(&[(0.0, 0.0), (1.0, 1.0)][..n.min(2)]);
        let r = plan(&inp, &PlanCfg::default(), &Flat, &mut rng).unwrap();
        assert!(r.is_empty());
        assert!(r.clusters.is_empty());
        assert_eq!(r.portals.len(), n.min(2));
        assert_eq!(r.stats.links, 0);
        assert_eq!(r.stats.walk_m, 0.0);
    }
}

#[test]
fn malformed_records_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let cfg = PlanCfg::default();

    let mut dup = pentagon();
    dup[3].id = "id1".to_string();
    assert_eq!(
        plan(&dup, &cfg, &Flat, &mut rng).unwrap_err(),
        PlanError::DuplicateId { id: "id1".into() }
    );

    let mut bad = pentagon();
    bad[2].lat = 95.0;
    assert!(matches!(
        plan(&bad, &cfg, &Flat, &mut rng),
        Err(PlanError::InvalidCoordinate { .. })
    ));
    bad[2].lat = f64::NAN;
    assert!(plan(&bad, &cfg, &Flat, &mut rng).is_err());

    let mut anon = pentagon();
    anon[4].id.clear();
    assert_eq!(
        plan(&anon, &cfg, &Flat, &mut rng).unwrap_err(),
        PlanError::EmptyId { index: 4 }
    );
}

#[test]
fn pentagon_single_cluster_plan() {
    let mut rng = StdRng::seed_from_u64(5);
    let r = plan(&pentagon(), &PlanCfg::with_clusters(1), &Flat, &mut rng).unwrap();
    assert_eq!(r.clusters.len(), 1);
    assert_eq!(r.clusters[0].label, "A");
    assert_eq!(r.clusters[0].size, 5);
    assert_eq!(r.stats.links, 7);
    assert_eq!(r.stats.fields, 3);
    assert_eq!(r.stats.max_keys, 4);
    assert_eq!(r.stats.ap, 1750 * 5 + 313 * 7 + 1250 * 3);

    assert_eq!(r.sections.len(), 1);
    let sect = &r.sections[0];
    assert_eq!(sect.title, "Cluster A");
    assert_eq!(sect.kind, SectionKind::Cluster);
    assert_eq!(sect.steps.len(), 5);
    assert_eq!(sect.steps[0].label, "A");
    assert_eq!(sect.steps[0].actions, vec!["Capture", "Farm 4 Keys"]);
    let anchor = r.portal(&r.clusters[0].anchor).unwrap();
    assert!(anchor.anchor);
    assert_eq!(anchor.keys, 4);

    let first = &sect.steps[1];
    assert_eq!(first.label, "A1");
    assert_eq!(first.actions[0], "Capture");
    assert!(first.actions.last().unwrap().starts_with("Link to Anchor A "));
    let with_fields = sect
        .steps
        .iter()
        .flat_map(|s| &s.actions)
        .filter(|a| a.ends_with("[+1F]"))
        .count();
    assert_eq!(with_fields, 3);
}

#[test]
fn zero_clusters_behaves_like_one() {
    let a = plan(&pentagon(), &PlanCfg::with_clusters(0), &Flat, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(a.clusters.len(), 1);
    assert!(a.sections.iter().all(|s| s.kind == SectionKind::Cluster));
}

#[test]
fn farm_lines_quote_final_key_totals_once() {
    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let r = plan(&two_groups(), &PlanCfg::with_clusters(2), &Flat, &mut rng).unwrap();
        assert_eq!(r.clusters.len(), 2);
        let lines = farm_lines(&r);
        for p in &r.portals {
            let mine: Vec<_> = lines.iter().filter(|(id, _)| *id == p.id).collect();
            if p.keys == 0 {
                assert!(mine.is_empty());
            } else {
                assert_eq!(mine.len(), 1);
                assert_eq!(mine[0].1, format!("Farm {} Keys", p.keys));
            }
            let donated = r.links.iter().filter(|l| l.to == p.id).count() as u32;
            assert_eq!(p.keys, donated);
        }
    }
}

#[test]
fn stitch_section_follows_clusters() {
    let mut rng = StdRng::seed_from_u64(11);
    let r = plan(&two_groups(), &PlanCfg::with_clusters(2), &Flat, &mut rng).unwrap();
    let last = r.sections.last().unwrap();
    assert_eq!(last.kind, SectionKind::Stitch);
    assert_eq!(last.title, STITCH_TITLE);
    assert_eq!(r.sections.len(), 3);
    for step in &last.steps {
        assert!(step.visited_before);
        assert_eq!(step.actions[0], "Arrive at (Already Captured)");
    }
    let lats: Vec<f64> = last
        .steps
        .iter()
        .map(|s| r.portal(&s.id).unwrap().lat)
        .collect();
    assert!(lats.windows(2).all(|w| w[0] >= w[1]));
    let stitch_links = r.links.iter().filter(|l| l.color == "#FFFFFF").count();
    assert!(stitch_links > 0);
}

#[test]
fn same_seed_same_plan() {
    let cfg = PlanCfg::with_clusters(3);
    let pts: Vec<(f64, f64)> = (0..24)
        .map(|i| {
            let t = i as f64;
            (0.01 * (t * 1.3).sin() + 51.5, 0.01 * (t * 0.7).cos() - 0.12)
        })
        .collect();
    let inp = inputs(&pts);
    let wm = WebMercator::default();
    let a = plan(&inp, &cfg, &wm, &mut StdRng::seed_from_u64(42)).unwrap();
    let b = plan(&inp, &cfg, &wm, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
    assert!(a.stats.walk_m > 0.0);
}

#[test]
fn mercator_plan_uses_cfg_zoom() {
    let cfg = PlanCfg {
        zoom: 12,
        ..PlanCfg::with_clusters(2)
    };
    assert_eq!(cfg.projector(), WebMercator::new(12));
    let inp = two_groups();
    let direct = plan(&inp, &cfg, &WebMercator::new(12), &mut StdRng::seed_from_u64(8)).unwrap();
    let via_cfg = plan_mercator(&inp, &cfg, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(direct, via_cfg);
}

#[test]
fn names_are_sanitized_on_ingest() {
    let mut inp = pentagon();
    inp[0].name = "Fountain, Old Town. #3".to_string();
    let r = plan(&inp, &PlanCfg::default(), &Flat, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(r.portal("id0").unwrap().name, "Fountain Old Town 3");
}

#[test]
fn csv_strips_commas_and_leaves_check_blank() {
    let sections = vec![PlanSection {
        title: "Cluster, A".to_string(),
        kind: SectionKind::Cluster,
        steps: vec![PlanStep {
            id: "x".into(),
            label: "A".into(),
            name: "Foo, Bar".into(),
            visited_before: false,
            actions: vec!["Capture".into(), "Farm 2 Keys".into(), "Link to A1 Q,R".into()],
        }],
    }];
    let csv = render_csv(&sections);
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    assert_eq!(
        lines.next(),
        Some("Cluster A,A,Foo Bar,Capture | Farm 2 Keys | Link to A1 QR, ")
    );
    assert_eq!(lines.next(), None);
    for line in csv.lines() {
        assert_eq!(line.split(',').count(), 5);
    }

    let mut buf = Vec::new();
    write_csv(&sections, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), csv);
}

#[test]
fn plan_survives_json() {
    let r = plan(&two_groups(), &PlanCfg::with_clusters(2), &Flat, &mut StdRng::seed_from_u64(3)).unwrap();
    let text = serde_json::to_string(&r).unwrap();
    let back: PlanResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back.sections, r.sections);
    assert_eq!(back.stats.links, r.stats.links);
}
