use proptest::prelude::*;

use icosahedron_lib::{
    error::LayoutError,
    generate,
    helper::{centroid, lerp, scale},
    icosahedron::{GeometryTable, Point, StripColor, StripStep},
    layout::LayoutParams,
};

fn arb_point() -> impl Strategy<Value = Point> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0, -1000.0f64..1000.0)
        .prop_map(|(x, y, z)| Point::new(x, y, z))
}

const TOL: f64 = 1e-9;

proptest! {
    #[test]
    fn lerp_hits_both_endpoints_exactly(p1 in arb_point(), p2 in arb_point()) {
        prop_assert_eq!(lerp(&p1, &p2, 0.), p1);
        prop_assert_eq!(lerp(&p1, &p2, 1.), p2);
    }

    #[test]
    fn lerp_is_monotone_along_the_segment(p1 in arb_point(), p2 in arb_point(), t in 0.0f64..1.0) {
        let len = (p2 - p1).norm();
        let d = (lerp(&p1, &p2, t) - p1).norm();
        prop_assert!((d - t * len).abs() <= TOL * (1. + len));
    }

    #[test]
    fn scale_preserves_centroid(v1 in arb_point(), v2 in arb_point(), v3 in arb_point()) {
        let before = centroid(&v1, &v2, &v3);
        let (a, b, c) = scale(&v1, &v2, &v3);
        let after = centroid(&a, &b, &c);
        prop_assert!((after - before).norm() < TOL * 1000.,
            "centroid moved from {:?} to {:?}", before, after);
    }

    #[test]
    fn scale_keeps_ninety_percent_of_distance(v1 in arb_point(), v2 in arb_point(), v3 in arb_point()) {
        let c = centroid(&v1, &v2, &v3);
        let (a, b, d) = scale(&v1, &v2, &v3);
        for (orig, shrunk) in [(v1, a), (v2, b), (v3, d)] {
            let full = orig - c;
            let part = shrunk - c;
            // Same direction, 90% of the length
            prop_assert!((part - full * 0.9).norm() <= TOL * (1. + full.norm()));
            if full.norm() > 1e-2 {
                prop_assert!((part.norm() / full.norm() - 0.9).abs() < TOL);
            }
        }
    }
}

#[test]
fn output_is_a_single_assignment_line() {
    let line = generate(&GeometryTable::icosahedron(), &LayoutParams::default()).unwrap();
    assert!(line.starts_with("icosahedron_data ='{\"num_pixels\": 900, \"strips\": [[["));
    assert!(line.ends_with("]]]}'"));
    assert_eq!(line.lines().count(), 1);
    // Byte length of the line the installation's renderer was built against
    assert_eq!(line.len(), 51274);

    let json = &line["icosahedron_data ='".len()..line.len() - 1];
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let strips = value["strips"].as_array().unwrap();
    assert_eq!(strips.len(), StripColor::ALL.len());
    let total: usize = strips.iter().map(|s| s.as_array().unwrap().len()).sum();
    assert_eq!(value["num_pixels"].as_u64(), Some(total as u64));
}

#[test]
fn output_is_idempotent() {
    let table = GeometryTable::icosahedron();
    let params = LayoutParams::default();
    let first = generate(&table, &params).unwrap();
    let second = generate(&table, &params).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn corrupted_table_produces_no_output() {
    let bad = [StripStep::new(11, 7, 12)];
    let mut table = GeometryTable::icosahedron();
    table.strips[StripColor::Green.index()] = &bad;
    let result = generate(&table, &LayoutParams::default());
    assert!(matches!(result, Err(LayoutError::HubOutOfRange { index: 12, .. })));
}
