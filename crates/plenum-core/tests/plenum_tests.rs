// Host-side tests for the parametric box builder.

use glam::Vec3;
use plenum_core::{
    build_box, BoxBuilder, BoxSpec, MaterialKind, PanelKind, PlenumError, Topology,
    MAX_DIMENSION, MIN_DIMENSION, WALL_THICKNESS,
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn open_box_example_has_four_walls_and_full_length_cavity() {
    let spec = BoxSpec::new(14.0, 8.0, 20.0);
    assert_eq!(spec.wall_thickness, 0.125);
    let mesh = build_box(&spec).unwrap();

    assert_eq!(mesh.panels.len(), 4);
    assert!(!mesh.has_end_cap());
    assert!(mesh.flanges.is_empty());

    let inner = mesh.inner_edges.extents;
    assert!(close(inner.x, 13.75));
    assert!(close(inner.y, 7.75));
    assert!(close(inner.z, 20.0));
    assert_eq!(mesh.outer_edges.extents, Vec3::new(14.0, 8.0, 20.0));
}

#[test]
fn end_cap_adds_fifth_panel_and_shrinks_inner_length() {
    let spec = BoxSpec::new(14.0, 8.0, 20.0).with_end_cap(true);
    let mesh = build_box(&spec).unwrap();
    assert_eq!(mesh.panels.len(), 5);

    let cap = mesh
        .panels
        .iter()
        .find(|p| p.kind == PanelKind::EndCap)
        .expect("end cap panel");
    // closes the -Z end and fits between the walls
    assert!(close(cap.center.z, -(10.0 - 0.0625)));
    assert!(close(cap.size.x, 13.75));
    assert!(close(cap.size.y, 7.75));
    assert!(close(cap.size.z, 0.125));

    let inner = mesh.inner_edges.extents;
    assert!(close(inner.z, 20.0 - 2.0 * 0.125));
    assert!(close(inner.x, 13.75));
}

#[test]
fn walls_are_flush_with_the_outer_envelope() {
    let spec = BoxSpec::new(10.0, 6.0, 12.0).with_wall_thickness(0.5);
    let mesh = build_box(&spec).unwrap();
    let outer_half = mesh.outer_edges.extents * 0.5;
    for p in &mesh.panels {
        let max = p.center + p.size * 0.5;
        let min = p.center - p.size * 0.5;
        // never poke outside the envelope
        assert!(max.cmple(outer_half + Vec3::splat(1e-5)).all(), "{p:?}");
        assert!(min.cmpge(-outer_half - Vec3::splat(1e-5)).all(), "{p:?}");
        match p.kind {
            PanelKind::Top => assert!(close(max.y, 3.0) && close(p.size.y, 0.5)),
            PanelKind::Bottom => assert!(close(min.y, -3.0) && close(p.size.y, 0.5)),
            PanelKind::Left => assert!(close(min.x, -5.0) && close(p.size.x, 0.5)),
            PanelKind::Right => assert!(close(max.x, 5.0) && close(p.size.x, 0.5)),
            other => panic!("unexpected panel {other:?}"),
        }
        // open box walls span the full length
        assert!(close(p.size.z, 12.0));
    }
}

#[test]
fn side_walls_do_not_overlap_top_and_bottom() {
    let mesh = build_box(&BoxSpec::new(10.0, 6.0, 12.0).with_wall_thickness(0.5)).unwrap();
    let side = mesh
        .panels
        .iter()
        .find(|p| p.kind == PanelKind::Left)
        .unwrap();
    assert!(close(side.size.y, 5.0));
}

#[test]
fn identical_specs_build_identical_meshes() {
    let spec = BoxSpec::new(18.5, 9.25, 30.0)
        .with_end_cap(true)
        .with_lip_size(1.5);
    let a = build_box(&spec).unwrap();
    let b = build_box(&spec).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.parts(), b.parts());
}

#[test]
fn lip_adds_four_flanges_around_the_open_end() {
    let spec = BoxSpec::new(14.0, 8.0, 20.0).with_lip_size(1.0);
    let mesh = build_box(&spec).unwrap();
    assert_eq!(mesh.panels.len(), 4);
    assert_eq!(mesh.flanges.len(), 4);
    for f in &mesh.flanges {
        assert_eq!(f.kind, PanelKind::Flange);
        // flush with the open +Z end
        assert!(close(f.center.z + f.size.z * 0.5, 10.0));
    }
    let widest = mesh
        .flanges
        .iter()
        .map(|f| f.size.x)
        .fold(0.0_f32, f32::max);
    assert!(close(widest, 16.0));
}

#[test]
fn parts_list_walls_then_flanges_then_wireframes() {
    let mesh = build_box(&BoxSpec::new(14.0, 8.0, 20.0).with_lip_size(0.5)).unwrap();
    let parts = mesh.parts();
    assert_eq!(parts.len(), 4 + 4 + 2);
    for (geometry, material) in &parts[..8] {
        assert_eq!(geometry.topology, Topology::Triangles);
        assert_eq!(material.kind, MaterialKind::Surface);
        assert_eq!(geometry.vertices.len(), 24);
        assert_eq!(geometry.indices.len(), 36);
    }
    for (geometry, material) in &parts[8..] {
        assert_eq!(geometry.topology, Topology::Lines);
        assert_eq!(material.kind, MaterialKind::Wire);
        assert_eq!(geometry.vertices.len(), 8);
        assert_eq!(geometry.indices.len(), 24);
    }
}

#[test]
fn edge_segments_have_box_edge_lengths() {
    let mesh = build_box(&BoxSpec::new(14.0, 8.0, 20.0)).unwrap();
    let mut lengths: Vec<f32> = mesh
        .outer_edges
        .segments()
        .iter()
        .map(|(a, b)| (*b - *a).length())
        .collect();
    lengths.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(&lengths[..4], &[8.0; 4]);
    assert_eq!(&lengths[4..8], &[14.0; 4]);
    assert_eq!(&lengths[8..], &[20.0; 4]);
}

#[test]
fn degenerate_specs_are_rejected() {
    let bad = [
        BoxSpec::new(0.0, 8.0, 20.0),
        BoxSpec::new(14.0, -1.0, 20.0),
        BoxSpec::new(14.0, 8.0, f32::NAN),
        BoxSpec::new(14.0, 8.0, f32::INFINITY),
        BoxSpec::new(14.0, 8.0, 20.0).with_wall_thickness(0.0),
        // exactly half the smallest side leaves no cavity
        BoxSpec::new(14.0, 0.25, 20.0),
        BoxSpec::new(1.0, 1.0, 1.0).with_wall_thickness(0.6),
        BoxSpec::new(14.0, 8.0, 20.0).with_lip_size(-0.5),
    ];
    for spec in bad {
        assert!(
            matches!(build_box(&spec), Err(PlenumError::InvalidSpec(_))),
            "{spec:?} should be rejected"
        );
    }
}

#[test]
fn builder_replaces_mesh_and_keeps_old_one_on_error() {
    let mut builder = BoxBuilder::new();
    assert!(builder.current().is_none());

    builder.build(&BoxSpec::new(14.0, 8.0, 20.0)).unwrap();
    let capped = BoxSpec::new(16.0, 8.0, 20.0).with_end_cap(true);
    builder.build(&capped).unwrap();
    assert_eq!(builder.current().unwrap().spec, capped);
    assert!(builder.current().unwrap().has_end_cap());

    assert!(builder.build(&BoxSpec::new(-1.0, 8.0, 20.0)).is_err());
    assert_eq!(builder.current().unwrap().spec, capped);
}

#[test]
fn clamped_pulls_raw_input_into_range() {
    let spec = BoxSpec::new(0.0, f32::NAN, 1000.0).with_lip_size(-3.0).clamped();
    assert_eq!(spec.width_a, MIN_DIMENSION);
    assert_eq!(spec.width_b, MIN_DIMENSION);
    assert_eq!(spec.height, MAX_DIMENSION);
    assert_eq!(spec.lip_size, 0.0);
    assert_eq!(spec.wall_thickness, WALL_THICKNESS);
    assert!(build_box(&spec).is_ok());

    let ok = BoxSpec::new(14.0, 8.0, 20.0).with_lip_size(1.0);
    assert_eq!(ok.clamped(), ok);
}
