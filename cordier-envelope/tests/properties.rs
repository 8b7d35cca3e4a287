//! Cross-module properties of the envelope pipeline.

use cordier_core::{Point3d, PointCloud3d, Tetrahedron, Triangle};
use cordier_envelope::{
    classify_covering_surface, extract_alpha_shape, upper_envelope, Axis, Sense,
};

/// Unit cube, bottom face 0..4 then top face 4..8, decomposed into the
/// standard five tetrahedra.
fn unit_cube() -> (PointCloud3d, Vec<Tetrahedron>) {
    let cloud = PointCloud3d::from_points(vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(1.0, 0.0, 0.0),
        Point3d::new(1.0, 1.0, 0.0),
        Point3d::new(0.0, 1.0, 0.0),
        Point3d::new(0.0, 0.0, 1.0),
        Point3d::new(1.0, 0.0, 1.0),
        Point3d::new(1.0, 1.0, 1.0),
        Point3d::new(0.0, 1.0, 1.0),
    ]);
    let cells = vec![
        Tetrahedron::new(0, 1, 2, 5),
        Tetrahedron::new(0, 2, 3, 7),
        Tetrahedron::new(0, 4, 5, 7),
        Tetrahedron::new(2, 5, 6, 7),
        Tetrahedron::new(0, 2, 5, 7),
    ];
    (cloud, cells)
}

/// Square-base pyramid, base at z = 0 and apex above its center.
fn pyramid() -> (PointCloud3d, Vec<Tetrahedron>) {
    let cloud = PointCloud3d::from_points(vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(1.0, 0.0, 0.0),
        Point3d::new(1.0, 1.0, 0.0),
        Point3d::new(0.0, 1.0, 0.0),
        Point3d::new(0.5, 0.5, 1.0),
    ]);
    let cells = vec![Tetrahedron::new(0, 1, 2, 4), Tetrahedron::new(0, 2, 3, 4)];
    (cloud, cells)
}

#[test]
fn extraction_is_idempotent() {
    let (cloud, cells) = unit_cube();
    let first = extract_alpha_shape(&cloud, &cells, 1.0).unwrap();
    let second = extract_alpha_shape(&cloud, &cells, 1.0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shape_grows_monotonically_with_alpha() {
    let (cloud, cells) = unit_cube();

    // Every cube cell has circumradius sqrt(3)/2, so alpha = 0.8 erodes the
    // whole shape and alpha = 1.0 keeps it.
    let eroded = extract_alpha_shape(&cloud, &cells, 0.8).unwrap();
    let full = extract_alpha_shape(&cloud, &cells, 1.0).unwrap();
    assert!(eroded
        .triangles
        .iter()
        .all(|tri| full.triangles.contains(tri)));

    let (cloud, cells) = pyramid();
    let small = extract_alpha_shape(&cloud, &cells, 0.7).unwrap();
    let large = extract_alpha_shape(&cloud, &cells, 50.0).unwrap();
    assert!(small
        .triangles
        .iter()
        .all(|tri| large.triangles.contains(tri)));
}

#[test]
fn closure_and_no_duplicate_invariants() {
    let (cloud, cells) = unit_cube();
    let shape = extract_alpha_shape(&cloud, &cells, 1.0).unwrap();

    // No canonical triangle occurs twice.
    let mut triangles = shape.triangles.clone();
    triangles.dedup();
    assert_eq!(triangles.len(), shape.triangles.len());

    // Vertices are exactly the union of triangle indices.
    let mut expected_vertices: Vec<usize> = shape
        .triangles
        .iter()
        .flat_map(|tri| tri.indices())
        .collect();
    expected_vertices.sort_unstable();
    expected_vertices.dedup();
    assert_eq!(shape.vertices, expected_vertices);

    // Edges are exactly the union of triangle edge subsets.
    let mut expected_edges: Vec<_> = shape.triangles.iter().flat_map(|tri| tri.edges()).collect();
    expected_edges.sort_unstable();
    expected_edges.dedup();
    assert_eq!(shape.edges, expected_edges);
}

#[test]
fn cube_covering_surface_is_exactly_the_top_face() {
    let (cloud, cells) = unit_cube();
    let shape = extract_alpha_shape(&cloud, &cells, 1.0).unwrap();
    // 2 boundary triangles per cube face.
    assert_eq!(shape.triangle_count(), 12);

    let surface =
        classify_covering_surface(&cloud, &shape.triangles, Axis::Z, Sense::Downward).unwrap();
    assert_eq!(
        surface.triangles,
        vec![Triangle::new(4, 5, 7), Triangle::new(5, 6, 7)]
    );
    let mut vertices = surface.vertices.clone();
    vertices.sort_unstable();
    assert_eq!(vertices, vec![4, 5, 6, 7]);
}

#[test]
fn degenerate_coplanar_cell_yields_empty_shape() {
    let cloud = PointCloud3d::from_points(vec![
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(1.0, 0.0, 0.0),
        Point3d::new(1.0, 1.0, 0.0),
        Point3d::new(0.0, 1.0, 0.0),
    ]);
    let cells = [Tetrahedron::new(0, 1, 2, 3)];

    for alpha in [1e-3, 1.0, 1e6, 1e12] {
        let shape = extract_alpha_shape(&cloud, &cells, alpha).unwrap();
        assert!(shape.is_empty());
    }
}

#[test]
fn pyramid_end_to_end() {
    let (cloud, cells) = pyramid();

    let shape = extract_alpha_shape(&cloud, &cells, 10.0).unwrap();
    // 4 side faces and 2 base triangles; the interior face shared by the
    // two cells is gone.
    assert_eq!(shape.triangle_count(), 6);
    assert!(!shape.triangles.contains(&Triangle::new(0, 2, 4)));
    assert_eq!(shape.vertices, vec![0, 1, 2, 3, 4]);

    let surface = upper_envelope(&cloud, &cells, 10.0, Axis::Z, Sense::Downward).unwrap();
    // The covering surface is the 4 side faces through the apex, never the
    // base.
    assert_eq!(surface.triangle_count(), 4);
    assert!(surface.triangles.iter().all(|tri| tri.indices().contains(&4)));
    assert!(!surface.triangles.contains(&Triangle::new(0, 1, 2)));
    assert!(!surface.triangles.contains(&Triangle::new(0, 2, 3)));
}
