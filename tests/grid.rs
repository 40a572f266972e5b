//! Test mesh generation
use fem_mesh::config::{Bounds, MeshConfig};
use fem_mesh::connectivity::ElementCounts;
use fem_mesh::grid::{build_axis, BoundingBox};
use fem_mesh::mesh::StructuredMesh;
use fem_mesh::types::{Advisory, Axis, Error, PartId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_mesh(rng: &mut StdRng) -> StructuredMesh {
    let mut bounds = [0.0; 6];
    for b in bounds.iter_mut() {
        *b = rng.gen_range(-10.0..10.0);
    }
    let counts = ElementCounts::new(
        rng.gen_range(1..8),
        rng.gen_range(1..8),
        rng.gen_range(1..8),
    )
    .unwrap();
    let (b, _) = BoundingBox::from_ranges(&bounds).unwrap();
    StructuredMesh::new(&b, counts, PartId::default()).unwrap()
}

#[test]
fn test_axis_properties() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let a = rng.gen_range(-100.0..100.0);
        let b = rng.gen_range(-100.0..100.0);
        let n = rng.gen_range(1..200);
        let values = build_axis(a, b, n).unwrap();
        assert_eq!(values.len(), n + 1);
        assert_eq!(values[0], f64::min(a, b));
        assert_eq!(values[n], f64::max(a, b));
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(values, build_axis(b, a, n).unwrap());
    }
}

#[test]
fn test_mesh_sizes() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..50 {
        let mesh = random_mesh(&mut rng);
        let [nx, ny, nz] = mesh.counts().as_array();
        assert_eq!(mesh.nodes().count(), (nx + 1) * (ny + 1) * (nz + 1));
        assert_eq!(mesh.elements().count(), nx * ny * nz);
    }
}

#[test]
fn test_connectivity_in_range_and_distinct() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let mesh = random_mesh(&mut rng);
        let total = mesh.number_of_nodes();
        for (index, element) in mesh.elements().enumerate() {
            assert_eq!(element.id, index + 1);
            let mut nodes = element.nodes;
            nodes.sort_unstable();
            assert!(nodes[0] >= 1);
            assert!(nodes[7] <= total);
            for pair in nodes.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }
}

#[test]
fn test_elements_are_unit_cells() {
    // With unit spacing, corner n of every element sits at a fixed offset from n1
    let (b, _) = BoundingBox::from_ranges(&[0.0, 3.0, 0.0, 2.0, 0.0, 2.0]).unwrap();
    let mesh =
        StructuredMesh::new(&b, ElementCounts::new(3, 2, 2).unwrap(), PartId::default()).unwrap();
    let nodes = mesh.nodes().collect::<Vec<_>>();
    let offsets = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    for element in mesh.elements() {
        let origin = nodes[element.nodes[0] - 1];
        for (n, offset) in element.nodes.iter().zip(offsets) {
            let node = nodes[n - 1];
            assert_eq!(node.id, *n);
            assert_eq!(node.x - origin.x, offset[0]);
            assert_eq!(node.y - origin.y, offset[1]);
            assert_eq!(node.z - origin.z, offset[2]);
        }
    }
}

#[test]
fn test_2x2x2_first_element() {
    let (b, _) = BoundingBox::from_ranges(&[-1.0, 1.0, -1.0, 1.0, -1.0, 1.0]).unwrap();
    let mesh =
        StructuredMesh::new(&b, ElementCounts::new(2, 2, 2).unwrap(), PartId::default()).unwrap();
    let first = mesh.elements().next().unwrap();
    assert_eq!(first.nodes, [1, 2, 5, 4, 10, 11, 14, 13]);
    assert_eq!(mesh.grid().coordinates(Axis::X), &[-1.0, 0.0, 1.0]);
    assert!(mesh.origin_covered());
}

#[test]
fn test_3x3x3_misses_origin() {
    let config = MeshConfig {
        bounds: Bounds::Ranges(vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0]),
        counts: vec![3, 3, 3],
        part_id: PartId::default(),
    };
    let mesh = StructuredMesh::from_config(&config).unwrap();
    assert!(!mesh.origin_covered());
    assert_eq!(mesh.diagnostics(), &[Advisory::OriginNotCovered]);
    assert_eq!(mesh.elements().count(), 27);
}

#[test]
fn test_configuration_errors() {
    let config = MeshConfig {
        bounds: Bounds::Ranges(vec![-1.0, 1.0, -1.0, 1.0, -1.0, 1.0, 0.0]),
        ..Default::default()
    };
    let e = StructuredMesh::from_config(&config).unwrap_err();
    assert!(e.is_configuration());
    assert!(matches!(e, Error::WrongBoundCount { found: 7, .. }));

    let config = MeshConfig {
        counts: vec![0, 1, 1],
        ..Default::default()
    };
    assert!(matches!(
        StructuredMesh::from_config(&config),
        Err(Error::InvalidElementCount {
            axis: Axis::X,
            value: 0
        })
    ));
}
