use beam_builder::prelude::*;

/// Small deterministic generator so the operation sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    /// Coordinate on a 0.25 grid in [0, 10]
    fn coord(&mut self) -> f64 {
        (self.next() % 41) as f64 * 0.25
    }
}

fn assert_invariants(beam: &EulerBeam) {
    let xs = beam.coordinates();
    assert!(
        xs.windows(2).all(|w| w[0] < w[1]),
        "coordinates not strictly ascending: {xs:?}"
    );
    for (rank, node) in beam.nodes().enumerate() {
        assert_eq!(node.id(), rank + 1, "node at x = {} mislabelled", node.x);
        assert!(beam.contains(node.x));
    }
    for load in beam.ele_loads() {
        assert!(beam.contains(load.x1), "missing node at {}", load.x1);
        assert!(beam.contains(load.x2), "missing node at {}", load.x2);
    }
}

#[test]
fn random_build_sequences_keep_mesh_consistent() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut beam = EulerBeam::new();

        for _ in 0..60 {
            let before_nodes = beam.node_count();
            let before_loads = beam.ele_loads().len();
            match rng.next() % 4 {
                0 => {
                    let x = rng.coord();
                    let fixity = [rng.next() % 2, rng.next() % 2, rng.next() % 2].map(|f| f as i32);
                    beam.set_fixity(x, fixity).unwrap();
                    assert_eq!(beam.node(x).unwrap().fixity.as_flags(), fixity.map(|f| f as u8));
                }
                1 => {
                    let x = rng.coord();
                    let load = [0.0, -((rng.next() % 100) as f64), 0.0];
                    let existed = beam.contains(x);
                    beam.add_point_load(x, load).unwrap();
                    assert_eq!(beam.node(x).unwrap().point_load.as_array(), load);
                    let expected = before_nodes + usize::from(!existed);
                    assert_eq!(beam.node_count(), expected);
                }
                2 => {
                    let x1 = rng.coord();
                    let x2 = rng.coord();
                    if x1 == x2 {
                        assert!(beam.add_dist_load(x1, x2, [0.0, -1.0]).is_err());
                        assert_eq!(beam.ele_loads().len(), before_loads);
                    } else {
                        beam.add_dist_load(x1, x2, [0.0, -1.0]).unwrap();
                        assert_eq!(beam.ele_loads().len(), before_loads + 1);
                        assert!(beam.node_count() <= before_nodes + 2);
                    }
                }
                _ => {
                    let x = rng.coord();
                    let result = beam.add_node(x, 0, PointLoad::default());
                    assert_eq!(result.is_err(), before_nodes == beam.node_count());
                }
            }
            assert_invariants(&beam);
        }
    }
}

#[test]
fn insertion_order_does_not_change_the_mesh() {
    let mut forward = EulerBeam::new();
    forward.set_fixity(0.0, [1, 1, 0]).unwrap();
    forward.add_vertical_load(2.0, -5.0).unwrap();
    forward.add_dist_load(1.0, 3.0, [0.0, -1.0]).unwrap();
    forward.set_fixity(4.0, [0, 1, 0]).unwrap();

    let mut backward = EulerBeam::new();
    backward.set_fixity(4.0, [0, 1, 0]).unwrap();
    backward.add_dist_load(3.0, 1.0, [0.0, -1.0]).unwrap();
    backward.add_vertical_load(2.0, -5.0).unwrap();
    backward.set_fixity(0.0, [1, 1, 0]).unwrap();

    let describe = |beam: &EulerBeam| -> Vec<(usize, f64, [u8; 3], [f64; 3])> {
        beam.nodes()
            .map(|n| (n.id(), n.x, n.fixity.as_flags(), n.point_load.as_array()))
            .collect()
    };
    assert_eq!(describe(&forward), describe(&backward));
    assert_eq!(forward.ele_loads(), backward.ele_loads());
    assert_eq!(forward.element_loads(), backward.element_loads());
}

#[test]
fn invalid_fixity_leaves_model_untouched() {
    let mut beam = EulerBeam::new();
    beam.set_fixity(1.0, [1, 1, 0]).unwrap();
    beam.add_dist_load(0.0, 2.0, [0.0, -3.0]).unwrap();
    let snapshot = beam.to_json().unwrap();

    let bad_inputs: Vec<FixityInput> = vec![
        vec![1, 1].into(),
        vec![1, 1, 0, 0].into(),
        vec![1, -1, 0].into(),
        vec![0.0, 0.5, 1.0].into(),
        2.into(),
    ];
    for bad in bad_inputs {
        assert!(matches!(
            beam.set_fixity(7.0, bad.clone()),
            Err(BeamError::InvalidFixity(_))
        ));
        assert!(matches!(
            beam.set_fixity(1.0, bad),
            Err(BeamError::InvalidFixity(_))
        ));
    }
    assert_eq!(beam.to_json().unwrap(), snapshot);
}

#[test]
fn initial_mesh_is_refined_by_loads() {
    let xs: Vec<f64> = (0..=10).map(|i| i as f64 * 0.5).collect();
    let mut beam = EulerBeam::with_nodes(&xs, None).unwrap();
    beam.set_fixity(0.4, [1, 1, 0]).unwrap();
    beam.set_fixity(4.6, [1, 1, 0]).unwrap();
    beam.add_vertical_load(2.5, -1.0).unwrap();
    beam.add_dist_load(0.0, 5.0, [0.0, -1.0]).unwrap();

    assert_eq!(beam.node_count(), 13);
    assert_eq!(beam.node(0.4).unwrap().id(), 2);
    assert_eq!(beam.node(4.6).unwrap().id(), 12);
    assert_eq!(beam.element_loads().len(), beam.elements().len());
    assert_invariants(&beam);
}
