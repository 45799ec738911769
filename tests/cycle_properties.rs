//! Shape-driven checks of the detector through the public API

use pretty_assertions::assert_eq;
use tortoise_hare::detector::{
    advance, analyze, cycle_length, distance_from_start, find_cycle_start, has_cycle, is_empty,
};
use tortoise_hare::path::{END, PathShape, PathStore};
use tortoise_hare::sweep::ShapeSweep;

fn create_path(nodes_before_cycle: usize, nodes_in_cycle: usize) -> PathStore {
    PathStore::from_shape(PathShape::new(nodes_before_cycle, nodes_in_cycle))
}

#[test]
fn test_with_empty_path() {
    let path = create_path(0, 0);

    assert!(is_empty(&path));
    assert!(!has_cycle(&path));
    assert_eq!(find_cycle_start(&path), path.end());
    assert_eq!(cycle_length(&path, find_cycle_start(&path)), 0);
}

#[test]
fn test_with_one_node_without_cycle() {
    let path = create_path(1, 0);

    assert!(!is_empty(&path));
    assert_eq!(path.next(path.start()), END);
    assert!(!has_cycle(&path));
}

#[test]
fn test_with_one_node_with_cycle() {
    let path = create_path(0, 1);
    let cycle_start = find_cycle_start(&path);

    assert_ne!(cycle_start, END);
    assert_eq!(cycle_start, path.start());
    assert_eq!(cycle_length(&path, cycle_start), 1);
}

#[test]
fn test_two_node_cycle_without_lead_in() {
    let path = create_path(0, 2);
    let n1 = path.start();
    let n2 = path.next(n1);

    assert_ne!(n1, n2);
    assert_eq!(path.next(n2), n1);
    assert_eq!(find_cycle_start(&path), path.start());
}

#[test]
fn test_two_nodes_then_self_loop() {
    let path = create_path(2, 1);
    let n3 = advance(&path, path.start(), 2);

    assert_eq!(path.next(n3), n3);
    assert_eq!(find_cycle_start(&path), n3);
}

#[test]
fn test_paths_without_cycle() {
    for n in 0..10 {
        let path = create_path(n, 0);
        assert!(!has_cycle(&path), "n={n}");
        assert_eq!(distance_from_start(&path, END), n);
    }
}

#[test]
fn test_paths_with_cycle() {
    for n in 0..10 {
        for c in 0..10 {
            let path = create_path(n, c);
            let cycle_start = find_cycle_start(&path);

            assert_eq!(cycle_start == END, c == 0, "n={n} c={c}");
            assert_eq!(distance_from_start(&path, cycle_start), n, "n={n} c={c}");
            assert_eq!(cycle_length(&path, cycle_start), c, "n={n} c={c}");
        }
    }
}

#[test]
fn test_long_paths() {
    for (n, c) in [(1_000, 1), (1, 1_000), (997, 991), (4_096, 2)] {
        let analysis = analyze(&create_path(n, c));

        assert_eq!(analysis.cycle_start, Some(n));
        assert_eq!(analysis.nodes_before_cycle, n);
        assert_eq!(analysis.nodes_in_cycle, c);
    }
}

#[test]
fn test_sweep_matches_direct_checks() {
    let results = ShapeSweep::new(10, 10).run(None);

    assert_eq!(results.checks().len(), 100);
    for check in results.checks() {
        let path = PathStore::from_shape(check.shape);
        assert_eq!(check.analysis, analyze(&path));
        assert!(check.passed(), "{}", check.shape);
    }
}

#[test]
fn test_detector_does_not_mutate_path() {
    let path = create_path(3, 5);
    let before = path.clone();

    let _ = analyze(&path);

    assert_eq!(path, before);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_running_off_the_end_panics() {
    let path = create_path(3, 0);
    advance(&path, path.start(), 4);
}

#[test]
fn test_resetting_start_to_end_empties_path() {
    let mut path = PathStore::new();
    let a = path.add_node();
    path.set_next(a, a);
    path.set_next(END, a);
    assert!(has_cycle(&path));

    path.set_next(END, END);

    assert!(is_empty(&path));
    assert_eq!(find_cycle_start(&path), END);
    assert!(!analyze(&path).has_cycle());
}

#[test]
#[should_panic(expected = "not reachable")]
fn test_distance_to_end_on_cyclic_path_panics() {
    let path = create_path(2, 3);
    distance_from_start(&path, END);
}
