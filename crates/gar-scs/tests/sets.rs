use std::collections::HashSet;

use gar_artin::ArtinBraid;
use gar_core::Factor;
use gar_scs::{
    canonical_hash, sliding_circuits_set, sliding_circuits_set_tracked, sliding_circuits_set_with,
    tree_path, ScsOpts,
};
use proptest::prelude::*;


#[test]
fn identity_has_a_single_circuit() {
    let set = sliding_circuits_set(&ArtinBraid::identity(4));
    assert_eq!(set.cardinality(), 1);
    assert_eq!(set.circuit_sizes(), vec![1]);
    assert!(set.contains(&ArtinBraid::identity(4)));

    let set = sliding_circuits_set(&ArtinBraid::delta_power(4, 1));
    assert_eq!(set.cardinality(), 1);
}

#[test]
fn matches_brute_force_exploration() {
    for word in fixtures::FOUR_STRAND_WORDS {
        let b = fixtures::braid(4, word);
        let set = sliding_circuits_set(&b);
        let expected = fixtures::brute_force_scs(&b);
        let found: HashSet<ArtinBraid> = set.iter().cloned().collect();
        assert_eq!(found, expected, "word {word:?}");
        assert_eq!(set.cardinality(), expected.len());
    }
}

#[test]
fn matches_brute_force_exploration_on_five_strands() {
    for word in fixtures::FIVE_STRAND_WORDS {
        let b = fixtures::braid(5, word);
        let found: HashSet<ArtinBraid> = sliding_circuits_set(&b).iter().cloned().collect();
        assert_eq!(found, fixtures::brute_force_scs(&b), "word {word:?}");
    }
}

#[test]
fn circuits_reached_through_long_conjugators() {
    assert_eq!(sliding_circuits_set(&fixtures::braid(5, &[3, -2])).cardinality(), 12);
    let set = sliding_circuits_set(&fixtures::braid(5, &[1, -4, -4, 1, 2, -2]));
    assert_eq!(set.cardinality(), 6);
}

#[test]
fn circuits_are_slides_of_each_other() {
    for word in fixtures::FOUR_STRAND_WORDS {
        let set = sliding_circuits_set(&fixtures::braid(4, word));
        for (id, circuit) in set.circuits().iter().enumerate() {
            for (i, element) in circuit.iter().enumerate() {
                assert_eq!(set.circuit_of(element), Some(id));
                assert_eq!(element.slid(), circuit[(i + 1) % circuit.len()]);
            }
        }
    }
}

#[test]
fn closed_under_delta_conjugation() {
    for word in fixtures::FOUR_STRAND_WORDS {
        let set = sliding_circuits_set(&fixtures::braid(4, word));
        for element in set.iter() {
            let mut twisted = element.clone();
            twisted.delta_conjugate(1);
            assert!(set.contains(&twisted));
        }
    }
}

#[test]
fn tracked_construction_finds_the_same_set() {
    for word in fixtures::FOUR_STRAND_WORDS {
        let b = fixtures::braid(4, word);
        let plain = sliding_circuits_set(&b);
        let tracked = sliding_circuits_set_tracked(&b, &ScsOpts::default());
        assert_eq!(tracked.set.cardinality(), plain.cardinality());
        assert_eq!(canonical_hash(&tracked.set).unwrap(), canonical_hash(&plain).unwrap());

        assert_eq!(tracked.mins.len(), tracked.set.number_of_circuits());
        assert_eq!(tracked.prev.len(), tracked.set.number_of_circuits());
        assert!(tracked.mins[0].is_identity());
        for (id, &parent) in tracked.prev.iter().enumerate().skip(1) {
            assert!(parent < id);
        }
    }
}

#[test]
fn tree_paths_reach_every_element() {
    for word in fixtures::FOUR_STRAND_WORDS {
        let tracked = sliding_circuits_set_tracked(&fixtures::braid(4, word), &ScsOpts::default());
        let root = tracked.set.circuit(0)[0].clone();
        if root.canonical_length() == 0 {
            continue;
        }
        for element in tracked.set.iter() {
            let mut moved = root.clone();
            moved.conjugate_by(&tree_path(element, &tracked));
            assert_eq!(&moved, element);
        }
    }
}

#[test]
fn parallel_construction_matches_sequential() {
    let parallel = ScsOpts { parallel: true };
    for word in fixtures::FOUR_STRAND_WORDS {
        let b = fixtures::braid(4, word);
        let sequential = sliding_circuits_set(&b);
        let concurrent = sliding_circuits_set_with(&b, &parallel);
        assert_eq!(sequential.circuits(), concurrent.circuits());
    }
}

#[test]
fn display_lists_every_circuit() {
    let set = sliding_circuits_set(&fixtures::braid(4, &[1, 1]));
    let text = set.to_string();
    assert!(text.starts_with("circuit 0"));
    assert_eq!(text.lines().filter(|l| l.starts_with("circuit")).count(), set.number_of_circuits());
    assert_eq!(text.lines().filter(|l| l.starts_with("    ")).count(), set.cardinality());
}

fn letter(strands: i32) -> impl Strategy<Value = i32> {
    (1..strands, any::<bool>()).prop_map(|(g, inverse)| if inverse { -g } else { g })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn random_classes_match_brute_force(word in proptest::collection::vec(letter(4), 1..7)) {
        let b = fixtures::braid(4, &word);
        let set = sliding_circuits_set(&b);
        let expected = fixtures::brute_force_scs(&b);
        prop_assert_eq!(set.cardinality(), expected.len());
        for element in set.iter() {
            prop_assert!(expected.contains(element));
        }
    }

    #[test]
    fn random_five_strand_classes_match_brute_force(word in proptest::collection::vec(letter(5), 1..6)) {
        let b = fixtures::braid(5, &word);
        let found: HashSet<ArtinBraid> = sliding_circuits_set(&b).iter().cloned().collect();
        prop_assert_eq!(found, fixtures::brute_force_scs(&b));
    }
}
