use gar_artin::{ArtinBraid, ArtinFactor};
use gar_core::Factor;
use gar_scs::{
    main_pullback, min_sliding_circuits, min_sliding_circuits_all, min_super_summit, pullback,
    send_to_sliding_circuits, transport, transports_sending_to_trajectory, ScsOpts,
};


fn conjugated(b: &ArtinBraid, f: &ArtinFactor) -> ArtinBraid {
    let mut c = b.clone();
    c.conjugate(f);
    c
}

fn same_summit(a: &ArtinBraid, b: &ArtinBraid) -> bool {
    a.inf() == b.inf() && a.sup() == b.sup()
}

fn representatives() -> Vec<ArtinBraid> {
    fixtures::FOUR_STRAND_WORDS
        .iter()
        .map(|word| send_to_sliding_circuits(&fixtures::braid(4, word)))
        .collect()
}

fn five_strand_representatives() -> Vec<ArtinBraid> {
    fixtures::FIVE_STRAND_WORDS
        .iter()
        .map(|word| send_to_sliding_circuits(&fixtures::braid(5, word)))
        .collect()
}

fn least(factors: impl IntoIterator<Item = ArtinFactor>) -> Option<ArtinFactor> {
    factors.into_iter().reduce(|a, b| a.left_meet(&b))
}

#[test]
fn super_summit_conjugators_are_minimal() {
    let simples = fixtures::all_simples(4);
    for rep in representatives() {
        let rep_inv = rep.inverse();
        for atom in ArtinFactor::atoms(4) {
            let u = min_super_summit(&rep, &rep_inv, &atom);
            assert!(atom.left_divides(&u));
            assert!(same_summit(&conjugated(&rep, &u), &rep));
            for s in &simples {
                if atom.left_divides(s) && same_summit(&conjugated(&rep, s), &rep) {
                    assert!(u.left_divides(s), "{u:?} is not below {s:?} for {rep:?}");
                }
            }
        }
    }
}

#[test]
fn minimal_conjugators_stay_in_the_circuits() {
    for rep in representatives() {
        let rep_inv = rep.inverse();
        for atom in ArtinFactor::atoms(4) {
            let g = min_sliding_circuits(&rep, &rep_inv, &atom);
            assert!(atom.left_divides(&g));
            let moved = conjugated(&rep, &g);
            assert!(same_summit(&moved, &rep));
            assert!(fixtures::is_periodic(&moved));
        }

        let all = min_sliding_circuits_all(&rep, &rep_inv, &ScsOpts::default());
        assert!(!all.is_empty());
        for (i, f) in all.iter().enumerate() {
            assert!(!f.is_identity());
            assert!(fixtures::is_periodic(&conjugated(&rep, f)));
            assert!(!all[..i].contains(f));
        }
    }
}

#[test]
fn minimal_conjugators_match_exhaustive_search() {
    let simples = fixtures::all_simples(5);
    for rep in five_strand_representatives() {
        let rep_inv = rep.inverse();
        let staying: Vec<&ArtinFactor> = simples
            .iter()
            .filter(|s| {
                let moved = conjugated(&rep, s);
                same_summit(&moved, &rep) && fixtures::is_periodic(&moved)
            })
            .collect();
        for atom in ArtinFactor::atoms(5) {
            let expected = least(staying.iter().filter(|s| atom.left_divides(s)).map(|s| (*s).clone()));
            assert_eq!(Some(min_sliding_circuits(&rep, &rep_inv, &atom)), expected, "{rep} {atom}");
        }
    }
}

#[test]
fn pullback_is_the_least_transport_preimage() {
    let simples = fixtures::all_simples(5);
    for rep in five_strand_representatives() {
        let transports: Vec<(ArtinFactor, ArtinFactor)> = simples
            .iter()
            .filter(|t| same_summit(&conjugated(&rep, t), &rep))
            .map(|t| (t.clone(), transport(&rep, t)))
            .collect();
        for f in &simples {
            let expected = least(
                transports
                    .iter()
                    .filter(|(_, image)| f.left_divides(image))
                    .map(|(t, _)| t.clone()),
            );
            assert_eq!(Some(pullback(&rep, f)), expected, "{rep} {f}");
        }
    }
}

#[test]
fn main_pullback_is_stable() {
    for rep in five_strand_representatives() {
        for atom in ArtinFactor::atoms(5) {
            let pulled = main_pullback(&rep, &atom);
            assert_eq!(main_pullback(&rep, &pulled), pulled);
        }
    }
}

#[test]
fn parallel_evaluation_keeps_atom_order() {
    let parallel = ScsOpts { parallel: true };
    for rep in representatives() {
        let rep_inv = rep.inverse();
        assert_eq!(
            min_sliding_circuits_all(&rep, &rep_inv, &parallel),
            min_sliding_circuits_all(&rep, &rep_inv, &ScsOpts::default())
        );
    }
}

#[test]
fn transport_commutes_with_sliding() {
    for rep in representatives() {
        let rep_inv = rep.inverse();
        for f in min_sliding_circuits_all(&rep, &rep_inv, &ScsOpts::default()) {
            let moved = conjugated(&rep, &f);
            let t = transport(&rep, &f);
            assert_eq!(conjugated(&rep.slid(), &t), moved.slid());
        }
    }
}

#[test]
fn transport_cycles_stay_in_the_circuits() {
    for rep in representatives() {
        let rep_inv = rep.inverse();
        for atom in ArtinFactor::atoms(4) {
            let u = min_super_summit(&rep, &rep_inv, &atom);
            let cycle = transports_sending_to_trajectory(&rep, &u);
            assert!(!cycle.is_empty());
            for g in &cycle {
                assert!(fixtures::is_periodic(&conjugated(&rep, g)));
            }
        }
    }
}

#[test]
fn delta_is_its_own_pullback() {
    let delta = ArtinFactor::delta(4);
    for rep in representatives() {
        assert_eq!(main_pullback(&rep, &delta), delta);
    }
}

#[test]
fn trivial_elements_have_atoms_as_conjugators() {
    let identity = ArtinBraid::identity(4);
    let all = min_sliding_circuits_all(&identity, &identity, &ScsOpts::default());
    assert_eq!(all, ArtinFactor::atoms(4));
}
