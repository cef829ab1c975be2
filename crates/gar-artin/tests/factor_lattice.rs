use gar_artin::ArtinFactor;
use gar_core::{Factor, GarError, RngHandle};
use proptest::prelude::*;

fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for smaller in permutations(n - 1) {
        for slot in 0..n {
            let mut table = smaller.clone();
            table.insert(slot, n - 1);
            out.push(table);
        }
    }
    out
}

fn all_factors(n: usize) -> Vec<ArtinFactor> {
    permutations(n)
        .iter()
        .map(|table| ArtinFactor::from_table(table).expect("permutation"))
        .collect()
}

// Independent of the meet: `s ≼ a` iff crossing numbers add up along `a = s · c`.
fn is_prefix(s: &ArtinFactor, a: &ArtinFactor) -> bool {
    s.crossings() + s.left_complement(a).crossings() == a.crossings()
}

fn is_suffix(s: &ArtinFactor, a: &ArtinFactor) -> bool {
    s.crossings() + s.right_complement(a).crossings() == a.crossings()
}

#[test]
fn four_strands_have_twenty_four_simples() {
    let simples = all_factors(4);
    assert_eq!(simples.len(), 24);
    let delta = ArtinFactor::delta(4);
    assert_eq!(delta.crossings(), 6);
    assert!(simples.iter().all(|s| is_prefix(s, &delta) && is_suffix(s, &delta)));
}

#[test]
fn meets_are_greatest_common_divisors() {
    let simples = all_factors(4);
    for a in &simples {
        for b in &simples {
            let meet = a.left_meet(b);
            assert!(is_prefix(&meet, a) && is_prefix(&meet, b));
            for s in simples.iter().filter(|s| is_prefix(s, a) && is_prefix(s, b)) {
                assert!(is_prefix(s, &meet), "{s:?} divides {a:?} and {b:?} but not {meet:?}");
            }

            let right = a.right_meet(b);
            assert!(is_suffix(&right, a) && is_suffix(&right, b));
            for s in simples.iter().filter(|s| is_suffix(s, a) && is_suffix(s, b)) {
                assert!(is_suffix(s, &right));
            }
        }
    }
}

#[test]
fn joins_are_least_common_multiples() {
    let simples = all_factors(4);
    for a in &simples {
        for b in &simples {
            let join = a.left_join(b);
            assert!(is_prefix(a, &join) && is_prefix(b, &join));
            for m in simples.iter().filter(|m| is_prefix(a, m) && is_prefix(b, m)) {
                assert!(is_prefix(&join, m));
            }
        }
    }
}

#[test]
fn atoms_are_validated() {
    let atom = ArtinFactor::atom(4, 2).expect("valid atom");
    assert_eq!(atom.table(), vec![0, 2, 1, 3]);
    assert_eq!(ArtinFactor::atoms(4)[1], atom);

    let err = ArtinFactor::atom(4, 4).unwrap_err();
    assert!(matches!(err, GarError::Word(_)));
    assert_eq!(err.info().code, "atom-out-of-range");

    let err = ArtinFactor::atom(1, 1).unwrap_err();
    assert!(matches!(err, GarError::Parameter(_)));
    assert_eq!(err.info().context.get("strands").map(String::as_str), Some("1"));
}

#[test]
fn tables_must_be_permutations() {
    assert!(ArtinFactor::from_table(&[1, 0, 2]).is_ok());
    let err = ArtinFactor::from_table(&[0, 0, 2]).unwrap_err();
    assert_eq!(err.info().code, "not-a-permutation");
    assert!(ArtinFactor::from_table(&[0, 3, 2]).is_err());
    assert!(ArtinFactor::from_table(&[0]).is_err());
}

#[test]
fn delta_is_spelled_as_a_half_twist() {
    let delta = ArtinFactor::delta(3);
    assert_eq!(delta.atom_word(), vec![1, 2, 1]);
    assert_eq!(delta.to_string(), "(1 2 1)");
    assert_eq!(ArtinFactor::identity(3).to_string(), "()");
}

#[test]
fn json_uses_the_table_and_validates_it() {
    let factor = ArtinFactor::from_table(&[2, 0, 1, 3]).expect("permutation");
    let json = serde_json::to_string(&factor).expect("serialize");
    assert_eq!(json, "[2,0,1,3]");
    let restored: ArtinFactor = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, factor);
    assert!(serde_json::from_str::<ArtinFactor>("[1,1,0]").is_err());
}

fn factor_strategy() -> impl Strategy<Value = (usize, u64)> {
    (3usize..8, any::<u64>())
}

proptest! {
    #[test]
    fn complements_undo_products((n, seed) in factor_strategy()) {
        let mut rng = RngHandle::from_seed(seed);
        let a = ArtinFactor::random(n, &mut rng);
        let b = ArtinFactor::random(n, &mut rng);

        let meet = a.left_meet(&b);
        prop_assert_eq!(meet.product(&meet.left_complement(&a)), a.clone());
        let right = a.right_meet(&b);
        prop_assert_eq!(right.right_complement(&a).product(&right), a.clone());

        prop_assert_eq!(a.product(&a.delta_left_complement()), ArtinFactor::delta(n));
        prop_assert_eq!(a.delta_right_complement().product(&a), ArtinFactor::delta(n));
    }

    #[test]
    fn delta_conjugation_is_an_involution((n, seed) in factor_strategy()) {
        let mut rng = RngHandle::from_seed(seed);
        let a = ArtinFactor::random(n, &mut rng);
        prop_assert_eq!(a.delta_conjugate(2), a.clone());
        prop_assert_eq!(a.delta_conjugate(-1), a.delta_conjugate(1));
        prop_assert_eq!(a.delta_left_complement().delta_left_complement(), a.delta_conjugate(1));
    }

    #[test]
    fn atom_words_spell_the_factor((n, seed) in factor_strategy()) {
        let mut rng = RngHandle::from_seed(seed);
        let a = ArtinFactor::random(n, &mut rng);
        let word = a.atom_word();
        prop_assert_eq!(word.len(), a.crossings());
        let atoms = ArtinFactor::atoms(n);
        let spelled = word
            .iter()
            .fold(ArtinFactor::identity(n), |acc, &i| acc.product(&atoms[i - 1]));
        prop_assert_eq!(spelled, a);
    }
}
