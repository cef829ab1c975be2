use std::collections::VecDeque;
use std::fmt::{self, Display};

use gar_braid::Braid;
use gar_core::{Factor, Partition};
use tracing::{debug, trace};

use crate::minimal::min_sliding_circuits_all;
use crate::trajectory::{send_to_sliding_circuits, trajectory};
use crate::ScsOpts;

/// The sliding circuits of a conjugacy class, each stored in sliding order,
/// with a membership index from element to circuit id.
#[derive(Debug, Clone)]
pub struct SlidingCircuitsSet<F: Factor> {
    circuits: Partition<Braid<F>>,
}

impl<F: Factor> Default for SlidingCircuitsSet<F> {
    fn default() -> Self {
        Self {
            circuits: Partition::new(),
        }
    }
}

impl<F: Factor> SlidingCircuitsSet<F> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a circuit whose elements are not yet stored. Returns its id.
    pub fn insert(&mut self, circuit: Vec<Braid<F>>) -> usize {
        self.circuits.insert(circuit)
    }

    /// Membership test.
    pub fn contains(&self, b: &Braid<F>) -> bool {
        self.circuits.contains(b)
    }

    /// Id of the circuit containing `b`.
    pub fn circuit_of(&self, b: &Braid<F>) -> Option<usize> {
        self.circuits.part_of(b)
    }

    /// The circuit with the given id.
    pub fn circuit(&self, id: usize) -> &[Braid<F>] {
        self.circuits.part(id)
    }

    /// All circuits, in discovery order.
    pub fn circuits(&self) -> &[Vec<Braid<F>>] {
        self.circuits.parts()
    }

    /// Number of circuits.
    pub fn number_of_circuits(&self) -> usize {
        self.circuits.number_of_parts()
    }

    /// Number of elements.
    pub fn cardinality(&self) -> usize {
        self.circuits.cardinality()
    }

    /// Lengths of the circuits, in discovery order.
    pub fn circuit_sizes(&self) -> Vec<usize> {
        self.circuits.part_sizes()
    }

    /// Iterates over the elements in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Braid<F>> {
        self.circuits.iter()
    }
}

impl<F: Factor + Display> Display for SlidingCircuitsSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, circuit) in self.circuits().iter().enumerate() {
            writeln!(f, "circuit {id} ({} elements):", circuit.len())?;
            for element in circuit {
                writeln!(f, "    {element}")?;
            }
        }
        Ok(())
    }
}

/// A sliding circuit set together with the spanning tree of its
/// construction.
///
/// Circuit `i > 0` was reached by conjugating the first element of circuit
/// `prev[i]` by `mins[i]`; it starts with that conjugate. `mins[0]` is the
/// identity and `prev[0] == 0`.
#[derive(Debug, Clone)]
pub struct TrackedSlidingCircuits<F: Factor> {
    /// The sliding circuits.
    pub set: SlidingCircuitsSet<F>,
    /// Conjugator that discovered each circuit.
    pub mins: Vec<F>,
    /// Circuit from which each circuit was discovered.
    pub prev: Vec<usize>,
}

/// Breadth first exploration state. Every queued element is the first
/// element of its circuit and travels with the left normal form of its
/// inverse.
struct Exploration<F: Factor> {
    set: SlidingCircuitsSet<F>,
    queue: VecDeque<(Braid<F>, Braid<F>)>,
}

impl<F: Factor> Exploration<F> {
    fn start(b: &Braid<F>) -> Self {
        let rep = send_to_sliding_circuits(b);
        let rep_inv = rep.inverse();
        debug!(
            inf = rep.inf(),
            sup = rep.sup(),
            "exploring sliding circuits"
        );
        let mut exploration = Self {
            set: SlidingCircuitsSet::new(),
            queue: VecDeque::new(),
        };
        exploration.discover(rep, rep_inv);
        exploration
    }

    /// Stores the circuit of `element` unless already known.
    fn discover(&mut self, element: Braid<F>, element_inv: Braid<F>) -> bool {
        if self.set.contains(&element) {
            return false;
        }
        let id = self.set.insert(trajectory(&element));
        trace!(circuit = id, length = self.set.circuit(id).len(), "new circuit");
        self.queue.push_back((element, element_inv));
        true
    }

    fn finish(self) -> SlidingCircuitsSet<F> {
        debug!(
            cardinality = self.set.cardinality(),
            circuits = self.set.number_of_circuits(),
            "sliding circuits explored"
        );
        self.set
    }
}

fn conjugated<F: Factor>(b: &Braid<F>, f: &F) -> Braid<F> {
    let mut conjugate = b.clone();
    conjugate.conjugate(f);
    conjugate
}

fn delta_twisted<F: Factor>(b: &Braid<F>) -> Braid<F> {
    let mut twisted = b.clone();
    twisted.delta_conjugate(1);
    twisted
}

/// The sliding circuit set of the conjugacy class of `b`.
pub fn sliding_circuits_set<F: Factor>(b: &Braid<F>) -> SlidingCircuitsSet<F> {
    sliding_circuits_set_with(b, &ScsOpts::default())
}

/// [`sliding_circuits_set`] with explicit options.
///
/// Whenever a circuit is found, the circuit of its conjugate by `Δ` is
/// registered right away.
pub fn sliding_circuits_set_with<F: Factor>(b: &Braid<F>, opts: &ScsOpts) -> SlidingCircuitsSet<F> {
    let mut exploration = Exploration::start(b);
    if let Some((rep, rep_inv)) = exploration.queue.front() {
        let (twisted, twisted_inv) = (delta_twisted(rep), delta_twisted(rep_inv));
        exploration.discover(twisted, twisted_inv);
    }

    while let Some((element, element_inv)) = exploration.queue.pop_front() {
        for f in min_sliding_circuits_all(&element, &element_inv, opts) {
            let next = conjugated(&element, &f);
            if exploration.set.contains(&next) {
                continue;
            }
            let next_inv = conjugated(&element_inv, &f);
            let (twisted, twisted_inv) = (delta_twisted(&next), delta_twisted(&next_inv));
            exploration.discover(next, next_inv);
            exploration.discover(twisted, twisted_inv);
        }
    }
    exploration.finish()
}

/// The sliding circuit set of `b` along with its exploration tree.
///
/// Circuits are only reached through minimal simple conjugators; the
/// conjugate by `Δ` is not registered eagerly, so every circuit has a parent.
pub fn sliding_circuits_set_tracked<F: Factor>(
    b: &Braid<F>,
    opts: &ScsOpts,
) -> TrackedSlidingCircuits<F> {
    let mut exploration = Exploration::start(b);
    let mut mins = vec![F::identity(b.parameter())];
    let mut prev = vec![0];

    let mut current = 0;
    while let Some((element, element_inv)) = exploration.queue.pop_front() {
        for f in min_sliding_circuits_all(&element, &element_inv, opts) {
            let next = conjugated(&element, &f);
            if exploration.set.contains(&next) {
                continue;
            }
            let next_inv = conjugated(&element_inv, &f);
            exploration.discover(next, next_inv);
            mins.push(f);
            prev.push(current);
        }
        current += 1;
    }
    TrackedSlidingCircuits {
        set: exploration.finish(),
        mins,
        prev,
    }
}
