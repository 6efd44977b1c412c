//! Priority-ordered informed search over any state with an admissible heuristic.
//!
//! A [`Search`] owns one [`Frontier`] and advances one expansion per
//! [`Search::step`]. It never decides when to stop; the caller drives it, which
//! lets the solver run two searches side by side in lock-step.
//!
//! Expanded nodes form a tree through shared, read-only parent links. A node
//! lives as long as something still points at it: the frontier, or a
//! descendant whose ancestry might be turned into a path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

/// A state the search can explore.
pub trait SearchState: Clone + PartialEq {
    /// Lower bound on the number of moves left to reach a solved state.
    fn heuristic(&self) -> u32;

    fn is_solved(&self) -> bool;

    /// States reachable in one move.
    fn expand(&self) -> impl Iterator<Item = Self> + '_;
}

/// One state in the search tree, with the number of moves taken to reach it
/// and a link to the node it was expanded from.
#[derive(Debug)]
pub struct SearchNode<S> {
    state: S,
    moves: usize,
    heuristic: u32,
    parent: Option<Rc<SearchNode<S>>>,
}

impl<S: SearchState> SearchNode<S> {
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            heuristic: state.heuristic(),
            state,
            moves: 0,
            parent: None,
        })
    }

    pub fn child(parent: &Rc<Self>, state: S) -> Rc<Self> {
        Rc::new(Self {
            heuristic: state.heuristic(),
            state,
            moves: parent.moves + 1,
            parent: Some(Rc::clone(parent)),
        })
    }
}

impl<S> SearchNode<S> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    /// Moves taken so far plus the estimate of moves remaining.
    pub fn priority(&self) -> usize {
        self.moves + self.heuristic as usize
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode<S>>> {
        self.parent.as_ref()
    }

    /// This node followed by each ancestor up to the root.
    pub fn ancestry(&self) -> impl Iterator<Item = &SearchNode<S>> + '_ {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// States from the root down to this node, inclusive.
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut path: Vec<S> = self.ancestry().map(|node| node.state.clone()).collect();
        path.reverse();
        path
    }
}

// Unlink the ancestry iteratively so dropping a deep chain does not recurse.
impl<S> Drop for SearchNode<S> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut inner) => parent = inner.parent.take(),
                Err(_) => break,
            }
        }
    }
}

struct Entry<S> {
    node: Rc<SearchNode<S>>,
    seq: u64,
}

/// Expansion order of two queued nodes: lower priority first, then the lower
/// heuristic (the node closer to the goal), then the node queued first.
fn expansion_order<S>(a: &Entry<S>, b: &Entry<S>) -> Ordering {
    a.node
        .priority()
        .cmp(&b.node.priority())
        .then_with(|| a.node.heuristic.cmp(&b.node.heuristic))
        .then_with(|| a.seq.cmp(&b.seq))
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> {}

// BinaryHeap pops the maximum, so the expansion order is reversed.
impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        expansion_order(other, self)
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of search nodes.
pub struct Frontier<S> {
    heap: BinaryHeap<Entry<S>>,
    next_seq: u64,
    peak: usize,
}

impl<S> Frontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            peak: 0,
        }
    }

    pub fn push(&mut self, node: Rc<SearchNode<S>>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes the node that comes first in expansion order.
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S>>> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn peek(&self) -> Option<&Rc<SearchNode<S>>> {
        self.heap.peek().map(|entry| &entry.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of nodes held at once.
    pub fn peak_len(&self) -> usize {
        self.peak
    }
}

impl<S> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a single [`Search::step`].
#[derive(Debug)]
pub enum Step<S> {
    /// A node was expanded and its children queued.
    Expanded,
    /// The extracted node is solved; the search is over.
    Goal(Rc<SearchNode<S>>),
    /// Nothing is left to extract.
    Exhausted,
}

pub struct Search<S> {
    frontier: Frontier<S>,
    expanded: u64,
    generated: u64,
}

impl<S: SearchState> Search<S> {
    pub fn new(root: S) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(SearchNode::root(root));
        Self {
            frontier,
            expanded: 0,
            generated: 1,
        }
    }

    /// Extracts the first node in expansion order. A solved node is returned
    /// as is; otherwise each successor, except the state the node itself was
    /// expanded from, is queued one move deeper.
    pub fn step(&mut self) -> Step<S> {
        let Some(node) = self.frontier.pop() else {
            return Step::Exhausted;
        };
        if node.state.is_solved() {
            return Step::Goal(node);
        }

        self.expanded += 1;
        let previous = node.parent.as_ref().map(|parent| &parent.state);
        for next in node.state.expand() {
            if previous == Some(&next) {
                continue;
            }
            self.frontier.push(SearchNode::child(&node, next));
            self.generated += 1;
        }

        log::trace!(
            "expanded node at depth {} (priority {}), frontier size {}",
            node.moves,
            node.priority(),
            self.frontier.len()
        );
        Step::Expanded
    }
}

impl<S> Search<S> {
    pub fn frontier(&self) -> &Frontier<S> {
        &self.frontier
    }

    /// Nodes extracted and expanded so far.
    pub fn expanded(&self) -> u64 {
        self.expanded
    }

    /// Nodes created so far, the root included.
    pub fn generated(&self) -> u64 {
        self.generated
    }
}
