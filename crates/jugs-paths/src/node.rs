use std::hash::{Hash, Hasher};

use jugs_core::State;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A search state plus its provenance.
///
/// Nodes live in an arena (a `Vec<Node>` owned by the search); `parent` is
/// the index of the generating node in that arena, `None` for the root.
/// Like [`State`], a node's identity is its pair of quantities only.
#[derive(Copy, Clone, Debug)]
pub struct Node {
    state: State,
    parent: Option<usize>,
    depth: usize,
}

impl Node {
    /// A parentless node at depth 0.
    pub fn root(state: State) -> Self {
        Self {
            state,
            parent: None,
            depth: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Arena index of the generating node.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Distance from the root, in moves.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Generate the six successors of this node, which sits at `handle` in
    /// the arena.
    ///
    /// Order follows [`jugs_core::Op::ALL`]. Successors equal to this node
    /// are kept; cycle removal happens later.
    pub fn breed(&self, handle: usize) -> [Node; 6] {
        self.state.successors().map(|state| Node {
            state,
            parent: Some(handle),
            depth: self.depth + 1,
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for Node {}

impl PartialEq<State> for Node {
    fn eq(&self, other: &State) -> bool {
        self.state == *other
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Rebuild the path ending at `nodes[from]` by following parent links back
/// to the root.
///
/// `from` and every parent handle must index into `nodes`.
pub(crate) fn backtrack(nodes: &[Node], from: usize) -> Vec<State> {
    let mut path = Vec::with_capacity(nodes[from].depth + 1);
    let mut ci = Some(from);
    while let Some(i) = ci {
        path.push(nodes[i].state);
        ci = nodes[i].parent;
    }
    path.reverse();
    path
}
