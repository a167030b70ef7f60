use super::types::ROOT;
use super::*;
use crate::error::QuadtreeResult;

impl QuadTree {
    pub fn new(constraint: TreeConstraint) -> Self {
        Self {
            nodes: vec![Node::empty_leaf()],
            free_blocks: Vec::new(),
            constraint: constraint.clamped(),
            root_region: Region::full(),
            child_count: 0,
            stats: MutationStats::default(),
        }
    }

    pub fn try_new(max_depth: u8, leaf_limit: usize) -> QuadtreeResult<Self> {
        Ok(Self::new(TreeConstraint::new(max_depth, leaf_limit)?))
    }

    pub fn constraint(&self) -> TreeConstraint {
        self.constraint
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    pub fn is_empty(&self) -> bool {
        self.child_count == 0
    }

    /// Live nodes, not counting recycled blocks.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_blocks.len() * 4
    }

    pub fn stats(&self) -> MutationStats {
        self.stats
    }

    pub fn take_stats(&mut self) -> MutationStats {
        std::mem::take(&mut self.stats)
    }

    /// Drops every node. Caller-owned children are untouched.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::empty_leaf());
        self.free_blocks.clear();
        self.child_count = 0;
    }

    pub fn insert<C: Child + ?Sized>(&mut self, child: &C) {
        let child = ChildRef::of(child);
        let max_depth = self.constraint.max_depth;
        let leaf_limit = self.constraint.leaf_limit;
        let mut node = ROOT;
        let mut region = self.root_region;
        let mut depth = 0u8;
        loop {
            match &mut self.nodes[node as usize] {
                Node::Branch(first) => {
                    let quadrant = region.quadrant_of(child.point);
                    node = *first + quadrant as u32;
                    region = region.quadrant(quadrant);
                    depth += 1;
                    continue;
                }
                Node::Leaf(children) => {
                    debug_assert!(
                        !children.iter().any(|c| c.id == child.id),
                        "child {} is already linked into this leaf",
                        child.id
                    );
                    if children.len() < leaf_limit || depth >= max_depth || !region.is_divisible()
                    {
                        children.push(child);
                        self.child_count += 1;
                        self.stats.inserts += 1;
                        return;
                    }
                }
            }
            self.split(node, region);
        }
    }

    fn split(&mut self, node: u32, region: Region) {
        let first = self.alloc_block();
        let held = match std::mem::replace(&mut self.nodes[node as usize], Node::Branch(first)) {
            Node::Leaf(children) => children,
            Node::Branch(_) => return,
        };
        for child in held {
            let quadrant = region.quadrant_of(child.point);
            if let Node::Leaf(children) = &mut self.nodes[(first + quadrant as u32) as usize] {
                children.push(child);
            }
        }
        self.stats.splits += 1;
    }

    fn alloc_block(&mut self) -> u32 {
        if let Some(first) = self.free_blocks.pop() {
            for i in 0..4 {
                self.nodes[(first + i) as usize] = Node::empty_leaf();
            }
            return first;
        }
        let first = self.nodes.len() as u32;
        for _ in 0..4 {
            self.nodes.push(Node::empty_leaf());
        }
        first
    }

    pub(crate) fn free_block(&mut self, first: u32) {
        for i in 0..4 {
            self.nodes[(first + i) as usize] = Node::empty_leaf();
        }
        self.free_blocks.push(first);
    }

    /// Visits every leaf with its region, depth and linked children.
    pub fn for_each_leaf<F>(&self, mut f: F)
    where
        F: FnMut(&Region, u8, &[ChildRef]),
    {
        let mut stack = NodeStack::new();
        stack.push((ROOT, self.root_region, 0));
        while let Some((node, region, depth)) = stack.pop() {
            match &self.nodes[node as usize] {
                Node::Leaf(children) => f(&region, depth, children),
                Node::Branch(first) => {
                    for quadrant in (0..4).rev() {
                        stack.push((*first + quadrant as u32, region.quadrant(quadrant), depth + 1));
                    }
                }
            }
        }
    }

    /// Depth of the deepest leaf.
    pub fn depth(&self) -> u8 {
        let mut deepest = 0;
        self.for_each_leaf(|_, depth, _| deepest = deepest.max(depth));
        deepest
    }

    pub fn all_node_regions(&self, regions: &mut Vec<Region>) {
        let mut stack = NodeStack::new();
        stack.push((ROOT, self.root_region, 0));
        while let Some((node, region, depth)) = stack.pop() {
            regions.push(region);
            if let Node::Branch(first) = &self.nodes[node as usize] {
                for quadrant in (0..4).rev() {
                    stack.push((*first + quadrant as u32, region.quadrant(quadrant), depth + 1));
                }
            }
        }
    }
}

impl Default for QuadTree {
    fn default() -> Self {
        Self::new(TreeConstraint::default())
    }
}
