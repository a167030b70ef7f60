use super::types::ROOT;
use super::*;

impl QuadTree {
    /// Unlinks `child`, located by the point it had when inserted.
    ///
    /// Returns false if no record with the same id and point is linked.
    pub fn remove<C: Child + ?Sized>(&mut self, child: &C) -> bool {
        let target = ChildRef::of(child);
        let mut path = NodeStack::new();
        let leaf = self.descend(target.point, &mut path);
        let removed = match &mut self.nodes[leaf as usize] {
            Node::Leaf(children) => match children.iter().position(|c| *c == target) {
                Some(index) => {
                    children.swap_remove(index);
                    true
                }
                None => false,
            },
            Node::Branch(_) => false,
        };
        if removed {
            self.child_count -= 1;
            self.stats.removes += 1;
            self.merge_upwards(&path);
        }
        removed
    }

    pub fn contains<C: Child + ?Sized>(&self, child: &C) -> bool {
        let target = ChildRef::of(child);
        let mut path = NodeStack::new();
        match &self.nodes[self.descend(target.point, &mut path) as usize] {
            Node::Leaf(children) => children.contains(&target),
            Node::Branch(_) => false,
        }
    }

    /// Moves a linked child to `point`. Returns false, leaving the tree
    /// untouched, if `child` is not linked at its current point.
    pub fn relocate<C: Child + ?Sized>(&mut self, child: &C, point: Point) -> bool {
        let id = child.id();
        if !self.remove(child) {
            return false;
        }
        self.insert(&ChildRef::new(id, point));
        true
    }

    fn descend(&self, point: Point, path: &mut NodeStack) -> u32 {
        let mut node = ROOT;
        let mut region = self.root_region;
        let mut depth = 0u8;
        while let Node::Branch(first) = &self.nodes[node as usize] {
            path.push((node, region, depth));
            let quadrant = region.quadrant_of(point);
            node = *first + quadrant as u32;
            region = region.quadrant(quadrant);
            depth += 1;
        }
        node
    }

    // Deepest first; stops at the first branch that must stay split.
    fn merge_upwards(&mut self, path: &NodeStack) {
        let leaf_limit = self.constraint.leaf_limit;
        for &(branch, _, _) in path.iter().rev() {
            let first = match self.nodes[branch as usize] {
                Node::Branch(first) => first,
                Node::Leaf(_) => break,
            };
            let mut total = 0usize;
            for i in 0..4 {
                match &self.nodes[(first + i) as usize] {
                    Node::Leaf(children) => total += children.len(),
                    Node::Branch(_) => return,
                }
            }
            if total > leaf_limit {
                return;
            }
            let mut merged = Vec::with_capacity(total);
            for i in 0..4 {
                if let Node::Leaf(children) = &mut self.nodes[(first + i) as usize] {
                    merged.append(children);
                }
            }
            self.nodes[branch as usize] = Node::Leaf(merged);
            self.free_block(first);
            self.stats.merges += 1;
        }
    }
}
