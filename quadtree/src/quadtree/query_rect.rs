use super::types::ROOT;
use super::*;

impl QuadTree {
    /// Appends every linked child whose point lies inside `region`.
    /// Result order is unspecified.
    pub fn query(&self, region: &Region, results: &mut Vec<ChildRef>) {
        self.query_with(region, |child| results.push(child));
    }

    pub fn query_ids(&self, region: &Region, results: &mut Vec<ChildId>) {
        self.query_with(region, |child| results.push(child.id));
    }

    pub fn query_with<F>(&self, region: &Region, mut f: F)
    where
        F: FnMut(ChildRef),
    {
        debug_assert!(region.is_valid(), "inverted query region {}", region);
        if !region.overlaps(&self.root_region) {
            return;
        }
        let mut stack = NodeStack::new();
        stack.push((ROOT, self.root_region, 0));
        while let Some((node, node_region, depth)) = stack.pop() {
            match &self.nodes[node as usize] {
                Node::Branch(first) => {
                    for quadrant in 0..4 {
                        let child_region = node_region.quadrant(quadrant);
                        if region.overlaps(&child_region) {
                            stack.push((*first + quadrant as u32, child_region, depth + 1));
                        }
                    }
                }
                Node::Leaf(children) => {
                    if region.contains_region(&node_region) {
                        children.iter().for_each(|child| f(*child));
                    } else {
                        for child in children {
                            if region.contains(child.point) {
                                f(*child);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn all_children(&self, children: &mut Vec<ChildRef>) {
        self.for_each_leaf(|_, _, leaf| children.extend_from_slice(leaf));
    }
}
