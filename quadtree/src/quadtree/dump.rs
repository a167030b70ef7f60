use super::types::ROOT;
use super::*;
use std::io::{self, Write};

impl QuadTree {
    /// Writes the node structure with regions and occupancy, one node per line.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "quadtree: {} children, {} nodes, max_depth {}, leaf_limit {}",
            self.child_count,
            self.node_count(),
            self.constraint.max_depth,
            self.constraint.leaf_limit
        )?;
        self.dump_node(out, ROOT, self.root_region, 0)
    }

    fn dump_node<W: Write>(&self, out: &mut W, node: u32, region: Region, depth: u8) -> io::Result<()> {
        let indent = depth as usize * 2;
        match &self.nodes[node as usize] {
            Node::Leaf(children) => {
                write!(out, "{:indent$}leaf {} ({})", "", region, children.len(), indent = indent)?;
                for child in children {
                    write!(out, " {}@{}", child.id, child.point)?;
                }
                writeln!(out)
            }
            Node::Branch(first) => {
                writeln!(out, "{:indent$}branch {}", "", region, indent = indent)?;
                for quadrant in 0..4 {
                    self.dump_node(out, *first + quadrant as u32, region.quadrant(quadrant), depth + 1)?;
                }
                Ok(())
            }
        }
    }
}
