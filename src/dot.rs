//! Network to DOT (Graphviz) conversion.
//!
//! This module renders decomposition networks in DOT format, which can be visualized using
//! Graphviz tools like `dot` or online viewers.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Leaves** (the constant, elementary variables and divisors) are placed at the bottom (sink rank)
//! - **Gates** are labeled with their operator
//! - **Edges** go from a gate to its fanins:
//!   - Solid lines represent regular fanins
//!   - Dotted lines with hollow circles represent complemented fanins
//! - **Root nodes** are rendered as rectangles at the top (source rank)
//!
//! # Examples
//!
//! ```
//! use bidec_rs::manager::Manager;
//! use bidec_rs::params::Params;
//!
//! let mut mgr = Manager::new(Params::default().with_max_support(3));
//! let f = mgr.decompose(&[0b0110], &[0b1111], 2, &[] as &[Vec<u64>], 4).unwrap();
//!
//! let dot = mgr.to_dot(&[f]).unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::BTreeSet;

use crate::manager::Manager;
use crate::node::NodeKind;
use crate::reference::Ref;

/// Configuration options for DOT output generation.
///
/// # Examples
///
/// ```
/// use bidec_rs::dot::DotConfig;
/// use bidec_rs::manager::Manager;
///
/// let mgr = Manager::default();
/// let x = mgr.var_ref(0);
/// let config = DotConfig {
///     gate_shape: "circle",
///     leaf_shape: "square",
///     divisor_shape: "diamond",
///     root_shape: "rect",
///     edge_style: "solid",
///     negated_edge_style: "dotted",
///     use_html_labels: true,
/// };
///
/// let dot = mgr.to_dot_with_config(&[x], &config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for gate nodes (default: "circle")
    pub gate_shape: &'static str,
    /// Shape for the constant and variable leaves (default: "square")
    pub leaf_shape: &'static str,
    /// Shape for divisor leaves (default: "diamond")
    pub divisor_shape: &'static str,
    /// Shape for root nodes (default: "rect")
    pub root_shape: &'static str,
    /// Style for regular fanin edges (default: "solid")
    pub edge_style: &'static str,
    /// Style for complemented fanin edges (default: "dotted")
    pub negated_edge_style: &'static str,
    /// Whether to use HTML labels for subscripts (default: true)
    pub use_html_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            gate_shape: "circle",
            leaf_shape: "square",
            divisor_shape: "diamond",
            root_shape: "rect",
            edge_style: "solid",
            negated_edge_style: "dotted",
            use_html_labels: true,
        }
    }
}

impl Manager {
    /// Indices of all nodes reachable from `roots`, leaves included.
    pub fn descendants(&self, roots: impl IntoIterator<Item = Ref>) -> BTreeSet<u32> {
        let mut visited = BTreeSet::new();
        let mut stack: Vec<Ref> = roots.into_iter().collect();
        while let Some(node) = stack.pop() {
            if visited.insert(node.id()) {
                if let Some(fanins) = self.node(node).fanins() {
                    stack.extend(fanins);
                }
            }
        }
        visited
    }

    /// Converts the networks rooted at `roots` to DOT (Graphviz) format.
    ///
    /// Shared nodes are displayed once.
    ///
    /// # Examples
    ///
    /// ```
    /// use bidec_rs::manager::Manager;
    /// use bidec_rs::params::Params;
    ///
    /// let mut mgr = Manager::new(Params::default().with_max_support(3));
    /// let and = mgr.decompose(&[0b1000], &[0b1111], 2, &[] as &[Vec<u64>], 4).unwrap();
    /// let or = mgr.decompose(&[0b1110], &[0b1111], 2, &[] as &[Vec<u64>], 4).unwrap();
    ///
    /// let dot = mgr.to_dot(&[and, or]).unwrap();
    /// println!("{}", dot);
    /// ```
    pub fn to_dot(&self, roots: &[Ref]) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(roots, &DotConfig::default())
    }

    /// Converts the networks rooted at `roots` to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, roots: &[Ref], config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "graph {{")?;
        writeln!(dot, "node [shape={}, fixedsize=true];", config.gate_shape)?;

        let all_nodes = self.descendants(roots.iter().copied());

        // Leaves
        writeln!(dot, "{{ rank=sink")?;
        for &id in all_nodes.iter() {
            let (name, index, shape) = match self.node(Ref::new(id)).kind {
                NodeKind::Const => {
                    writeln!(dot, "{} [shape={}, label=\"1\"];", id, config.leaf_shape)?;
                    continue;
                }
                NodeKind::Var(v) => ("x", v, config.leaf_shape),
                NodeKind::Divisor(i) => ("d", i, config.divisor_shape),
                NodeKind::Gate { .. } => continue,
            };
            let label = if config.use_html_labels {
                format!("<{}<SUB>{}</SUB>>", name, index)
            } else {
                format!("\"{}{}\"", name, index)
            };
            writeln!(dot, "{} [shape={}, label={}];", id, shape, label)?;
        }
        writeln!(dot, "}}")?;

        // Gates and their fanin edges
        for &id in all_nodes.iter() {
            let NodeKind::Gate { op, fanins } = self.node(Ref::new(id)).kind else {
                continue;
            };
            writeln!(dot, "{} [label=\"{}\"];", id, op)?;
            for fanin in fanins {
                if fanin.is_negated() {
                    writeln!(
                        dot,
                        "{} -- {} [style={}, dir=forward, arrowhead=odot];",
                        id,
                        fanin.index(),
                        config.negated_edge_style
                    )?;
                } else {
                    writeln!(dot, "{} -- {} [style={}];", id, fanin.index(), config.edge_style)?;
                }
            }
        }

        // Roots at the top
        writeln!(dot, "{{ rank=source")?;
        for (i, root) in roots.iter().enumerate() {
            writeln!(dot, "r{} [shape={}, label=\"{}\"];", i, config.root_shape, root)?;
        }
        writeln!(dot, "}}")?;

        for (i, &root) in roots.iter().enumerate() {
            if root.is_negated() {
                writeln!(dot, "r{} -- {} [dir=forward, arrowhead=odot];", i, root.index())?;
            } else {
                writeln!(dot, "r{} -- {};", i, root.index())?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
