//! Drawing-operation output surface.
//!
//! A fill call returns one [`OpSet`]: an ordered, append-only list of pen
//! operations with no implied rendering target. Downstream consumers decide
//! what a `Move`/`Line` pair becomes (SVG path data, canvas calls, plotter
//! moves).

use serde::{Deserialize, Serialize};

/// One pen operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Op {
    Move { x: f64, y: f64 },
    Line { x: f64, y: f64 },
}

/// What a set of operations represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpSetKind {
    /// Interior hachure strokes of a shape.
    FillSketch,
}

/// An ordered list of operations, tagged with what it draws.
///
/// Owned solely by the fill call that builds it and returned by value;
/// nothing persists across calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpSet {
    pub kind: OpSetKind,
    pub ops: Vec<Op>,
}

impl OpSet {
    pub fn fill_sketch(ops: Vec<Op>) -> Self {
        Self {
            kind: OpSetKind::FillSketch,
            ops,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_camel_case() {
        let set = OpSet::fill_sketch(vec![Op::Move { x: 1.0, y: 2.0 }]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"fillSketch\""), "got {}", json);
        assert!(json.contains("\"move\""), "got {}", json);
    }

    #[test]
    fn op_sets_compare_by_value() {
        let a = OpSet::fill_sketch(vec![Op::Move { x: 0.0, y: 0.0 }, Op::Line { x: 1.0, y: 1.0 }]);
        let b = a.clone();
        assert_eq!(a, b);
    }
}
