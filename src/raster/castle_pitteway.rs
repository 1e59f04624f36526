//! Castle-Pitteway run-length slice line.
//!
//! A line of long extent `a` and short extent `b` (`b <= a`) is a word of `a`
//! unit moves: `a - b` *simple* moves (long axis only) and `b` *diagonal*
//! moves (both axes). The word is built by Euclidean subtraction on
//! `(x, y) = (a - b, b)` starting from `m1 = S`, `m2 = D`:
//!
//! ```text
//! while x != y:
//!     if x > y: x -= y; m2 = m1 + m2
//!     else:     y -= x; m1 = m2 + m1
//! word = (m2 + m1) * x
//! ```
//!
//! which spreads the diagonal moves as evenly as the aspect ratio allows.
//!
//! Materialising `m1`/`m2` as strings makes every concatenation copy the
//! whole prefix. [`MovePlan`] instead stores the words as a small DAG of leaf,
//! concatenation and repetition nodes: concatenation is O(1), and a run of
//! identical subtractions collapses into one repetition node (the quotient of
//! the Euclidean step), so a plan has O(log a) nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Coord, Segment, WeightedPoint};

/// A unit move of the slice algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// Advance the long axis only.
    Simple,
    /// Advance both axes.
    Diagonal,
}

impl Move {
    const fn symbol(self) -> char {
        match self {
            Self::Simple => 'S',
            Self::Diagonal => 'D',
        }
    }
}

/// A maximal run of identical consecutive moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRun {
    /// The repeated move.
    pub step: Move,
    /// Number of consecutive repetitions (at least 1).
    pub count: u64,
}

#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf(Move),
    Concat(usize, usize),
    Repeat(usize, u64),
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    simple: u64,
    diagonal: u64,
}

/// Compact Castle-Pitteway move sequence.
#[derive(Debug, Clone)]
pub struct MovePlan {
    nodes: Vec<Node>,
    tallies: Vec<Tally>,
    root: Option<usize>,
}

impl MovePlan {
    /// Build the move plan for long extent `long` and short extent `short`.
    ///
    /// `short` is clamped to `long`. A zero `long` extent gives an empty plan.
    #[must_use]
    pub fn new(long: u64, short: u64) -> Self {
        let short = short.min(long);
        let mut plan = Self { nodes: Vec::new(), tallies: Vec::new(), root: None };

        if long == 0 {
            return plan;
        }

        let root = if short == 0 {
            let simple = plan.leaf(Move::Simple);
            plan.repeat(simple, long)
        } else if short == long {
            let diagonal = plan.leaf(Move::Diagonal);
            plan.repeat(diagonal, long)
        } else {
            let mut x = long - short;
            let mut y = short;
            let mut m1 = plan.leaf(Move::Simple);
            let mut m2 = plan.leaf(Move::Diagonal);

            while x != y {
                if x > y {
                    // k subtractions of y bring x into (0, y]
                    let k = (x - 1) / y;
                    x -= k * y;
                    let prefix = plan.repeat(m1, k);
                    m2 = plan.concat(prefix, m2);
                } else {
                    let k = (y - 1) / x;
                    y -= k * x;
                    let prefix = plan.repeat(m2, k);
                    m1 = plan.concat(prefix, m1);
                }
            }

            let period = plan.concat(m2, m1);
            plan.repeat(period, x)
        };

        plan.root = Some(root);
        plan
    }

    /// Total number of moves.
    #[must_use]
    pub fn len(&self) -> u64 {
        let tally = self.tally();
        tally.simple + tally.diagonal
    }

    /// Whether the plan has no moves (zero-length segment).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of simple (long-axis only) moves.
    #[must_use]
    pub fn simple_count(&self) -> u64 {
        self.tally().simple
    }

    /// Number of diagonal moves.
    #[must_use]
    pub fn diagonal_count(&self) -> u64 {
        self.tally().diagonal
    }

    /// Iterate over the moves in order.
    #[must_use]
    pub fn iter(&self) -> MoveIter<'_> {
        MoveIter { plan: self, stack: self.root.map(Frame::Visit).into_iter().collect() }
    }

    /// Run-length view: consecutive identical moves merged into one run.
    #[must_use]
    pub fn runs(&self) -> Vec<MoveRun> {
        let mut runs: Vec<MoveRun> = Vec::new();
        for step in self.iter() {
            match runs.last_mut() {
                Some(run) if run.step == step => run.count += 1,
                _ => runs.push(MoveRun { step, count: 1 }),
            }
        }
        runs
    }

    /// Number of stored nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn tally(&self) -> Tally {
        self.root.map(|root| self.tallies[root]).unwrap_or_default()
    }

    fn push(&mut self, node: Node, tally: Tally) -> usize {
        self.nodes.push(node);
        self.tallies.push(tally);
        self.nodes.len() - 1
    }

    fn leaf(&mut self, step: Move) -> usize {
        let tally = match step {
            Move::Simple => Tally { simple: 1, diagonal: 0 },
            Move::Diagonal => Tally { simple: 0, diagonal: 1 },
        };
        self.push(Node::Leaf(step), tally)
    }

    fn concat(&mut self, left: usize, right: usize) -> usize {
        let (l, r) = (self.tallies[left], self.tallies[right]);
        let tally = Tally { simple: l.simple + r.simple, diagonal: l.diagonal + r.diagonal };
        self.push(Node::Concat(left, right), tally)
    }

    fn repeat(&mut self, child: usize, times: u64) -> usize {
        if times == 1 {
            return child;
        }
        let c = self.tallies[child];
        let tally = Tally { simple: c.simple * times, diagonal: c.diagonal * times };
        self.push(Node::Repeat(child, times), tally)
    }
}

impl fmt::Display for MovePlan {
    /// Writes the plan as a string of `S` (simple) and `D` (diagonal).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|step| write!(f, "{}", step.symbol()))
    }
}

impl<'a> IntoIterator for &'a MovePlan {
    type Item = Move;
    type IntoIter = MoveIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Visit(usize),
    Repeating { child: usize, remaining: u64 },
}

/// Iterator over the moves of a [`MovePlan`].
///
/// Walks the node DAG with an explicit stack, so the full word is never
/// materialised.
#[derive(Debug, Clone)]
pub struct MoveIter<'a> {
    plan: &'a MovePlan,
    stack: Vec<Frame>,
}

impl Iterator for MoveIter<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            match self.stack.pop()? {
                Frame::Visit(id) => match self.plan.nodes[id] {
                    Node::Leaf(step) => return Some(step),
                    Node::Concat(left, right) => {
                        self.stack.push(Frame::Visit(right));
                        self.stack.push(Frame::Visit(left));
                    }
                    Node::Repeat(child, times) => {
                        self.stack.push(Frame::Repeating { child, remaining: times });
                    }
                },
                Frame::Repeating { child, remaining } => {
                    if remaining > 1 {
                        self.stack.push(Frame::Repeating { child, remaining: remaining - 1 });
                    }
                    self.stack.push(Frame::Visit(child));
                }
            }
        }
    }
}

/// Build the move plan for a segment, and whether the long axis is y.
fn plan_for(segment: &Segment) -> (MovePlan, bool) {
    let (dx, dy) = segment.delta();
    let (w, h) = (dx.unsigned_abs(), dy.unsigned_abs());
    let swap_xy = h > w;
    let (long, short) = if swap_xy { (h, w) } else { (w, h) };
    (MovePlan::new(long, short), swap_xy)
}

/// The Castle-Pitteway move plan of the segment `(x1, y1) -> (x2, y2)`.
#[must_use]
pub fn castle_pitteway_moves(x1: i32, y1: i32, x2: i32, y2: i32) -> MovePlan {
    plan_for(&Segment::new(x1, y1, x2, y2)).0
}

/// Rasterize a segment by replaying its Castle-Pitteway move plan.
///
/// Starting at `(x1, y1)`, a simple move steps the long axis by its sign and a
/// diagonal move steps both axes. Produces `moves + 1` points, the first and
/// last being exactly the input endpoints; a zero-length segment yields the
/// start point alone.
pub fn castle_pitteway_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<WeightedPoint> {
    let segment = Segment::new(x1, y1, x2, y2);
    let (plan, swap_xy) = plan_for(&segment);
    let (dx, dy) = segment.delta();
    let (sx, sy) = (dx.signum(), dy.signum());

    let simple: (Coord, Coord) = if swap_xy { (0, sy) } else { (sx, 0) };
    let diagonal: (Coord, Coord) = (sx, sy);

    let mut x = Coord::from(x1);
    let mut y = Coord::from(y1);
    let mut points = Vec::with_capacity(plan.len() as usize + 1);
    points.push(WeightedPoint::solid(x, y));

    for step in &plan {
        let (mx, my) = match step {
            Move::Simple => simple,
            Move::Diagonal => diagonal,
        };
        x += mx;
        y += my;
        points.push(WeightedPoint::solid(x, y));
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_eight_by_three() {
        let plan = MovePlan::new(8, 3);
        assert_eq!(plan.to_string(), "SDSSDSDS");
        assert_eq!(plan.simple_count(), 5);
        assert_eq!(plan.diagonal_count(), 3);
        assert_eq!(plan.len(), 8);
    }

    #[test]
    fn test_plan_repeated_period() {
        // x = 4, y = 2 -> x = 2 = y, period "SD" + "S" repeated twice
        assert_eq!(MovePlan::new(6, 2).to_string(), "SDSSDS");
    }

    #[test]
    fn test_plan_short_dominant() {
        assert_eq!(MovePlan::new(3, 2).to_string(), "DDS");
    }

    #[test]
    fn test_plan_axis_aligned_and_diagonal() {
        assert_eq!(MovePlan::new(4, 0).to_string(), "SSSS");
        assert_eq!(MovePlan::new(3, 3).to_string(), "DDD");
    }

    #[test]
    fn test_plan_empty() {
        let plan = MovePlan::new(0, 0);
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.iter().count(), 0);
        assert!(plan.runs().is_empty());
    }

    #[test]
    fn test_plan_runs() {
        let runs = MovePlan::new(8, 3).runs();
        let expected = [
            (Move::Simple, 1),
            (Move::Diagonal, 1),
            (Move::Simple, 2),
            (Move::Diagonal, 1),
            (Move::Simple, 1),
            (Move::Diagonal, 1),
            (Move::Simple, 1),
        ];
        let got: Vec<_> = runs.iter().map(|r| (r.step, r.count)).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_plan_stays_small_for_long_lines() {
        // Subtractive construction would need ~a steps here.
        let plan = MovePlan::new(1_000_000, 1);
        assert!(plan.node_count() < 16, "nodes: {}", plan.node_count());
        assert_eq!(plan.diagonal_count(), 1);
        assert_eq!(plan.simple_count(), 999_999);
    }

    #[test]
    fn test_line_eight_by_three() {
        let points = castle_pitteway_line(0, 0, 8, 3);
        assert_eq!(points.len(), 9);
        assert_eq!(points.first().unwrap().position(), (0, 0));
        assert_eq!(points.last().unwrap().position(), (8, 3));
        let ys: Vec<_> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0, 0, 1, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_line_steep_negative() {
        let points = castle_pitteway_line(0, 0, -3, -8);
        assert_eq!(points.len(), 9);
        assert_eq!(points.last().unwrap().position(), (-3, -8));
        // Long axis is y: every move steps y by -1.
        for pair in points.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, -1);
            assert!(matches!(pair[1].x - pair[0].x, 0 | -1));
        }
    }

    #[test]
    fn test_line_vertical() {
        let points = castle_pitteway_line(2, 0, 2, 3);
        let pos: Vec<_> = points.iter().map(|p| p.position()).collect();
        assert_eq!(pos, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_line_degenerate() {
        assert_eq!(castle_pitteway_line(5, 5, 5, 5), vec![WeightedPoint::solid(5, 5)]);
    }
}
