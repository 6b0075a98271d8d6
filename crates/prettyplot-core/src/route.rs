// File: crates/prettyplot-core/src/route.rs
// Summary: Axis-group routing; splits a series collection into left/right y-axis groups.
// Notes:
// - The split is decided by the variant the caller picks, never by counting
//   series. In JSON the shape decides: `[{..}, {..}]` is two left series,
//   `[[{..}], [{..}]]` is one left and one right series. A flat list of two
//   series is never read as two groups of one.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisGroup {
    Left,
    Right,
}

impl fmt::Display for AxisGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisGroup::Left => f.write_str("left"),
            AxisGroup::Right => f.write_str("right"),
        }
    }
}

/// Number of series per axis group. `right` is zero for single-axis plots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupSizes {
    pub left: usize,
    pub right: usize,
}

impl GroupSizes {
    pub const fn single(n: usize) -> Self {
        Self { left: n, right: 0 }
    }

    pub const fn dual(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    pub const fn total(&self) -> usize {
        self.left + self.right
    }

    pub const fn of(&self, group: AxisGroup) -> usize {
        match group {
            AxisGroup::Left => self.left,
            AxisGroup::Right => self.right,
        }
    }
}

/// Series collection as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesSet<S> {
    /// Every series is plotted against the left y-axis.
    Single(Vec<S>),
    /// `(left, right)`: the second group is plotted against the right y-axis.
    Dual(Vec<S>, Vec<S>),
}

impl<S> Default for SeriesSet<S> {
    fn default() -> Self {
        SeriesSet::Single(Vec::new())
    }
}

impl<S> From<Vec<S>> for SeriesSet<S> {
    fn from(series: Vec<S>) -> Self {
        SeriesSet::Single(series)
    }
}

impl<S> SeriesSet<S> {
    pub fn sizes(&self) -> GroupSizes {
        match self {
            SeriesSet::Single(all) => GroupSizes::single(all.len()),
            SeriesSet::Dual(left, right) => GroupSizes::dual(left.len(), right.len()),
        }
    }

    pub fn group(&self, group: AxisGroup) -> &[S] {
        match (self, group) {
            (SeriesSet::Single(all), AxisGroup::Left) => all,
            (SeriesSet::Single(_), AxisGroup::Right) => &[],
            (SeriesSet::Dual(left, _), AxisGroup::Left) => left,
            (SeriesSet::Dual(_, right), AxisGroup::Right) => right,
        }
    }

    /// Iterate `(group, index, series)` in group order, then index order.
    pub fn route(&self) -> impl Iterator<Item = Routed<'_, S>> + '_ {
        [AxisGroup::Left, AxisGroup::Right].into_iter().flat_map(move |group| {
            self.group(group)
                .iter()
                .enumerate()
                .map(move |(index, series)| Routed { group, index, series })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.sizes().total() == 0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Routed<'a, S> {
    pub group: AxisGroup,
    /// Position inside the group.
    pub index: usize,
    pub series: &'a S,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_routes_everything_left() {
        let set = SeriesSet::Single(vec!['a', 'b', 'c']);
        let routed: Vec<_> = set.route().map(|r| (r.group, r.index, *r.series)).collect();
        assert_eq!(
            routed,
            vec![(AxisGroup::Left, 0, 'a'), (AxisGroup::Left, 1, 'b'), (AxisGroup::Left, 2, 'c')]
        );
        assert_eq!(set.sizes(), GroupSizes::single(3));
    }

    #[test]
    fn dual_routes_left_then_right() {
        let set = SeriesSet::Dual(vec!['a', 'b'], vec!['z']);
        let routed: Vec<_> = set.route().map(|r| (r.group, r.index, *r.series)).collect();
        assert_eq!(
            routed,
            vec![(AxisGroup::Left, 0, 'a'), (AxisGroup::Left, 1, 'b'), (AxisGroup::Right, 0, 'z')]
        );
        assert_eq!(set.sizes().total(), 3);
    }
}
