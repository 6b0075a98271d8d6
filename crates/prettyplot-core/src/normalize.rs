// File: crates/prettyplot-core/src/normalize.rs
// Summary: Parameter normalizer; resolves scalar / per-series / per-group style options into one value per series.
// Notes:
// - In Rust code the caller states the shape with a variant. In JSON the shape
//   is sniffed by serde (untagged): a bare value is `Scalar`, an array whose
//   first element is a bare value is `PerSeries`, an array of two arrays is
//   `PerGroup`. When `T` is itself a sequence the flat and nested readings can
//   collide; such options should be given through the typed API.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::route::{AxisGroup, GroupSizes};

/// A per-series style option (color, marker, linestyle, label, alpha, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue<T> {
    /// Broadcast to every series of every group.
    Scalar(T),
    /// One entry per series: the first `left` entries address the left group, the rest the right group.
    PerSeries(Vec<T>),
    /// `(left, right)`: one list per axis group.
    PerGroup(Vec<T>, Vec<T>),
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        StyleValue::Scalar(value)
    }
}

/// Resolved option: exactly one value per series, grouped by axis.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupTable<T> {
    pub left: Vec<T>,
    pub right: Vec<T>,
}

impl<T> GroupTable<T> {
    pub fn group(&self, group: AxisGroup) -> &[T] {
        match group {
            AxisGroup::Left => &self.left,
            AxisGroup::Right => &self.right,
        }
    }

    pub fn get(&self, group: AxisGroup, index: usize) -> Option<&T> {
        self.group(group).get(index)
    }

    pub fn sizes(&self) -> GroupSizes {
        GroupSizes::dual(self.left.len(), self.right.len())
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate left entries then right entries.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.left.iter().chain(self.right.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> GroupTable<U> {
        GroupTable {
            left: self.left.into_iter().map(&mut f).collect(),
            right: self.right.into_iter().map(&mut f).collect(),
        }
    }
}

impl<T: Clone> GroupTable<T> {
    /// Flatten back into an option value; resolving it again yields the same table.
    pub fn to_style_value(&self) -> StyleValue<T> {
        StyleValue::PerSeries(self.iter().cloned().collect())
    }
}

impl<T: Clone> StyleValue<T> {
    /// Resolve this value against the group sizes.
    ///
    /// `Scalar` is broadcast, `PerSeries` must hold exactly `left + right`
    /// entries, `PerGroup` must match each group size.
    pub fn resolve(&self, option: &'static str, sizes: GroupSizes) -> PlotResult<GroupTable<T>> {
        match self {
            StyleValue::Scalar(value) => Ok(GroupTable {
                left: vec![value.clone(); sizes.left],
                right: vec![value.clone(); sizes.right],
            }),
            StyleValue::PerSeries(list) => {
                if list.len() != sizes.total() {
                    // Blame the group that runs out (or overflows) first.
                    let err = if sizes.right == 0 || list.len() < sizes.left {
                        PlotError::ShapeMismatch {
                            option,
                            group: AxisGroup::Left,
                            expected: sizes.left,
                            found: list.len(),
                        }
                    } else {
                        PlotError::ShapeMismatch {
                            option,
                            group: AxisGroup::Right,
                            expected: sizes.right,
                            found: list.len() - sizes.left,
                        }
                    };
                    return Err(err);
                }
                let (left, right) = list.split_at(sizes.left);
                Ok(GroupTable { left: left.to_vec(), right: right.to_vec() })
            }
            StyleValue::PerGroup(left, right) => {
                check_len(option, AxisGroup::Left, sizes.left, left.len())?;
                check_len(option, AxisGroup::Right, sizes.right, right.len())?;
                Ok(GroupTable { left: left.clone(), right: right.clone() })
            }
        }
    }
}

/// Resolve an optional style value; an omitted option resolves to `None` for every series.
pub fn resolve_optional<T: Clone>(
    value: Option<&StyleValue<T>>,
    option: &'static str,
    sizes: GroupSizes,
) -> PlotResult<GroupTable<Option<T>>> {
    match value {
        None => Ok(GroupTable { left: vec![None; sizes.left], right: vec![None; sizes.right] }),
        Some(v) => Ok(v.resolve(option, sizes)?.map(Some)),
    }
}

/// Resolve an option with a fallback used when it is omitted.
pub fn resolve_or<T: Clone>(
    value: Option<&StyleValue<T>>,
    option: &'static str,
    sizes: GroupSizes,
    default: T,
) -> PlotResult<GroupTable<T>> {
    value.cloned().unwrap_or(StyleValue::Scalar(default)).resolve(option, sizes)
}

fn check_len(option: &'static str, group: AxisGroup, expected: usize, found: usize) -> PlotResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PlotError::ShapeMismatch { option, group, expected, found })
    }
}

/// An option that addresses the y-axes rather than the series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue<T> {
    /// Same value for the left and the right y-axis.
    Both(T),
    /// `(left, right)`.
    Split(T, T),
}

impl<T> From<T> for AxisValue<T> {
    fn from(value: T) -> Self {
        AxisValue::Both(value)
    }
}

impl<T: Clone> AxisValue<T> {
    pub fn left(&self) -> T {
        match self {
            AxisValue::Both(v) | AxisValue::Split(v, _) => v.clone(),
        }
    }

    pub fn right(&self) -> T {
        match self {
            AxisValue::Both(v) | AxisValue::Split(_, v) => v.clone(),
        }
    }

    pub fn get(&self, group: AxisGroup) -> T {
        match group {
            AxisGroup::Left => self.left(),
            AxisGroup::Right => self.right(),
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, AxisValue::Split(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_series_length_mismatch_blames_right_group() {
        let value = StyleValue::PerSeries(vec!["a", "b", "c", "d"]);
        let err = value.resolve("colors", GroupSizes::dual(2, 1)).unwrap_err();
        match err {
            PlotError::ShapeMismatch { option, group, expected, found } => {
                assert_eq!(option, "colors");
                assert_eq!(group, AxisGroup::Right);
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_per_series_list_blames_left_group() {
        let value = StyleValue::PerSeries(vec!["a"]);
        let err = value.resolve("markers", GroupSizes::dual(2, 1)).unwrap_err();
        assert!(matches!(
            err,
            PlotError::ShapeMismatch { group: AxisGroup::Left, expected: 2, found: 1, .. }
        ));
    }

    #[test]
    fn omitted_option_resolves_to_none_everywhere() {
        let table = resolve_optional::<&str>(None, "colors", GroupSizes::dual(1, 2)).unwrap();
        assert_eq!(table.left, vec![None]);
        assert_eq!(table.right, vec![None, None]);
    }
}
