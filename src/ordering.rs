//! Display Ordering
//!
//! Entities sort by `orderIndex` ascending; rows without one go last and
//! keep their relative order.

use crate::models::{Award, Certification, Project};

pub trait Ordered {
    fn order_index(&self) -> Option<i32>;
}

impl Ordered for Project {
    fn order_index(&self) -> Option<i32> {
        self.order_index
    }
}

impl Ordered for Certification {
    fn order_index(&self) -> Option<i32> {
        self.order_index
    }
}

impl Ordered for Award {
    fn order_index(&self) -> Option<i32> {
        self.order_index
    }
}

/// Stable in-place sort, missing indexes last.
pub fn sort_by_order<T: Ordered>(items: &mut [T]) {
    items.sort_by_key(|item| {
        let index = item.order_index();
        (index.is_none(), index)
    });
}

pub fn sorted_by_order<T: Ordered + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sort_by_order(&mut sorted);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, Option<i32>);

    impl Ordered for Row {
        fn order_index(&self) -> Option<i32> {
            self.1
        }
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.0).collect()
    }

    #[test]
    fn test_ascending_with_missing_last() {
        let rows = vec![Row("c", None), Row("b", Some(2)), Row("a", Some(1)), Row("d", Some(-3))];
        assert_eq!(names(&sorted_by_order(&rows)), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let rows = vec![
            Row("x1", None),
            Row("y1", Some(5)),
            Row("x2", None),
            Row("y2", Some(5)),
            Row("large", Some(1000)),
        ];
        assert_eq!(names(&sorted_by_order(&rows)), vec!["y1", "y2", "large", "x1", "x2"]);
    }

    #[test]
    fn test_projects_non_decreasing() {
        let mut projects = crate::data::projects();
        projects.reverse();
        sort_by_order(&mut projects);
        let keys: Vec<_> = projects.iter().map(|p| p.order_index).collect();
        assert!(keys.windows(2).all(|w| match (w[0], w[1]) {
            (Some(a), Some(b)) => a <= b,
            (Some(_), None) | (None, None) => true,
            (None, Some(_)) => false,
        }));
    }
}
