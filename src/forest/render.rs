//! Text rendering of a forest.

use super::{GroupingSetForest, GroupingSetId};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// One line per grouping set, children indented under their parent:
///
/// ```text
/// #0 {'a', 'b'}
///   #1 {'a'}
/// #2 {'z'}
/// ```
impl<T: Eq + Hash + Debug> Display for GroupingSetForest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &root in self.root_ids() {
            self.fmt_subtree(f, root, 0)?;
        }
        Ok(())
    }
}

impl<T: Eq + Hash + Debug> GroupingSetForest<T> {
    fn fmt_subtree(
        &self,
        f: &mut fmt::Formatter<'_>,
        id: GroupingSetId,
        depth: usize,
    ) -> fmt::Result {
        let columns = self
            .grouping_set(id)
            .map(|set| set.describe())
            .unwrap_or_default();
        writeln!(f, "{:indent$}#{} {}", "", id, columns, indent = depth * 2)?;
        for child in self.children_of(id) {
            self.fmt_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}
