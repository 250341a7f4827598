//! The hierarchical form of a field mask.
//!
//! A [`PathTree`] stores every selected path as a chain of segment nodes, with
//! the invariant that a leaf selects its whole subtree. That single invariant
//! is what the mask algorithms in [`FieldMask`] lean on: canonicalization is
//! "build the tree, read the leaves back", union is repeated insertion, and
//! merge is a recursive walk that pairs each node with a registered field
//! descriptor.
//!
//! [`FieldMask`]: crate::FieldMask

use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use crate::error::MaskError;
use crate::mask::FieldMask;
use crate::merge::MergeOptions;
use crate::message::Maskable;
use crate::value::FieldValue;

/// Splits a path on `.`, discarding empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Node {
    children: BTreeMap<String, Node>,
}

/// A field mask in tree form.
///
/// Leaves mark selected paths; a leaf subsumes everything beneath it, so
/// inserting `"a.b"` into a tree that already holds the leaf `"a"` changes
/// nothing. The tree is plain owned data: mask algorithms build one, use it,
/// and drop it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathTree {
    root: Node,
}

impl PathTree {
    /// Creates an empty tree, equivalent to the empty mask.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from every path of `mask`.
    ///
    /// Duplicate and subsumed paths collapse, so reading the leaves back out
    /// with [`to_mask`](Self::to_mask) yields the canonical form.
    pub fn from_mask(mask: &FieldMask) -> Self {
        let mut tree = PathTree::new();
        tree.insert_mask(mask);
        tree
    }

    /// Reads the tree back out as a mask with sorted paths.
    pub fn to_mask(&self) -> FieldMask {
        FieldMask { paths: self.paths() }
    }

    /// Whether no paths are selected.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Inserts one path, returning whether the selected-path set changed.
    ///
    /// A path already covered by an existing leaf is a no-op. Inserting a
    /// path coarser than existing selections deletes the finer descendants,
    /// leaving the new leaf to cover them. The empty path selects nothing.
    pub fn insert(&mut self, path: &str) -> bool {
        let parts: Vec<&str> = segments(path).collect();
        if parts.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        let mut is_root = true;
        let mut new_branch = false;
        for part in parts {
            if !new_branch && !is_root && node.children.is_empty() {
                trace!("insert {path:?}: already covered by a coarser leaf");
                return false;
            }
            is_root = false;
            if !node.children.contains_key(part) {
                new_branch = true;
            }
            node = node.children.entry(part.to_owned()).or_default();
        }
        if !node.children.is_empty() {
            trace!("insert {path:?}: subsumes finer selections");
            node.children.clear();
            return true;
        }
        new_branch
    }

    /// Inserts every path of `mask`.
    pub fn insert_mask(&mut self, mask: &FieldMask) {
        for path in &mask.paths {
            self.insert(path);
        }
    }

    /// Removes the node selected by `path`, along with its subtree.
    ///
    /// A path that is not a registered field of `T` is ignored, as is one
    /// with no exact or deeper match in the tree. Coverage implied by a
    /// coarser leaf is left untouched: removing `"a.b"` from the tree `{a}`
    /// changes nothing.
    pub fn remove<T: Maskable>(&mut self, path: &str) {
        if !T::is_valid_path(path) {
            trace!("remove {path:?}: not a field of {}", T::FULL_NAME);
            return;
        }
        let parts: Vec<&str> = segments(path).collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for part in ancestors {
            match node.children.get_mut(*part) {
                Some(child) => node = child,
                // Nothing at this depth, so the path is already not present.
                None => return,
            }
        }
        node.children.remove(*last);
    }

    /// Intersects a single path against this tree.
    ///
    /// Walking off a leaf means the tree covers `path` via a coarser
    /// selection, so the whole path lands in the result. Walking the path to
    /// its end keeps the finer selections below that point. A failed segment
    /// lookup means no overlap.
    pub fn intersect_path(&self, path: &str) -> PathTree {
        let mut result = PathTree::new();
        let mut parts = segments(path).peekable();
        if parts.peek().is_none() {
            return result;
        }
        let mut node = &self.root;
        let mut is_root = true;
        for part in parts {
            if node.children.is_empty() {
                if !is_root {
                    result.insert(path);
                }
                return result;
            }
            is_root = false;
            match node.children.get(part) {
                Some(child) => node = child,
                None => return result,
            }
        }
        collect_suffixes(path, node, &mut result);
        result
    }

    /// Whether `path` or a strict ancestor of it is a leaf of this tree.
    pub fn covers(&self, path: &str) -> bool {
        let mut parts = segments(path).peekable();
        if parts.peek().is_none() {
            return false;
        }
        let mut node = &self.root;
        let mut is_root = true;
        for part in parts {
            if !is_root && node.children.is_empty() {
                return true;
            }
            is_root = false;
            match node.children.get(part) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.children.is_empty()
    }

    /// Enumerates the selected paths in lexicographic order.
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaves("", &self.root, &mut paths);
        paths.sort();
        paths
    }

    /// Merges the selected fields of `source` into `destination`.
    ///
    /// Each leaf resolves to a field descriptor of `T` and copies that field;
    /// scalar leaves always overwrite, while message and repeated leaves
    /// follow `options`. An internal node descends into a singular message
    /// field. Paths that do not resolve on `T`, and sub-paths under anything
    /// other than a singular message field, are skipped.
    pub fn merge_message<T: Maskable>(
        &self,
        source: &T,
        destination: &mut T,
        options: &MergeOptions,
    ) -> Result<(), MaskError> {
        if self.root.children.is_empty() {
            return Ok(());
        }
        merge_node(&self.root, "", source, destination, options)
    }
}

fn collect_leaves(prefix: &str, node: &Node, paths: &mut Vec<String>) {
    for (name, child) in &node.children {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        if child.children.is_empty() {
            paths.push(path);
        } else {
            collect_leaves(&path, child, paths);
        }
    }
}

fn collect_suffixes(prefix: &str, node: &Node, result: &mut PathTree) {
    if node.children.is_empty() {
        result.insert(prefix);
        return;
    }
    for (name, child) in &node.children {
        collect_suffixes(&format!("{prefix}.{name}"), child, result);
    }
}

fn merge_node<T: Maskable>(
    node: &Node,
    prefix: &str,
    source: &T,
    destination: &mut T,
    options: &MergeOptions,
) -> Result<(), MaskError> {
    for (name, child) in &node.children {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        let Some(field) = T::descriptor().field(&path) else {
            debug!("merge: {path:?} is not a field of {}, skipping", T::FULL_NAME);
            continue;
        };

        if !child.children.is_empty() {
            // Sub-paths are only addressable under singular message fields.
            if field.is_repeated() || !field.is_message() {
                debug!("merge: {path:?} is not a singular message field, skipping sub-paths");
                continue;
            }
            merge_node(child, &path, source, destination, options)?;
            continue;
        }

        if field.is_repeated() {
            if options.replace_repeated_fields {
                field.write(destination, field.read(source))?;
            } else {
                match (field.read(destination), field.read(source)) {
                    (FieldValue::Repeated(mut items), FieldValue::Repeated(incoming)) => {
                        items.extend(incoming);
                        field.write(destination, FieldValue::Repeated(items))?;
                    }
                    _ => return Err(MaskError::RepeatedExpected { path }),
                }
            }
        } else if field.is_message() {
            if options.replace_message_fields {
                field.write(destination, field.read(source))?;
            } else {
                match (field.read(destination), field.read(source)) {
                    (FieldValue::Message(mut current), FieldValue::Message(incoming)) => {
                        current.merge_message_from(incoming.as_ref(), &MergeOptions::default())?;
                        field.write(destination, FieldValue::Message(current))?;
                    }
                    _ => return Err(MaskError::MessageExpected { path }),
                }
            }
        } else {
            field.write(destination, field.read(source))?;
        }
    }
    Ok(())
}

impl AddAssign<&PathTree> for PathTree {
    fn add_assign(&mut self, rhs: &PathTree) {
        for path in rhs.paths() {
            self.insert(&path);
        }
    }
}

impl Add<&PathTree> for PathTree {
    type Output = PathTree;

    fn add(mut self, rhs: &PathTree) -> PathTree {
        self += rhs;
        self
    }
}
