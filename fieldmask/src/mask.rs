//! The flat field mask and its set algebra.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use crate::descriptor::FieldRef;
use crate::error::MaskError;
use crate::message::Maskable;
use crate::text;
use crate::tree::PathTree;

/// A set of field paths selecting parts of a message.
///
/// Paths are dot-delimited `snake_case` strings such as
/// `"source_context.file_name"`. The list is kept exactly as built — use
/// [`canonical_form`](Self::canonical_form) to sort, deduplicate and collapse
/// paths covered by a coarser one.
///
/// ```
/// use fieldmask::FieldMask;
///
/// let mask = FieldMask::from("b,a.c,a");
/// assert_eq!(mask.canonical_form().to_string(), "a,b");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMask {
    /// The selected paths, in insertion order.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Creates an empty mask selecting nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mask from an iterator of paths, kept verbatim.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        FieldMask { paths: paths.into_iter().map(Into::into).collect() }
    }

    /// Builds a mask from typed field references, resolving each against
    /// `T`'s registry.
    pub fn from_fields<T: Maskable>(fields: &[FieldRef<T>]) -> Result<Self, MaskError> {
        let mut mask = FieldMask::new();
        for field in fields {
            mask.add_field(field)?;
        }
        Ok(mask)
    }

    /// The mask selecting every registered field of `T`, in canonical form.
    ///
    /// Nested imported paths collapse under their top-level field, so the
    /// result is one path per direct field.
    pub fn all<T: Maskable>() -> Self {
        FieldMask::from_paths(T::descriptor().paths()).canonical_form()
    }

    /// Whether the mask selects nothing.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Sorted, deduplicated form with subsumed paths collapsed.
    ///
    /// A path covered by a coarser one disappears: `"a,a.b"` canonicalizes
    /// to `"a"`. Idempotent.
    pub fn canonical_form(&self) -> FieldMask {
        PathTree::from_mask(self).to_mask()
    }

    /// The mask selecting everything either mask selects, canonicalized.
    pub fn union(&self, other: &FieldMask) -> FieldMask {
        let mut tree = PathTree::from_mask(self);
        tree.insert_mask(other);
        tree.to_mask()
    }

    /// The mask selecting exactly what both masks select, canonicalized.
    ///
    /// Overlap keeps the finer granularity: intersecting `"a"` with `"a.b"`
    /// yields `"a.b"`.
    pub fn intersect(&self, other: &FieldMask) -> FieldMask {
        let tree = PathTree::from_mask(other);
        let mut result = PathTree::new();
        for path in &self.paths {
            result += &tree.intersect_path(path);
        }
        result.to_mask()
    }

    /// Removes `other`'s coverage from this mask, canonicalized.
    ///
    /// Paths in `other` that are not registered fields of `T` are ignored,
    /// as are paths this mask only covers through a coarser selection. An
    /// empty base mask stays empty.
    pub fn subtract<T: Maskable>(&self, other: &FieldMask) -> FieldMask {
        if self.paths.is_empty() {
            return FieldMask::new();
        }
        let mut tree = PathTree::from_mask(self);
        for path in &other.paths {
            tree.remove::<T>(path);
        }
        tree.to_mask()
    }

    /// Whether every path of this mask is a registered field of `T`.
    pub fn is_valid<T: Maskable>(&self) -> bool {
        self.paths.iter().all(|path| T::is_valid_path(path))
    }

    /// Whether the mask covers `query`: some mask path equals it or is a
    /// `.`-boundary ancestor of it.
    pub fn covers_path(&self, query: &str) -> bool {
        self.paths.iter().any(|path| {
            query == path
                || query
                    .strip_prefix(path.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// [`covers_path`](Self::covers_path) for a typed field reference,
    /// resolving it against `T`'s registry first.
    pub fn covers_field<T: Maskable>(&self, field: &FieldRef<T>) -> Result<bool, MaskError> {
        let path = T::descriptor().path_of(field)?;
        Ok(self.covers_path(path))
    }

    /// Exact path membership, without the ancestor logic of
    /// [`covers_path`](Self::covers_path).
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|candidate| candidate == path)
    }

    /// Projects the mask into the subtree named by a single-segment `prefix`.
    ///
    /// Keeps exactly the paths whose first segment equals `prefix`, with
    /// that segment stripped. An exact match has nothing left under it and
    /// is dropped, as is every unrelated path.
    pub fn stripping(&self, prefix: &str) -> FieldMask {
        // TODO: support dotted prefixes.
        debug_assert!(!prefix.contains('.'));
        let mut projected = FieldMask::new();
        for path in &self.paths {
            if let Some((first, rest)) = path.split_once('.')
                && first == prefix
            {
                projected.paths.push(rest.to_owned());
            }
        }
        projected
    }

    /// [`stripping`](Self::stripping) for a typed field reference.
    pub fn stripping_field<T: Maskable>(&self, root: &FieldRef<T>) -> Result<FieldMask, MaskError> {
        let path = T::descriptor().path_of(root)?;
        Ok(self.stripping(path))
    }

    /// Adds a path after validating it against `T`'s registry.
    ///
    /// Returns whether the selected set changed; a path the mask already
    /// covers is not appended again.
    pub fn add_path<T: Maskable>(&mut self, path: &str) -> Result<bool, MaskError> {
        if !T::is_valid_path(path) {
            return Err(MaskError::PathNotFound { path: path.to_owned() });
        }
        if self.covers_path(path) {
            return Ok(false);
        }
        self.paths.push(path.to_owned());
        Ok(true)
    }

    /// Adds a typed field reference, resolving it against `T`'s registry.
    ///
    /// Returns whether the selected set changed.
    pub fn add_field<T: Maskable>(&mut self, field: &FieldRef<T>) -> Result<bool, MaskError> {
        let path = T::descriptor().path_of(field)?;
        if self.covers_path(path) {
            return Ok(false);
        }
        self.paths.push(path.to_owned());
        Ok(true)
    }

    /// Renders the transport form: each path converted to `camelCase`,
    /// joined by `,`.
    pub fn to_wire(&self) -> Result<String, MaskError> {
        let mut wire = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            wire.push(text::snake_to_camel(path)?);
        }
        Ok(wire.join(","))
    }

    /// Parses the transport form: splits on `,`, discards empty segments,
    /// and converts each path back to `snake_case`.
    pub fn from_wire(wire: &str) -> Result<FieldMask, MaskError> {
        let mut mask = FieldMask::new();
        for segment in wire.split(',').filter(|segment| !segment.is_empty()) {
            mask.paths.push(text::camel_to_snake(segment)?);
        }
        Ok(mask)
    }
}

impl fmt::Display for FieldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.paths.join(","))
    }
}

impl From<&str> for FieldMask {
    fn from(text: &str) -> Self {
        FieldMask {
            paths: text
                .split(',')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl FromStr for FieldMask {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(FieldMask::from(text))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MaskVisitor;

        impl serde::de::Visitor<'_> for MaskVisitor {
            type Value = FieldMask;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a comma-joined field mask string")
            }

            fn visit_str<E>(self, value: &str) -> Result<FieldMask, E>
            where
                E: serde::de::Error,
            {
                Ok(FieldMask::from(value))
            }
        }

        deserializer.deserialize_str(MaskVisitor)
    }
}
