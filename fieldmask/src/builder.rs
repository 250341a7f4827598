//! Incremental, registry-validated mask construction.

use core::fmt;
use core::marker::PhantomData;

use crate::descriptor::FieldRef;
use crate::error::MaskError;
use crate::mask::FieldMask;
use crate::message::Maskable;
use crate::tree::PathTree;

/// Builds a [`FieldMask`] for `T` one validated path at a time.
///
/// Every addition checks `T`'s registry, so an unknown path fails at the
/// point it is added rather than when the mask is eventually used.
/// Duplicates and overlapping selections collapse as they would in the
/// canonical form.
///
/// ```
/// use fieldmask::MaskBuilder;
/// use fieldmask::known::Type;
///
/// let mask = MaskBuilder::<Type>::new()
///     .path("name")?
///     .path("source_context.file_name")?
///     .path("name")?
///     .build();
/// assert_eq!(mask.to_string(), "name,source_context.file_name");
/// # Ok::<(), fieldmask::MaskError>(())
/// ```
pub struct MaskBuilder<T: Maskable> {
    tree: PathTree,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Maskable> MaskBuilder<T> {
    /// Starts with an empty selection.
    pub fn new() -> Self {
        MaskBuilder { tree: PathTree::new(), _marker: PhantomData }
    }

    /// Adds one path, failing with [`MaskError::PathNotFound`] when it is
    /// not a registered field of `T`.
    pub fn path(mut self, path: &str) -> Result<Self, MaskError> {
        if !T::is_valid_path(path) {
            return Err(MaskError::PathNotFound { path: path.to_owned() });
        }
        self.tree.insert(path);
        Ok(self)
    }

    /// Adds one typed field reference.
    pub fn field(mut self, field: &FieldRef<T>) -> Result<Self, MaskError> {
        let path = T::descriptor().path_of(field)?;
        self.tree.insert(path);
        Ok(self)
    }

    /// Adds every path from an iterator, stopping at the first invalid one.
    pub fn paths<'a, I>(mut self, paths: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for path in paths {
            self = self.path(path)?;
        }
        Ok(self)
    }

    /// Adds every field reference from an iterator.
    pub fn fields<'a, I>(mut self, fields: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = &'a FieldRef<T>>,
    {
        for field in fields {
            self = self.field(field)?;
        }
        Ok(self)
    }

    /// Finishes the mask in canonical form.
    pub fn build(self) -> FieldMask {
        self.tree.to_mask()
    }
}

impl<T: Maskable> Default for MaskBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Maskable> fmt::Debug for MaskBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskBuilder").field("tree", &self.tree).finish()
    }
}
