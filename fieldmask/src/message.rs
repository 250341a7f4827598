use core::any::Any;
use core::fmt;

use crate::descriptor::MessageDescriptor;
use crate::error::MaskError;
use crate::mask::FieldMask;
use crate::merge::MergeOptions;
use crate::tree::PathTree;
use crate::trim::TrimOptions;

/// A message type with a field descriptor registry.
///
/// Implementations are normally emitted by a schema generator: a static table
/// built with [`DescriptorBuilder`] plus this trait pointing at it. The
/// [`known`] module contains hand-written examples in exactly that shape.
///
/// [`DescriptorBuilder`]: crate::DescriptorBuilder
/// [`known`]: crate::known
pub trait Maskable: Sized + 'static {
    /// Fully qualified message name, e.g. `"google.protobuf.Type"`.
    const FULL_NAME: &'static str;

    /// The type's descriptor table, built once and shared thereafter.
    fn descriptor() -> &'static MessageDescriptor<Self>;

    /// Whether `path` addresses a registered field of this type.
    fn is_valid_path(path: &str) -> bool {
        Self::descriptor().is_valid_path(path)
    }
}

/// Object-safe erasure of a registered message value.
///
/// Message-typed fields store their values as `Box<dyn Message>` inside
/// [`FieldValue`], so the merge driver can clone, compare and deep-merge them
/// without knowing the concrete type. Every `Maskable` type that is also
/// `Clone + PartialEq + Debug + Send` gets this for free through the blanket
/// implementation.
///
/// [`FieldValue`]: crate::FieldValue
pub trait Message: Any + fmt::Debug + Send {
    /// The concrete type's registered full name.
    fn message_name(&self) -> &'static str;

    /// Clone into a fresh box.
    fn boxed_clone(&self) -> Box<dyn Message>;

    /// Equality across the erasure; `false` when the concrete types differ.
    fn message_eq(&self, other: &dyn Message) -> bool;

    /// Merge every registered field of `source` into `self`.
    ///
    /// Fails with [`MaskError::MergeTypeMismatch`] when `source`'s concrete
    /// type differs from `self`'s.
    fn merge_message_from(
        &mut self,
        source: &dyn Message,
        options: &MergeOptions,
    ) -> Result<(), MaskError>;

    /// Borrow as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Mutably borrow as [`Any`] for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Convert the box for by-value downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> Message for T
where
    T: Maskable + Clone + PartialEq + fmt::Debug + Send,
{
    fn message_name(&self) -> &'static str {
        T::FULL_NAME
    }

    fn boxed_clone(&self) -> Box<dyn Message> {
        Box::new(self.clone())
    }

    fn message_eq(&self, other: &dyn Message) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn merge_message_from(
        &mut self,
        source: &dyn Message,
        options: &MergeOptions,
    ) -> Result<(), MaskError> {
        let Some(source) = source.as_any().downcast_ref::<T>() else {
            return Err(MaskError::MergeTypeMismatch {
                expected: T::FULL_NAME,
                actual: source.message_name(),
            });
        };
        let tree = PathTree::from_mask(&FieldMask::all::<T>());
        tree.merge_message(source, self, options)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Mask-driven merge and trim, available on every registered message type
/// that is also `Clone + PartialEq`.
pub trait MaskedMessage: Maskable + Clone + PartialEq {
    /// Merge the masked fields of `source` into `self`.
    ///
    /// Scalar leaves overwrite; message and repeated leaves follow `options`
    /// (deep-merge and append by default). Mask paths that do not resolve on
    /// this type are skipped, matching mask semantics across schema versions —
    /// validate with [`FieldMask::is_valid`] first when strictness is wanted.
    fn merge_from(
        &mut self,
        source: &Self,
        mask: &FieldMask,
        options: &MergeOptions,
    ) -> Result<(), MaskError> {
        let tree = PathTree::from_mask(mask);
        tree.merge_message(source, self, options)
    }

    /// Merge every registered field of `source` into `self` with default
    /// options.
    fn merge_all_from(&mut self, source: &Self) -> Result<(), MaskError> {
        self.merge_from(source, &FieldMask::all::<Self>(), &MergeOptions::default())
    }

    /// Copying form of [`merge_from`], leaving `self` untouched.
    ///
    /// [`merge_from`]: Self::merge_from
    fn merging(
        &self,
        source: &Self,
        mask: &FieldMask,
        options: &MergeOptions,
    ) -> Result<Self, MaskError> {
        let mut merged = self.clone();
        merged.merge_from(source, mask, options)?;
        Ok(merged)
    }

    /// Clear each masked field back to its type's zero value.
    ///
    /// Clears exactly the masked paths — callers wanting "keep only the
    /// masked fields" subtract the mask from [`FieldMask::all`] and trim with
    /// that instead. Returns whether the message changed. Fails with
    /// [`MaskError::PathNotFound`] on the first path not registered on this
    /// type.
    fn trim(&mut self, mask: &FieldMask, options: &TrimOptions) -> Result<bool, MaskError> {
        let original = self.clone();
        for path in &mask.paths {
            let Some(field) = Self::descriptor().field(path) else {
                return Err(MaskError::PathNotFound { path: path.clone() });
            };
            if options.keep_required_fields && field.is_required() {
                continue;
            }
            field.clear(self)?;
        }
        Ok(*self != original)
    }

    /// Copying form of [`trim`], leaving `self` untouched.
    ///
    /// [`trim`]: Self::trim
    fn trimmed(&self, mask: &FieldMask, options: &TrimOptions) -> Result<Self, MaskError> {
        let mut trimmed = self.clone();
        trimmed.trim(mask, options)?;
        Ok(trimmed)
    }
}

impl<T: Maskable + Clone + PartialEq> MaskedMessage for T {}
