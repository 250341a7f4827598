//! `google.protobuf.FieldMask` registered as a message in its own right.
//!
//! Masks are ordinary messages too, so they can be merged and trimmed by
//! other masks.

use std::sync::LazyLock;

use crate::message_field_type;
use crate::{DescriptorBuilder, FieldMask, FieldRef, Maskable, MessageDescriptor};

static FIELD_MASK: LazyLock<MessageDescriptor<FieldMask>> = LazyLock::new(|| {
    DescriptorBuilder::new()
        .repeated_scalar(
            "paths",
            |m: &FieldMask| m.paths.clone(),
            |m: &mut FieldMask, v| m.paths = v,
        )
        .build()
});

impl Maskable for FieldMask {
    const FULL_NAME: &'static str = "google.protobuf.FieldMask";

    fn descriptor() -> &'static MessageDescriptor<Self> {
        &FIELD_MASK
    }
}

message_field_type!(FieldMask);

/// Typed references to [`FieldMask`]'s fields.
pub mod field_mask_fields {
    use super::{FieldMask, FieldRef};

    /// `paths`
    pub const PATHS: FieldRef<FieldMask> = FieldRef::new(0, "paths");
}
