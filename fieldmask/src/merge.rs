/// Options controlling how masked fields are merged.
///
/// The defaults deep-merge message fields and append repeated fields, the
/// behavior update-style APIs expect. Scalar fields always overwrite
/// regardless of options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeOptions {
    /// Overwrite message fields wholesale instead of deep-merging the source
    /// message into the destination's existing value.
    pub replace_message_fields: bool,
    /// Overwrite repeated fields instead of appending the source elements to
    /// the destination's existing elements.
    pub replace_repeated_fields: bool,
}
