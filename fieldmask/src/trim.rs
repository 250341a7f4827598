/// Options controlling how masked fields are trimmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrimOptions {
    /// Leave fields marked required in the registry untouched instead of
    /// clearing them.
    pub keep_required_fields: bool,
}
