use core::fmt;
use core::marker::PhantomData;

use indexmap::IndexMap;

use crate::error::MaskError;
use crate::message::Maskable;
use crate::value::{FieldType, FieldValue};

type Getter<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;
type Setter<T> = Box<dyn Fn(&mut T, FieldValue) -> Result<(), MaskError> + Send + Sync>;
type ZeroFn = Box<dyn Fn() -> FieldValue + Send + Sync>;

/// One addressable field path of a message type.
///
/// The path is fully qualified relative to the owning type's root — a deep
/// entry like `"source_context.file_name"` is a first-class row whose
/// accessors reach through the intermediate message, so the merge driver never
/// re-derives nested paths at runtime.
pub struct FieldDescriptor<T> {
    path: String,
    get: Getter<T>,
    set: Setter<T>,
    zero: ZeroFn,
    repeated: bool,
    message: bool,
    required: bool,
    nested_type: Option<&'static str>,
}

impl<T> FieldDescriptor<T> {
    /// The dotted path of this field relative to the owning type.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the field holds a sequence of values.
    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    /// Whether the field's value is itself a message.
    pub fn is_message(&self) -> bool {
        self.message
    }

    /// Whether the field was marked required at registration.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Full name of the nested message type, present iff [`is_message`] holds.
    ///
    /// [`is_message`]: Self::is_message
    pub fn nested_type(&self) -> Option<&'static str> {
        self.nested_type
    }

    /// Read the field's current value out of `message`.
    pub fn read(&self, message: &T) -> FieldValue {
        (self.get)(message)
    }

    /// Write `value` into the field, failing when the value's kind does not
    /// match the type the field was registered with.
    pub fn write(&self, message: &mut T, value: FieldValue) -> Result<(), MaskError> {
        (self.set)(message, value)
    }

    /// The zero value of this field's type.
    pub fn zero_value(&self) -> FieldValue {
        (self.zero)()
    }

    /// Reset the field to its zero value.
    pub fn clear(&self, message: &mut T) -> Result<(), MaskError> {
        self.write(message, self.zero_value())
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("path", &self.path)
            .field("repeated", &self.repeated)
            .field("message", &self.message)
            .field("required", &self.required)
            .field("nested_type", &self.nested_type)
            .finish_non_exhaustive()
    }
}

/// A typed reference to one field of `T`.
///
/// Generated code exports these as constants next to the descriptor table
/// (see the constants in [`known`]). The reference carries the field's
/// position in the table together with its path; [`MessageDescriptor::path_of`]
/// validates both before trusting it, so a stale constant surfaces as
/// [`MaskError::FieldNotFound`] instead of resolving to the wrong field.
///
/// [`known`]: crate::known
pub struct FieldRef<T> {
    index: u32,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FieldRef<T> {
    /// A reference to the field at `index` in `T`'s table, registered as `path`.
    pub const fn new(index: u32, path: &'static str) -> Self {
        Self {
            index,
            path,
            _marker: PhantomData,
        }
    }

    /// Position of the referenced field in the descriptor table.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// The path the referenced field was registered under.
    pub const fn path(&self) -> &'static str {
        self.path
    }
}

impl<T> Clone for FieldRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldRef<T> {}

impl<T> PartialEq for FieldRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.path == other.path
    }
}

impl<T> Eq for FieldRef<T> {}

impl<T> fmt::Debug for FieldRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRef")
            .field("index", &self.index)
            .field("path", &self.path)
            .finish()
    }
}

/// The immutable field registry of one message type.
///
/// Built once per type behind a `LazyLock` and consulted read-only from then
/// on; lookups by path and by typed reference work bidirectionally. Entries
/// keep their registration order, which generated tables use to line field
/// positions up with exported [`FieldRef`] constants.
pub struct MessageDescriptor<T> {
    full_name: &'static str,
    fields: IndexMap<String, FieldDescriptor<T>>,
}

impl<T> MessageDescriptor<T> {
    /// Fully qualified name of the described message type.
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Look up a field by its dotted path.
    pub fn field(&self, path: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.get(path)
    }

    /// Whether `path` is registered on this type.
    pub fn is_valid_path(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    /// Resolve a typed field reference back to its path, validating that the
    /// reference still matches the table.
    pub fn path_of(&self, field: &FieldRef<T>) -> Result<&str, MaskError> {
        match self.fields.get_index(field.index() as usize) {
            Some((path, _)) if path == field.path() => Ok(path.as_str()),
            _ => Err(MaskError::FieldNotFound {
                path: field.path().to_string(),
            }),
        }
    }

    /// All field descriptors, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.values()
    }

    /// All registered paths, in registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of registered paths, deep entries included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the type has no addressable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for MessageDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.full_name)
            .field("paths", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builds the descriptor table of a message type.
///
/// Each registrar takes the field's path plus a getter/setter pair; the zero
/// value and the erased conversions come from the field type's [`FieldType`]
/// implementation. Registration order is preserved in the finished table.
///
/// Registering the same path twice is a programming error: [`build`] panics
/// rather than letting mask operations observe an ambiguous table.
///
/// [`build`]: Self::build
pub struct DescriptorBuilder<T> {
    full_name: &'static str,
    entries: Vec<FieldDescriptor<T>>,
}

impl<T: Maskable> DescriptorBuilder<T> {
    /// Start a table for `T`, named by [`Maskable::FULL_NAME`].
    pub fn new() -> Self {
        Self {
            full_name: T::FULL_NAME,
            entries: Vec::new(),
        }
    }

    fn entry<V: FieldType>(
        mut self,
        path: String,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
        repeated: bool,
        message: bool,
        nested_type: Option<&'static str>,
    ) -> Self {
        let error_path = path.clone();
        self.entries.push(FieldDescriptor {
            path,
            get: Box::new(move |msg| get(msg).into_value()),
            set: Box::new(move |msg, value| match V::from_value(value) {
                Some(v) => {
                    set(msg, v);
                    Ok(())
                }
                None => Err(MaskError::TypeMismatch {
                    path: error_path.clone(),
                    expected: V::EXPECTED,
                }),
            }),
            zero: Box::new(|| V::zero().into_value()),
            repeated,
            message,
            required: false,
            nested_type,
        });
        self
    }

    /// Register a singular non-message field.
    pub fn scalar<V: FieldType>(
        self,
        path: &'static str,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        self.entry(path.to_string(), get, set, false, false, None)
    }

    /// Register a singular message field.
    pub fn message<M: Maskable + FieldType>(
        self,
        path: &'static str,
        get: impl Fn(&T) -> M + Send + Sync + 'static,
        set: impl Fn(&mut T, M) + Send + Sync + 'static,
    ) -> Self {
        self.entry(path.to_string(), get, set, false, true, Some(M::FULL_NAME))
    }

    /// Register a repeated non-message field.
    pub fn repeated_scalar<V: FieldType>(
        self,
        path: &'static str,
        get: impl Fn(&T) -> Vec<V> + Send + Sync + 'static,
        set: impl Fn(&mut T, Vec<V>) + Send + Sync + 'static,
    ) -> Self {
        self.entry(path.to_string(), get, set, true, false, None)
    }

    /// Register a repeated message field.
    pub fn repeated_message<M: Maskable + FieldType>(
        self,
        path: &'static str,
        get: impl Fn(&T) -> Vec<M> + Send + Sync + 'static,
        set: impl Fn(&mut T, Vec<M>) + Send + Sync + 'static,
    ) -> Self {
        self.entry(path.to_string(), get, set, true, true, Some(M::FULL_NAME))
    }

    /// Mark the most recently registered field as required.
    pub fn required(mut self) -> Self {
        debug_assert!(
            !self.entries.is_empty(),
            "required() must follow a field registration"
        );
        if let Some(last) = self.entries.last_mut() {
            last.required = true;
        }
        self
    }

    /// Import every entry of a nested message type's table, re-prefixed with
    /// `field`, exposing the nested type's paths as first-class entries here.
    ///
    /// This is the call generated tables make for each singular message
    /// field; the nested type's table must already include its own deep
    /// entries, so imports compose transitively.
    pub fn import_nested<M: Maskable>(
        mut self,
        field: &'static str,
        get: fn(&T) -> &M,
        get_mut: fn(&mut T) -> &mut M,
    ) -> Self {
        for sub in M::descriptor().fields() {
            let path = format!("{field}.{}", sub.path());
            self.entries.push(FieldDescriptor {
                path,
                get: Box::new(move |msg| sub.read(get(msg))),
                set: Box::new(move |msg, value| sub.write(get_mut(msg), value)),
                zero: Box::new(move || sub.zero_value()),
                repeated: sub.is_repeated(),
                message: sub.is_message(),
                required: sub.is_required(),
                nested_type: sub.nested_type(),
            });
        }
        self
    }

    /// Finish the table.
    ///
    /// # Panics
    ///
    /// Panics when two entries share a path.
    pub fn build(self) -> MessageDescriptor<T> {
        let DescriptorBuilder { full_name, entries } = self;
        let mut fields = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let path = entry.path.clone();
            if fields.insert(path.clone(), entry).is_some() {
                panic!("duplicate field path {path:?} registered on {full_name}");
            }
        }
        MessageDescriptor { full_name, fields }
    }
}

impl<T: Maskable> Default for DescriptorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
