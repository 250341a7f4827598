#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;
#[allow(unused_imports)]
pub(crate) use trace;

mod builder;
mod descriptor;
mod error;
mod mask;
mod merge;
mod message;
mod text;
mod tree;
mod trim;
mod value;

pub mod known;

pub use builder::MaskBuilder;
pub use descriptor::{DescriptorBuilder, FieldDescriptor, FieldRef, MessageDescriptor};
pub use error::MaskError;
pub use mask::FieldMask;
pub use merge::MergeOptions;
pub use message::{Maskable, MaskedMessage, Message};
pub use tree::PathTree;
pub use trim::TrimOptions;
pub use value::{FieldType, FieldValue};
