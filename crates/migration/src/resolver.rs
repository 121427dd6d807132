//! Converter resolution
//!
//! The host application decides which upgrades an object needs. It hands the
//! pipeline a [`ConverterResolver`]: given the version an object was last
//! written at, return the ordered chain of converters to run.
//!
//! [`ConverterRegistry`] is a ready-made resolver keyed by version ranges.

use crate::converter::{Converter, ConverterChain};
use modelshift_core::Version;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Maps a detected version to the converters that must run
///
/// Implemented for every `Fn(&Version) -> ConverterChain<O>`.
pub trait ConverterResolver<O: ?Sized> {
    /// Ordered converters for objects last written at `version`
    fn resolve(&self, version: &Version) -> ConverterChain<O>;
}

impl<O: ?Sized, F> ConverterResolver<O> for F
where
    F: Fn(&Version) -> ConverterChain<O>,
{
    fn resolve(&self, version: &Version) -> ConverterChain<O> {
        self(version)
    }
}

/// Set of versions a registered converter applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VersionRange {
    /// Every version, including unknown
    Any,
    /// Only unversioned objects
    Unknown,
    /// Versions strictly older than the bound, including unknown
    Below(Version),
    /// Concrete versions in `[from, until)`
    Between {
        /// Inclusive lower bound
        from: Version,
        /// Exclusive upper bound
        until: Version,
    },
    /// Exactly one version
    Exactly(Version),
}

impl VersionRange {
    /// Check whether `version` falls in this range
    pub fn contains(&self, version: &Version) -> bool {
        match self {
            VersionRange::Any => true,
            VersionRange::Unknown => version.is_unknown(),
            VersionRange::Below(bound) => version < bound,
            VersionRange::Between { from, until } => {
                !version.is_unknown() && version >= from && version < until
            }
            VersionRange::Exactly(v) => version == v,
        }
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRange::Any => write!(f, "*"),
            VersionRange::Unknown => write!(f, "unknown"),
            VersionRange::Below(bound) => write!(f, "<{}", bound),
            VersionRange::Between { from, until } => write!(f, ">={}, <{}", from, until),
            VersionRange::Exactly(v) => write!(f, "={}", v),
        }
    }
}

struct RegisteredConverter<O: ?Sized> {
    range: VersionRange,
    converter: Arc<dyn Converter<O>>,
}

/// Converters keyed by version range
///
/// Resolution returns every converter whose range contains the version, in
/// registration order. Register upgrades oldest-first.
///
/// # Example
///
/// ```
/// use modelshift_core::{ModelObject, Version};
/// use modelshift_migration::{ConverterRegistry, ConverterResolver, VersionRange};
///
/// let mut registry = ConverterRegistry::<()>::new();
/// registry.register(
///     VersionRange::Below(Version::new(2, 0, 0)),
///     |o: ModelObject, _: &()| Some(o),
/// );
///
/// assert_eq!(registry.resolve(&Version::new(1, 0, 0)).len(), 1);
/// assert!(registry.resolve(&Version::new(2, 0, 0)).is_empty());
/// ```
pub struct ConverterRegistry<O: ?Sized> {
    entries: Vec<RegisteredConverter<O>>,
}

impl<O: ?Sized> ConverterRegistry<O> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a converter for a version range
    pub fn register<C>(&mut self, range: VersionRange, converter: C) -> &mut Self
    where
        C: Converter<O> + 'static,
    {
        self.register_shared(range, Arc::new(converter))
    }

    /// Register an already shared converter
    pub fn register_shared(
        &mut self,
        range: VersionRange,
        converter: Arc<dyn Converter<O>>,
    ) -> &mut Self {
        tracing::debug!(%range, converter = converter.name(), "registered converter");
        self.entries.push(RegisteredConverter { range, converter });
        self
    }

    /// Number of registered converters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no converter is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O: ?Sized> Default for ConverterRegistry<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ?Sized> ConverterResolver<O> for ConverterRegistry<O> {
    fn resolve(&self, version: &Version) -> ConverterChain<O> {
        self.entries
            .iter()
            .filter(|entry| entry.range.contains(version))
            .map(|entry| Arc::clone(&entry.converter))
            .collect()
    }
}

impl<O: ?Sized> fmt::Debug for ConverterRegistry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|e| format!("{} => {}", e.range, e.converter.name())),
            )
            .finish()
    }
}
