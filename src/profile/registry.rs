//! Open keyed registry of industry profiles.
//!
//! The calculator never hardcodes an industry: everything it needs comes off
//! the profile it resolves here. Registering another vertical of an existing
//! formula family is a pure data change.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::{accounting_profile, legacy_profile, property_profile};
use super::{IndustryProfile, IndustrySummary};
use crate::errors::CalcError;

#[derive(Clone, Debug, Default)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, IndustryProfile>,
}

impl ProfileRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with the three built-in profiles.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for profile in [accounting_profile(), property_profile(), legacy_profile()] {
            registry.insert(profile);
        }
        registry
    }

    /// Register or replace a profile under its own key.
    pub fn insert(&mut self, profile: IndustryProfile) {
        self.profiles.insert(profile.key.clone(), profile);
    }

    /// Resolve an industry key to its profile.
    pub fn get(&self, key: &str) -> Result<&IndustryProfile, CalcError> {
        self.profiles
            .get(key)
            .ok_or_else(|| CalcError::unknown_industry(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.profiles.contains_key(key)
    }

    /// Registered industry keys, in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Schema summaries for driving external input rendering.
    pub fn industries(&self) -> Vec<IndustrySummary> {
        self.profiles.values().map(IndustryProfile::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

static DEFAULT_REGISTRY: Lazy<ProfileRegistry> = Lazy::new(ProfileRegistry::builtin);

/// Process-wide registry of the built-in profiles.
pub fn default_registry() -> &'static ProfileRegistry {
    &DEFAULT_REGISTRY
}
