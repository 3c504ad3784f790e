//! Attack profile loader.
//!
//! Loads named attack profiles from RON data files.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use combat_core::{AttackProfile, AttackResolver};

use crate::loaders::{LoadResult, read_file};

const EMBEDDED: &str = include_str!("../../data/profiles.ron");

/// Registry of attack profiles, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct AttackProfileRegistry {
    profiles: HashMap<String, AttackProfile>,
}

impl AttackProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `profile` under `name`, returning any profile it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        profile: AttackProfile,
    ) -> Option<AttackProfile> {
        self.profiles.insert(name.into(), profile)
    }

    pub fn get(&self, name: &str) -> Option<&AttackProfile> {
        self.profiles.get(name)
    }

    /// Builds a resolver for the named profile.
    pub fn resolver(&self, name: &str) -> Option<AttackResolver> {
        self.get(name).map(AttackProfile::resolver)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns true if no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Loader for attack profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load a `name -> profile` map from a RON file.
    pub fn load(path: &Path) -> LoadResult<AttackProfileRegistry> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse and validate profiles from RON text.
    pub fn parse(content: &str) -> LoadResult<AttackProfileRegistry> {
        let profiles: HashMap<String, AttackProfile> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profiles RON: {}", e))?;

        for (name, profile) in &profiles {
            profile
                .validate()
                .with_context(|| format!("Invalid attack profile '{}'", name))?;
        }

        Ok(AttackProfileRegistry { profiles })
    }

    /// The profiles shipped with this crate.
    pub fn embedded() -> LoadResult<AttackProfileRegistry> {
        Self::parse(EMBEDDED).context("embedded profiles.ron")
    }
}
