use std::collections::HashSet;

use crate::config::project_config::ProjectConfig;
use crate::core::errors::{FrontenvError, Result};
use crate::core::models::env_layer::EnvLayer;
use crate::core::models::environment::ResolvedEnvironment;

/// Layer name recorded when an override layer was applied.
pub const OVERRIDES_LAYER: &str = "overrides";

/// Resolves environment inheritance (base -> dev/prod).
///
/// Walks the `inherits` chain, merges layers from root to leaf and
/// turns the result into a complete `EnvironmentConfig`.
pub struct EnvResolver;

impl EnvResolver {
    /// Resolve the named environment.
    ///
    /// `overrides`, when present, is applied after the leaf layer.
    ///
    /// # Errors
    ///
    /// - `EnvironmentNotFound` if the environment or any parent is not
    ///   defined in the project file.
    /// - `CircularInheritance` if the chain contains a cycle.
    /// - `MissingField` if no layer sets one of the six fields.
    pub fn resolve(
        &self,
        name: &str,
        config: &ProjectConfig,
        overrides: Option<&EnvLayer>,
    ) -> Result<ResolvedEnvironment> {
        let mut layers = self.build_chain(name, config)?;

        let mut merged = EnvLayer::default();
        for layer_name in &layers {
            if let Some(entry) = config.environments.get(layer_name) {
                merged.overlay(&entry.layer);
                tracing::debug!(env = name, layer = %layer_name, "applied layer");
            }
        }

        if let Some(extra) = overrides {
            merged.overlay(extra);
            layers.push(OVERRIDES_LAYER.to_string());
            tracing::debug!(env = name, "applied overrides");
        }

        Ok(ResolvedEnvironment {
            name: name.to_string(),
            config: merged.finalize(name)?,
            layers,
        })
    }

    /// Build the ordered inheritance chain from root to the target env.
    ///
    /// For `dev` with `inherits = "base"`, returns `["base", "dev"]`.
    pub fn build_chain(&self, name: &str, config: &ProjectConfig) -> Result<Vec<String>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = name.to_string();

        loop {
            if visited.contains(&current) {
                chain.push(current.clone());
                let cycle: Vec<String> = chain.into_iter().rev().collect();
                return Err(FrontenvError::CircularInheritance {
                    chain: cycle.join(" -> "),
                });
            }

            let entry = config.environments.get(&current).ok_or_else(|| {
                FrontenvError::EnvironmentNotFound {
                    name: current.clone(),
                    available: config.available(),
                }
            })?;

            visited.insert(current.clone());
            chain.push(current.clone());

            match &entry.inherits {
                Some(parent) => current = parent.clone(),
                None => break,
            }
        }

        chain.reverse();
        Ok(chain)
    }
}
