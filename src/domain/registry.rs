//! Explicit strategy registry.
//!
//! Strategy families are registered at startup and looked up by name;
//! nothing is discovered by scanning the filesystem at runtime. Every
//! definition is validated on registration.

use crate::domain::error::SatstackerError;
use crate::domain::indicator::IndicatorKind;
use crate::domain::strategy::{Comparison, StrategyDefinition};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct StrategyRegistry {
    families: BTreeMap<String, Vec<StrategyDefinition>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the builtin `cci` family.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .register("cci", builtin_cci_family())
            .expect("builtin strategies must validate");
        registry
    }

    pub fn register(
        &mut self,
        family: &str,
        definitions: Vec<StrategyDefinition>,
    ) -> Result<(), SatstackerError> {
        for definition in &definitions {
            definition.validate()?;
        }
        self.families.insert(family.to_string(), definitions);
        Ok(())
    }

    pub fn family(&self, name: &str) -> Option<&[StrategyDefinition]> {
        self.families.get(name).map(|defs| defs.as_slice())
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(|k| k.as_str())
    }

    /// Resolve the definitions to run: the whole family in registration
    /// order, or the subset named by `run_list` (still in registration
    /// order). Unknown family or strategy names are errors.
    pub fn select(
        &self,
        family: &str,
        run_list: Option<&[String]>,
    ) -> Result<Vec<StrategyDefinition>, SatstackerError> {
        let definitions = self
            .family(family)
            .ok_or_else(|| SatstackerError::UnknownFamily(family.to_string()))?;

        let Some(names) = run_list else {
            return Ok(definitions.to_vec());
        };

        for name in names {
            if !definitions.iter().any(|d| &d.name == name) {
                return Err(SatstackerError::UnknownStrategy {
                    family: family.to_string(),
                    name: name.clone(),
                });
            }
        }

        Ok(definitions
            .iter()
            .filter(|d| names.contains(&d.name))
            .cloned()
            .collect())
    }
}

/// The CCI threshold family: buy when the 200-period CCI dips below the
/// strategy's level.
fn builtin_cci_family() -> Vec<StrategyDefinition> {
    [
        ("cci_strategy1", -100.0),
        ("cci_strategy2", -150.0),
        ("cci_strategy3", -200.0),
    ]
    .into_iter()
    .map(|(name, threshold)| StrategyDefinition {
        name: name.to_string(),
        description: format!("buy when 200 period cci threshold dips below {}", threshold),
        indicator: IndicatorKind::Cci,
        lookback: 200,
        comparison: Comparison::Below,
        threshold,
    })
    .collect()
}
