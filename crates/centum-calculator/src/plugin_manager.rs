use crate::plugin::CalculatorPlugin;
use centum_types::CalculationKind;
use std::collections::HashMap;

/// Registry of calculator plugins, keyed by the kind each one implements.
pub struct PluginRegistry {
    plugins: HashMap<CalculationKind, Box<dyn CalculatorPlugin>>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self { plugins: HashMap::new() }
    }

    pub fn register(&mut self, plugin: Box<dyn CalculatorPlugin>) {
        self.plugins.insert(plugin.kind(), plugin);
    }

    pub fn get(&self, kind: CalculationKind) -> Option<&dyn CalculatorPlugin> {
        self.plugins.get(&kind).map(|p| p.as_ref())
    }
}
