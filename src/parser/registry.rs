//! Curve name registry
//!
//! Issues unique curve identifiers in declaration order. A repeated
//! mnemonic gets the smallest free numeric suffix: `ROP`, `ROP_1`, `ROP_2`.

use std::collections::{HashMap, HashSet};

/// Order-preserving set of issued curve names
#[derive(Debug, Clone, Default)]
pub struct CurveRegistry {
    issued: HashSet<String>,
    /// Lowest suffix not yet known to be taken, per colliding base name
    next_suffix: HashMap<String, usize>,
    names: Vec<String>,
}

impl CurveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a unique name for `candidate` and append it to the curve list
    pub fn register(&mut self, candidate: &str) -> String {
        let name = if self.issued.contains(candidate) {
            let mut suffix = self.next_suffix.get(candidate).copied().unwrap_or(1);
            let mut composite = format!("{}_{}", candidate, suffix);
            while self.issued.contains(&composite) {
                suffix += 1;
                composite = format!("{}_{}", candidate, suffix);
            }
            self.next_suffix.insert(candidate.to_string(), suffix + 1);
            composite
        } else {
            candidate.to_string()
        };

        self.issued.insert(name.clone());
        self.names.push(name.clone());
        name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.issued.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_pass_through() {
        let mut registry = CurveRegistry::new();
        assert_eq!(registry.register("DEPT"), "DEPT");
        assert_eq!(registry.register("GR"), "GR");
        assert_eq!(registry.into_names(), vec!["DEPT", "GR"]);
    }

    #[test]
    fn test_duplicate_gets_suffix() {
        let mut registry = CurveRegistry::new();
        registry.register("ROP");
        assert_eq!(registry.register("ROP"), "ROP_1");
        assert!(registry.contains("ROP_1"));
        assert_eq!(registry.into_names(), vec!["ROP", "ROP_1"]);
    }

    #[test]
    fn test_triplicate_suffixes_in_order() {
        let mut registry = CurveRegistry::new();
        for _ in 0..3 {
            registry.register("ROP");
        }
        assert_eq!(registry.into_names(), vec!["ROP", "ROP_1", "ROP_2"]);
    }

    #[test]
    fn test_suffix_skips_explicitly_declared_name() {
        let mut registry = CurveRegistry::new();
        registry.register("ROP");
        registry.register("ROP_1");
        assert_eq!(registry.register("ROP"), "ROP_2");
        // The explicit ROP_1 collides with itself
        assert_eq!(registry.register("ROP_1"), "ROP_1_1");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_many_duplicates_stay_unique() {
        let mut registry = CurveRegistry::new();
        for _ in 0..500 {
            registry.register("GAS");
        }
        assert!(registry.contains("GAS_250"));
        let names = registry.into_names();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), 500);
        assert_eq!(names[499], "GAS_499");
    }
}
