use super::text::slugify;
use std::collections::HashSet;

/// Tracks assigned ids within one scope (a run for categories, a category
/// for items) and disambiguates collisions.
#[derive(Debug, Default)]
pub struct IdRegistry {
    used: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `base`, or `base-<suffix>` if `base` is taken. Should that be
    /// taken too, a counter starting at 2 is appended until the id is free.
    pub fn assign(&mut self, base: String, suffix: &str) -> String {
        if self.used.insert(base.clone()) {
            return base;
        }

        let suffixed = format!("{}-{}", base, suffix);
        let mut candidate = suffixed.clone();
        let mut n = 2;
        while self.used.contains(&candidate) {
            candidate = format!("{}-{}", suffixed, n);
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

pub fn category_id(prefix: &str, menu_label: &str, category_name: &str) -> String {
    format!("c-{}-{}-{}", prefix, slugify(menu_label), slugify(category_name))
}

pub fn item_id(prefix: &str, menu_label: &str, item_name: &str) -> String {
    format!("i-{}-{}-{}", prefix, slugify(menu_label), slugify(item_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_item_ids() {
        assert_eq!(category_id("sfg", "Happy Hour", "Bar Bites"), "c-sfg-happy-hour-bar-bites");
        assert_eq!(item_id("sfg", "Dinner", "Chef's Burger"), "i-sfg-dinner-chefs-burger");
        assert_eq!(item_id("sfg", "Dinner", "***"), "i-sfg-dinner-x");
    }

    #[test]
    fn test_registry_disambiguates_with_suffix() {
        let mut registry = IdRegistry::new();
        assert_eq!(registry.assign("i-sfg-dinner-wings".into(), "1"), "i-sfg-dinner-wings");
        assert_eq!(registry.assign("i-sfg-dinner-wings".into(), "3"), "i-sfg-dinner-wings-3");
        assert_eq!(registry.assign("i-sfg-dinner-fries".into(), "4"), "i-sfg-dinner-fries");
    }

    #[test]
    fn test_registry_never_returns_a_used_id() {
        let mut registry = IdRegistry::new();
        registry.assign("a".into(), "1");
        registry.assign("a-2".into(), "1");
        // "a" then "a-2" are both taken, so the suffix counter kicks in
        assert_eq!(registry.assign("a".into(), "2"), "a-2-2");
        assert_eq!(registry.assign("a".into(), "2"), "a-2-3");
    }
}
