use std::collections::HashMap;

/// Per-card "capital visible" flags, keyed by region name.
///
/// The map belongs to one list generation. Reading or toggling against a newer
/// generation starts from an empty map, so every replaced list comes back fully hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapitalVisibility {
    generation: u64,
    visible: HashMap<String, bool>,
}

impl CapitalVisibility {
    /// Whether the capital of `name` is shown in list `generation`. Hidden by default.
    #[must_use]
    pub fn is_visible(&self, generation: u64, name: &str) -> bool {
        self.generation == generation && self.visible.get(name).copied().unwrap_or(false)
    }

    /// Flips the flag of `name` and returns the new value. Other names are untouched.
    pub fn toggle(&mut self, generation: u64, name: &str) -> bool {
        if self.generation != generation {
            self.generation = generation;
            self.visible.clear();
        }

        let flag = self.visible.entry(name.to_owned()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Number of capitals currently shown in `generation`.
    #[must_use]
    pub fn shown(&self, generation: u64) -> usize {
        if self.generation != generation {
            return 0;
        }
        self.visible.values().filter(|v| **v).count()
    }
}
