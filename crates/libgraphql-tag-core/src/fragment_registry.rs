use indexmap::IndexSet;
use std::collections::HashMap;

/// Outcome of [`FragmentRegistry::observe`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FragmentObservation {
    /// A fragment with this name has been seen before, but never with this
    /// body. Both bodies are now recorded under the name.
    Conflict,

    /// This exact fragment (name and normalized body) has been seen before.
    Known,

    /// First fragment ever seen with this name.
    New,
}

/// Tracks every fragment definition seen across all documents, by name.
///
/// GraphQL fragment names are not scoped to a document, so two documents
/// that each define a different `fragment UserFields` will silently shadow
/// one another if they ever end up in the same request. The registry
/// detects that situation without rejecting either definition.
#[derive(Clone, Debug, Default)]
pub struct FragmentRegistry {
    /// Fragment name → normalized fragment sources, in the order first
    /// observed.
    fragments: HashMap<String, IndexSet<String>>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fragment name that has been observed with more than one
    /// distinct body, sorted by name.
    pub fn conflicts(&self) -> Vec<(&str, &IndexSet<String>)> {
        let mut conflicts: Vec<_> = self.fragments
            .iter()
            .filter(|(_, sources)| sources.len() > 1)
            .map(|(name, sources)| (name.as_str(), sources))
            .collect();
        conflicts.sort_by_key(|(name, _)| *name);
        conflicts
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of distinct fragment names observed.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Records that a fragment named `fragment_name` with normalized source
    /// `source_key` was encountered.
    pub fn observe(
        &mut self,
        fragment_name: &str,
        source_key: &str,
    ) -> FragmentObservation {
        let Some(sources) = self.fragments.get_mut(fragment_name) else {
            self.fragments.insert(
                fragment_name.to_string(),
                IndexSet::from([source_key.to_string()]),
            );
            return FragmentObservation::New;
        };

        if sources.contains(source_key) {
            FragmentObservation::Known
        } else {
            sources.insert(source_key.to_string());
            FragmentObservation::Conflict
        }
    }

    pub fn reset_all(&mut self) {
        self.fragments.clear();
    }

    /// The normalized sources observed for `fragment_name`, in the order
    /// they were first observed.
    pub fn variants(&self, fragment_name: &str) -> Option<&IndexSet<String>> {
        self.fragments.get(fragment_name)
    }
}
