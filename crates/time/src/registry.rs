//! Deduplicating catalog of realized domains.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::definition::DomainDefinition;
use crate::domain::TimeDomain;
use crate::error::TimeError;

/// A catalog that realizes each distinct domain once and finds domains by
/// label.
///
/// Definitions are deduplicated structurally: registering a definition
/// equal to a known one (labels aside) returns the existing domain and
/// records the new label as an alias.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use kalends_calendar::Resolution;
/// use kalends_time::{DomainDefinition, DomainRegistry};
///
/// let registry = DomainRegistry::with_builtins();
/// let daily = registry
///     .get_or_insert(DomainDefinition::new(Resolution::Day).with_label("daily"))
///     .unwrap();
/// assert!(Arc::ptr_eq(&daily, &registry.by_label("day").unwrap()));
/// ```
#[derive(Debug, Default)]
pub struct DomainRegistry {
    inner: Mutex<Catalog>,
}

#[derive(Debug, Default)]
struct Catalog {
    domains: Vec<Arc<TimeDomain>>,
    by_definition: HashMap<DomainDefinition, Arc<TimeDomain>>,
    by_label: HashMap<String, Arc<TimeDomain>>,
}

impl DomainRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in domains.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for def in DomainDefinition::builtins() {
            registry
                .get_or_insert(def)
                .expect("built-in definitions are valid and uniquely labeled");
        }
        registry
    }

    /// Returns the domain for `definition`, realizing it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::LabelConflict`] when the label already names a
    /// different domain, and the errors of [`TimeDomain::new`].
    pub fn get_or_insert(&self, definition: DomainDefinition) -> Result<Arc<TimeDomain>, TimeError> {
        let mut catalog = self.inner.lock();
        if let Some(label) = definition.label()
            && let Some(existing) = catalog.by_label.get(label)
            && *existing.definition() != definition
        {
            return Err(TimeError::LabelConflict {
                label: label.to_string(),
            });
        }

        let domain = match catalog.by_definition.get(&definition) {
            Some(domain) => Arc::clone(domain),
            None => {
                let domain = TimeDomain::new(definition.clone())?;
                debug!(domain = %domain, "registered time domain");
                catalog
                    .by_definition
                    .insert(definition.clone(), Arc::clone(&domain));
                catalog.domains.push(Arc::clone(&domain));
                domain
            }
        };
        if let Some(label) = definition.label() {
            catalog
                .by_label
                .entry(label.to_string())
                .or_insert_with(|| Arc::clone(&domain));
        }
        Ok(domain)
    }

    /// Looks up a domain by label.
    pub fn by_label(&self, label: &str) -> Option<Arc<TimeDomain>> {
        self.inner.lock().by_label.get(label).cloned()
    }

    /// Returns every registered label with its domain, sorted by label.
    pub fn labels(&self) -> Vec<(String, Arc<TimeDomain>)> {
        let catalog = self.inner.lock();
        let mut labels: Vec<_> = catalog
            .by_label
            .iter()
            .map(|(label, domain)| (label.clone(), Arc::clone(domain)))
            .collect();
        labels.sort_by(|a, b| a.0.cmp(&b.0));
        labels
    }

    /// Returns the distinct domains in registration order.
    pub fn domains(&self) -> Vec<Arc<TimeDomain>> {
        self.inner.lock().domains.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
