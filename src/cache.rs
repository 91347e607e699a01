//! Keyed query cache with invalidation-on-mutation
//!
//! Each backend listing gets one slot. Mutations invalidate the slots they
//! touch; the app layer refetches whatever stale slot the active screen
//! needs. Data lives here only between fetch and invalidation.

use crate::models::{Allergy, Appointment, User, Vaccine};

/// Lifecycle of one cached listing
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum QueryStatus {
    /// Never fetched
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Data present and current
    Ready,
    /// Data present but invalidated; a refetch is due
    Stale,
    /// Last fetch failed
    Failed,
}

/// One cached listing plus its fetch state
#[derive(Clone, Debug)]
pub struct Query<T> {
    pub data: Option<Vec<T>>,
    pub status: QueryStatus,
    pub error: Option<String>,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Query {
            data: None,
            status: QueryStatus::Idle,
            error: None,
        }
    }
}

impl<T> Query<T> {
    /// True when the slot must be (re)fetched before display
    pub fn needs_fetch(&self) -> bool {
        matches!(self.status, QueryStatus::Idle | QueryStatus::Stale)
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn mark_loading(&mut self) {
        self.status = QueryStatus::Loading;
        self.error = None;
    }

    /// Drops nothing on invalidation: stale data keeps rendering until the
    /// refetch lands.
    pub fn invalidate(&mut self) {
        self.status = match self.status {
            QueryStatus::Idle => QueryStatus::Idle,
            _ => QueryStatus::Stale,
        };
    }

    pub fn resolve(&mut self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.data = Some(items);
                self.status = QueryStatus::Ready;
                self.error = None;
            }
            Err(message) => {
                self.status = QueryStatus::Failed;
                self.error = Some(message);
            }
        }
    }

    /// Items for rendering; empty while nothing has loaded yet
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cache keys, one per backend listing
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QueryKey {
    Vaccines,
    Allergies,
    Users,
    Appointments,
}

/// All cached listings
#[derive(Debug, Default)]
pub struct QueryCache {
    pub vaccines: Query<Vaccine>,
    pub allergies: Query<Allergy>,
    pub users: Query<User>,
    pub appointments: Query<Appointment>,
}

impl QueryCache {
    pub fn invalidate(&mut self, key: QueryKey) {
        match key {
            QueryKey::Vaccines => self.vaccines.invalidate(),
            QueryKey::Allergies => self.allergies.invalidate(),
            QueryKey::Users => self.users.invalidate(),
            QueryKey::Appointments => self.appointments.invalidate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Allergy;

    fn allergy(id: &str) -> Allergy {
        Allergy {
            id: id.to_string(),
            name: format!("allergy-{id}"),
        }
    }

    #[test]
    fn test_idle_needs_fetch() {
        let query: Query<Allergy> = Query::default();
        assert!(query.needs_fetch());
        assert!(query.items().is_empty());
    }

    #[test]
    fn test_resolve_then_invalidate_keeps_data() {
        let mut query: Query<Allergy> = Query::default();
        query.mark_loading();
        assert!(!query.needs_fetch());

        query.resolve(Ok(vec![allergy("1"), allergy("2")]));
        assert_eq!(query.status, QueryStatus::Ready);
        assert_eq!(query.len(), 2);
        assert!(!query.needs_fetch());

        query.invalidate();
        assert_eq!(query.status, QueryStatus::Stale);
        assert!(query.needs_fetch());
        // Stale data still renders while the refetch is in flight
        assert_eq!(query.items().len(), 2);
    }

    #[test]
    fn test_invalidate_idle_stays_idle() {
        let mut query: Query<Allergy> = Query::default();
        query.invalidate();
        assert_eq!(query.status, QueryStatus::Idle);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_data() {
        let mut query: Query<Allergy> = Query::default();
        query.resolve(Ok(vec![allergy("1")]));
        query.mark_loading();
        query.resolve(Err("connection refused".to_string()));

        assert_eq!(query.status, QueryStatus::Failed);
        assert_eq!(query.error.as_deref(), Some("connection refused"));
        assert_eq!(query.items().len(), 1);
    }

    #[test]
    fn test_cache_invalidates_by_key() {
        let mut cache = QueryCache::default();
        cache.appointments.resolve(Ok(Vec::new()));
        cache.vaccines.resolve(Ok(Vec::new()));

        cache.invalidate(QueryKey::Appointments);
        assert_eq!(cache.appointments.status, QueryStatus::Stale);
        assert_eq!(cache.vaccines.status, QueryStatus::Ready);
    }
}
