use crate::client::model::error::ApiError;

/// Whether a fetched value is real backend data or the resource's
/// predefined substitute. Keeping the distinction explicit is what lets
/// the UI label degraded data instead of passing it off as live.
#[derive(Clone, Debug, PartialEq)]
pub enum Sourced<T> {
    Live(T),
    Substitute(T),
}

impl<T> Sourced<T> {
    pub fn value(self) -> T {
        match self {
            Sourced::Live(value) | Sourced::Substitute(value) => value,
        }
    }

    pub fn is_substitute(&self) -> bool {
        matches!(self, Sourced::Substitute(_))
    }
}

/// Per-resource fetch state tracked by the dashboard orchestrator.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Holding the substitute value after a failed live fetch or while
    /// fallback mode is active.
    Degraded(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn from_sourced(sourced: Sourced<T>) -> Self {
        match sourced {
            Sourced::Live(value) => Cache::Ready(value),
            Sourced::Substitute(value) => Cache::Degraded(value),
        }
    }

    pub fn from_result(result: Result<Sourced<T>, ApiError>) -> Self {
        match result {
            Ok(sourced) => Cache::from_sourced(sourced),
            Err(error) => Cache::Error(error),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Ready(value) | Cache::Degraded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    /// A fetch has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Cache::Ready(_) | Cache::Degraded(_) | Cache::Error(_))
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Cache::Degraded(_))
    }

    /// Map the inner data to another value, returning None if no data is
    /// held.
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sourced_maps_into_cache_states() {
        assert_eq!(
            Cache::from_sourced(Sourced::Live(1)),
            Cache::Ready(1)
        );
        assert_eq!(
            Cache::from_sourced(Sourced::Substitute(1)),
            Cache::Degraded(1)
        );
    }

    #[test]
    fn degraded_still_exposes_data() {
        let cache = Cache::Degraded("sample");
        assert_eq!(cache.data(), Some(&"sample"));
        assert!(cache.is_degraded());
        assert!(cache.is_settled());
    }

    #[test]
    fn error_settles_without_data() {
        let cache: Cache<u32> = Cache::Error(ApiError::AuthRequired);
        assert!(cache.is_settled());
        assert_eq!(cache.data(), None);
        assert_eq!(cache.error(), Some(&ApiError::AuthRequired));
    }

    #[test]
    fn idle_and_loading_are_unsettled() {
        assert!(!Cache::<u32>::Idle.is_settled());
        assert!(!Cache::<u32>::Loading.is_settled());
        assert!(Cache::<u32>::Loading.is_loading());
    }
}
