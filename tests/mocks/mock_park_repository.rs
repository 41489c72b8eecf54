use async_trait::async_trait;
use parks_mcp_server::error::{ParkDataError, ParkDataResult};
use parks_mcp_server::models::Park;
use parks_mcp_server::repositories::ParkRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock park repository for testing.
///
/// Provides an in-memory implementation of ParkRepository that can be
/// easily configured with test data and tracks method calls for
/// verification. `set_fail_loads` makes `load_all` fail on demand so
/// tests can exercise the degraded (empty dataset) path.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockParkRepository {
    parks: Arc<Mutex<Vec<Park>>>,
    fail_loads: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockParkRepository {
    /// Create a new empty MockParkRepository.
    pub fn new() -> Self {
        Self {
            parks: Arc::new(Mutex::new(Vec::new())),
            fail_loads: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a park to the mock repository.
    pub fn add_park(&self, park: Park) {
        let mut parks = self.parks.lock().unwrap();
        parks.push(park);
    }

    /// Add multiple parks, preserving their order.
    pub fn add_parks(&self, parks_list: Vec<Park>) {
        let mut parks = self.parks.lock().unwrap();
        parks.extend(parks_list);
    }

    /// Make subsequent `load_all` calls fail (or succeed again).
    pub fn set_fail_loads(&self, fail: bool) {
        *self.fail_loads.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    /// Clear all parks from the repository.
    pub fn clear(&self) {
        let mut parks = self.parks.lock().unwrap();
        parks.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockParkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ParkRepository for MockParkRepository {
    async fn load_all(&self) -> ParkDataResult<Vec<Park>> {
        self.track_call("load_all");

        if *self.fail_loads.lock().unwrap() {
            return Err(ParkDataError::Other("mock load failure".to_string()));
        }

        let parks = self.parks.lock().unwrap();
        Ok(parks.clone())
    }

    fn source(&self) -> String {
        "mock://parks".to_string()
    }
}
