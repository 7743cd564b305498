use std::sync::{Arc, Mutex};

/// Object names fetched through a [`LoggingSource`](crate::LoggingSource),
/// in fetch order.
#[derive(Debug, Clone, Default)]
pub struct FetchLog {
    names: Arc<Mutex<Vec<String>>>,
}

impl FetchLog {
    pub(crate) fn push(&self, name: &str) {
        self.names.lock().unwrap().push(name.to_string());
    }

    pub fn len(&self) -> usize {
        self.names.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.lock().unwrap().is_empty()
    }

    /// Number of fetches of `name`
    pub fn count(&self, name: &str) -> usize {
        self.names
            .lock()
            .unwrap()
            .iter()
            .filter(|fetched| *fetched == name)
            .count()
    }

    pub fn names(&self) -> Vec<String> {
        self.names.lock().unwrap().clone()
    }
}
