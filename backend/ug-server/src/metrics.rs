use metrics::counter;

/// Metrics collector for unlink requests
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "ug_server",
        }
    }

    /// Record an incoming unlink request
    pub fn unlink_requested(&self) {
        counter!(format!("{}.unlink.requests", self.prefix)).increment(1);
    }

    /// Record how an unlink request ended ("success" or a guard error kind)
    pub fn unlink_outcome(&self, outcome: &str) {
        counter!(format!("{}.unlink.outcome.{}", self.prefix, outcome)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
