/// Minimum-interval gate for event-driven emission.
/// Accepts at most one event per `interval_ms` of host time.
pub struct Throttle {
    /// Required gap between two accepted events, in milliseconds.
    interval_ms: f64,
    /// Time of the last accepted event. None until the first accept.
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns true and records `now_ms` when enough time has passed since
    /// the last accepted event. The first call always accepts.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let open = match self.last_ms {
            None => true,
            Some(last) => now_ms - last > self.interval_ms,
        };
        if open {
            self.last_ms = Some(now_ms);
        }
        open
    }

    /// The configured interval.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_accepted() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(1000.0));
    }

    #[test]
    fn events_inside_interval_rejected() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(1000.0));
        assert!(!t.ready(1010.0));
        assert!(!t.ready(1050.0)); // exactly at the boundary: still closed
    }

    #[test]
    fn reopens_after_interval() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(1000.0));
        assert!(t.ready(1051.0));
    }

    #[test]
    fn interval_measured_from_last_accept() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(0.0));
        // Rejected events must not push the window forward
        assert!(!t.ready(40.0));
        assert!(!t.ready(49.0));
        assert!(t.ready(51.0));
        assert!(!t.ready(100.0));
    }
}
