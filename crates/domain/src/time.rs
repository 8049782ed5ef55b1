//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp attached to recorded status callbacks.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_never_go_backwards_between_calls() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
