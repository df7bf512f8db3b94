use std::{thread::sleep, time::Duration};

use chrono::{DateTime, Local};

#[cfg(test)]
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);
#[cfg(not(test))]
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Time left until `target`, zero once it has passed.
pub fn remaining(target: DateTime<Local>) -> Duration {
    (target - Local::now()).to_std().unwrap_or(Duration::ZERO)
}

/// Block until the wall clock reaches `target`. The clock is re-read at
/// least every `POLL_INTERVAL` so host suspension cannot delay the wakeup
/// by more than one interval.
pub fn sleep_until(target: DateTime<Local>) {
    loop {
        let left = remaining(target);
        if left.is_zero() {
            break;
        }
        sleep(left.min(POLL_INTERVAL));
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use chrono::Local;

    #[test]
    fn reach_deadline() {
        let target = Local::now() + chrono::Duration::milliseconds(30);
        super::sleep_until(target);
        assert!(Local::now() >= target);
    }

    #[test]
    fn past_deadline_returns_at_once() {
        let start = Instant::now();
        super::sleep_until(Local::now() - chrono::Duration::hours(1));
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn remaining_is_zero_in_the_past() {
        let past = Local::now() - chrono::Duration::seconds(10);
        assert_eq!(super::remaining(past), Duration::ZERO);
    }
}
