//! Relative arrival labels for the queue view.

use chrono::{DateTime, Utc};

/// Label the time elapsed between `then` and `now` in whole minutes.
///
/// Under a minute (including a `then` in the future) is "Just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    match (now - then).num_minutes() {
        m if m < 1 => "Just now".to_string(),
        1 => "1 Min ago".to_string(),
        m => format!("{m} Min ago"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn labels_by_whole_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(60), now), "1 Min ago");
        assert_eq!(time_ago(now - Duration::seconds(119), now), "1 Min ago");
        assert_eq!(time_ago(now - Duration::minutes(13), now), "13 Min ago");
        assert_eq!(time_ago(now + Duration::minutes(5), now), "Just now");
    }
}
