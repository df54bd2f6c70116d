use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current instant truncated to microseconds, the precision timestamps are stored with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Current instant, bumped by one microsecond when the clock has not moved past `previous`.
pub fn now_after(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn now_has_microsecond_precision() {
        assert_eq!(now().nanosecond() % 1_000, 0);
    }

    #[test]
    fn now_after_is_strictly_later_even_for_future_reference() {
        let future = now() + Duration::seconds(60);
        let next = now_after(future);

        assert!(next > future);
        assert_eq!(next - future, Duration::microseconds(1));
    }
}
