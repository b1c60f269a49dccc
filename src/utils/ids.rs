use chrono::Utc;

/// Millisecond-timestamp id with a monotonic floor. Two ids issued within
/// the same millisecond still come out distinct.
pub fn next_millis_id(last_issued: &mut i64) -> String {
    let mut millis = Utc::now().timestamp_millis();
    if millis <= *last_issued {
        millis = *last_issued + 1;
    }
    *last_issued = millis;
    millis.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique_within_a_millisecond() {
        let mut last = 0;
        let a = next_millis_id(&mut last);
        let b = next_millis_id(&mut last);
        let c = next_millis_id(&mut last);
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.parse::<i64>().unwrap() < b.parse::<i64>().unwrap());
        assert!(b.parse::<i64>().unwrap() < c.parse::<i64>().unwrap());
    }
}
