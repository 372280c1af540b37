use jiff::{SignedDuration, SpanRelativeTo};

/// Accepts ISO 8601 or friendly durations ("PT2S", "1m 30s", "250ms"), or a
/// bare number of milliseconds.
pub fn parse_duration(input: &str) -> Result<SignedDuration, String> {
    let input = input.trim();
    input
        .parse::<SignedDuration>()
        .or_else(|_| {
            input
                .parse::<jiff::Span>()
                .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
        })
        .ok()
        .or_else(|| {
            input
                .parse::<i64>()
                .ok()
                .and_then(i64::checked_abs)
                .map(SignedDuration::from_millis)
        })
        .ok_or_else(|| format!("Invalid duration: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("250ms"), Ok(SignedDuration::from_millis(250)));
        assert_eq!(parse_duration("PT1.5S"), Ok(SignedDuration::from_millis(1_500)));
        assert_eq!(parse_duration("40"), Ok(SignedDuration::from_millis(40)));
        assert_eq!(parse_duration("-40"), Ok(SignedDuration::from_millis(40)));
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-9223372036854775808").is_err());
    }
}
