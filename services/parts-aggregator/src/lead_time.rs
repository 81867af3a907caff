//! Supplier lead-time conversion.
//!
//! Suppliers quote lead times as free text such as `"12 Weeks"`. Internally
//! lead times are whole days.

/// Convert a quoted lead time to days.
///
/// `None` means the supplier gave no lead time, and such items are left out
/// of minimum computations. A quote in weeks becomes `weeks * 7`; any other
/// unit or unparseable text is 0 days.
pub fn lead_time_days(raw: Option<&str>) -> Option<u32> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
    Some(weeks_to_days(raw).unwrap_or(0))
}

fn weeks_to_days(raw: &str) -> Option<u32> {
    let mut tokens = raw.split_whitespace();
    let count: u32 = tokens.next()?.parse().ok()?;
    let unit = tokens.next()?;

    if tokens.next().is_some() {
        return None;
    }

    if unit.eq_ignore_ascii_case("weeks") || unit.eq_ignore_ascii_case("week") {
        count.checked_mul(7)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lead_time_days() {
        assert_eq!(lead_time_days(Some("2 Weeks")), Some(14));
        assert_eq!(lead_time_days(Some("1 Week")), Some(7));
        assert_eq!(lead_time_days(Some(" 12 weeks ")), Some(84));
        assert_eq!(lead_time_days(Some("3 Days")), Some(0));
        assert_eq!(lead_time_days(Some("Weeks")), Some(0));
        assert_eq!(lead_time_days(Some("soon")), Some(0));
        assert_eq!(lead_time_days(Some("14")), Some(0));
        assert_eq!(lead_time_days(Some("")), None);
        assert_eq!(lead_time_days(None), None);
    }

    proptest! {
        #[test]
        fn prop_weeks_are_seven_days(weeks in 0u32..1000) {
            let quoted = format!("{} Weeks", weeks);
            prop_assert_eq!(lead_time_days(Some(&quoted)), Some(weeks * 7));
        }
    }
}
