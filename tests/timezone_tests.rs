use world_timezones::{get_timezones, timezone_names, TimezoneId};
use std::collections::HashSet;
use std::thread;

const EXPECTED_TIMEZONES: [&str; 7] = [
    "America/Los_Angeles",
    "America/New_York",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/Berlin",
    "Europe/London",
    "Europe/Stockholm",
];

#[cfg(test)]
mod timezone_tests {
    use super::*;

    #[test]
    fn test_timezone_count() {
        assert_eq!(get_timezones().len(), 7);
    }

    #[test]
    fn test_timezones_exact_order() {
        let names: Vec<&str> = timezone_names().collect();
        assert_eq!(names, EXPECTED_TIMEZONES);
    }

    #[test]
    fn test_timezones_sorted_ascending() {
        for pair in get_timezones().windows(2) {
            assert!(
                pair[0].as_str() <= pair[1].as_str(),
                "{} should sort before {}",
                pair[0],
                pair[1]
            );
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_timezones_unique() {
        let unique: HashSet<&TimezoneId> = get_timezones().iter().collect();
        assert_eq!(unique.len(), get_timezones().len());
    }

    #[test]
    fn test_repeated_calls_identical() {
        let first = get_timezones();
        let second = get_timezones();

        assert_eq!(first, second);
        assert!(std::ptr::eq(first, second), "Should hand out the same slice every time");
    }

    #[test]
    fn test_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| get_timezones().as_ptr() as usize))
            .collect();

        let addresses: HashSet<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert_eq!(addresses.len(), 1, "All threads should see the same list");
    }

    #[test]
    fn test_timezone_display_and_as_ref() {
        let tokyo = get_timezones()[2];
        assert_eq!(tokyo.to_string(), "Asia/Tokyo");
        assert_eq!(tokyo.as_ref(), "Asia/Tokyo");
        assert_eq!(tokyo, "Asia/Tokyo");
    }

    #[test]
    fn test_timezone_areas() {
        let areas: Vec<&str> = get_timezones().iter().map(TimezoneId::area).collect();
        assert_eq!(
            areas,
            vec!["America", "America", "Asia", "Australia", "Europe", "Europe", "Europe"]
        );

        let locations: Vec<&str> = get_timezones().iter().map(TimezoneId::location).collect();
        assert!(locations.contains(&"Los_Angeles"));
        assert!(locations.contains(&"Stockholm"));
    }

    #[test]
    fn test_timezones_serialize_as_strings() {
        let json = serde_json::to_string(get_timezones()).unwrap();
        let expected = serde_json::to_string(&EXPECTED_TIMEZONES).unwrap();
        assert_eq!(json, expected);
        assert!(json.starts_with("[\"America/Los_Angeles\""));
    }
}
