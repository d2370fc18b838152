/// Centralized wheel naming utilities
///
/// Provides consistent wheel names across the per-wheel plot functions.
/// Get the standard wheel name for a given index
///
/// # Panics
/// Panics if index is greater than 1
pub fn wheel_name(index: usize) -> &'static str {
    match index {
        0 => "Left",
        1 => "Right",
        _ => panic!(
            "Invalid wheel index: {}. Expected 0 (Left) or 1 (Right)",
            index
        ),
    }
}

/// Get all wheel names as a static array
pub const WHEEL_NAMES: [&str; 2] = ["Left", "Right"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_name() {
        assert_eq!(wheel_name(0), "Left");
        assert_eq!(wheel_name(1), "Right");
    }

    #[test]
    #[should_panic(expected = "Invalid wheel index")]
    fn test_wheel_name_panic() {
        wheel_name(2);
    }

    #[test]
    fn test_wheel_names_constant() {
        assert_eq!(WHEEL_NAMES[0], "Left");
        assert_eq!(WHEEL_NAMES[1], "Right");
    }
}
