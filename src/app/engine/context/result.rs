//! Human-readable decoding of raw `VkResult` codes.

/// Symbolic name for a raw `VkResult` value.
///
/// Covers the codes a bootstrap can plausibly see; anything else decodes to
/// `"UNKNOWN_ERROR"`.
pub fn result_name(code: i32) -> &'static str {
    match code {
        1 => "NOT_READY",
        2 => "TIMEOUT",
        3 => "EVENT_SET",
        4 => "EVENT_RESET",
        5 => "INCOMPLETE",
        -1 => "ERROR_OUT_OF_HOST_MEMORY",
        -2 => "ERROR_OUT_OF_DEVICE_MEMORY",
        -3 => "ERROR_INITIALIZATION_FAILED",
        -4 => "ERROR_DEVICE_LOST",
        -5 => "ERROR_MEMORY_MAP_FAILED",
        -6 => "ERROR_LAYER_NOT_PRESENT",
        -7 => "ERROR_EXTENSION_NOT_PRESENT",
        -8 => "ERROR_FEATURE_NOT_PRESENT",
        -9 => "ERROR_INCOMPATIBLE_DRIVER",
        -10 => "ERROR_TOO_MANY_OBJECTS",
        -11 => "ERROR_FORMAT_NOT_SUPPORTED",
        -1_000_000_000 => "ERROR_SURFACE_LOST_KHR",
        -1_000_000_001 => "ERROR_NATIVE_WINDOW_IN_USE_KHR",
        1_000_001_003 => "SUBOPTIMAL_KHR",
        -1_000_001_004 => "ERROR_OUT_OF_DATE_KHR",
        -1_000_003_001 => "ERROR_INCOMPATIBLE_DISPLAY_KHR",
        -1_000_011_001 => "ERROR_VALIDATION_FAILED_EXT",
        -1_000_012_000 => "ERROR_INVALID_SHADER_NV",
        _ => "UNKNOWN_ERROR",
    }
}

#[cfg(test)]
mod tests {
    use super::result_name;

    #[test]
    fn recognized_codes_decode_to_their_symbolic_names() {
        let expected = [
            (1, "NOT_READY"),
            (2, "TIMEOUT"),
            (3, "EVENT_SET"),
            (4, "EVENT_RESET"),
            (5, "INCOMPLETE"),
            (-1, "ERROR_OUT_OF_HOST_MEMORY"),
            (-2, "ERROR_OUT_OF_DEVICE_MEMORY"),
            (-3, "ERROR_INITIALIZATION_FAILED"),
            (-4, "ERROR_DEVICE_LOST"),
            (-5, "ERROR_MEMORY_MAP_FAILED"),
            (-6, "ERROR_LAYER_NOT_PRESENT"),
            (-7, "ERROR_EXTENSION_NOT_PRESENT"),
            (-8, "ERROR_FEATURE_NOT_PRESENT"),
            (-9, "ERROR_INCOMPATIBLE_DRIVER"),
            (-10, "ERROR_TOO_MANY_OBJECTS"),
            (-11, "ERROR_FORMAT_NOT_SUPPORTED"),
            (-1_000_000_000, "ERROR_SURFACE_LOST_KHR"),
            (-1_000_000_001, "ERROR_NATIVE_WINDOW_IN_USE_KHR"),
            (1_000_001_003, "SUBOPTIMAL_KHR"),
            (-1_000_001_004, "ERROR_OUT_OF_DATE_KHR"),
            (-1_000_003_001, "ERROR_INCOMPATIBLE_DISPLAY_KHR"),
            (-1_000_011_001, "ERROR_VALIDATION_FAILED_EXT"),
            (-1_000_012_000, "ERROR_INVALID_SHADER_NV"),
        ];
        for (code, name) in expected {
            assert_eq!(result_name(code), name, "code {code}");
        }
    }

    #[test]
    fn unrecognized_codes_decode_to_the_unknown_label() {
        // VK_SUCCESS is deliberately outside the set; the decoder is only
        // ever handed failures.
        for code in [0, 6, -12, 42, -1_000_000_002, i32::MIN, i32::MAX] {
            assert_eq!(result_name(code), "UNKNOWN_ERROR");
        }
    }
}
