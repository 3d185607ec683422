const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human readable size in binary units with two decimals.
///
/// Picks the largest unit in which the value is at least 1. Sizes beyond
/// the GB range stay in GB rather than running off the unit table.
pub fn format_size(bytes: u64) -> String {
	if bytes == 0 {
		return String::from("0 Bytes");
	}

	let mut idx = 0;
	let mut scaled = bytes;
	while scaled >= 1024 && idx < UNITS.len() - 1 {
		scaled /= 1024;
		idx += 1;
	}

	let value = bytes as f64 / 1024f64.powi(idx as i32);
	format!("{value:.2} {}", UNITS[idx])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero() {
		assert_eq!(format_size(0), "0 Bytes");
	}

	#[test]
	fn test_unit_boundaries() {
		assert_eq!(format_size(1), "1.00 Bytes");
		assert_eq!(format_size(1023), "1023.00 Bytes");
		assert_eq!(format_size(1024), "1.00 KB");
		assert_eq!(format_size(1536), "1.50 KB");
		assert_eq!(format_size(1048576), "1.00 MB");
		assert_eq!(format_size(1073741824), "1.00 GB");
	}

	#[test]
	fn test_beyond_gb_stays_in_gb() {
		// 1 TiB
		assert_eq!(format_size(1u64 << 40), "1024.00 GB");
		assert!(format_size(u64::MAX).ends_with(" GB"));
	}
}
