//! Small display helpers shared by the one-shot commands.

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Render a byte count with a binary unit suffix.
pub fn format_size(bytes: u64) -> String {
  let mut value = bytes as f64;
  let mut unit = 0;
  while value >= 1024.0 && unit < UNITS.len() - 1 {
    value /= 1024.0;
    unit += 1;
  }
  if unit == 0 {
    format!("{bytes} B")
  } else {
    format!("{:.1} {}", value, UNITS[unit])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn small_sizes_stay_in_bytes() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(512), "512 B");
  }

  #[test]
  fn larger_sizes_scale_units() {
    assert_eq!(format_size(2048), "2.0 KiB");
    assert_eq!(format_size(5 * 1024 * 1024), "5.0 MiB");
  }
}
