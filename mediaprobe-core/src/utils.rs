//! Small formatting helpers shared by the library and the CLI.

/// Formats bytes with binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// `WIDTHxHEIGHT`, or `None` when either side is unknown (zero or negative).
#[must_use]
pub fn format_dimensions(width: i32, height: i32) -> Option<String> {
    (width > 0 && height > 0).then(|| format!("{width}x{height}"))
}
