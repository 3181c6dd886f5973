const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

// base: 1024
// below 1KiB: exact count only
// otherwise: 2 decimals, largest unit keeping the value under 1024, exact count
pub fn format_bytes(n: u64) -> String {
    if n < 1024 {
        return format!("{} Bytes", n);
    }
    let mut m = n;
    let mut unit_index = 0;
    while unit_index < UNITS.len() - 1 && m >= 1 << 20 {
        m >>= 10;
        unit_index += 1;
    }
    format!(
        "{:.2} {}iB ({} Bytes)",
        m as f64 / 1024.0,
        UNITS[unit_index],
        n
    )
}
