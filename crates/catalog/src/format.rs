/// Format a population count with comma thousands separators (`78000` ->
/// `78,000`), matching the en-US grouping the cards use.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_ungrouped() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_population(8000), "8,000");
        assert_eq!(format_population(78000), "78,000");
        assert_eq!(format_population(1_234_567), "1,234,567");
    }

    #[test]
    fn groups_u64_max() {
        assert_eq!(format_population(u64::MAX), "18,446,744,073,709,551,615");
    }
}
