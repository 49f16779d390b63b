/// Formats an amount with id-ID thousands grouping, e.g. `1234567` -> `1.234.567`.
///
/// Display-only helper for presentation adapters; the core keeps pay as a
/// plain integer.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}
