/// Round to the nearest whole unit, with ties going away from zero.
pub fn round_half_away(amount: f64) -> f64 {
    amount.round()
}

/// Round `amount` to a whole number and render it with `,` thousands separators, e.g. `12100.4` => `"12,100"`.
pub fn group_thousands(amount: f64) -> String {
    let rounded = round_half_away(amount);
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
