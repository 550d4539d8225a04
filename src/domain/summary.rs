// Summary statistics domain model

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_crimes: f64,
    pub avg_victim_age: f64,
    pub crimes_with_weapons: Option<f64>,
    pub data_source: Option<String>,
}

impl Summary {
    pub fn total_text(&self) -> String {
        format_count(self.total_crimes)
    }

    pub fn avg_age_text(&self) -> String {
        format!("{:.1}", self.avg_victim_age)
    }

    pub fn weapons_text(&self) -> Option<String> {
        self.crimes_with_weapons.map(format_count)
    }
}

/// Format a number with thousands separators and at most three fraction digits,
/// e.g. 12345 -> "12,345", 12345.6 -> "12,345.6"
pub fn format_count(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let thousandths = (value.abs() * 1000.0).round() as u64;
    let (whole, fraction) = (thousandths / 1000, thousandths % 1000);
    let digits = whole.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && thousandths > 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if fraction > 0 {
        let fraction = format!("{:03}", fraction);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}
