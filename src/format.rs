use crate::models::parse_iso_date;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

fn group_thousands(value: u64) -> String {
    let s = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('.');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// pt-BR decimal: `1234.5` -> `1.234,50`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

pub fn format_currency(amount: f64) -> String {
    let formatted = format_amount(amount);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-R$ {}", rest),
        None => format!("R$ {}", formatted),
    }
}

/// `2024-03-05` -> `05/03/2024`. Unparseable input is shown untouched.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(raw) if raw.trim().is_empty() => String::new(),
        Some(raw) => parse_iso_date(raw)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_brazilian_separators() {
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(2922.0), "2.922,00");
        assert_eq!(format_amount(1234567.891), "1.234.567,89");
        assert_eq!(format_amount(-80.5), "-80,50");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(6078.0), "R$ 6.078,00");
        assert_eq!(format_currency(-150.0), "-R$ 150,00");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(format_date(Some("")), "");
        assert_eq!(format_date(None), "");
        assert_eq!(format_date(Some("amanhã")), "amanhã");
    }

    #[test]
    fn month_names_are_one_based() {
        assert_eq!(month_name(1), "Janeiro");
        assert_eq!(month_name(3), "Março");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
