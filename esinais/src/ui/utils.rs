use itertools::Itertools;

/// Group digits in threes with `.` as in pt-BR ("5.000")
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let first = digits.len() % 3;

    let mut groups = Vec::new();
    if first > 0 {
        groups.push(&digits[..first]);
    }
    groups.extend(
        (first..digits.len())
            .step_by(3)
            .map(|start| &digits[start..start + 3]),
    );

    groups.into_iter().join(".")
}

/// Character counter under the translator input, e.g. `18 / 5.000`
pub fn char_counter(count: usize, max: usize) -> String {
    format!("{} / {}", format_thousands(count), format_thousands(max))
}

/// Cut `text` to `max_chars`, ending with an ellipsis when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}

/// Fallback text for optional record fields
pub fn or_placeholder(value: Option<&str>) -> &str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("Não informado")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(5000), "5.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_char_counter() {
        assert_eq!(char_counter(20, 5000), "20 / 5.000");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Computador", 20), "Computador");
        assert_eq!(truncate("Computador", 5), "Comp…");
        assert_eq!(truncate("Saúde", 0), "");
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(or_placeholder(None), "Não informado");
        assert_eq!(or_placeholder(Some("  ")), "Não informado");
        assert_eq!(or_placeholder(Some("Verbo")), "Verbo");
    }
}
