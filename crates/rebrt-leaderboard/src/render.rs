use rebrt_types::RankEntry;

/// Names are cut to this many characters so rows stay roughly aligned
pub const NAME_WIDTH: usize = 20;

/// `1234567` -> `1,234,567`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn render_row(entry: &RankEntry) -> String {
    let name: String = entry.display_name.chars().take(NAME_WIDTH).collect();
    format!("{} '{}' {}\n", entry.rank, name, group_thousands(entry.score))
}

/// Render entries as a Discord code block, one row per entry
pub fn render_rows(entries: &[RankEntry]) -> String {
    let mut out = String::from("```\n");
    for entry in entries {
        out.push_str(&render_row(entry));
    }
    out.push_str("```");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345678), "12,345,678");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_row_truncates_name_by_characters() {
        let entry = RankEntry::new(7, "宵崎奏宵崎奏宵崎奏宵崎奏宵崎奏宵崎奏宵崎奏", 1_500_000);
        assert_eq!(render_row(&entry), "7 '宵崎奏宵崎奏宵崎奏宵崎奏宵崎奏宵崎奏宵崎' 1,500,000\n");
    }

    #[test]
    fn test_render_block() {
        let rows = [RankEntry::new(1, "mizuki", 42), RankEntry::new(2, "ena", 41)];
        assert_eq!(render_rows(&rows), "```\n1 'mizuki' 42\n2 'ena' 41\n```");
    }

    #[test]
    fn test_render_empty_window() {
        assert_eq!(render_rows(&[]), "```\n```");
    }
}
