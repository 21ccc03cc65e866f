//! `--verbose` attrition line shared by the counting commands.

use urlcount_core::TallyStats;

pub fn format_stats(label: &str, stats: &TallyStats) -> String {
    format!(
        "{label}: {} seen, {} unique, {} duplicate, {} unparseable, {} without domain",
        stats.seen, stats.unique, stats.duplicates, stats.unparseable, stats.without_domain
    )
}

pub fn eprint_stats(label: &str, stats: &TallyStats) {
    eprintln!("{}", format_stats(label, stats));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_counter() {
        let stats = TallyStats {
            seen: 5,
            unique: 2,
            duplicates: 1,
            unparseable: 2,
            without_domain: 1,
        };
        assert_eq!(
            format_stats("count", &stats),
            "count: 5 seen, 2 unique, 1 duplicate, 2 unparseable, 1 without domain"
        );
    }
}
