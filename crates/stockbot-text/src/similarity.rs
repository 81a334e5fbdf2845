use std::collections::HashSet;

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Bigram-overlap similarity in `[0, 1]`, used for typo-tolerant brand lookup.
///
/// Every bigram occurrence of either string counts as shared when that bigram
/// appears anywhere in the other string. Hits are counted from both sides, so
/// the score is symmetric; for strings without repeated bigrams it equals
/// `2·|shared| / (|bigrams(a)| + |bigrams(b)|)`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let (ga, gb) = (bigrams(a), bigrams(b));
    if ga.is_empty() || gb.is_empty() {
        return 0.0;
    }
    let (set_a, set_b): (HashSet<_>, HashSet<_>) = (ga.iter().collect(), gb.iter().collect());
    let hits = ga.iter().filter(|g| set_b.contains(g)).count() + gb.iter().filter(|g| set_a.contains(g)).count();
    hits as f64 / (ga.len() + gb.len()) as f64
}
