// Typo candidate generation

use crate::keymap::Keymap;
use tracing::debug;

const CANDIDATE_SCHEME: &str = "http://";

/// Index of the segment that gets mutated. Domains with a subdomain mutate
/// the second segment, everything else the first.
pub fn mutation_label_index(segment_count: usize) -> usize {
    if segment_count > 2 { 1 } else { 0 }
}

/// Generate every single-substitution typo variant of `domain`.
///
/// For each character position in the mutated label, and for each adjacent
/// key of that character, every occurrence of the character is replaced at
/// once. A character that appears twice in the label is therefore visited
/// twice and produces the same candidates twice; callers that want a set
/// must dedupe themselves.
pub fn generate_candidates(domain: &str, keymap: &Keymap) -> Vec<String> {
    let segments: Vec<&str> = domain.split('.').collect();
    let label_idx = mutation_label_index(segments.len());
    let label = segments[label_idx];

    let mut candidates = Vec::new();
    for ch in label.chars() {
        for &adjacent in keymap.substitutes(ch) {
            let mutated = replace_all(label, ch, adjacent);
            let host: Vec<&str> = segments
                .iter()
                .enumerate()
                .map(|(i, segment)| if i == label_idx { mutated.as_str() } else { *segment })
                .collect();
            candidates.push(format!("{}{}", CANDIDATE_SCHEME, host.join(".")));
        }
    }

    debug!(
        "Generated {} candidates for label '{}' of {}",
        candidates.len(),
        label,
        domain
    );
    candidates
}

fn replace_all(label: &str, from: char, to: char) -> String {
    label
        .chars()
        .map(|c| if c == from { to } else { c })
        .collect()
}
