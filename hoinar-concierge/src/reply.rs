//! Shortlist selection and reply composition.

use hoinar_core::Venue;

use crate::scoring::ScoredCandidate;
use crate::strings::LocaleStrings;

/// At most this many venues appear in one reply.
const SHORTLIST_LIMIT: usize = 2;

/// Filter, rank, and cap the scored candidates.
///
/// With keywords present only candidates that matched at least one survive;
/// without keywords every candidate competes on rating and proximity. The
/// sort is stable and descending, so equal scores keep dataset order.
pub(crate) fn select_shortlist(
    candidates: Vec<ScoredCandidate<'_>>,
    with_keywords: bool,
) -> Vec<ScoredCandidate<'_>> {
    let mut survivors: Vec<ScoredCandidate<'_>> = if with_keywords {
        candidates
            .into_iter()
            .filter(|candidate| !candidate.matched_keywords.is_empty())
            .collect()
    } else {
        candidates
    };
    survivors.sort_by(|left, right| right.score.total_cmp(&left.score));
    survivors.truncate(SHORTLIST_LIMIT);
    survivors
}

/// Render the intro line and one block per shortlisted venue.
pub(crate) fn compose_reply(
    shortlist: &[ScoredCandidate<'_>],
    keywords: &[String],
    strings: &LocaleStrings,
) -> String {
    let mut reply = if keywords.is_empty() {
        strings.intro_generic.to_owned()
    } else {
        strings
            .intro_with_keywords
            .replace("{{keywords}}", &keywords.join(", "))
    };
    for candidate in shortlist {
        reply.push_str("\n\n");
        reply.push_str(&candidate_block(candidate, strings));
    }
    reply
}

fn candidate_block(candidate: &ScoredCandidate<'_>, strings: &LocaleStrings) -> String {
    let mut lines = vec![summary_line(candidate.venue)];
    if !candidate.matched_keywords.is_empty() {
        lines.push(format!(
            "{}: {}",
            strings.matches_label,
            candidate.matched_keywords.join(", ")
        ));
    }
    if let Some(snippet) = &candidate.snippet {
        lines.push(format!(
            "{} ({}): {}",
            strings.tip_label, snippet.author, snippet.text
        ));
    }
    if let Some(proximity) = &candidate.proximity {
        lines.push(proximity.clone());
    }
    lines.join("\n")
}

/// `• {name} ({city}) · {description}`, dropping the empty parts.
fn summary_line(venue: &Venue) -> String {
    let city = venue.city();
    let mut line = format!("• {}", venue.name);
    if !city.is_empty() {
        line.push_str(&format!(" ({city})"));
    }
    if !venue.description.is_empty() {
        line.push_str(&format!(" · {}", venue.description));
    }
    line
}
