//! Console report for processed tracks.
//!
//! Each file produces one block:
//!
//! ```text
//! File name: 01 - on my mind.mp3
//! Track title: Diplo - On My Mind
//! Search results:
//!   1. [40] Diplo, SIDEPIECE - On My Mind (Extended Mix) | Pure House (House) [genre 5]
//! -------------------------------------
//! ```

use std::io::Write;

use crate::metadata::TrackMetadata;
use crate::pipeline::ScoredCandidate;

pub const SEPARATOR: &str = "-------------------------------------";

/// Render one candidate line (without indentation or rank).
pub fn format_candidate(result: &ScoredCandidate) -> String {
    let candidate = &result.candidate;
    let mut line = format!(
        "[{}] {} - {}",
        result.score,
        candidate.artists.join(", "),
        candidate.primary_title
    );

    if !candidate.secondary_title.is_empty() {
        line.push_str(&format!(" ({})", candidate.secondary_title));
    }
    if !result.genre_name.is_empty() {
        line.push_str(&format!(" | {}", result.genre_name));
        if result.genre_name != candidate.original_genre_name
            && !candidate.original_genre_name.is_empty()
        {
            line.push_str(&format!(" ({})", candidate.original_genre_name));
        }
    }
    if let Some(id) = candidate.genre_id {
        line.push_str(&format!(" [genre {}]", id));
    }

    line
}

/// Write the full block for one file.
pub fn write_track_report<W: Write + ?Sized>(
    out: &mut W,
    file_name: &str,
    track: &TrackMetadata,
    results: &[ScoredCandidate],
) -> std::io::Result<()> {
    writeln!(out, "File name: {}", file_name)?;
    writeln!(out, "Track title: {}", track)?;
    writeln!(out, "Search results:")?;
    if results.is_empty() {
        writeln!(out, "  (no results)")?;
    }
    for (index, result) in results.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, format_candidate(result))?;
    }
    writeln!(out, "{}", SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RawCandidate;

    fn scored(
        score: u32,
        secondary: &str,
        genre: &str,
        genre_id: Option<i64>,
    ) -> ScoredCandidate {
        ScoredCandidate {
            candidate: RawCandidate {
                artists: vec!["Diplo".to_string(), "SIDEPIECE".to_string()],
                primary_title: "On My Mind".to_string(),
                secondary_title: secondary.to_string(),
                original_genre_name: "House".to_string(),
                genre_id,
            },
            genre_name: genre.to_string(),
            score,
        }
    }

    #[test]
    fn test_format_candidate_full() {
        let line = format_candidate(&scored(40, "Extended Mix", "Pure House", Some(5)));
        assert_eq!(
            line,
            "[40] Diplo, SIDEPIECE - On My Mind (Extended Mix) | Pure House (House) [genre 5]"
        );
    }

    #[test]
    fn test_format_candidate_unaliased_genre() {
        let mut result = scored(30, "", "Techno", Some(6));
        result.candidate.original_genre_name = "Techno".to_string();
        assert_eq!(
            format_candidate(&result),
            "[30] Diplo, SIDEPIECE - On My Mind | Techno [genre 6]"
        );
    }

    #[test]
    fn test_format_candidate_sparse() {
        let line = format_candidate(&scored(35, "", "", None));
        assert_eq!(line, "[35] Diplo, SIDEPIECE - On My Mind");
    }

    #[test]
    fn test_write_track_report() {
        let track = TrackMetadata::new("Diplo", "On My Mind");
        let results = vec![
            scored(40, "Extended Mix", "Pure House", Some(5)),
            scored(35, "Original Mix", "Pure House", Some(5)),
        ];

        let mut out = Vec::new();
        write_track_report(&mut out, "track.mp3", &track, &results).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "File name: track.mp3");
        assert_eq!(lines[1], "Track title: Diplo - On My Mind");
        assert_eq!(lines[2], "Search results:");
        assert!(lines[3].starts_with("  1. [40]"));
        assert!(lines[4].starts_with("  2. [35]"));
        assert_eq!(lines[5], SEPARATOR);
    }

    #[test]
    fn test_write_track_report_without_results() {
        let mut out = Vec::new();
        write_track_report(&mut out, "x.mp3", &TrackMetadata::default(), &[]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Track title:  - \n"));
        assert!(text.contains("  (no results)\n"));
        assert!(text.ends_with(&format!("{}\n", SEPARATOR)));
    }
}
