//! Plain-text analysis reports.
//!
//! One file per analysis, named `analysis_<title>_<artist>_<timestamp>.txt`.
//! An existing file with the same name is overwritten.

use crate::analysis::{format_percentage, AnalysisResult};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

const RULE_WIDTH: usize = 50;

/// Replace characters that cannot appear in a file name component.
pub fn sanitize_file_component(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

pub fn report_file_name(title: &str, artist: &str, timestamp: &DateTime<Local>) -> String {
    format!(
        "analysis_{}_{}_{}.txt",
        sanitize_file_component(title),
        sanitize_file_component(artist),
        timestamp.format(FILE_TIMESTAMP_FORMAT)
    )
}

/// Full report text.
pub fn format_report(title: &str, artist: &str, analysis: &AnalysisResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Şarkı Analizi: {} - {}\n", title, artist));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str("Duygusal Analiz:\n");
    for (emotion, score) in analysis.emotions.iter() {
        out.push_str(&format!("{}: {}\n", emotion.label(), format_percentage(score)));
    }

    let dominant = analysis.dominant_emotion.label();
    out.push_str(&format!("\nBaskın Duygu: {}\n", dominant));
    out.push_str(&format!(
        "Analiz Özeti: Bu şarkı ağırlıklı olarak {} duygusunu ifade ediyor.\n",
        dominant.to_lowercase()
    ));
    out
}

/// Write the report into `dir`, returning the path of the new file.
pub fn save_report(
    dir: &Path,
    title: &str,
    artist: &str,
    analysis: &AnalysisResult,
    timestamp: &DateTime<Local>,
) -> io::Result<PathBuf> {
    let path = dir.join(report_file_name(title, artist, timestamp));
    fs::write(&path, format_report(title, artist, analysis))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::EmotionRecord;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn sample() -> AnalysisResult {
        AnalysisResult::from_record(EmotionRecord::new(0.3, 0.7, 0.2, 0.1, 0.6))
    }

    #[test]
    fn test_report_file_name() {
        let ts = Local.with_ymd_and_hms(2024, 11, 2, 21, 4, 9).unwrap();
        assert_eq!(
            report_file_name("Gülpembe", "Barış Manço", &ts),
            "analysis_Gülpembe_Barış Manço_20241102-210409.txt"
        );
        assert_eq!(
            report_file_name("Back/Forth?", "AC/DC", &ts),
            "analysis_Back_Forth__AC_DC_20241102-210409.txt"
        );
    }

    #[test]
    fn test_format_report() {
        let report = format_report("Gülpembe", "Barış Manço", &sample());
        let expected = "\
==================================================
Şarkı Analizi: Gülpembe - Barış Manço
==================================================

Duygusal Analiz:
Mutluluk: 30.0%
Hüzün: 70.0%
Öfke: 20.0%
Korku: 10.0%
Aşk: 60.0%

Baskın Duygu: Hüzün
Analiz Özeti: Bu şarkı ağırlıklı olarak hüzün duygusunu ifade ediyor.
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_save_report() {
        let dir = TempDir::new().unwrap();
        let ts = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let path = save_report(dir.path(), "Song", "Artist", &sample(), &ts).unwrap();

        assert_eq!(path.parent().unwrap(), dir.path());
        assert!(path.ends_with("analysis_Song_Artist_20240101-000000.txt"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Baskın Duygu: Hüzün"));
    }

    #[test]
    fn test_save_report_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let ts = Local::now();
        assert!(save_report(&missing, "Song", "Artist", &sample(), &ts).is_err());
    }
}
