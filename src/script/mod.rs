//! Script reading and segmentation.

mod reader;

pub use reader::{ScriptError, Segment, is_symbol_only, read_script, split_segments};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    // ===========================================
    // split_segments tests
    // ===========================================

    #[test]
    fn test_split_on_blank_lines() {
        let segments = split_segments("おはよう\n\nこんにちは\n\nこんばんは");
        assert_eq!(segments, vec!["おはよう", "こんにちは", "こんばんは"]);
    }

    #[test]
    fn test_lines_in_paragraph_joined_without_separator() {
        let segments = split_segments("  今日は  \n  いい天気\nですね  ");
        assert_eq!(segments, vec!["今日はいい天気ですね"]);
    }

    #[test]
    fn test_numbered_line_joined_with_following_text() {
        let segments = split_segments("1.\nこんにちは");
        assert_eq!(segments, vec!["1.こんにちは"]);
    }

    #[test]
    fn test_symbol_only_paragraphs_skipped() {
        let content = "1. ---\n\n***\n\n：・：\n\n12\n\n本文です";
        assert_eq!(split_segments(content), vec!["本文です"]);
    }

    #[test]
    fn test_whitespace_only_paragraphs_skipped() {
        let segments = split_segments("\n\n   \n\n\t\n\nこんにちは\n\n");
        assert_eq!(segments, vec!["こんにちは"]);
    }

    #[test]
    fn test_other_punctuation_is_content() {
        // Only the fixed symbol set is filtered out.
        let segments = split_segments("！？\n\n〜");
        assert_eq!(segments, vec!["！？", "〜"]);
    }

    #[test]
    fn test_single_paragraph_file_is_one_segment() {
        let segments = split_segments("一行目\n二行目\n三行目\n");
        assert_eq!(segments, vec!["一行目二行目三行目"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let segments = split_segments("おはよう\r\nございます\r\n\r\nさようなら\r\n");
        assert_eq!(segments, vec!["おはようございます", "さようなら"]);
    }

    #[test]
    fn test_is_symbol_only() {
        assert!(is_symbol_only("1. ---"));
        assert!(is_symbol_only("* - . : ： ・ 0123"));
        assert!(is_symbol_only(""));
        assert!(!is_symbol_only("1. こんにちは"));
        assert!(!is_symbol_only("A"));
    }

    // ===========================================
    // read_script tests
    // ===========================================

    #[test]
    fn test_read_script_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.txt");
        std::fs::write(&path, "\u{feff}はじめに\n\nおわりに").unwrap();

        let segments = read_script(&path).unwrap();
        assert_eq!(segments, vec!["はじめに", "おわりに"]);
    }

    #[test]
    fn test_read_script_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.txt");
        std::fs::write(&path, "一\n\n二\n\n- - -\n\n三").unwrap();

        let first = read_script(&path).unwrap();
        let second = read_script(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_read_script_missing_file() {
        let result = read_script(Path::new("/nonexistent/script.txt"));
        assert!(matches!(result.unwrap_err(), ScriptError::Io { .. }));
    }

    #[test]
    fn test_read_script_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("script.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let result = read_script(&path);
        assert!(matches!(result.unwrap_err(), ScriptError::InvalidUtf8(_)));
    }

    // ===========================================
    // Segment tests
    // ===========================================

    #[test]
    fn test_segment_enumerate_and_file_names() {
        let segments = Segment::enumerate(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[1].index, 1);
        assert_eq!(segments[1].audio_file_name(), "segment_001.wav");

        let late = Segment {
            index: 123,
            text: String::new(),
        };
        assert_eq!(late.audio_file_name(), "segment_123.wav");
    }

    #[test]
    fn test_segment_preview_truncates_by_characters() {
        let long = Segment {
            index: 0,
            text: "あ".repeat(60),
        };
        let preview = long.preview();
        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));

        let short = Segment {
            index: 0,
            text: "短い".to_string(),
        };
        assert_eq!(short.preview(), "短い");
    }
}
