//! CLI argument parsing.

mod args;

pub use args::Args;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["script-voice-rs"]).unwrap();

        assert_eq!(args.input, PathBuf::from("script.txt"));
        assert_eq!(args.output_dir, PathBuf::from("audio"));
        assert_eq!(args.speed, 1.3);
        assert_eq!(args.audio_prefix, "audio");
        assert!(!args.update_durations);
        assert_eq!(args.remove_segment, None);
        assert_eq!(args.fps, 30);
        assert_eq!(args.gap_frames, 10);
    }

    #[test]
    fn test_args_generator_config() {
        let args = Args::try_parse_from([
            "script-voice-rs",
            "-i",
            "daihon.txt",
            "-o",
            "public/audio",
            "--url",
            "http://tts.local:50021",
            "--speaker",
            "8",
            "--speed",
            "1.1",
        ])
        .unwrap();

        let config = args.generator_config();
        assert_eq!(config.base_url, "http://tts.local:50021");
        assert_eq!(config.speaker, 8);
        assert_eq!(config.speed, 1.1);
        assert_eq!(config.output_dir, PathBuf::from("public/audio"));
        assert_eq!(args.input, PathBuf::from("daihon.txt"));
    }

    #[test]
    fn test_args_manifest_path_default_and_override() {
        let args = Args::try_parse_from(["script-voice-rs", "-o", "out"]).unwrap();
        assert_eq!(args.manifest_path(), PathBuf::from("out/segments_info.json"));

        let args =
            Args::try_parse_from(["script-voice-rs", "--manifest", "edited.json"]).unwrap();
        assert_eq!(args.manifest_path(), PathBuf::from("edited.json"));
    }

    #[test]
    fn test_args_remove_segment() {
        let args = Args::try_parse_from(["script-voice-rs", "--remove-segment", "57"]).unwrap();
        assert_eq!(args.remove_segment, Some(57));
        assert_eq!(args.timeline().gap_frames, 10);
    }

    #[test]
    fn test_args_rejects_zero_fps() {
        let result = Args::try_parse_from(["script-voice-rs", "--update-durations", "--fps", "0"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["script-voice-rs", "--fps", "24"]).unwrap();
        assert_eq!(args.timeline().fps, 24);
    }

    #[test]
    fn test_args_rejects_non_numeric_speaker() {
        let result = Args::try_parse_from(["script-voice-rs", "--speaker", "zundamon"]);
        assert!(result.is_err());
    }
}
