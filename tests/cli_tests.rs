#[cfg(test)]
mod tests {
    use bpmtoms::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["test"]);
        assert_eq!(args.config, None);
        assert_eq!(args.tempo, None);
        assert!(args.send.is_empty());
        assert!(!args.interactive);
        assert!(!args.assist);
        assert!(!args.log_stderr);
    }

    #[test]
    fn test_args_initial_state() {
        let args = Args::parse_from([
            "test", "--beat", "0.125", "--steps", "3", "--tempo", "140", "--config", "bpm.toml",
        ]);
        assert_eq!(args.beat, Some(0.125));
        assert_eq!(args.steps, Some(3.0));
        assert_eq!(args.tempo, Some(140.0));
        assert_eq!(args.config, Some(PathBuf::from("bpm.toml")));
    }

    #[test]
    fn test_send_messages_keep_order_and_type() {
        let args = Args::parse_from(["test", "--send", "0", "2", "--send", "1", "92.5"]);
        let messages = args.send_messages().unwrap();
        assert_eq!(
            messages,
            vec![InletMessage::int(0, 2), InletMessage::float(1, 92.5)]
        );
    }

    #[test]
    fn test_send_accepts_negative_values() {
        let args = Args::parse_from(["test", "--send", "2", "-4"]);
        assert_eq!(args.send_messages().unwrap(), vec![InletMessage::int(2, -4)]);
    }

    #[test]
    fn test_send_rejects_bad_inlet() {
        let args = Args::parse_from(["test", "--send", "tempo", "120"]);
        assert!(args.send_messages().is_err());
    }

    #[test]
    fn test_send_conflicts_with_interactive() {
        let result = Args::try_parse_from(["test", "--send", "1", "120", "--interactive"]);
        assert!(result.is_err());
    }
}
