//! Integration tests for scrawl component interoperability.
//!
//! These tests exercise the public surface end to end: logger construction
//! through config, emission through real and capturing sinks, and redaction
//! at the persisted boundary.

use scrawl::{
    CaptureSink, Config, ConfigError, ConsoleFormat, FileFormat, Logger, Output, RenderFormat,
    Severity,
};

fn console_capture(config: Config) -> (Logger, CaptureSink) {
    let capture = CaptureSink::new();
    let logger = Logger::builder("svc")
        .config(config.clone())
        .output(Output::new(
            RenderFormat::Console(ConsoleFormat::styled(&config.pad_token)),
            capture.clone(),
        ))
        .build()
        .unwrap();
    (logger, capture)
}

// ============================================================================
// Threshold and emission
// ============================================================================

#[test]
fn warn_emitted_styled_and_untimestamped_debug_suppressed() {
    let (logger, capture) = console_capture(
        Config::new()
            .with_threshold(Severity::Info)
            .without_file_output(),
    );

    logger.warn("disk low");
    logger.debug("x");

    let lines = capture.lines();
    assert_eq!(lines.len(), 1, "debug must be fully suppressed");

    let line = &lines[0];
    // Style codes around the severity token
    assert!(line.contains("\u{1b}[33mwarn"));
    // No timestamp: the line starts at the label
    assert_eq!(strip_ansi_escapes::strip_str(line), "[ svc ] warn : disk low");
}

#[test]
fn every_threshold_emits_exactly_the_ranked_prefix() {
    for threshold in Severity::ALL {
        let (logger, capture) = console_capture(
            Config::new()
                .with_threshold(threshold)
                .without_file_output(),
        );
        for severity in Severity::ALL {
            logger.log(severity, "x");
        }
        assert_eq!(
            capture.len(),
            threshold.rank() as usize + 1,
            "threshold {threshold}"
        );
    }
}

// ============================================================================
// Persisted sink: rotation files, timestamps, redaction
// ============================================================================

#[test]
fn file_sink_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::new()
        .with_threshold(Severity::Indiscreet)
        .with_log_dir(dir.path());

    {
        let logger = Logger::with_config("svc", config).unwrap();
        logger.info("service started");
        logger.increase();
        logger.indiscreet("generated password: hunter2");
        logger.decrease();
        // Dropping the logger drains the file sink's worker
    }

    let path = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|path| path.extension().is_some_and(|ext| ext == "log"))
        .expect("a dated .log file");

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    // Plain text: no styling codes may leak into persisted output
    assert!(!contents.contains('\u{1b}'));

    // Timestamp prefix on every line: YYYY-DD-MM_hh:mm:ss
    for line in &lines {
        let stamp = &line[..19];
        for (i, byte) in stamp.bytes().enumerate() {
            match i {
                4 | 7 => assert_eq!(byte, b'-', "bad stamp {stamp:?}"),
                10 => assert_eq!(byte, b'_', "bad stamp {stamp:?}"),
                13 | 16 => assert_eq!(byte, b':', "bad stamp {stamp:?}"),
                _ => assert!(byte.is_ascii_digit(), "bad stamp {stamp:?}"),
            }
        }
    }

    assert!(lines[0].ends_with("[ svc ] info : service started"));

    // The secret never reaches the file; the marker does
    assert!(!contents.contains("hunter2"));
    assert!(lines[1].ends_with("[ svc ] indiscreet : Redacted"));
}

#[test]
fn redaction_asymmetry_between_sinks() {
    let console = CaptureSink::new();
    let file = CaptureSink::new();
    let config = Config::new()
        .with_threshold(Severity::Indiscreet)
        .without_file_output();
    let logger = Logger::builder("svc")
        .config(config.clone())
        .output(Output::new(
            RenderFormat::Console(ConsoleFormat::styled(&config.pad_token)),
            console.clone(),
        ))
        .output(Output::new(
            RenderFormat::File(FileFormat::new(&config.pad_token)),
            file.clone(),
        ))
        .build()
        .unwrap();

    logger.indiscreet("generated password: hunter2");

    // Interactive output still shows the message
    assert!(console.lines()[0].contains("hunter2"));
    // Persisted output never does
    assert!(!file.lines()[0].contains("hunter2"));
    assert!(file.lines()[0].contains("Redacted"));
}

// ============================================================================
// Structured messages
// ============================================================================

#[test]
fn structured_round_trip_on_both_variants() {
    let console = CaptureSink::new();
    let file = CaptureSink::new();
    let config = Config::new().without_file_output();
    let logger = Logger::builder("svc")
        .config(config.clone())
        .output(Output::new(
            RenderFormat::Console(ConsoleFormat::plain(&config.pad_token)),
            console.clone(),
        ))
        .output(Output::new(
            RenderFormat::File(FileFormat::new(&config.pad_token)),
            file.clone(),
        ))
        .build()
        .unwrap();

    logger.info(serde_json::json!({"a": 1, "b": "x"}));

    for line in [&console.lines()[0], &file.lines()[0]] {
        let body = line.split(" : ").nth(1).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(parsed["a"], 1);
        assert_eq!(parsed["b"], "x");
    }
}

// ============================================================================
// Macros
// ============================================================================

#[test]
fn macros_match_method_calls() {
    let (logger, capture) = console_capture(
        Config::new()
            .with_threshold(Severity::Hook)
            .without_file_output(),
    );

    scrawl::log_warn!(logger, "{} low", "disk");
    logger.warn("disk low");
    scrawl::log_hook!(logger, "fired {}", 3);

    let lines = capture.lines();
    assert_eq!(lines[0], lines[1]);
    assert!(strip_ansi_escapes::strip_str(&lines[2]).ends_with("hook : fired 3"));
}

// ============================================================================
// Configuration failures
// ============================================================================

#[test]
fn misconfigured_threshold_fails_at_construction() {
    let err = Config::from_lookup(|key| {
        (key == "LOG_LEVEL").then(|| "shout".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownSeverity(_)));
}

#[test]
fn unusable_log_dir_fails_at_construction() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not dir").unwrap();

    let config = Config::new().with_log_dir(&blocker);
    let err = Logger::with_config("svc", config).unwrap_err();
    assert!(matches!(err, ConfigError::LogDirUnavailable { .. }));
}
