use jconfgen::core::Pipeline;
use jconfgen::{CliConfig, ConfGenEngine, ConfGenError, HeaderPipeline, LocalStorage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const JCONFIG_TEMPLATE: &str = "\
#define JPEG_LIB_VERSION  @JPEG_LIB_VERSION@\n\
#define LIBJPEG_TURBO_VERSION  @VERSION@\n\
#cmakedefine C_ARITH_CODING_SUPPORTED\n\
#cmakedefine D_ARITH_CODING_SUPPORTED\n\
#cmakedefine MEM_SRCDST_SUPPORTED\n\
#define BITS_IN_JSAMPLE  8\n";

const CONFIG_TEMPLATE: &str = "\
#define BUILD  \"@BUILD@\"\n\
#define PACKAGE_NAME  \"@CMAKE_PROJECT_NAME@\"\n\
#define VERSION  \"@VERSION@\"\n";

/// Lays out a template directory the way the original build tree does:
/// <root>/win/jconfig.h.in and <root>/win/config.h.in.
fn write_templates(root: &Path) {
    let win = root.join("win");
    fs::create_dir_all(&win).unwrap();
    fs::write(win.join("jconfig.h.in"), JCONFIG_TEMPLATE).unwrap();
    fs::write(win.join("config.h.in"), CONFIG_TEMPLATE).unwrap();
}

fn config_for(root: &Path, args: &[&str]) -> CliConfig {
    let template_dir = root.join("win").display().to_string();
    let output_dir = root.display().to_string();

    let mut full_args = vec![
        "jconfgen",
        "--template-dir",
        template_dir.as_str(),
        "--output-dir",
        output_dir.as_str(),
    ];
    full_args.extend_from_slice(args);

    clap::Parser::try_parse_from(full_args).unwrap()
}

fn run(config: CliConfig, stamp: &str) -> jconfgen::Result<Vec<String>> {
    let pipeline = HeaderPipeline::new(LocalStorage::default(), config).with_build_stamp(stamp);
    ConfGenEngine::new(pipeline).run()
}

#[test]
fn test_end_to_end_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    let written = run(config_for(temp_dir.path(), &[]), "20260830").unwrap();
    assert_eq!(written.len(), 2);

    let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
    assert!(jconfig.contains("#define JPEG_LIB_VERSION  62"));
    assert!(jconfig.contains("#define LIBJPEG_TURBO_VERSION  1.0.1"));
    assert!(jconfig.contains("#define C_ARITH_CODING_SUPPORTED"));
    assert!(jconfig.contains("#define D_ARITH_CODING_SUPPORTED"));
    assert!(jconfig.contains("#define MEM_SRCDST_SUPPORTED"));
    // Lines the materializer has no business touching survive as-is.
    assert!(jconfig.contains("#define BITS_IN_JSAMPLE  8"));

    let config_h = fs::read_to_string(temp_dir.path().join("config.h")).unwrap();
    assert!(config_h.contains("#define BUILD  \"20260830\""));
    assert!(config_h.contains("#define PACKAGE_NAME  \"libmozjpeg\""));
    assert!(config_h.contains("#define VERSION  \"1.0.1\""));
}

#[test]
fn test_each_lib_version_lands_verbatim() {
    for lib_version in ["62", "70", "80"] {
        let temp_dir = TempDir::new().unwrap();
        write_templates(temp_dir.path());

        let config = config_for(temp_dir.path(), &["--jpeg-lib-version", lib_version]);
        run(config, "20260830").unwrap();

        let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
        assert!(
            jconfig.contains(&format!("#define JPEG_LIB_VERSION  {}", lib_version)),
            "lib version {} missing from output",
            lib_version
        );
        // The other placeholders are unaffected by the lib-version choice.
        assert!(jconfig.contains("#define LIBJPEG_TURBO_VERSION  1.0.1"));
    }
}

#[test]
fn test_toggles_are_independent() {
    let cases = [
        ("--arith-enc", "C_ARITH_CODING_SUPPORTED"),
        ("--arith-dec", "D_ARITH_CODING_SUPPORTED"),
        ("--mem-srcdst", "MEM_SRCDST_SUPPORTED"),
    ];

    for (flag, define) in cases {
        let temp_dir = TempDir::new().unwrap();
        write_templates(temp_dir.path());

        let config = config_for(temp_dir.path(), &[flag, "0"]);
        run(config, "20260830").unwrap();

        let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
        assert!(jconfig.contains(&format!("#undef {}", define)));

        // Exactly one directive flipped to #undef; the other two stay defined.
        for (_, other) in cases.iter().filter(|(f, _)| *f != flag) {
            assert!(
                jconfig.contains(&format!("#define {}", other)),
                "toggling {} must not affect {}",
                flag,
                other
            );
        }
    }
}

#[test]
fn test_full_substitution_coverage() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    let config = config_for(temp_dir.path(), &["--version", "9.9.9"]);
    run(config, "20260830").unwrap();

    let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
    let config_h = fs::read_to_string(temp_dir.path().join("config.h")).unwrap();

    assert!(jconfig.contains("9.9.9"));
    assert!(config_h.contains("9.9.9"));
    for output in [&jconfig, &config_h] {
        assert!(!output.contains("@VERSION@"));
        assert!(!output.contains("@JPEG_LIB_VERSION@"));
        assert!(!output.contains("@BUILD@"));
        assert!(!output.contains("@CMAKE_PROJECT_NAME@"));
        assert!(!output.contains("#cmakedefine"));
    }
}

#[test]
fn test_idempotent_for_fixed_stamp() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    run(config_for(temp_dir.path(), &[]), "20260830").unwrap();
    let first_jconfig = fs::read(temp_dir.path().join("jconfig.h")).unwrap();
    let first_config = fs::read(temp_dir.path().join("config.h")).unwrap();

    run(config_for(temp_dir.path(), &[]), "20260830").unwrap();
    let second_jconfig = fs::read(temp_dir.path().join("jconfig.h")).unwrap();
    let second_config = fs::read(temp_dir.path().join("config.h")).unwrap();

    assert_eq!(first_jconfig, second_jconfig);
    assert_eq!(first_config, second_config);
}

#[test]
fn test_missing_template_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());
    fs::remove_file(temp_dir.path().join("win").join("config.h.in")).unwrap();

    let err = run(config_for(temp_dir.path(), &[]), "20260830").unwrap_err();

    assert!(matches!(err, ConfGenError::MissingTemplate { .. }));
    assert!(!temp_dir.path().join("jconfig.h").exists());
    assert!(!temp_dir.path().join("config.h").exists());
}

#[test]
fn test_failed_run_leaves_prior_outputs_untouched() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    // Outputs from an earlier, successful run.
    run(config_for(temp_dir.path(), &[]), "20250101").unwrap();
    let stale_jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();

    fs::remove_file(temp_dir.path().join("win").join("jconfig.h.in")).unwrap();
    let err = run(config_for(temp_dir.path(), &[]), "20260830").unwrap_err();

    assert!(matches!(err, ConfGenError::MissingTemplate { .. }));
    let current_jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
    assert_eq!(stale_jconfig, current_jconfig);
}

#[test]
fn test_unwritable_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    let template_dir = temp_dir.path().join("win").display().to_string();
    let missing_output = temp_dir.path().join("no-such-dir").display().to_string();
    let config: CliConfig = clap::Parser::try_parse_from([
        "jconfgen",
        "--template-dir",
        template_dir.as_str(),
        "--output-dir",
        missing_output.as_str(),
    ])
    .unwrap();

    let err = run(config, "20260830").unwrap_err();

    match err {
        ConfGenError::UnwritableOutput { ref path, .. } => {
            assert!(path.ends_with("jconfig.h"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(
        err.severity(),
        jconfgen::utils::error::ErrorSeverity::Critical
    );
}

#[test]
fn test_second_write_failure_leaves_first_output_in_place() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    // A directory squatting on config.h's path makes only the second write
    // fail; jconfig.h is written first.
    fs::create_dir(temp_dir.path().join("config.h")).unwrap();

    let config = config_for(temp_dir.path(), &["--version", "5.5.5"]);
    let err = run(config, "20260830").unwrap_err();

    match err {
        ConfGenError::UnwritableOutput { ref path, .. } => {
            assert!(path.ends_with("config.h"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // Writes are not transactional: the already-written first header stays.
    let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
    assert!(jconfig.contains("#define LIBJPEG_TURBO_VERSION  5.5.5"));
}

#[test]
fn test_outputs_are_fully_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());

    // Pre-existing garbage longer than the rendered header.
    let garbage = "x".repeat(10_000);
    fs::write(temp_dir.path().join("jconfig.h"), &garbage).unwrap();

    run(config_for(temp_dir.path(), &[]), "20260830").unwrap();

    let jconfig = fs::read_to_string(temp_dir.path().join("jconfig.h")).unwrap();
    assert!(!jconfig.contains("xxx"));
    assert!(jconfig.contains("#define JPEG_LIB_VERSION  62"));
}

#[test]
fn test_extract_reads_both_before_any_write() {
    // With only the second template missing, extract must fail before load
    // ever runs, so even the renderable first header is not written.
    let temp_dir = TempDir::new().unwrap();
    write_templates(temp_dir.path());
    fs::remove_file(temp_dir.path().join("win").join("config.h.in")).unwrap();

    let config = config_for(temp_dir.path(), &[]);
    let pipeline = HeaderPipeline::new(LocalStorage::default(), config);

    assert!(pipeline.extract().is_err());
    assert!(!temp_dir.path().join("jconfig.h").exists());
}
