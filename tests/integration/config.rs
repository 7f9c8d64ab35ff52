mod common;
use common::{fibseq, run_in, stderr_of, stdout_of};

use fibseq::config::{self, CONFIG_FILE_NAME, Config};
use fibseq::render::OutputFormat;
use fibseq::{SequenceError, Strategy};

fn git_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

#[test]
fn discovered_from_subdirectory() {
    let dir = git_root();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = \"lines\"\n").unwrap();
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let output = run_in(&nested, &["generate", "3"]);
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "0\n1\n1\n");
}

#[test]
fn flag_overrides_config_format() {
    let dir = git_root();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[output]\nformat = \"lines\"\n").unwrap();

    let output = run_in(dir.path(), &["generate", "3", "--format", "plain"]);
    assert_eq!(stdout_of(&output), "[0, 1, 1]\n");
}

#[test]
fn max_length_from_config() {
    let dir = git_root();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[generate]\nmax_length = 5\n").unwrap();

    let ok = run_in(dir.path(), &["generate", "5"]);
    assert!(ok.status.success());

    let err = run_in(dir.path(), &["generate", "6"]);
    assert!(!err.status.success());
    assert!(stderr_of(&err).contains("exceeds the configured maximum of 5"));
}

#[test]
fn explicit_path_and_env_var() {
    let dir = git_root();
    let custom = dir.path().join("custom.toml");
    std::fs::write(&custom, "[output]\nformat = \"json\"\n").unwrap();

    let via_flag = run_in(dir.path(), &["--config", custom.to_str().unwrap(), "generate", "1"]);
    assert_eq!(stdout_of(&via_flag), "{\"length\":1,\"values\":[\"0\"]}\n");

    let via_env = fibseq()
        .current_dir(dir.path())
        .env("FIBSEQ_CONFIG", &custom)
        .args(["generate", "1"])
        .output()
        .unwrap();
    assert_eq!(stdout_of(&via_env), "{\"length\":1,\"values\":[\"0\"]}\n");
}

#[test]
fn invalid_config_is_reported_with_path() {
    let dir = git_root();
    std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[generate]\nstrategy = \"memoized\"\n").unwrap();

    let output = run_in(dir.path(), &["generate", "3"]);
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("error[config]"), "{stderr}");
    assert!(stderr.contains(CONFIG_FILE_NAME), "{stderr}");
}

#[test]
fn load_with_no_file_gives_defaults() {
    let dir = git_root();
    let cfg = config::load(None, dir.path()).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn load_file_missing() {
    let dir = git_root();
    let err = config::load_file(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, SequenceError::Config { .. }));
    assert!(err.to_string().contains("could not read file"));
}

#[test]
fn load_file_reads_settings() {
    let dir = git_root();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[generate]\nstrategy = \"recursive\"\n[output]\nformat = \"json\"\n").unwrap();
    let cfg = config::load_file(&path).unwrap();
    assert_eq!(cfg.strategy, Strategy::Recursive);
    assert_eq!(cfg.format, OutputFormat::Json);
    assert_eq!(cfg.source.as_deref(), Some(path.as_path()));
}
