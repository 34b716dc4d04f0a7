use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn hardsub_cmd() -> Command {
    Command::cargo_bin("hardsub").expect("Failed to find hardsub binary")
}

// These tests exercise argument handling and discovery paths only; nothing
// here reaches the external tool preflight, so they run on hosts without
// ffmpeg/ffprobe installed.

#[test]
fn test_no_subcommand_shows_usage() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();

    cmd.assert().failure().stderr(contains("Usage"));

    Ok(())
}

#[test]
fn test_help_lists_subcommands() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(contains("transcode"))
        .stdout(contains("probe"));

    Ok(())
}

#[test]
fn test_transcode_empty_directory_succeeds() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;

    let mut cmd = hardsub_cmd();
    cmd.arg("transcode")
        .arg("--input")
        .arg(input_dir.path().to_str().unwrap());

    // No processable files is reported but is not a failure
    cmd.assert()
        .success()
        .stderr(contains("No files were found to transcode"));

    Ok(())
}

#[test]
fn test_transcode_non_existent_input() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("transcode")
        .arg("--input")
        .arg("surely/this/does/not/exist");

    cmd.assert().failure().stderr(contains("Invalid input path"));

    Ok(())
}

#[test]
fn test_transcode_rejects_unrecognized_file() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let input_file = input_dir.path().join("notes.txt");
    std::fs::write(&input_file, "dummy content")?;

    let mut cmd = hardsub_cmd();
    cmd.arg("transcode")
        .arg("--input")
        .arg(input_file.to_str().unwrap());

    cmd.assert()
        .failure()
        .stderr(contains("not a recognized video file"));

    Ok(())
}

#[test]
fn test_transcode_invalid_preset() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("transcode").arg("--preset").arg("turbo");

    // Expect failure due to clap validation
    cmd.assert()
        .failure()
        .stderr(contains("invalid value 'turbo'"));

    Ok(())
}

#[test]
fn test_transcode_invalid_stream_index() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("transcode").arg("--audio-stream").arg("first");

    cmd.assert()
        .failure()
        .stderr(contains("invalid value 'first'"));

    Ok(())
}

#[test]
fn test_probe_missing_file() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("probe").arg("surely/this/does/not/exist.mkv");

    cmd.assert()
        .failure()
        .stderr(contains("does not exist or is not a file"));

    Ok(())
}

#[test]
fn test_probe_requires_file_argument() -> Result<(), Box<dyn Error>> {
    let mut cmd = hardsub_cmd();
    cmd.arg("probe");

    // clap reports the missing required positional
    cmd.assert().failure().stderr(contains("FILE"));

    Ok(())
}
