use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use figsum_lib::{Role, SummaryOutput};
use tempfile::TempDir;

const EXPECTED_MARKDOWN: &str = "# Landing Page Summary: Acme Landing

- Figma file name: **Acme Landing**
- Last modified: **2024-01-01**

## Text Content (top -> bottom)

- _HEADING_ · `Landing > Home > Hero`: Welcome
- _SUBHEAD_ · `Landing > Home > Hero`: Start your journey
- _CTA_ · `Hero > Buttons > Primary`: SIGN UP
- _BODY_ · `Landing > Home > Features`: Ship faster with fewer meetings.
- _CTA_ · `Landing > Home > Features`: $49
";

fn asset(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_assets")
        .join(name)
}

/// Runs the binary with an isolated HOME so no central config leaks in.
fn run_cmd(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figsum"))
        .args(args)
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .output()
        .expect("run figsum command")
}

#[test]
fn markdown_summary_matches_fixture() {
    let home = TempDir::new().expect("tempdir");
    let input = asset("acme-landing.json");

    let output = run_cmd(home.path(), &[input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED_MARKDOWN);
}

#[test]
fn json_summary_lists_printed_lines() {
    let home = TempDir::new().expect("tempdir");
    let input = asset("acme-landing.json");

    let output = run_cmd(home.path(), &["--format", "json", input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let parsed: SummaryOutput =
        serde_json::from_slice(&output.stdout).expect("output should be valid JSON");
    assert_eq!(parsed.name.as_ref().and_then(|v| v.as_str()), Some("Acme Landing"));
    let roles: Vec<Role> = parsed.lines.iter().map(|l| l.role).collect();
    assert_eq!(
        roles,
        vec![Role::Heading, Role::Subhead, Role::Cta, Role::Body, Role::Cta]
    );
    assert_eq!(parsed.lines[1].text, "Start your journey");
    assert_eq!(
        parsed.lines[2].parents,
        vec!["Document", "Landing", "Home", "Hero", "Buttons", "Primary"]
    );
}

#[test]
fn output_flag_writes_file_and_keeps_stdout_empty() {
    let home = TempDir::new().expect("tempdir");
    let dir = TempDir::new().expect("tempdir");
    let out_path = dir.path().join("reports").join("summary.md");
    let input = asset("acme-landing.json");

    let output = run_cmd(
        home.path(),
        &[
            input.to_str().unwrap(),
            "--output",
            out_path.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&out_path).expect("read summary");
    assert_eq!(written, EXPECTED_MARKDOWN);
}

#[test]
fn config_file_changes_thresholds_and_breadcrumb_depth() {
    let home = TempDir::new().expect("tempdir");
    let dir = TempDir::new().expect("tempdir");
    let cfg_path = dir.path().join("figsum.toml");
    std::fs::write(
        &cfg_path,
        "[classifier]\nheading_min_size = 50.0\n\n[render]\nparent_depth = 1\n",
    )
    .expect("write config");
    let input = asset("acme-landing.json");

    let output = run_cmd(
        home.path(),
        &[
            "--config",
            cfg_path.to_str().unwrap(),
            input.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- _SUBHEAD_ · `Hero`: Welcome\n"));
    assert!(stdout.contains("- _CTA_ · `Primary`: SIGN UP\n"));
}

#[test]
fn central_config_is_picked_up_from_home() {
    let home = TempDir::new().expect("tempdir");
    let cfg_dir = home.path().join(".config").join("figsum");
    std::fs::create_dir_all(&cfg_dir).expect("create config dir");
    std::fs::write(cfg_dir.join("config.toml"), "[render]\nparent_depth = 2\n")
        .expect("write config");
    let input = asset("acme-landing.json");

    let output = run_cmd(home.path(), &[input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- _HEADING_ · `Home > Hero`: Welcome\n"));
}

#[test]
fn adjacent_duplicates_collapse_but_separated_repeats_print() {
    let home = TempDir::new().expect("tempdir");
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("dupes.json");
    std::fs::write(
        &input,
        r#"{
          "name": "Dupes",
          "document": { "children": [
            { "type": "TEXT", "characters": "Get Started", "absoluteBoundingBox": { "x": 0, "y": 0 } },
            { "type": "TEXT", "characters": "Get\n\tStarted", "absoluteBoundingBox": { "x": 0, "y": 10 } },
            { "type": "TEXT", "characters": "Pricing plans for every team", "absoluteBoundingBox": { "x": 0, "y": 20 } },
            { "type": "TEXT", "characters": "Get Started", "absoluteBoundingBox": { "x": 0, "y": 30 } }
          ] }
        }"#,
    )
    .expect("write input");

    let output = run_cmd(home.path(), &[input.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("- _")).collect();
    assert_eq!(
        lines,
        vec![
            "- _BODY_: Get Started",
            "- _BODY_: Pricing plans for every team",
            "- _BODY_: Get Started",
        ]
    );
    assert!(stdout.contains("- Last modified: **None**\n"));
}
