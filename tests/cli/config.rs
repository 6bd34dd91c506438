use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, DISPATCH_MISMATCH, stderr, stdout};

const PATHS: &[&str] = &["nvapi.cpp", "nvapi_interface.cpp", "nvapi_interface.h"];

#[test]
fn test_print_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--print-config"])?;

    assert_eq!(output.status.code(), Some(0));
    let config: Value =
        serde_json::from_str(&stdout(&output)).context("Config should be valid JSON")?;
    assert_eq!(config["returnType"], "NvAPI_Status");
    assert_eq!(config["callingConvention"], "__cdecl");
    assert_eq!(config["startMarker"], "/* Start NVAPI methods */");
    assert_eq!(config["endMarker"], "/* End */");
    assert_eq!(config["duplicateCheck"], "length");

    Ok(())
}

#[test]
fn test_printed_config_is_usable() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.run(&["--print-config"])?;
    test.write_file(".validate-methods.json", &stdout(&output))?;
    test.write_implementation("nvapi.cpp", &["Foo"])?;
    test.write_interface("nvapi_interface.cpp", &["Foo"])?;
    test.write_header("nvapi_interface.h", &["Foo"])?;

    let output = test.run(PATHS)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_config_custom_conventions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".validate-methods.json",
        r#"{
          "returnType": "NV_OF_STATUS",
          "callingConvention": "NVOFAPI",
          "startMarker": "// begin entrypoints",
          "endMarker": "// end entrypoints",
          "dispatchFunction": "NvOFAPICreateInstance"
      }"#,
    )?;
    test.write_file(
        "nvofapi.cpp",
        "NV_OF_STATUS NVOFAPI nvCreateOpticalFlowVk() {}\nNV_OF_STATUS NVOFAPI nvOFInit() {}\n",
    )?;
    test.write_file(
        "nvofapi_interface.cpp",
        "// begin entrypoints\nENTRY(nvCreateOpticalFlowVk)\n// end entrypoints\n",
    )?;

    let output = test.run(&["--skip-availability", "nvofapi.cpp", "nvofapi_interface.cpp"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output).lines().next(),
        Some(
            "Method validation failed. Please make sure that all implemented NVAPI methods \
             are listed in the `NvOFAPICreateInstance` function."
        )
    );
    assert!(stdout(&output).contains("implemented but not dispatched: nvOFInit"));

    Ok(())
}

#[test]
fn test_config_found_in_parent_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".validate-methods.json", r#"{ "endMarker": "/* Stop */" }"#)?;
    test.write_implementation("build/nvapi.cpp", &["Foo"])?;
    test.write_file(
        "build/nvapi_interface.cpp",
        "/* Start NVAPI methods */\ntbl(Foo)\n/* Stop */\ntbl(Bar)\n",
    )?;
    test.write_header("build/nvapi_interface.h", &["Foo"])?;

    let output = test
        .command()
        .current_dir(test.root().join("build"))
        .args(PATHS)
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("conf/methods.json", r#"{ "duplicateCheck": "multiset" }"#)?;
    test.write_implementation("nvapi.cpp", &["A", "B", "A"])?;
    test.write_interface("nvapi_interface.cpp", &["A", "A", "B"])?;
    test.write_header("nvapi_interface.h", &["A", "B"])?;

    let output = test.run(PATHS)?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).lines().next(), Some(DISPATCH_MISMATCH));

    let mut args = vec!["--config", "conf/methods.json"];
    args.extend_from_slice(PATHS);
    let output = test.run(&args)?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".validate-methods.json",
        r#"{ "startMarker": "/* End */", "endMarker": "/* End */" }"#,
    )?;
    test.write_implementation("nvapi.cpp", &["Foo"])?;
    test.write_interface("nvapi_interface.cpp", &["Foo"])?;
    test.write_header("nvapi_interface.h", &["Foo"])?;

    let output = test.run(PATHS)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("must differ"));

    Ok(())
}

#[test]
fn test_crossed_duplicates_fail() -> Result<()> {
    let test = CliTest::new()?;
    test.write_implementation("nvapi.cpp", &["A", "A", "B"])?;
    test.write_interface("nvapi_interface.cpp", &["A", "B", "B"])?;
    test.write_header("nvapi_interface.h", &["A", "B"])?;

    let output = test.run(PATHS)?;
    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    assert_eq!(stdout.lines().next(), Some(DISPATCH_MISMATCH));
    assert!(stdout.contains("declared more than once: A (x2)"));
    assert!(stdout.contains("dispatched more than once: B (x2)"));

    let mut args = vec!["--strict"];
    args.extend_from_slice(PATHS);
    let output = test.run(&args)?;
    assert_eq!(output.status.code(), Some(1));

    Ok(())
}

#[test]
fn test_strict_accepts_matching_duplicates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_implementation("nvapi.cpp", &["A", "B", "A"])?;
    test.write_interface("nvapi_interface.cpp", &["A", "A", "B"])?;
    test.write_header("nvapi_interface.h", &["A", "B"])?;

    let output = test.run(PATHS)?;
    assert_eq!(output.status.code(), Some(1));

    let mut args = vec!["--strict"];
    args.extend_from_slice(PATHS);
    let output = test.run(&args)?;
    assert_eq!(output.status.code(), Some(0), "stdout: {}", stdout(&output));

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_implementation("nvapi.cpp", &["Foo", "Bar"])?;
    test.write_interface("nvapi_interface.cpp", &["Foo"])?;
    test.write_header("nvapi_interface.h", &["Foo", "Bar"])?;

    let mut args = vec!["--format", "json"];
    args.extend_from_slice(PATHS);
    let output = test.run(&args)?;

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(report["outcome"], "dispatch-mismatch");
    assert_eq!(report["message"], DISPATCH_MISMATCH);
    assert_eq!(report["expected"], serde_json::json!(["Foo", "Bar"]));
    assert_eq!(report["found"], serde_json::json!(["Foo"]));
    assert_eq!(
        report["dispatchMismatch"]["notDispatched"],
        serde_json::json!(["Bar"])
    );

    Ok(())
}

#[test]
fn test_json_usage() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--format", "json"])?;

    assert_eq!(output.status.code(), Some(1));
    let report: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(report["outcome"], "invalid-usage");

    Ok(())
}
