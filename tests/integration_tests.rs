//! Integration tests for the param-inject library

use std::fs;

use pretty_assertions::assert_eq;

use param_inject::{
    load, render, render_files, render_with_config, Config, RenderConfig, RenderError, Template,
    UnknownPolicy,
};

/// Write a template and optional parameter file into a fresh directory
fn setup(template: &str, params: Option<&str>) -> (tempfile::TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("template.html"), template).unwrap();
    if let Some(params) = params {
        fs::write(dir.path().join("params"), params).unwrap();
    }
    let config = Config {
        template: dir.path().join("template.html"),
        params: dir.path().join("params"),
        ..Config::default()
    };
    (dir, config)
}

#[test]
fn test_user_scenario() {
    let (_dir, config) = setup("user: ${params}", Some("alice"));
    assert_eq!(render_files(&config).unwrap(), "user: alice");
}

#[test]
fn test_html_page() {
    let template = r#"<!doctype html>
<html>
  <head><script>window.PARAMS = ${params};</script></head>
  <body data-params='$params'>price: $5</body>
</html>
"#;
    let (_dir, config) = setup(template, Some(r#"{"api":"https://example.test"}"#));
    let out = render_files(&config).unwrap();
    assert_eq!(
        out,
        r#"<!doctype html>
<html>
  <head><script>window.PARAMS = {"api":"https://example.test"};</script></head>
  <body data-params='{"api":"https://example.test"}'>price: $5</body>
</html>
"#
    );
}

#[test]
fn test_occurrences_replaced_at_former_positions() {
    let cases = [
        ("", 0),
        ("${params}", 1),
        ("x${params}y${params}z", 2),
        ("$params,$params,${params}", 3),
    ];
    for (template, n) in cases {
        assert_eq!(Template::parse(template).count("params"), n);
        let out = render(template, "params", "VALUE").unwrap();
        assert_eq!(out.matches("VALUE").count(), n, "template {template:?}");
        assert_eq!(out.matches("${params}").count(), 0);
        assert_eq!(out, template.replace("${params}", "VALUE").replace("$params", "VALUE"));
    }
}

#[test]
fn test_no_placeholder_round_trips() {
    let config = RenderConfig::new().with_unknown_policy(UnknownPolicy::Keep);
    let templates = ["", "plain", "$ $$ ${", "{params}", "$$params_suffix", "${ params }"];
    for template in templates {
        assert_eq!(Template::parse(template).count("params"), 0);
        assert_eq!(render_with_config(template, "v", &config).unwrap(), template);
    }
}

#[test]
fn test_injected_placeholder_not_expanded() {
    let (_dir, config) = setup("<p>${params}</p>", Some("${params}"));
    assert_eq!(render_files(&config).unwrap(), "<p>${params}</p>");
}

#[test]
fn test_empty_parameter_file() {
    let (_dir, config) = setup("[${params}]", Some(""));
    assert_eq!(render_files(&config).unwrap(), "[]");
}

#[test]
fn test_missing_template() {
    let (dir, mut config) = setup("", Some("v"));
    config.template = dir.path().join("absent.html");
    let err = render_files(&config).unwrap_err();
    assert!(matches!(err, RenderError::NotFound { path } if path == dir.path().join("absent.html")));
}

#[test]
fn test_load_twice_is_identical() {
    let (_dir, config) = setup("same ${params}", None);
    assert_eq!(load(&config.template).unwrap(), load(&config.template).unwrap());
}

#[test]
fn test_config_file_drives_render() {
    let (dir, _) = setup("Bearer ${token} for ${user}", None);
    fs::write(dir.path().join("token"), "abc\n").unwrap();
    let config_path = dir.path().join("param-inject.toml");
    fs::write(
        &config_path,
        format!(
            "template = {:?}\nparams = {:?}\nplaceholder = \"token\"\nunknown = \"keep\"\ntrim_trailing_newline = true\n",
            dir.path().join("template.html").display().to_string(),
            dir.path().join("token").display().to_string(),
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();
    assert_eq!(render_files(&config).unwrap(), "Bearer abc for ${user}");
}
