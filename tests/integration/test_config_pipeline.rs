//! Integration tests for configuration driven generation

use crate::common::{gl_function_entry, TestHeader};
use crate::fixtures::{gl_headers, glfw_headers};
use crate::{assert_appears_before, assert_generated_contains, assert_generated_not_contains};
use duk_bindgen::{extract, Dialect, GenerateConfig};
use std::fs;

#[test]
fn test_generation_is_idempotent() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    header.generate();
    let first = fs::read(header.output_path()).unwrap();
    header.generate();
    let second = fs::read(header.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_ignore_lists_remove_every_trace() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    let config = GenerateConfig {
        ignored_functions: vec!["glfwSwapBuffers".to_string()],
        ignored_constants: vec!["GLFW_KEY_ESCAPE".to_string()],
        ignored_type_aliases: vec!["GLFWkeyfun".to_string()],
        ..header.config()
    };
    let summary = header.generate_with(&config);
    let output = header.read_output();

    assert_eq!(summary.function_count, 4);
    assert_eq!(summary.constant_count, 6);
    assert_eq!(summary.type_alias_count, 4);
    assert_eq!(summary.stats.ignored, 3);
    assert_generated_not_contains!(output, "SwapBuffers");
    assert_generated_not_contains!(output, "swap_buffers");
    assert_generated_not_contains!(output, "KEY_ESCAPE");
    assert_generated_not_contains!(output, "GLFWkeyfun");
}

#[test]
fn test_unsorted_gl_keeps_header_order() {
    let header = TestHeader::new(Dialect::Gl, gl_headers::CORE_EXCERPT);
    let config = GenerateConfig {
        sort: Some(false),
        ..header.config()
    };
    header.generate_with(&config);
    let output = header.read_output();

    assert_appears_before!(output, "\"cullFace\",", "\"clear\",");
    assert_appears_before!(output, "\"VERSION_1_0\",", "\"DEPTH_BUFFER_BIT\",");
}

#[test]
fn test_sorted_glfw_on_request() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    let config = GenerateConfig {
        sort: Some(true),
        ..header.config()
    };
    header.generate_with(&config);
    let output = header.read_output();

    assert_appears_before!(output, "\"createWindow\",", "\"init\",");
    assert_appears_before!(output, "\"DONT_CARE\",", "\"VERSION_MAJOR\",");
}

#[test]
fn test_custom_stub_prefix() {
    let header = TestHeader::new(
        Dialect::Gl,
        "GLAPI void APIENTRY glClear (GLbitfield mask);\n",
    );
    let config = GenerateConfig {
        stub_prefix: Some("js_".to_string()),
        ..header.config()
    };
    header.generate_with(&config);

    assert_generated_contains!(
        header.read_output(),
        &gl_function_entry("clear", "js_gl_clear", 1)
    );
}

#[test]
fn test_banner_and_includes_override() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    let config = GenerateConfig {
        banner: Some("glfw.c\nCopyright (c) 2016 Example".to_string()),
        includes: Some(vec!["duktape.h".to_string(), "GLFW/glfw3.h".to_string()]),
        ..header.config()
    };
    header.generate_with(&config);
    let output = header.read_output();

    assert!(output.starts_with("/*\n * glfw.c\n * Copyright (c) 2016 Example\n */"));
    assert_generated_contains!(output, "#include \"duktape.h\"\n#include \"GLFW/glfw3.h\"\n");
    assert_generated_not_contains!(output, "Duktape binding skeleton generated by");
}

#[test]
fn test_config_file_round_trip_drives_generation() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    let file = header.path().join("duk-bindgen.json");
    let config = GenerateConfig {
        ignored_functions: vec!["glfwInit".to_string()],
        ..header.config()
    };
    config.save_to_file(&file).unwrap();

    let loaded = GenerateConfig::from_file(&file).unwrap();
    assert_eq!(loaded, config);

    let model = extract(&loaded).unwrap();
    assert_eq!(model.dialect, Dialect::Glfw);
    assert!(model.functions.iter().all(|f| f.native_name != "glfwInit"));
    assert!(!header.output_path().exists());
}

#[test]
fn test_missing_header_fails_without_output() {
    let header = TestHeader::new(Dialect::Gl, "");
    fs::remove_file(header.header_path()).unwrap();

    let result = duk_bindgen::generate_from_config(&header.config());
    match result {
        Err(duk_bindgen::Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {:?}", other),
    }
    assert!(!header.output_path().exists());
}

#[test]
fn test_wrong_dialect_yields_empty_tables() {
    let header = TestHeader::new(Dialect::Glfw, gl_headers::CORE_EXCERPT);
    let summary = header.generate();

    assert_eq!(summary.function_count, 0);
    assert_eq!(summary.constant_count, 0);
    assert_generated_contains!(header.read_output(), "    { NULL, NULL, 0 }\n");
}
