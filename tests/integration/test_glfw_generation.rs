//! Integration tests for the GLFW dialect

use crate::common::{glfw_constant_entry, glfw_function_entry, TestHeader};
use crate::fixtures::glfw_headers;
use crate::{assert_appears_before, assert_generated_contains, assert_generated_not_contains};
use duk_bindgen::Dialect;

#[test]
fn test_glfw3_excerpt_counts() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    let summary = header.generate();

    assert_eq!(summary.type_alias_count, 5);
    assert_eq!(summary.constant_count, 7);
    assert_eq!(summary.function_count, 5);
    assert_eq!(summary.stats.lines_matched, 17);
}

#[test]
fn test_typedefs_reproduced() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    header.generate();
    let output = header.read_output();

    assert_generated_contains!(output, "/* GLFW typedefs */\n");
    assert_generated_contains!(output, "typedef struct GLFWwindow GLFWwindow;\n");
    assert_generated_contains!(output, "typedef void (* GLFWglproc)(void);\n");
    assert_generated_contains!(output, "typedef void (* GLFWerrorfun)(int,const char*);\n");
    assert_appears_before!(output, "typedef void (* GLFWglproc)", "typedef struct GLFWmonitor");
}

#[test]
fn test_stubs_in_scan_order() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    header.generate();
    let output = header.read_output();

    assert_generated_contains!(
        output,
        "\nduk_ret_t glfw_init(duk_context *ctx) {\n  /* int glfwInit(void); */\n  return 1;\n}\n"
    );
    assert_generated_contains!(
        output,
        "\nduk_ret_t glfw_terminate(duk_context *ctx) {\n  /* void glfwTerminate(void); */\n  return 0;\n}\n"
    );
    assert_appears_before!(output, "glfw_terminate(duk_context", "glfw_create_window(duk_context");
    assert_appears_before!(output, "\"VERSION_MAJOR\",", "\"KEY_SPACE\",");
    assert_appears_before!(output, "\"TRUE\",", "\"FALSE\",");
}

#[test]
fn test_live_table_entries() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    header.generate();
    let output = header.read_output();

    assert_generated_contains!(
        output,
        &glfw_function_entry("createWindow", "glfw_create_window", 5)
    );
    assert_generated_contains!(output, &glfw_function_entry("init", "glfw_init", 0));
    assert_generated_contains!(
        output,
        &glfw_function_entry("setErrorCallback", "glfw_set_error_callback", 1)
    );
    assert_generated_contains!(output, &glfw_constant_entry("DONT_CARE", "GLFW_DONT_CARE"));
    assert_generated_contains!(output, "duk_ret_t dukopen_glfw(duk_context *ctx) {");
    assert_generated_not_contains!(output, "/* {");
    assert_generated_not_contains!(output, "GL/gl3w.h");
}

#[test]
fn test_guard_and_export_macros_not_constants() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::GLFW3_EXCERPT);
    header.generate();
    let output = header.read_output();

    assert_generated_not_contains!(output, "_glfw3_h_");
    assert_generated_not_contains!(output, "__declspec");
}

#[test]
fn test_duplicate_typedef_removed_with_warning() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::DUPLICATE_TYPEDEF);
    let summary = header.generate();

    assert_eq!(summary.type_alias_count, 2);
    assert_eq!(summary.stats.duplicates_removed, 1);
    assert_eq!(summary.warnings, vec!["Duplicate typedef GLFWwindow removed"]);
    assert_eq!(
        header
            .read_output()
            .matches("typedef struct GLFWwindow GLFWwindow;")
            .count(),
        1
    );
}

#[test]
fn test_duplicates_kept_when_dedup_disabled() {
    let header = TestHeader::new(Dialect::Glfw, glfw_headers::DUPLICATE_TYPEDEF);
    let config = duk_bindgen::GenerateConfig {
        dedup_type_aliases: Some(false),
        ..header.config()
    };
    let summary = header.generate_with(&config);

    assert_eq!(summary.type_alias_count, 3);
    assert!(summary.warnings.is_empty());
}
