//! # duk-bindgen
//!
//! Generate Duktape binding skeletons from C library headers.
//!
//! The generator scans a header line by line with a small table of regular
//! expressions, collects function prototypes, `#define` constants and
//! (for GLFW) typedefs, and writes a C source file with one stub per
//! function plus the constant and function tables of a Duktape module.
//! Stub bodies are left for hand completion.
//!
//! ## Features
//!
//! - 🔍 **Two dialects**: OpenGL core profile (`glcorearb.h`) and GLFW 3 (`glfw3.h`)
//! - 🏷️ **Naming rules**: `glClear` becomes the stub `cpr_gl_clear` exposed as `clear`
//! - 🚫 **Ignore lists**: leave out functions, constants or typedefs by native name
//! - ♻️ **Idempotent output**: no timestamps, identical input gives identical bytes
//! - 🧪 **Test runner**: compare a script's output with the block embedded in its source
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate build/gl_skeleton.h from lib/gl3w/include/GL/glcorearb.h
//! duk-bindgen generate
//!
//! # GLFW with explicit paths
//! duk-bindgen generate --dialect glfw -i include/GLFW/glfw3.h -o build/glfw_skeleton.h
//!
//! # Inspect what would be extracted
//! duk-bindgen inspect --dialect glfw -i include/GLFW/glfw3.h
//!
//! # Run a test case
//! duk-bindgen run-test -s tests/hello.coffee ./cepora tests/hello.coffee
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use duk_bindgen::{generate_from_config, Dialect, GenerateConfig};
//!
//! let config = GenerateConfig {
//!     header_path: Some("include/GLFW/glfw3.h".to_string()),
//!     ignored_functions: vec!["glfwGetProcAddress".to_string()],
//!     ..GenerateConfig::for_dialect(Dialect::Glfw)
//! };
//!
//! let summary = generate_from_config(&config)?;
//! println!("{} functions", summary.function_count);
//! # Ok::<(), duk_bindgen::Error>(())
//! ```
//!
//! ## Example
//!
//! Given this header line:
//!
//! ```c
//! GLAPI void APIENTRY glClear (GLbitfield mask);
//! ```
//!
//! the `gl` dialect generates:
//!
//! ```c
//! duk_ret_t cpr_gl_clear(duk_context *ctx) {
//! /* void glClear(GLbitfield mask); */
//!   return 0;
//! }
//! ```
//!
//! ## Configuration
//!
//! Configure via a JSON file passed with `--config`:
//!
//! ```json
//! {
//!   "dialect": "glfw",
//!   "header_path": "lib/glfw/include/GLFW/glfw3.h",
//!   "output_path": "build/glfw_skeleton.h",
//!   "ignored_functions": ["glfwGetProcAddress"],
//!   "ignored_constants": [],
//!   "ignored_type_aliases": []
//! }
//! ```

pub mod analysis;
mod error;
pub mod generators;
pub mod harness;
pub mod interface;
pub mod models;

pub use error::{Error, Result};
pub use models::*;

// Convenience re-exports for common use cases
pub use analysis::HeaderAnalyzer;
pub use interface::config::GenerateConfig;
pub use interface::output::{Logger, ProgressReporter};
pub use interface::{emit, extract, generate_from_config, GenerationSummary};
