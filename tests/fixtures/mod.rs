#![allow(dead_code)]

pub mod gl_headers;
pub mod glfw_headers;
