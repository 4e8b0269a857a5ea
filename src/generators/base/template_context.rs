use crate::models::{ConstantDecl, FunctionDecl, TypeAliasDecl};
use serde::{Deserialize, Serialize};

/// Template context wrapper for FunctionDecl with the derived binding metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionContext {
    pub native_name: String,
    pub symbol_name: String,
    pub exposed_name: String,
    pub return_type: String,
    pub param_text: String,
    pub signature: String,     // Computed field
    pub return_count: u8,      // Computed field
    pub arg_count: usize,      // Computed field
    pub key_literal: String,   // `"clear",`
    pub symbol_entry: String,  // `cpr_gl_clear,`
}

impl FunctionContext {
    pub fn from_function_decl(decl: &FunctionDecl) -> Self {
        Self {
            native_name: decl.native_name.clone(),
            symbol_name: decl.symbol_name.clone(),
            exposed_name: decl.exposed_name.clone(),
            return_type: decl.return_type.clone(),
            param_text: decl.param_text.clone(),
            signature: decl.native_signature(),
            return_count: decl.return_count(),
            arg_count: decl.arg_count(),
            key_literal: table_key(&decl.exposed_name),
            symbol_entry: format!("{},", decl.symbol_name),
        }
    }
}

/// Template context wrapper for ConstantDecl
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantContext {
    pub native_name: String,
    pub exposed_name: String,
    pub raw_value: String,
    pub key_literal: String,
    pub value_expression: String,
}

impl ConstantContext {
    pub fn from_constant_decl(decl: &ConstantDecl) -> Self {
        Self {
            native_name: decl.native_name.clone(),
            exposed_name: decl.exposed_name.clone(),
            raw_value: decl.raw_value.clone(),
            key_literal: table_key(&decl.exposed_name),
            value_expression: decl.value_expression(),
        }
    }
}

/// Template context wrapper for TypeAliasDecl
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasContext {
    pub alias_name: String,
    pub declared_name: String,
    pub underlying_type_text: String,
    pub declaration: String,
}

impl TypeAliasContext {
    pub fn from_type_alias_decl(decl: &TypeAliasDecl) -> Self {
        Self {
            alias_name: decl.alias_name.clone(),
            declared_name: decl.declared_name().to_string(),
            underlying_type_text: decl.underlying_type_text.clone(),
            declaration: decl.declaration(),
        }
    }
}

/// Quoted string key followed by the field separator, as it appears in a
/// Duktape list entry.
fn table_key(name: &str) -> String {
    format!("\"{}\",", name)
}
