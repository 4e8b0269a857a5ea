use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header dialect the generator is configured for.
///
/// A dialect fixes the declaration patterns, the family prefixes that get
/// stripped from native names and the layout of the emitted skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Dialect {
    /// OpenGL core profile headers (`glcorearb.h`)
    Gl,
    /// GLFW 3 headers (`glfw3.h`)
    Glfw,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Gl, Dialect::Glfw];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Gl => "gl",
            Dialect::Glfw => "glfw",
        }
    }

    /// Number of leading characters removed from a native function name
    /// before it is decapitalized into the scripting name (`glClear` -> `clear`).
    pub fn function_prefix_len(&self) -> usize {
        match self {
            Dialect::Gl => "gl".len(),
            Dialect::Glfw => "glfw".len(),
        }
    }

    /// Macro family prefix including its trailing underscore.
    pub fn constant_prefix(&self) -> &'static str {
        match self {
            Dialect::Gl => "GL_",
            Dialect::Glfw => "GLFW_",
        }
    }

    /// Prefix prepended to the snake_case stub symbol.
    pub fn default_stub_prefix(&self) -> &'static str {
        match self {
            Dialect::Gl => "cpr_",
            Dialect::Glfw => "",
        }
    }

    /// Whether collections are sorted by exposed name before emission.
    pub fn sorts_by_default(&self) -> bool {
        matches!(self, Dialect::Gl)
    }

    pub fn parses_type_aliases(&self) -> bool {
        matches!(self, Dialect::Glfw)
    }

    /// Name of the Duktape module opener, e.g. `dukopen_gl`.
    pub fn module_opener(&self) -> String {
        format!("dukopen_{}", self.as_str())
    }

    /// Headers included at the top of the generated skeleton.
    pub fn default_includes(&self) -> Vec<String> {
        let includes: &[&str] = match self {
            Dialect::Gl => &["duktape.h", "GL/gl3w.h"],
            Dialect::Glfw => &["duktape.h"],
        };
        includes.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_header_path(&self) -> &'static str {
        match self {
            Dialect::Gl => "lib/gl3w/include/GL/glcorearb.h",
            Dialect::Glfw => "lib/glfw/include/GLFW/glfw3.h",
        }
    }

    pub fn default_output_path(&self) -> &'static str {
        match self {
            Dialect::Gl => "build/gl_skeleton.h",
            Dialect::Glfw => "build/glfw_skeleton.h",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gl" | "opengl" => Ok(Dialect::Gl),
            "glfw" => Ok(Dialect::Glfw),
            other => Err(format!("unknown dialect '{}'. Use 'gl' or 'glfw'", other)),
        }
    }
}

/// Config files accept the same spellings as the command line.
impl TryFrom<String> for Dialect {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A function prototype extracted from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDecl {
    /// Raw return type text, e.g. `void` or `const GLubyte *`
    pub return_type: String,
    /// Identifier as declared in C
    pub native_name: String,
    /// Symbol of the generated stub (`cpr_gl_clear`)
    pub symbol_name: String,
    /// Key registered in the scripting namespace (`clear`)
    pub exposed_name: String,
    /// Raw text between the parentheses, unsplit
    pub param_text: String,
}

impl FunctionDecl {
    /// Number of values the stub pushes onto the interpreter stack.
    pub fn return_count(&self) -> u8 {
        if self.return_type == "void" {
            0
        } else {
            1
        }
    }

    /// Textual parameter count heuristic: `void` has none, otherwise one more
    /// than the number of commas. Function pointer parameters overcount.
    pub fn arg_count(&self) -> usize {
        if self.param_text == "void" {
            0
        } else {
            self.param_text.matches(',').count() + 1
        }
    }

    /// The original C signature, for the comment above each stub.
    pub fn native_signature(&self) -> String {
        format!(
            "{} {}({});",
            self.return_type, self.native_name, self.param_text
        )
    }
}

/// A `#define` constant extracted from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantDecl {
    pub exposed_name: String,
    pub native_name: String,
    /// Literal text of the value, not evaluated
    pub raw_value: String,
}

impl ConstantDecl {
    /// Constant tables only hold doubles, so every macro is cast.
    pub fn value_expression(&self) -> String {
        format!("(double) {}", self.native_name)
    }
}

/// A `typedef` extracted from the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAliasDecl {
    /// Declarator text starting at the family identifier. For function pointer
    /// typedefs this keeps the trailing parameter list so the typedef can be
    /// reproduced verbatim.
    pub alias_name: String,
    pub underlying_type_text: String,
}

impl TypeAliasDecl {
    /// The identifier the typedef introduces (`GLFWerrorfun` for
    /// `GLFWerrorfun)(int,const char*)`).
    pub fn declared_name(&self) -> &str {
        let end = self
            .alias_name
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.alias_name.len());
        &self.alias_name[..end]
    }

    pub fn declaration(&self) -> String {
        format!("typedef {} {};", self.underlying_type_text, self.alias_name)
    }
}

/// Counters collected while streaming a header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub lines_scanned: usize,
    pub lines_matched: usize,
    pub ignored: usize,
    pub duplicates_removed: usize,
}

/// Everything extracted from one header, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderModel {
    pub dialect: Dialect,
    /// File name of the header the model was extracted from
    pub source_name: String,
    pub functions: Vec<FunctionDecl>,
    pub constants: Vec<ConstantDecl>,
    pub type_aliases: Vec<TypeAliasDecl>,
    pub stats: ScanStats,
    /// Problems the regex extraction cannot rule out, e.g. name collisions
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl HeaderModel {
    pub fn new(dialect: Dialect, source_name: impl Into<String>) -> Self {
        Self {
            dialect,
            source_name: source_name.into(),
            functions: Vec::new(),
            constants: Vec::new(),
            type_aliases: Vec::new(),
            stats: ScanStats::default(),
            warnings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.constants.is_empty() && self.type_aliases.is_empty()
    }
}
