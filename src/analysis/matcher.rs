use crate::models::Dialect;
use regex::{Captures, Regex};

/// Declaration classes the matcher can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Function,
    Constant,
    TypeAlias,
}

/// A classified line, with capture groups copied out verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDeclaration {
    Function {
        return_type: String,
        name: String,
        params: String,
    },
    Constant {
        name: String,
        value: String,
    },
    TypeAlias {
        underlying: String,
        alias: String,
    },
}

impl RawDeclaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            RawDeclaration::Function { .. } => DeclarationKind::Function,
            RawDeclaration::Constant { .. } => DeclarationKind::Constant,
            RawDeclaration::TypeAlias { .. } => DeclarationKind::TypeAlias,
        }
    }
}

/// One pattern of the matcher table.
///
/// Patterns capture exactly two (constants, type aliases) or three
/// (functions) groups, in the order of the `RawDeclaration` fields.
#[derive(Debug, Clone)]
pub struct MatchRule {
    kind: DeclarationKind,
    pattern: Regex,
}

impl MatchRule {
    pub fn new(kind: DeclarationKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            kind,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    fn apply(&self, line: &str) -> Option<RawDeclaration> {
        let caps = self.pattern.captures(line)?;
        let declaration = match self.kind {
            DeclarationKind::Function => RawDeclaration::Function {
                return_type: group(&caps, 1),
                name: group(&caps, 2),
                params: group(&caps, 3),
            },
            DeclarationKind::Constant => RawDeclaration::Constant {
                name: group(&caps, 1),
                value: group(&caps, 2),
            },
            DeclarationKind::TypeAlias => RawDeclaration::TypeAlias {
                underlying: group(&caps, 1).trim().to_string(),
                alias: group(&caps, 2),
            },
        };
        Some(declaration)
    }
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Ordered pattern table. The first rule that matches a line wins.
#[derive(Debug, Clone)]
pub struct DeclarationMatcher {
    rules: Vec<MatchRule>,
}

impl DeclarationMatcher {
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }

    /// Build the rule table for a header dialect.
    pub fn for_dialect(dialect: Dialect) -> Result<Self, regex::Error> {
        let mut rules = Vec::new();
        match dialect {
            Dialect::Gl => {
                rules.push(MatchRule::new(
                    DeclarationKind::Function,
                    r"^GLAPI\s(.*)\sAPIENTRY\s(\w+)\s\((.*)\);",
                )?);
                rules.push(MatchRule::new(
                    DeclarationKind::Constant,
                    r"^#define\s+(GL_\w+)\s+(-?\w+)",
                )?);
            }
            Dialect::Glfw => {
                rules.push(MatchRule::new(
                    DeclarationKind::Function,
                    r"^GLFWAPI\s(.*)\s(\w+)\((.*)\);",
                )?);
                rules.push(MatchRule::new(
                    DeclarationKind::Constant,
                    r"^#define\s+(GLFW_\w+)\s+(-?\w+)",
                )?);
                // function pointer typedefs keep their parameter list in the alias
                rules.push(MatchRule::new(
                    DeclarationKind::TypeAlias,
                    r"^typedef\s+(.+?\(\s*\*)\s*(GLFW\w*\)\s*\(.*\))\s*;",
                )?);
                rules.push(MatchRule::new(
                    DeclarationKind::TypeAlias,
                    r"^typedef\s+(.+?)\s+(GLFW\w*)\s*;",
                )?);
            }
        }
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Classify a single line of header text. Lines that match no rule,
    /// including declarations split over several lines, yield `None`.
    pub fn match_line(&self, line: &str) -> Option<RawDeclaration> {
        let line = line.trim_end_matches(['\r', '\n']);
        self.rules.iter().find_map(|rule| rule.apply(line))
    }
}
