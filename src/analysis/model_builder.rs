use crate::analysis::matcher::RawDeclaration;
use crate::analysis::naming::{decapitalize_first, strip_prefix, to_snake_case};
use crate::models::{ConstantDecl, Dialect, FunctionDecl, HeaderModel, TypeAliasDecl};
use std::collections::{HashMap, HashSet};

/// Per-run options of the model builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Prefix of generated stub symbols; `None` uses the dialect default
    pub stub_prefix: Option<String>,
    /// Sort collections by exposed name; `None` uses the dialect default
    pub sort: Option<bool>,
    /// Keep only the first typedef of each declared name
    pub dedup_type_aliases: bool,
    pub ignored_functions: HashSet<String>,
    pub ignored_constants: HashSet<String>,
    pub ignored_type_aliases: HashSet<String>,
}

/// Turns matched declarations into the ordered header model.
pub struct ModelBuilder {
    options: BuildOptions,
    model: HeaderModel,
}

impl ModelBuilder {
    pub fn new(dialect: Dialect, source_name: &str, options: BuildOptions) -> Self {
        Self {
            options,
            model: HeaderModel::new(dialect, source_name),
        }
    }

    fn dialect(&self) -> Dialect {
        self.model.dialect
    }

    fn stub_prefix(&self) -> &str {
        self.options
            .stub_prefix
            .as_deref()
            .unwrap_or_else(|| self.model.dialect.default_stub_prefix())
    }

    /// Count one scanned header line.
    pub fn record_line(&mut self, matched: bool) {
        self.model.stats.lines_scanned += 1;
        if matched {
            self.model.stats.lines_matched += 1;
        }
    }

    /// Build the record for a matched declaration and append it, unless its
    /// native name is on the ignore list for its class. Returns whether the
    /// record was kept.
    pub fn add(&mut self, declaration: RawDeclaration) -> bool {
        let kept = match declaration {
            RawDeclaration::Function {
                return_type,
                name,
                params,
            } => self.add_function(return_type, name, params),
            RawDeclaration::Constant { name, value } => self.add_constant(name, value),
            RawDeclaration::TypeAlias { underlying, alias } => {
                self.add_type_alias(underlying, alias)
            }
        };
        if !kept {
            self.model.stats.ignored += 1;
        }
        kept
    }

    fn add_function(&mut self, return_type: String, name: String, params: String) -> bool {
        if name.is_empty() || self.options.ignored_functions.contains(&name) {
            return false;
        }
        let exposed_name =
            decapitalize_first(strip_prefix(&name, self.dialect().function_prefix_len()));
        let symbol_name = format!("{}{}", self.stub_prefix(), to_snake_case(&name));
        self.model.functions.push(FunctionDecl {
            return_type,
            native_name: name,
            symbol_name,
            exposed_name,
            param_text: params,
        });
        true
    }

    fn add_constant(&mut self, name: String, value: String) -> bool {
        if self.options.ignored_constants.contains(&name) {
            return false;
        }
        let prefix_len = self.dialect().constant_prefix().chars().count();
        self.model.constants.push(ConstantDecl {
            exposed_name: strip_prefix(&name, prefix_len).to_string(),
            native_name: name,
            raw_value: value,
        });
        true
    }

    fn add_type_alias(&mut self, underlying: String, alias: String) -> bool {
        let decl = TypeAliasDecl {
            alias_name: alias,
            underlying_type_text: underlying,
        };
        if self
            .options
            .ignored_type_aliases
            .contains(decl.declared_name())
        {
            return false;
        }
        self.model.type_aliases.push(decl);
        true
    }

    /// Finish the scan: dedup, sort and collision checks, in that order.
    pub fn finish(mut self) -> HeaderModel {
        if self.options.dedup_type_aliases {
            self.dedup_type_aliases();
        }

        if self.options.sort.unwrap_or(self.dialect().sorts_by_default()) {
            // stable, so equal exposed names keep header order
            self.model
                .functions
                .sort_by(|a, b| a.exposed_name.cmp(&b.exposed_name));
            self.model
                .constants
                .sort_by(|a, b| a.exposed_name.cmp(&b.exposed_name));
        }

        self.check_collisions();
        self.model
    }

    fn dedup_type_aliases(&mut self) {
        let mut seen = HashSet::new();
        let mut removed = Vec::new();
        self.model.type_aliases.retain(|alias| {
            let name = alias.declared_name().to_string();
            if seen.insert(name.clone()) {
                true
            } else {
                removed.push(name);
                false
            }
        });
        self.model.stats.duplicates_removed += removed.len();
        for name in removed {
            self.model
                .warnings
                .push(format!("Duplicate typedef {} removed", name));
        }
    }

    fn check_collisions(&mut self) {
        let functions = self
            .model
            .functions
            .iter()
            .map(|f| (f.exposed_name.as_str(), f.native_name.as_str()));
        let mut warnings = collisions("function", functions);

        let constants = self
            .model
            .constants
            .iter()
            .map(|c| (c.exposed_name.as_str(), c.native_name.as_str()));
        warnings.extend(collisions("constant", constants));

        self.model.warnings.extend(warnings);
    }
}

/// Report exposed names shared by distinct native names, in first-seen order.
fn collisions<'a>(
    class: &str,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut natives: HashMap<&str, Vec<&str>> = HashMap::new();
    for (exposed, native) in entries {
        let names = natives.entry(exposed).or_insert_with(|| {
            order.push(exposed);
            Vec::new()
        });
        if !names.contains(&native) {
            names.push(native);
        }
    }

    order
        .into_iter()
        .filter_map(|exposed| {
            let names = &natives[exposed];
            (names.len() > 1).then(|| {
                format!(
                    "Exposed {} name '{}' is shared by {}",
                    class,
                    exposed,
                    names.join(", ")
                )
            })
        })
        .collect()
}
