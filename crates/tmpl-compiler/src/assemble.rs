//! Template assembly
//!
//! Wraps the lowered root expression into the exported render function and
//! prepends one default import per component dependency:
//!
//!   import _xFoo from 'x-foo';
//!   export default function tmpl($api, $cmp, $slotset, $ctx) {
//!       return <root>;
//!   }

use crate::ast::{Expression, Program, Statement};
use crate::config::RuntimeApi;
use crate::ir::Metadata;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// Local binding name for a component module specifier.
///
/// `_` followed by the camel-cased specifier, with any non-alphanumeric
/// character acting as a word break: `x-foo` → `_xFoo`, `ns:my-button` →
/// `_nsMyButton`.
pub fn dependency_identifier(specifier: &str) -> String {
    let mut ident = String::with_capacity(specifier.len() + 1);
    ident.push('_');
    let mut upper_next = false;
    for c in specifier.chars() {
        if c.is_ascii_alphanumeric() {
            if upper_next {
                ident.push(c.to_ascii_uppercase());
            } else {
                ident.push(c);
            }
            upper_next = false;
        } else {
            upper_next = ident.len() > 1;
        }
    }
    ident
}

/// Component specifiers and the local names they are imported under.
///
/// One table lives for one top-level compile. Declared dependencies are
/// registered up front in metadata order (duplicates dropped); a custom
/// element whose component was not declared is registered when first lowered.
/// Local names are unique: a name already taken gets a numeric suffix
/// (`x-foo` → `_xFoo`, then `xFoo` → `_xFoo2`).
#[derive(Debug, Default)]
pub struct DependencyNames {
    locals: IndexMap<String, String>,
    taken: FxHashSet<String>,
}

impl DependencyNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the declared dependencies of a template
    pub fn from_metadata(metadata: &Metadata) -> Self {
        let mut names = Self::new();
        for specifier in &metadata.dependencies {
            names.register(specifier);
        }
        names
    }

    /// Local name for `specifier`, registering it if it was not declared
    pub fn local_name(&mut self, specifier: &str) -> String {
        if let Some(local) = self.locals.get(specifier) {
            return local.clone();
        }
        log::warn!(
            "component '{}' is not a declared dependency; importing it anyway",
            specifier
        );
        self.register(specifier)
    }

    fn register(&mut self, specifier: &str) -> String {
        if let Some(local) = self.locals.get(specifier) {
            return local.clone();
        }
        let base = dependency_identifier(specifier);
        let mut local = base.clone();
        let mut suffix = 2;
        while self.taken.contains(&local) {
            local = format!("{}{}", base, suffix);
            suffix += 1;
        }
        self.taken.insert(local.clone());
        self.locals.insert(specifier.to_string(), local.clone());
        local
    }

    /// Specifiers in import order
    pub fn specifiers(&self) -> Vec<String> {
        self.locals.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.locals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

/// Build the program for a lowered template
pub fn assemble(root: Expression, dependencies: &DependencyNames, api: &RuntimeApi) -> Program {
    let mut body: Vec<Statement> = dependencies
        .locals
        .iter()
        .map(|(specifier, local)| Statement::ImportDefault {
            local: local.clone(),
            source: specifier.clone(),
        })
        .collect();

    body.push(Statement::ExportDefaultFunction {
        name: api.function_name.clone(),
        params: api.render_params(),
        body: vec![Statement::Return { argument: root }],
    });

    Program { body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrettyPrint;

    #[test]
    fn test_dependency_identifier() {
        assert_eq!(dependency_identifier("x-foo"), "_xFoo");
        assert_eq!(dependency_identifier("ns:my-button"), "_nsMyButton");
        assert_eq!(dependency_identifier("-lead"), "_lead");
        assert_eq!(dependency_identifier("plain"), "_plain");
    }

    #[test]
    fn test_declared_dependencies_keep_order() {
        let metadata = Metadata {
            dependencies: vec!["x-b".into(), "x-a".into(), "x-b".into()],
        };
        let names = DependencyNames::from_metadata(&metadata);
        assert_eq!(names.specifiers(), vec!["x-b", "x-a"]);
    }

    #[test]
    fn test_colliding_specifiers_get_distinct_locals() {
        let metadata = Metadata {
            dependencies: vec!["x-foo".into(), "xFoo".into(), "x_foo".into()],
        };
        let mut names = DependencyNames::from_metadata(&metadata);
        assert_eq!(names.local_name("x-foo"), "_xFoo");
        assert_eq!(names.local_name("xFoo"), "_xFoo2");
        assert_eq!(names.local_name("x_foo"), "_xFoo3");
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_undeclared_component_is_registered() {
        let mut names = DependencyNames::new();
        assert!(names.is_empty());
        assert_eq!(names.local_name("x-late"), "_xLate");
        assert_eq!(names.local_name("x-late"), "_xLate");
        assert_eq!(names.specifiers(), vec!["x-late"]);
    }

    #[test]
    fn test_assemble_shape() {
        let api = RuntimeApi::default();
        let metadata = Metadata {
            dependencies: vec!["x-foo".into(), "x-bar".into()],
        };
        let program = assemble(
            Expression::array(vec![]),
            &DependencyNames::from_metadata(&metadata),
            &api,
        );
        assert_eq!(
            program.pretty_print(),
            "import _xFoo from 'x-foo';\n\
             import _xBar from 'x-bar';\n\
             export default function tmpl($api, $cmp, $slotset, $ctx) {\n    \
             return [];\n\
             }\n"
        );
    }
}
