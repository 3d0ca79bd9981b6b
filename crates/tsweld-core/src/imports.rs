//! Import requests and their aggregation into an import block.

use std::hash::{Hash, Hasher};

use indexmap::{IndexMap, IndexSet};

/// A request to import one or more named exports from a module path.
///
/// A request may depend on further requests, which are pulled in whenever
/// the request itself is rendered. Two requests are equal when they name
/// the same modules from the same path; dependencies do not take part.
#[derive(Clone, Debug)]
pub struct ImportRequest {
    modules: IndexSet<String>,
    path: String,
    dependencies: Vec<ImportRequest>,
}

impl ImportRequest {
    pub fn new(module: impl Into<String>, path: impl Into<String>) -> Self {
        let mut modules = IndexSet::new();
        modules.insert(module.into());
        Self {
            modules,
            path: path.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add another named export from the same path.
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.modules.insert(module.into());
        self
    }

    pub fn depends_on(mut self, dependency: ImportRequest) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(String::as_str)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn dependencies(&self) -> &[ImportRequest] {
        &self.dependencies
    }
}

impl PartialEq for ImportRequest {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.modules == other.modules
    }
}

impl Eq for ImportRequest {}

impl Hash for ImportRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Module order is irrelevant to equality, so only its size is hashed.
        self.path.hash(state);
        self.modules.len().hash(state);
    }
}

/// Insertion-ordered, duplicate-free collection of import requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSet {
    requests: IndexSet<ImportRequest>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an equal request was already present.
    pub fn insert(&mut self, request: ImportRequest) -> bool {
        self.requests.insert(request)
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportRequest> {
        self.requests.iter()
    }

    /// Module names grouped by path, both in discovery order.
    ///
    /// Dependencies are visited depth-first right after the request that
    /// declares them.
    pub fn grouped(&self) -> IndexMap<&str, IndexSet<&str>> {
        fn visit<'a>(request: &'a ImportRequest, groups: &mut IndexMap<&'a str, IndexSet<&'a str>>) {
            groups
                .entry(request.path())
                .or_default()
                .extend(request.modules());
            for dependency in request.dependencies() {
                visit(dependency, groups);
            }
        }

        let mut groups = IndexMap::new();
        for request in &self.requests {
            visit(request, &mut groups);
        }
        groups
    }

    /// Render one `import {..} from '..';` line per path followed by a blank
    /// line. An empty set renders as an empty string.
    pub fn render(&self) -> String {
        let groups = self.grouped();
        if groups.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        for (path, modules) in &groups {
            let modules: Vec<&str> = modules.iter().copied().collect();
            output.push_str(&format!("import {{{}}} from '{}';\n", modules.join(", "), path));
        }
        output.push('\n');
        tracing::debug!(paths = groups.len(), "rendered import block");
        output
    }
}

impl Extend<ImportRequest> for ImportSet {
    fn extend<I: IntoIterator<Item = ImportRequest>>(&mut self, iter: I) {
        self.requests.extend(iter);
    }
}

impl FromIterator<ImportRequest> for ImportSet {
    fn from_iter<I: IntoIterator<Item = ImportRequest>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ImportSet {
    type Item = ImportRequest;
    type IntoIter = indexmap::set::IntoIter<ImportRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.into_iter()
    }
}
