//! Route tree definitions.
//!
//! A [`Route`] is one node of the page tree discovered by the host framework.
//! Children are owned by their parent; there are no back-references, so the
//! tree can be cloned and rebuilt freely.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A node in the route tree.
///
/// Serialization always writes `path`, empty relative child segments
/// included; only redirect stubs without a path omit it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Route {
    /// Route identifier. Absent for redirect stubs and some layout routes.
    #[serde(default)]
    pub name: Option<String>,

    /// Path segment or pattern. Relative (no leading `/`) for nested children.
    #[serde(default)]
    pub path: String,

    /// Backing page file. Distinguishes real pages from redirect stubs.
    #[serde(default)]
    pub file: Option<String>,

    /// Redirect target.
    #[serde(default)]
    pub redirect: Option<String>,

    /// Nested routes, in declaration order.
    #[serde(default)]
    pub children: Vec<Route>,

    /// Opaque page metadata, carried through untouched.
    #[serde(default)]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Route {
    /// Create a named page route.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create a redirect stub with no backing file.
    pub fn redirect(target: impl Into<String>) -> Self {
        Self {
            redirect: Some(target.into()),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    /// True for redirect stubs, which are never localized.
    pub fn is_redirect_only(&self) -> bool {
        self.redirect.is_some() && self.file.is_none()
    }

    /// Copy every field except children.
    pub(crate) fn shallow_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            path: self.path.clone(),
            file: self.file.clone(),
            redirect: self.redirect.clone(),
            children: Vec::new(),
            meta: self.meta.clone(),
        }
    }

    /// Depth-first, pre-order iterator over this route and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.walk().count()
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let write_path = !(self.is_redirect_only() && self.path.is_empty());

        let len = usize::from(self.name.is_some())
            + usize::from(write_path)
            + usize::from(self.file.is_some())
            + usize::from(self.redirect.is_some())
            + usize::from(!self.children.is_empty())
            + usize::from(!self.meta.is_empty());
        let mut state = serializer.serialize_struct("Route", len)?;

        if let Some(name) = &self.name {
            state.serialize_field("name", name)?;
        }
        if write_path {
            state.serialize_field("path", &self.path)?;
        }
        if let Some(file) = &self.file {
            state.serialize_field("file", file)?;
        }
        if let Some(redirect) = &self.redirect {
            state.serialize_field("redirect", redirect)?;
        }
        if !self.children.is_empty() {
            state.serialize_field("children", &self.children)?;
        }
        if !self.meta.is_empty() {
            state.serialize_field("meta", &self.meta)?;
        }
        state.end()
    }
}

/// Iterator returned by [`Route::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a Route>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Route;

    fn next(&mut self) -> Option<Self::Item> {
        let route = self.stack.pop()?;
        self.stack.extend(route.children.iter().rev());
        Some(route)
    }
}

/// Depth-first iterator over a whole forest of routes.
pub fn walk_all(routes: &[Route]) -> impl Iterator<Item = &Route> {
    routes.iter().flat_map(Route::walk)
}
