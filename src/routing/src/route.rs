use crate::{Location, PathPattern, RouteParams, RouteResult, View};

#[derive(Debug, Clone)]
pub struct Route {
    pattern: PathPattern,
    name: String,
    view: View,
}

impl Route {
    pub fn new(path: &str, name: impl Into<String>, view: View) -> RouteResult<Self> {
        Ok(Route {
            pattern: PathPattern::parse(path)?,
            name: name.into(),
            view,
        })
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// Result of resolving a location against a [`crate::RouteTable`].
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: RouteParams,
    pub location: Location,
}

impl RouteMatch<'_> {
    pub fn name(&self) -> &str {
        self.route.name()
    }

    pub fn view(&self) -> View {
        self.route.view()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}
