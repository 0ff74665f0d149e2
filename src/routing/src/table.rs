use crate::{BuildError, Location, Route, RouteError, RouteMatch, RouteParams, RouteResult, View};
use log::{debug, trace};
use std::collections::HashMap;

/// Immutable set of routes, unique by path and by name.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    names: HashMap<String, usize>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    pub fn new(routes: Vec<Route>) -> RouteResult<Self> {
        let mut names = HashMap::with_capacity(routes.len());

        for (idx, route) in routes.iter().enumerate() {
            if let Some(existing) = routes[..idx]
                .iter()
                .find(|r| r.pattern().same_shape(route.pattern()))
            {
                return Err(RouteError::DuplicatePath {
                    path: route.path().to_string(),
                    existing: existing.name().to_string(),
                });
            }

            if names.insert(route.name().to_string(), idx).is_some() {
                return Err(RouteError::DuplicateName(route.name().to_string()));
            }
        }

        debug!("route table built with {} routes", routes.len());

        Ok(RouteTable { routes, names })
    }

    /// Selects the route for a navigation target such as `/playerDetail/42?tab=games`.
    ///
    /// The most specific pattern wins; among equally specific patterns the
    /// first declared one does. `None` means not found.
    pub fn resolve(&self, target: &str) -> Option<RouteMatch<'_>> {
        let location = Location::parse(target);

        let mut best: Option<(&Route, RouteParams, Vec<u8>)> = None;

        for route in &self.routes {
            let Some(params) = route.pattern().matches(location.path()) else {
                continue;
            };

            let score = route.pattern().score();

            let is_better = match &best {
                Some((_, _, best_score)) => score > *best_score,
                None => true,
            };

            if is_better {
                best = Some((route, params, score));
            }
        }

        match best {
            Some((route, params, _)) => {
                trace!("resolved {} to {}", target, route.name());
                Some(RouteMatch {
                    route,
                    params,
                    location,
                })
            }
            None => {
                trace!("no route for {}", target);
                None
            }
        }
    }

    /// Builds the path of the route called `name`.
    pub fn href(&self, name: &str, params: &RouteParams) -> RouteResult<String> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        route
            .pattern()
            .build(params)
            .map_err(|err| match err {
                BuildError::Missing(param) => RouteError::MissingParam {
                    route: name.to_string(),
                    param: param.to_string(),
                },
                BuildError::DotSegment(param) => RouteError::InvalidParam {
                    route: name.to_string(),
                    param: param.to_string(),
                    value: params.get(param).unwrap_or_default().to_string(),
                },
            })
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.names.get(name).map(|&idx| &self.routes[idx])
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<(String, String, View)>,
}

impl RouteTableBuilder {
    pub fn route(mut self, path: &str, name: &str, view: View) -> Self {
        self.entries.push((path.to_string(), name.to_string(), view));
        self
    }

    pub fn build(self) -> RouteResult<RouteTable> {
        let routes = self
            .entries
            .into_iter()
            .map(|(path, name, view)| Route::new(&path, name, view))
            .collect::<RouteResult<Vec<_>>>()?;

        RouteTable::new(routes)
    }
}
