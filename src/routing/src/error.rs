use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("route path '{path}' is already registered by '{existing}'")]
    DuplicatePath { path: String, existing: String },

    #[error("route name '{0}' is already registered")]
    DuplicateName(String),

    #[error("no route named '{0}'")]
    UnknownRoute(String),

    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },

    #[error("route '{route}' can not use '{value}' for parameter '{param}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },

    #[error("unknown route revision '{0}', expected 'stats' or 'classic'")]
    UnknownRevision(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
