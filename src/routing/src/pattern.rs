use crate::{RouteError, RouteParams, RouteResult};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Characters escaped when a parameter value is written into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const STATIC_SCORE: u8 = 2;
const PARAM_SCORE: u8 = 1;

/// Why [`PathPattern::build`] could not fill a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError<'a> {
    Missing(&'a str),
    /// `.` and `..` would be collapsed by URL normalization.
    DotSegment(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Parsed route path such as `/playerDetail/:id`.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        let invalid = |reason: &'static str| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let body = pattern
            .strip_prefix('/')
            .ok_or_else(|| invalid("must start with '/'"))?;
        let body = body.strip_suffix('/').unwrap_or(body);

        let mut segments = Vec::new();

        if !body.is_empty() {
            for part in body.split('/') {
                if part.is_empty() {
                    return Err(invalid("empty path segment"));
                }

                let segment = match part.strip_prefix(':') {
                    Some(name) => {
                        if name.is_empty()
                            || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                        {
                            return Err(invalid("invalid parameter name"));
                        }
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(invalid("duplicate parameter name"));
                        }
                        Segment::Param(name.to_string())
                    }
                    None => {
                        if part.contains(&[':', '?', '#'][..]) {
                            return Err(invalid("reserved character in static segment"));
                        }
                        Segment::Static(part.to_string())
                    }
                };

                segments.push(segment);
            }
        }

        Ok(PathPattern {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches an already query-stripped path.
    ///
    /// One trailing slash is ignored, static segments compare ASCII
    /// case-insensitively and parameter values are percent-decoded.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);

        let parts: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();

        for (segment, part) in self.segments.iter().zip(parts) {
            if part.is_empty() {
                return None;
            }

            let decoded = percent_decode_str(part).decode_utf8().ok()?;

            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(&decoded) {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name.as_str(), decoded),
            }
        }

        Some(params)
    }

    /// Per-segment ranking; a higher score wins when several patterns match.
    pub fn score(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Static(_) => STATIC_SCORE,
                Segment::Param(_) => PARAM_SCORE,
            })
            .collect()
    }

    /// True when both patterns accept exactly the same paths.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Static(a), Segment::Static(b)) => a.eq_ignore_ascii_case(b),
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Fills the pattern with `params`; `Err` names the first parameter that
    /// is missing or can not be written as a path segment.
    pub fn build<'a>(&'a self, params: &RouteParams) -> Result<String, BuildError<'a>> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .filter(|v| !v.is_empty())
                        .ok_or(BuildError::Missing(name.as_str()))?;
                    if value == "." || value == ".." {
                        return Err(BuildError::DotSegment(name.as_str()));
                    }
                    path.extend(utf8_percent_encode(value, SEGMENT));
                }
            }
        }

        Ok(path)
    }
}
