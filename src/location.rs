use crate::DecodeOptions;
use serde_json::Value;

/// One step of a path walked by [`at`][`crate::at`].
///
/// ```
/// use jsondec::PathSegment;
///
/// assert_eq!(PathSegment::Key("a".to_owned()), "a".into());
/// assert_eq!(PathSegment::Index(3), 3.into());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Builds a `Vec<PathSegment>` from a mix of keys and indices.
///
/// ```
/// use jsondec::{path, PathSegment};
///
/// assert_eq!(
///     vec![PathSegment::Key("a".to_owned()), PathSegment::Index(1)],
///     path!["a", 1],
/// );
/// ```
#[macro_export]
macro_rules! path {
    ($($segment:expr),* $(,)?) => {
        vec![$($crate::PathSegment::from($segment)),*]
    };
}

#[derive(Clone, Copy, Debug)]
enum Step<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// Where a decoder currently is within its input.
///
/// Each location borrows its parent, so descending into a structure never
/// allocates. The path is only rendered into a string once an error needs it.
#[derive(Clone, Copy, Debug)]
pub struct Location<'a> {
    parent: Option<&'a Location<'a>>,
    step: Step<'a>,
    depth: usize,
    max_depth: Option<usize>,
}

impl Location<'static> {
    pub(crate) fn root(options: &DecodeOptions) -> Self {
        Location {
            parent: None,
            step: Step::Root,
            depth: 0,
            max_depth: options.max_depth(),
        }
    }
}

impl<'a> Location<'a> {
    pub(crate) fn key<'b>(&'b self, key: &'b str) -> Location<'b> {
        self.child(Step::Key(key))
    }

    pub(crate) fn index(&self, index: usize) -> Location<'_> {
        self.child(Step::Index(index))
    }

    fn child<'b>(&'b self, step: Step<'b>) -> Location<'b> {
        Location {
            parent: Some(self),
            step,
            depth: self.depth + 1,
            max_depth: self.max_depth,
        }
    }

    pub(crate) fn exceeds_max_depth(&self) -> bool {
        self.max_depth.map_or(false, |max| self.depth > max)
    }

    pub(crate) fn render(&self) -> String {
        let mut steps = Vec::with_capacity(self.depth);
        let mut current = Some(self);
        while let Some(location) = current {
            steps.push(location.step);
            current = location.parent;
        }

        let mut out = String::new();
        for step in steps.iter().rev() {
            match step {
                Step::Root => {}
                Step::Key(key) if is_identifier(key) => {
                    out.push('.');
                    out.push_str(key);
                }
                Step::Key(key) => {
                    out.push('[');
                    out.push_str(&quote(key));
                    out.push(']');
                }
                Step::Index(index) => {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                }
            }
        }

        out
    }
}

/// Renders a key bare if it is an identifier, JSON-quoted otherwise.
pub(crate) fn escape_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_owned()
    } else {
        quote(key)
    }
}

fn quote(key: &str) -> String {
    Value::String(key.to_owned()).to_string()
}

// ^[A-Za-z_$][A-Za-z0-9_$]*$
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
