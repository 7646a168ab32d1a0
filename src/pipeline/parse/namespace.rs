pub const TRAINING_CENTER_NS: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
pub const ACTIVITY_EXTENSION_NS: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";

/// Prefix → URI table used to resolve query paths such as `tcx:Lap/tcx:Track`.
///
/// Prefixes here are query-side only. Elements are matched by URI, so a file
/// may bind the same namespace to any prefix it likes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespaces {
    bindings: Vec<(String, String)>,
}

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// `tcx` for the Training Center schema, `tpx` for the activity extension.
    pub fn tcx() -> Self {
        Self::new()
            .with("tcx", TRAINING_CENTER_NS)
            .with("tpx", ACTIVITY_EXTENSION_NS)
    }

    pub fn with(mut self, prefix: &str, uri: &str) -> Self {
        self.bindings.retain(|(p, _)| p != prefix);
        self.bindings.push((prefix.to_string(), uri.to_string()));
        self
    }

    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, uri)| uri.as_str())
    }

    /// Splits a `/`-separated path into resolved steps. Returns `None` when a
    /// step uses a prefix that is not bound.
    pub(crate) fn compile<'a>(&'a self, path: &'a str) -> Option<Vec<Step<'a>>> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .map(|step| match step.split_once(':') {
                Some((prefix, local)) => self.uri(prefix).map(|uri| Step {
                    namespace: Some(uri),
                    local,
                }),
                None => Some(Step {
                    namespace: None,
                    local: step,
                }),
            })
            .collect()
    }
}

/// One resolved path step. An unprefixed step only matches elements in no
/// namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step<'a> {
    pub namespace: Option<&'a str>,
    pub local: &'a str,
}
