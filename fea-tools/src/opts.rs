//! Options used while parsing

const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for configuring parsing behaviour.
#[derive(Clone, Debug)]
pub struct Opts {
    pub(crate) infer_enumeration: bool,
    pub(crate) max_depth: usize,
}

impl Opts {
    /// Create a new default set of options
    pub fn new() -> Self {
        Self::default()
    }

    /// If `true`, a pair positioning rule is reported as needing enumeration
    /// whenever either operand is an inline class, even without `enum`.
    ///
    /// Default is `false`: the flag mirrors the explicit `enum` keyword.
    pub fn infer_enumeration(mut self, flag: bool) -> Self {
        self.infer_enumeration = flag;
        self
    }

    /// Specify the maximum nesting depth of blocks. Default is 64.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            infer_enumeration: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
