//! Service targets entered by the operator.

/// Comma-separated list of service directories, in input order.
///
/// Entries are kept exactly as typed; the deploy script uses them verbatim
/// while env files go to the trimmed path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceTargets {
    raw: Vec<String>,
}

impl ServiceTargets {
    /// Split on `,`. Blank input yields an empty list.
    pub fn parse(input: &str) -> Self {
        if input.trim().is_empty() {
            return Self::default();
        }
        Self { raw: input.split(',').map(str::to_string).collect() }
    }

    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    pub fn iter(&self) -> impl Iterator<Item = ServiceTarget<'_>> {
        self.raw.iter().map(|raw| ServiceTarget { raw })
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// One entry of [`ServiceTargets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceTarget<'a> {
    raw: &'a str,
}

impl<'a> ServiceTarget<'a> {
    /// Entry as typed, used in prompts and the deploy script.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Directory the env file is written under.
    pub fn dir(&self) -> &'a str {
        self.raw.trim()
    }
}
