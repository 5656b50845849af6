/// Log tags identifying which part of the system produced a message
///
/// Each tag maps to one `--debug-<key>` command-line flag.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Api,
    Cache,
    Batch,
}

impl LogTag {
    /// Every tag, for flag scanning at logger init
    pub fn all() -> &'static [LogTag] {
        &[LogTag::System, LogTag::Api, LogTag::Cache, LogTag::Batch]
    }

    /// Key used in `--debug-<key>` flags and config sets
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Api => "api",
            LogTag::Cache => "cache",
            LogTag::Batch => "batch",
        }
    }

    /// Uncolored fixed name written to the log file
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Api => "API",
            LogTag::Cache => "CACHE",
            LogTag::Batch => "BATCH",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}
