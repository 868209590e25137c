use crate::configuration::PluginKind;

/// What a plugin declares eligible for per-language override.
///
/// Fixed per plugin, never discovered at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translatability {
    /// Configuration paths (`/`-separated for nested keys).
    pub paths: &'static [&'static str],
    /// Whether the list `size` may differ per language while this plugin
    /// is active.
    pub size: bool,
}

impl Translatability {
    pub const NONE: Translatability = Translatability {
        paths: &[],
        size: false,
    };

    #[must_use]
    pub const fn paths(paths: &'static [&'static str]) -> Self {
        Self { paths, size: false }
    }

    #[must_use]
    pub const fn with_size(mut self) -> Self {
        self.size = true;
        self
    }
}

/// Answers which configuration values of a plugin are translatable.
///
/// Implemented by the plugin registry; the configuration model only needs
/// this narrow view of it.
pub trait TranslatableLookup {
    /// `None` when no plugin `plugin_id` of `kind` is registered.
    fn translatability(&self, kind: PluginKind, plugin_id: &str) -> Option<Translatability>;
}
