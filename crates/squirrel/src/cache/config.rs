//! Cache configuration types and builder patterns

/// Configuration for cache behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Label attached to every log event the cache emits
    pub name: String,

    /// Number of entries to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { name: "cache".to_string(), initial_capacity: 0 }
    }
}

impl CacheConfig {
    /// Create a new configuration builder
    pub fn builder() -> CacheConfigBuilder {
        CacheConfigBuilder::default()
    }

    /// Quick preset for a named cache with default capacity
    ///
    /// # Example
    /// ```
    /// use squirrel::CacheConfig;
    ///
    /// let config = CacheConfig::named("sessions");
    /// assert_eq!(config.name, "sessions");
    /// ```
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// Builder for CacheConfig with fluent API
#[derive(Debug, Default)]
pub struct CacheConfigBuilder {
    config: CacheConfig,
}

impl CacheConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log label
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the number of entries to pre-allocate
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CacheConfig {
        self.config
    }
}
