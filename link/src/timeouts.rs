//! Timeout configuration for backend requests.

use std::time::Duration;

/// Timeout configuration for backend requests.
///
/// # Examples
///
/// ```rust
/// use vaga_link::VagaLinkTimeouts;
/// use std::time::Duration;
///
/// // Use defaults (recommended for most cases)
/// let timeouts = VagaLinkTimeouts::default();
///
/// // Custom timeouts for high-latency environments
/// let timeouts = VagaLinkTimeouts::builder()
///     .request_timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct VagaLinkTimeouts {
    /// Timeout for establishing connections (TCP + TLS handshake).
    /// Default: 10 seconds
    pub connection_timeout: Duration,

    /// Total timeout for a request, body included.
    /// Default: 10 seconds
    pub request_timeout: Duration,
}

impl Default for VagaLinkTimeouts {
    fn default() -> Self {
        Self {
            connection_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl VagaLinkTimeouts {
    /// Create a new builder for custom timeout configuration.
    pub fn builder() -> VagaLinkTimeoutsBuilder {
        VagaLinkTimeoutsBuilder::new()
    }

    /// Timeouts optimized for local development instances.
    pub fn fast() -> Self {
        Self {
            connection_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Timeouts optimized for high-latency networks.
    pub fn relaxed() -> Self {
        Self {
            connection_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Builder for [`VagaLinkTimeouts`].
#[derive(Debug, Clone)]
pub struct VagaLinkTimeoutsBuilder {
    timeouts: VagaLinkTimeouts,
}

impl VagaLinkTimeoutsBuilder {
    fn new() -> Self {
        Self {
            timeouts: VagaLinkTimeouts::default(),
        }
    }

    /// Set the connection timeout (TCP + TLS handshake).
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connection_timeout = timeout;
        self
    }

    /// Set the connection timeout in seconds.
    pub fn connection_timeout_secs(self, secs: u64) -> Self {
        self.connection_timeout(Duration::from_secs(secs))
    }

    /// Set the total request timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.request_timeout = timeout;
        self
    }

    /// Set the total request timeout in seconds.
    pub fn request_timeout_secs(self, secs: u64) -> Self {
        self.request_timeout(Duration::from_secs(secs))
    }

    /// Build the timeout configuration.
    pub fn build(self) -> VagaLinkTimeouts {
        self.timeouts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeouts() {
        let timeouts = VagaLinkTimeouts::default();
        assert_eq!(timeouts.connection_timeout, Duration::from_secs(10));
        assert_eq!(timeouts.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder() {
        let timeouts = VagaLinkTimeouts::builder()
            .connection_timeout_secs(3)
            .request_timeout_secs(45)
            .build();

        assert_eq!(timeouts.connection_timeout, Duration::from_secs(3));
        assert_eq!(timeouts.request_timeout, Duration::from_secs(45));
    }

    #[test]
    fn test_presets() {
        let fast = VagaLinkTimeouts::fast();
        assert!(fast.request_timeout <= Duration::from_secs(5));

        let relaxed = VagaLinkTimeouts::relaxed();
        assert!(relaxed.request_timeout >= Duration::from_secs(60));
    }
}
