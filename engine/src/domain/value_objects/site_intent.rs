//! Creation intent value object
//! Ephemeral description of what a site's configuration should contain.
//! Converted to literal config text by the generator and then discarded.

/// Port a generated server block listens on when the operator leaves it unset
pub const DEFAULT_LISTEN_PORT: u16 = 80;

/// Tagged creation/update intent for a site
#[derive(Debug, Clone)]
pub enum SiteIntent {
    /// Literal configuration text, written verbatim
    Raw { content: String },

    /// Reverse proxy to a local upstream port
    Proxy {
        listen_port: u16,
        server_name: String,
        upstream_port: u16,
    },

    /// Static file serving, optionally with PHP passthrough
    Static {
        listen_port: u16,
        server_name: String,
        /// Explicit content root; defaults to `<workspace>/<base name>`
        root: Option<String>,
        php_enabled: bool,
    },
}
