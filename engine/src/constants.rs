//! Engine-wide defaults

pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:9999";

pub const DEFAULT_SITES_AVAILABLE: &str = "/etc/nginx/sites-available";
pub const DEFAULT_SITES_ENABLED: &str = "/etc/nginx/sites-enabled";
pub const DEFAULT_WORKSPACE_ROOT: &str = "/srv/www";

pub const DEFAULT_SERVICE_UNIT: &str = "nginx";
pub const DEFAULT_DEPENDENT_UNIT: &str = "php8.3-fpm";
pub const DEFAULT_PHP_SOCKET: &str = "/var/run/php/php8.3-fpm.sock";

/// Conventional suffix for virtual-host configuration files
pub const CONF_SUFFIX: &str = ".conf";
