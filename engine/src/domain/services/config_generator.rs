//! Configuration generator
//! Pure translation of a creation intent into literal nginx config text.
//! Output is byte-deterministic for identical inputs.

use crate::domain::value_objects::{SiteIntent, SiteName};
use crate::domain::{DomainError, Result};
use std::path::PathBuf;

pub struct ConfigGenerator {
    workspace_root: PathBuf,
    php_socket: String,
}

impl ConfigGenerator {
    pub fn new(workspace_root: impl Into<PathBuf>, php_socket: impl Into<String>) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            php_socket: php_socket.into(),
        }
    }

    /// Resolve the content root for a static site
    pub fn static_root(&self, name: &SiteName, root: Option<&str>) -> String {
        match root {
            Some(path) if !path.trim().is_empty() => path.trim().to_string(),
            _ => self.workspace_root.join(name.base()).display().to_string(),
        }
    }

    /// Produce the configuration text for an intent
    pub fn render(&self, name: &SiteName, intent: &SiteIntent) -> Result<String> {
        match intent {
            SiteIntent::Raw { content } => {
                if content.trim().is_empty() {
                    return Err(DomainError::InvalidInput("Content is required".to_string()));
                }
                Ok(content.clone())
            }
            SiteIntent::Proxy {
                listen_port,
                server_name,
                upstream_port,
            } => Ok(format!(
                "server {{\n\
                 \x20   listen {listen_port};\n\
                 \x20   server_name {server_name};\n\
                 \n\
                 \x20   location / {{\n\
                 \x20       proxy_pass http://127.0.0.1:{upstream_port};\n\
                 \x20       proxy_set_header Host $host;\n\
                 \x20       proxy_set_header X-Real-IP $remote_addr;\n\
                 \x20   }}\n\
                 }}\n"
            )),
            SiteIntent::Static {
                listen_port,
                server_name,
                root,
                php_enabled,
            } => {
                let root = self.static_root(name, root.as_deref());
                let php_block = if *php_enabled {
                    format!(
                        "\n\
                         \x20   location ~ \\.php$ {{\n\
                         \x20       include snippets/fastcgi-php.conf;\n\
                         \x20       fastcgi_pass unix:{};\n\
                         \x20   }}\n",
                        self.php_socket
                    )
                } else {
                    String::new()
                };

                Ok(format!(
                    "server {{\n\
                     \x20   listen {listen_port};\n\
                     \x20   server_name {server_name};\n\
                     \x20   root {root};\n\
                     \x20   index index.html index.htm index.php;\n\
                     \n\
                     \x20   location / {{\n\
                     \x20       try_files $uri $uri/ =404;\n\
                     \x20   }}\n\
                     {php_block}\
                     }}\n"
                ))
            }
        }
    }

    /// Informational page installed into a freshly created content directory
    pub fn placeholder_page(&self, base: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n\
             \x20   <meta charset=\"UTF-8\">\n\
             \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             \x20   <title>Welcome to {base}</title>\n\
             </head>\n\
             <body>\n\
             \x20   <h1>It works!</h1>\n\
             \x20   <p>The site <b>{base}</b> is now served by nginx.</p>\n\
             \x20   <p>This placeholder page was generated automatically. Replace the\n\
             \x20   contents of the site directory with your own build output.</p>\n\
             </body>\n\
             </html>\n"
        )
    }
}
