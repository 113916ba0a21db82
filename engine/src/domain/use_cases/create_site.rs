//! CreateSite use case
//! Validates, generates content, provisions the content directory for
//! static sites, writes the config, auto-enables it and reloads.

use crate::domain::ports::ServiceSupervisor;
use crate::domain::services::{ConfigGenerator, ContentDirectoryService, SiteRepository};
use crate::domain::value_objects::{ServiceAction, SiteIntent, SiteName};
use crate::domain::{CreateSiteCommand, CreateSiteResponse, DomainError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
pub trait CreateSite: Send + Sync {
    async fn execute(&self, command: CreateSiteCommand) -> Result<CreateSiteResponse>;
}

pub struct CreateSiteUseCase {
    repository: Arc<SiteRepository>,
    generator: Arc<ConfigGenerator>,
    directories: Arc<ContentDirectoryService>,
    supervisor: Arc<dyn ServiceSupervisor>,
    service_unit: String,
}

impl CreateSiteUseCase {
    pub fn new(
        repository: Arc<SiteRepository>,
        generator: Arc<ConfigGenerator>,
        directories: Arc<ContentDirectoryService>,
        supervisor: Arc<dyn ServiceSupervisor>,
        service_unit: String,
    ) -> Self {
        Self {
            repository,
            generator,
            directories,
            supervisor,
            service_unit,
        }
    }
}

#[async_trait]
impl CreateSite for CreateSiteUseCase {
    async fn execute(&self, command: CreateSiteCommand) -> Result<CreateSiteResponse> {
        let name = SiteName::parse(&command.name)?;
        let content = self.generator.render(&name, &command.intent)?;

        if self.repository.exists(&name).await {
            return Err(DomainError::AlreadyExists(name.to_string()));
        }

        let mut warnings = Vec::new();

        // Directory bootstrap comes before the write so a fresh static site is
        // servable the moment its config goes live. Failures here are warnings:
        // config creation takes priority over directory bootstrap.
        if let SiteIntent::Static { root, .. } = &command.intent {
            let root = self.generator.static_root(&name, root.as_deref());
            let page = self.generator.placeholder_page(name.base());
            warnings.extend(self.directories.provision(&root, &page).await);
        }

        self.repository.write(&name, &content).await?;

        // Auto-enable; the config exists either way, so these are warnings too
        match self.repository.link(&name).await {
            Ok(()) => {
                let reload = self
                    .supervisor
                    .control(&self.service_unit, ServiceAction::Reload)
                    .await;
                if !reload.success {
                    warn!(site = %name, detail = %reload.detail(), "Reload after create failed");
                    warnings.push(format!(
                        "Site enabled but reload failed: {}",
                        reload.detail()
                    ));
                }
            }
            Err(e) => {
                warn!(site = %name, error = %e, "Auto-enable after create failed");
                warnings.push(format!("Site created but could not be enabled: {}", e));
            }
        }

        info!(site = %name, warnings = warnings.len(), "Site created");

        Ok(CreateSiteResponse {
            name: name.to_string(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{CommandOutput, MockCommandRunner};
    use crate::domain::use_cases::test_support::{
        directories, generator, repository, stub_absent, MockSupervisor,
    };
    use crate::domain::value_objects::DEFAULT_LISTEN_PORT;

    fn use_case(
        runner: &MockCommandRunner,
        supervisor: Arc<MockSupervisor>,
        staging: &std::path::Path,
    ) -> CreateSiteUseCase {
        CreateSiteUseCase::new(
            repository(runner, staging),
            generator(),
            directories(runner, staging),
            supervisor,
            "nginx".to_string(),
        )
    }

    fn raw_command(name: &str, content: &str) -> CreateSiteCommand {
        CreateSiteCommand {
            name: name.to_string(),
            intent: SiteIntent::Raw {
                content: content.to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_create_raw_site_writes_and_enables() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        stub_absent(&runner, "demo.conf");
        let supervisor = Arc::new(MockSupervisor::new());
        let use_case = use_case(&runner, supervisor.clone(), staging.path());

        let response = use_case
            .execute(raw_command("demo", "server { listen 80; }"))
            .await
            .unwrap();

        assert_eq!(response.name, "demo.conf");
        assert!(response.warnings.is_empty());
        assert!(runner.issued("cp "));
        assert!(runner.issued(
            "ln -s /etc/nginx/sites-available/demo.conf /etc/nginx/sites-enabled/demo.conf"
        ));
        assert_eq!(
            supervisor.controls(),
            vec![("nginx".to_string(), ServiceAction::Reload)]
        );
    }

    #[tokio::test]
    async fn test_duplicate_create_performs_no_write() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        // The availability probe succeeds: the site already exists
        let supervisor = Arc::new(MockSupervisor::new());
        let use_case = use_case(&runner, supervisor, staging.path());

        let err = use_case
            .execute(raw_command("demo", "server {}"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyExists(_)));
        assert!(!runner.issued("cp "));
        assert!(!runner.issued("ln "));
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        let use_case = use_case(&runner, Arc::new(MockSupervisor::new()), staging.path());

        let err = use_case
            .execute(raw_command("", "server {}"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_content_rejected() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        let use_case = use_case(&runner, Arc::new(MockSupervisor::new()), staging.path());

        let err = use_case.execute(raw_command("demo", "  ")).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_static_site_provisions_directory() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        stub_absent(&runner, "blog.conf");
        runner.stub("test -d /srv/www/blog", CommandOutput::failed(""));
        let supervisor = Arc::new(MockSupervisor::new());
        let use_case = use_case(&runner, supervisor, staging.path());

        let command = CreateSiteCommand {
            name: "blog".to_string(),
            intent: SiteIntent::Static {
                listen_port: 8080,
                server_name: "blog".to_string(),
                root: None,
                php_enabled: false,
            },
        };
        let response = use_case.execute(command).await.unwrap();

        assert!(response.warnings.is_empty());
        assert!(runner.issued("mkdir -p /srv/www/blog"));
        let calls = runner.calls();
        assert!(calls
            .iter()
            .any(|c| c.starts_with("cp ") && c.ends_with("/srv/www/blog/index.html")));
    }

    #[tokio::test]
    async fn test_directory_failure_does_not_abort_create() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        stub_absent(&runner, "blog.conf");
        runner.stub("test -d /srv/www/blog", CommandOutput::failed(""));
        runner.stub("mkdir -p ", CommandOutput::failed("mkdir: denied"));
        let supervisor = Arc::new(MockSupervisor::new());
        let use_case = use_case(&runner, supervisor, staging.path());

        let command = CreateSiteCommand {
            name: "blog".to_string(),
            intent: SiteIntent::Static {
                listen_port: DEFAULT_LISTEN_PORT,
                server_name: "blog".to_string(),
                root: None,
                php_enabled: false,
            },
        };
        let response = use_case.execute(command).await.unwrap();

        assert_eq!(response.warnings.len(), 1);
        assert!(response.warnings[0].contains("mkdir: denied"));
        // Config was still written and enabled
        let calls = runner.calls();
        assert!(calls
            .iter()
            .any(|c| c.starts_with("cp ") && c.ends_with("/etc/nginx/sites-available/blog.conf")));
    }

    #[tokio::test]
    async fn test_write_failure_aborts() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        stub_absent(&runner, "demo.conf");
        runner.stub("cp ", CommandOutput::failed("cp: disk full"));
        let supervisor = Arc::new(MockSupervisor::new());
        let use_case = use_case(&runner, supervisor.clone(), staging.path());

        let err = use_case
            .execute(raw_command("demo", "server {}"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::WriteFailed(_)));
        assert!(!runner.issued("ln "));
        assert!(supervisor.controls().is_empty());
    }

    #[tokio::test]
    async fn test_reload_failure_is_warning_not_error() {
        let runner = MockCommandRunner::new();
        let staging = tempfile::tempdir().unwrap();
        stub_absent(&runner, "demo.conf");
        let supervisor = Arc::new(MockSupervisor::new());
        supervisor.set_control_ok(false);
        let use_case = use_case(&runner, supervisor, staging.path());

        let response = use_case
            .execute(raw_command("demo", "server {}"))
            .await
            .unwrap();

        assert_eq!(response.warnings.len(), 1);
        assert!(response.warnings[0].contains("reload failed"));
    }
}
