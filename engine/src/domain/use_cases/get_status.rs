//! GetStatus query
//! Probes the managed unit and the optional dependent unit independently.

use crate::domain::ports::ServiceSupervisor;
use crate::domain::{Result, ServiceStatusResponse};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait GetStatus: Send + Sync {
    async fn execute(&self) -> Result<ServiceStatusResponse>;
}

pub struct GetStatusUseCase {
    supervisor: Arc<dyn ServiceSupervisor>,
    service_unit: String,
    dependent_unit: Option<String>,
}

impl GetStatusUseCase {
    pub fn new(
        supervisor: Arc<dyn ServiceSupervisor>,
        service_unit: String,
        dependent_unit: Option<String>,
    ) -> Self {
        Self {
            supervisor,
            service_unit,
            dependent_unit,
        }
    }
}

#[async_trait]
impl GetStatus for GetStatusUseCase {
    async fn execute(&self) -> Result<ServiceStatusResponse> {
        let process_active = self.supervisor.is_active(&self.service_unit).await;
        let dependent_process_active = match &self.dependent_unit {
            Some(unit) => self.supervisor.is_active(unit).await,
            None => false,
        };

        Ok(ServiceStatusResponse {
            process_active,
            dependent_process_active,
        })
    }
}
