pub mod command_runner;
pub mod mock_runner;
pub mod service_supervisor;

pub use command_runner::{render_argv, CommandOutput, CommandRunner};
pub use mock_runner::MockCommandRunner;
pub use service_supervisor::ServiceSupervisor;
