//! Shared test utilities for E2E tests
//!
//! Tests drive the real axum router in-process through `tower::oneshot`.
//! The only faked piece is the system boundary: `FakeSystem` implements the
//! `CommandRunner` port by interpreting the issued argv against an in-memory
//! filesystem and service table, so every layer above the port (repository,
//! generator, use cases, supervisor adapter, handlers) runs for real.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use nm_engine::adapters::rest::build_router;
use nm_engine::application::UseCaseRegistry;
use nm_engine::domain::ports::{render_argv, CommandOutput, CommandRunner};
use nm_engine::infrastructure::{Settings, SystemctlSupervisor};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::ServiceExt;

pub const AVAILABLE: &str = "/etc/nginx/sites-available";
pub const ENABLED: &str = "/etc/nginx/sites-enabled";
pub const WORKSPACE: &str = "/srv/www";

#[derive(Default)]
struct FsState {
    files: HashMap<String, String>,
    /// link path -> target path
    symlinks: HashMap<String, String>,
    dirs: HashSet<String>,
    active: HashMap<String, bool>,
}

/// Scripted stand-in for the privileged system: interprets the exact argv
/// the engine issues
pub struct FakeSystem {
    state: Mutex<FsState>,
    calls: Mutex<Vec<String>>,
    config_valid: AtomicBool,
    reload_ok: AtomicBool,
}

impl FakeSystem {
    pub fn new() -> Self {
        let mut state = FsState::default();
        state.dirs.insert(AVAILABLE.to_string());
        state.dirs.insert(ENABLED.to_string());
        state.dirs.insert(WORKSPACE.to_string());
        state.active.insert("nginx".to_string(), true);
        state.active.insert("php8.3-fpm".to_string(), true);

        Self {
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            config_valid: AtomicBool::new(true),
            reload_ok: AtomicBool::new(true),
        }
    }

    // ===== Scripting =====

    pub fn set_config_valid(&self, valid: bool) {
        self.config_valid.store(valid, Ordering::SeqCst);
    }

    pub fn set_reload_ok(&self, ok: bool) {
        self.reload_ok.store(ok, Ordering::SeqCst);
    }

    pub fn set_active(&self, unit: &str, active: bool) {
        self.state
            .lock()
            .unwrap()
            .active
            .insert(unit.to_string(), active);
    }

    /// Seed an existing site, optionally enabled
    pub fn add_site(&self, name: &str, content: &str, enabled: bool) {
        let mut state = self.state.lock().unwrap();
        let available = format!("{}/{}", AVAILABLE, name);
        state.files.insert(available.clone(), content.to_string());
        if enabled {
            state
                .symlinks
                .insert(format!("{}/{}", ENABLED, name), available);
        }
    }

    // ===== Inspection =====

    pub fn file(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_symlink(&self, link: &str) -> bool {
        self.state.lock().unwrap().symlinks.contains_key(link)
    }

    pub fn has_dir(&self, dir: &str) -> bool {
        self.state.lock().unwrap().dirs.contains(dir)
    }

    pub fn is_active(&self, unit: &str) -> bool {
        *self
            .state
            .lock()
            .unwrap()
            .active
            .get(unit)
            .unwrap_or(&false)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn issued(&self, prefix: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.starts_with(prefix))
    }

    // ===== Command interpretation =====

    fn exists(state: &FsState, path: &str) -> bool {
        state.files.contains_key(path)
            || state.symlinks.contains_key(path)
            || state.dirs.contains(path)
    }

    fn run_ls(&self, path: &str) -> CommandOutput {
        let state = self.state.lock().unwrap();
        if state.dirs.contains(path) {
            let prefix = format!("{}/", path);
            let mut entries: Vec<&str> = state
                .files
                .keys()
                .chain(state.symlinks.keys())
                .filter_map(|p| p.strip_prefix(&prefix))
                .filter(|rest| !rest.contains('/'))
                .collect();
            entries.sort_unstable();
            let mut listing = entries.join("\n");
            if !listing.is_empty() {
                listing.push('\n');
            }
            CommandOutput::ok(listing)
        } else if Self::exists(&state, path) {
            CommandOutput::ok(format!("{}\n", path))
        } else {
            CommandOutput::failed(format!(
                "ls: cannot access '{}': No such file or directory",
                path
            ))
        }
    }

    fn run_cat(&self, path: &str) -> CommandOutput {
        let state = self.state.lock().unwrap();
        let resolved = state
            .symlinks
            .get(path)
            .map(String::as_str)
            .unwrap_or(path);
        match state.files.get(resolved) {
            Some(content) => CommandOutput::ok(content.clone()),
            None => CommandOutput::failed(format!(
                "cat: {}: No such file or directory",
                path
            )),
        }
    }

    fn run_cp(&self, src: &str, dst: &str) -> CommandOutput {
        // The engine stages content in a real local file before installing it
        match std::fs::read_to_string(src) {
            Ok(content) => {
                self.state
                    .lock()
                    .unwrap()
                    .files
                    .insert(dst.to_string(), content);
                CommandOutput::ok("")
            }
            Err(e) => CommandOutput::failed(format!("cp: cannot stat '{}': {}", src, e)),
        }
    }

    fn run_ln(&self, target: &str, link: &str) -> CommandOutput {
        let mut state = self.state.lock().unwrap();
        if Self::exists(&state, link) {
            return CommandOutput::failed(format!(
                "ln: failed to create symbolic link '{}': File exists",
                link
            ));
        }
        state.symlinks.insert(link.to_string(), target.to_string());
        CommandOutput::ok("")
    }

    fn run_rm(&self, args: &[String]) -> CommandOutput {
        let mut state = self.state.lock().unwrap();
        match args {
            [flag, path] if flag == "-f" => {
                state.files.remove(path);
                state.symlinks.remove(path);
                CommandOutput::ok("")
            }
            [flag, dir] if flag == "-rf" => {
                let prefix = format!("{}/", dir);
                state.dirs.remove(dir);
                state.dirs.retain(|d| !d.starts_with(&prefix));
                state.files.retain(|p, _| !p.starts_with(&prefix));
                state.symlinks.retain(|p, _| !p.starts_with(&prefix));
                CommandOutput::ok("")
            }
            _ => CommandOutput::failed(format!("rm: unsupported arguments {:?}", args)),
        }
    }

    fn run_systemctl(&self, args: &[String]) -> CommandOutput {
        let mut state = self.state.lock().unwrap();
        match args {
            [verb, unit] if verb == "is-active" => {
                if *state.active.get(unit.as_str()).unwrap_or(&false) {
                    CommandOutput::ok("active\n")
                } else {
                    // is-active exits non-zero for inactive units
                    CommandOutput {
                        success: false,
                        stdout: "inactive\n".to_string(),
                        stderr: String::new(),
                    }
                }
            }
            [verb, unit] if verb == "start" => {
                state.active.insert(unit.clone(), true);
                CommandOutput::ok("")
            }
            [verb, unit] if verb == "stop" => {
                state.active.insert(unit.clone(), false);
                CommandOutput::ok("")
            }
            [verb, unit] if verb == "restart" || verb == "reload" => {
                if self.reload_ok.load(Ordering::SeqCst) {
                    state.active.insert(unit.clone(), true);
                    CommandOutput::ok("")
                } else {
                    CommandOutput::failed(format!("Job for {}.service failed", unit))
                }
            }
            _ => CommandOutput::failed(format!("systemctl: unsupported arguments {:?}", args)),
        }
    }

    fn run_nginx(&self, args: &[String]) -> CommandOutput {
        if args == ["-t"] {
            if self.config_valid.load(Ordering::SeqCst) {
                CommandOutput::ok("nginx: configuration file /etc/nginx/nginx.conf test is successful")
            } else {
                CommandOutput::failed(
                    "nginx: [emerg] unexpected end of file in /etc/nginx/nginx.conf:1",
                )
            }
        } else {
            CommandOutput::failed(format!("nginx: unsupported arguments {:?}", args))
        }
    }
}

impl Default for FakeSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for FakeSystem {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        self.calls
            .lock()
            .unwrap()
            .push(render_argv(program, args));

        match (program, args) {
            ("ls", [path]) => self.run_ls(path),
            ("cat", [path]) => self.run_cat(path),
            ("cp", [src, dst]) => self.run_cp(src, dst),
            ("ln", [flag, target, link]) if flag == "-s" => self.run_ln(target, link),
            ("rm", _) => self.run_rm(args),
            ("mkdir", [flag, dir]) if flag == "-p" => {
                self.state.lock().unwrap().dirs.insert(dir.clone());
                CommandOutput::ok("")
            }
            ("test", [flag, dir]) if flag == "-d" => {
                if self.state.lock().unwrap().dirs.contains(dir.as_str()) {
                    CommandOutput::ok("")
                } else {
                    CommandOutput::failed("")
                }
            }
            ("chown", _) => CommandOutput::ok(""),
            ("systemctl", _) => self.run_systemctl(args),
            ("nginx", _) => self.run_nginx(args),
            _ => CommandOutput::failed(format!("{}: command not found", program)),
        }
    }
}

/// A fully wired application over a fake system
pub struct TestApp {
    pub router: Router,
    pub system: Arc<FakeSystem>,
    _staging: TempDir,
}

pub fn test_app() -> TestApp {
    let system = Arc::new(FakeSystem::new());
    let staging = tempfile::tempdir().unwrap();

    let settings = Settings {
        staging_dir: staging.path().display().to_string(),
        ..Settings::default()
    };

    let runner: Arc<dyn CommandRunner> = system.clone();
    let supervisor = Arc::new(SystemctlSupervisor::new(
        runner.clone(),
        settings.config_check.clone(),
    ));
    let registry = Arc::new(UseCaseRegistry::new(runner, supervisor, &settings));

    TestApp {
        router: build_router(registry),
        system,
        _staging: staging,
    }
}

/// Issue one request against the router, returning status + parsed JSON body
pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
