//! Administrative console engine for a single machine's nginx virtual hosts.
//!
//! The engine keeps three things mutually consistent: the `sites-available`
//! directory (canonical config files), the `sites-enabled` directory (one
//! symlink per active site) and the running nginx process. Every mutation is
//! carried out through a privileged command runner port and ends with a
//! validation or reload step against the live process.
//!
//! Known limitation: there is no in-process locking. Two concurrent requests
//! targeting the same site name race at the filesystem level; the single
//! operator, single machine scope accepts this.

pub mod adapters;
pub mod application;
pub mod constants;
pub mod domain;
pub mod infrastructure;
