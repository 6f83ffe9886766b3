//! Runtime abstraction for environment access.
//!
//! Everything the crate reads from its surroundings goes through the
//! [`Runtime`] trait so commands can be tested with a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables and host information

mod env;

/// Environment access used by configuration and commands.
#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    fn env_var(&self, key: &str) -> Result<String, std::env::VarError>;

    /// Name of the operating system this process runs on, e.g. `"linux"`.
    fn host_os(&self) -> String;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std::env::VarError> {
        self.env_var_impl(key)
    }

    fn host_os(&self) -> String {
        self.host_os_impl()
    }
}
