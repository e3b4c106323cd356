// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// Context provides the context for the header signing.
///
/// ## Important
///
/// headsign provides NO default implementations. Users MAY configure components they need.
/// Any unconfigured component will use a no-op implementation.
///
/// ## Example
///
/// ```
/// use headsign_core::{Context, LogNotify, OsEnv};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_notify(LogNotify);
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    notify: Arc<dyn Notify>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("notify", &self.notify)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            notify: Arc::new(NoopNotify),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the notifier implementation.
    pub fn with_notify(mut self, notify: impl Notify) -> Self {
        self.notify = Arc::new(notify);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Report a successful signing to the configured notifier.
    #[inline]
    pub fn notify(&self, message: &str) {
        self.notify.success(message)
    }
}

/// Env gives signers access to environment variables.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS process environment.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// NoopEnv is a no-op implementation that always returns None/empty.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Notify is told when headers have been signed successfully.
///
/// It must not influence the signing result.
pub trait Notify: Debug + Send + Sync + 'static {
    /// Called once after a successful signing.
    fn success(&self, message: &str);
}

/// NoopNotify drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotify;

impl Notify for NoopNotify {
    fn success(&self, _message: &str) {}
}

/// LogNotify forwards notifications to `log::info!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotify;

impl Notify for LogNotify {
    fn success(&self, message: &str) {
        log::info!("{message}");
    }
}
