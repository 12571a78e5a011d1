//! Named TS commands and a thin bridge onto any `redis` connection.
//!
//! Replies come back as raw [`redis::Value`]s; decoding them is left to the
//! caller.

use std::fmt;

use redis::{Cmd, ConnectionLike, Value};

use crate::error::Result;
use crate::query::{
    get_args, mget_args, mrange_args, range_args, GetOptions, MultiGetOptions, MultiRangeOptions,
    RangeOptions,
};

/// A TS command name together with its serialized arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsCommand {
    name: &'static str,
    args: Vec<String>,
}

impl TsCommand {
    pub fn get(key: &str, options: &GetOptions) -> Self {
        Self::new("TS.GET", get_args(key, options))
    }

    pub fn mget<S: AsRef<str>>(options: &MultiGetOptions, filters: &[S]) -> Self {
        Self::new("TS.MGET", mget_args(options, filters))
    }

    pub fn range(key: &str, from: i64, to: i64, options: &RangeOptions) -> Self {
        Self::new("TS.RANGE", range_args(key, from, to, options))
    }

    pub fn revrange(key: &str, from: i64, to: i64, options: &RangeOptions) -> Self {
        Self::new("TS.REVRANGE", range_args(key, from, to, options))
    }

    pub fn mrange<S: AsRef<str>>(
        from: i64,
        to: i64,
        options: &MultiRangeOptions,
        filters: &[S],
    ) -> Self {
        Self::new("TS.MRANGE", mrange_args(from, to, options, filters))
    }

    pub fn mrevrange<S: AsRef<str>>(
        from: i64,
        to: i64,
        options: &MultiRangeOptions,
        filters: &[S],
    ) -> Self {
        Self::new("TS.MREVRANGE", mrange_args(from, to, options, filters))
    }

    fn new(name: &'static str, args: Vec<String>) -> Self {
        Self { name, args }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    pub fn to_cmd(&self) -> Cmd {
        let mut cmd = redis::cmd(self.name);
        for arg in &self.args {
            cmd.arg(arg);
        }
        cmd
    }

    /// Send the command over `con` and return the unparsed reply
    pub fn query<C: ConnectionLike + ?Sized>(&self, con: &mut C) -> Result<Value> {
        tracing::debug!("Issuing {} with {} args", self.name, self.args.len());
        let reply = con.req_command(&self.to_cmd())?;
        Ok(reply)
    }
}

impl From<&TsCommand> for Cmd {
    fn from(command: &TsCommand) -> Self {
        command.to_cmd()
    }
}

/// Inline form, e.g. `TS.RANGE temp:1 0 100 COUNT 5`
impl fmt::Display for TsCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// TS query commands for every `redis` connection
pub trait TsCommands: ConnectionLike {
    fn ts_get(&mut self, key: &str, options: &GetOptions) -> Result<Value> {
        TsCommand::get(key, options).query(self)
    }

    fn ts_mget<S: AsRef<str>>(&mut self, options: &MultiGetOptions, filters: &[S]) -> Result<Value> {
        TsCommand::mget(options, filters).query(self)
    }

    fn ts_range(&mut self, key: &str, from: i64, to: i64, options: &RangeOptions) -> Result<Value> {
        TsCommand::range(key, from, to, options).query(self)
    }

    fn ts_revrange(
        &mut self,
        key: &str,
        from: i64,
        to: i64,
        options: &RangeOptions,
    ) -> Result<Value> {
        TsCommand::revrange(key, from, to, options).query(self)
    }

    fn ts_mrange<S: AsRef<str>>(
        &mut self,
        from: i64,
        to: i64,
        options: &MultiRangeOptions,
        filters: &[S],
    ) -> Result<Value> {
        TsCommand::mrange(from, to, options, filters).query(self)
    }

    fn ts_mrevrange<S: AsRef<str>>(
        &mut self,
        from: i64,
        to: i64,
        options: &MultiRangeOptions,
        filters: &[S],
    ) -> Result<Value> {
        TsCommand::mrevrange(from, to, options, filters).query(self)
    }
}

impl<C: ConnectionLike + ?Sized> TsCommands for C {}
