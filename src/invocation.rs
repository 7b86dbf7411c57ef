use std::process::Command;

use crate::config::{FleetConfig, LaunchMode};
use crate::roster::HostRecord;

/// The fully built command for one host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub identity: String,
    mode: LaunchMode,
    shell: String,
    ssh: String,
    /// ssh arguments, identity and remote command included.
    ssh_args: Vec<String>,
    remote_cmd: String,
}

impl Invocation {
    pub fn for_host(record: &HostRecord, remote_cmd: &str, config: &FleetConfig) -> Self {
        let identity = record.identity();

        let mut ssh_args = Vec::with_capacity(config.ssh.options.len() * 2 + 2);
        for (k, v) in &config.ssh.options {
            ssh_args.push("-o".to_string());
            ssh_args.push(format!("{}={}", k, v));
        }
        ssh_args.push(identity.clone());
        ssh_args.push(remote_cmd.to_string());

        Self {
            identity,
            mode: config.transport.mode,
            shell: config.shell.program.clone(),
            ssh: config.ssh.program.clone(),
            ssh_args,
            remote_cmd: remote_cmd.to_string(),
        }
    }

    /// The command line as echoed before launch: `ssh [-o K=V ..] user@host "<cmd>"`.
    ///
    /// The remote command is wrapped in double quotes and nothing is escaped.
    /// In shell mode this exact string is what the local shell parses, so
    /// `ssh.options` values are unquoted too: a value containing a space
    /// splits into separate words.
    pub fn display(&self) -> String {
        let head = &self.ssh_args[..self.ssh_args.len() - 1];
        let mut line = self.ssh.clone();
        for arg in head {
            line.push(' ');
            line.push_str(arg);
        }
        line.push_str(" \"");
        line.push_str(&self.remote_cmd);
        line.push('"');
        line
    }

    pub fn program(&self) -> &str {
        match self.mode {
            LaunchMode::Argv => &self.ssh,
            LaunchMode::Shell => &self.shell,
        }
    }

    pub fn args(&self) -> Vec<String> {
        match self.mode {
            LaunchMode::Argv => self.ssh_args.clone(),
            LaunchMode::Shell => vec!["-c".to_string(), self.display()],
        }
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args());
        cmd
    }
}
