//! CLI commands

mod fingerprint;
mod key;
mod team;

pub use fingerprint::FingerprintCommand;
pub use key::KeyCommand;
pub use team::TeamCommand;

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use tempfile::TempDir;

    use crate::cli::output::Output;
    use crate::cli::Cli;

    /// A temporary keyteam home with a config file pointing into it
    pub struct Workspace {
        pub dir: TempDir,
        pub config: PathBuf,
    }

    impl Workspace {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let config = dir.path().join("keyteam.toml");
            std::fs::write(
                &config,
                "[keyring]\npath = \"keys.toml\"\n\n[roster]\nteams_dir = \"teams\"\n",
            )
            .unwrap();
            Self { dir, config }
        }

        pub fn teams_dir(&self) -> PathBuf {
            self.dir.path().join("teams")
        }

        pub fn write_team(&self, dir: &str, roster: &str) {
            let team_dir = self.teams_dir().join(dir);
            std::fs::create_dir_all(&team_dir).unwrap();
            std::fs::write(team_dir.join("roster.toml"), roster).unwrap();
        }

        pub fn write_keys(&self, fingerprints: &[&str]) {
            let content: String = fingerprints
                .iter()
                .map(|fp| format!("[[key]]\nfingerprint = \"{fp}\"\n\n"))
                .collect();
            std::fs::write(self.dir.path().join("keys.toml"), content).unwrap();
        }

        /// Run the CLI with `--config` pointing at this workspace
        pub fn run(&self, args: &[&str]) -> anyhow::Result<String> {
            run_with_config(Some(&self.config), args)
        }
    }

    /// Run the CLI with a buffered output and return what it printed
    pub fn run_with_config(config: Option<&Path>, args: &[&str]) -> anyhow::Result<String> {
        let mut argv: Vec<String> = vec!["keyteam".to_string()];
        if let Some(config) = config {
            argv.push("--config".to_string());
            argv.push(config.display().to_string());
        }
        argv.extend(args.iter().map(|a| a.to_string()));

        let cli = Cli::try_parse_from(argv)?;
        let (mut out, buffer) = Output::buffered();
        cli.execute(&mut out)?;
        Ok(buffer.contents())
    }
}
