use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub shoots_dir: PathBuf,
    pub logs_dir: PathBuf,
    /// Create a default config file when the one at `config_path` is missing.
    pub init_config: bool,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut paths = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    paths.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--shoots" => {
                    paths.shoots_dir = Self::next_path(&mut args, "--shoots")?;
                }
                "--logs" => {
                    paths.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                "--init" => paths.init_config = true,
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(paths)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            shoots_dir: PathBuf::from("shoots"),
            logs_dir: PathBuf::from("logs"),
            init_config: false,
        }
    }
}
