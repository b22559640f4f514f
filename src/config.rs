use crate::data::seed::Seed;
use crate::error::ConfigurationError;
use crate::util;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    file_path: PathBuf,

    /// Users and courses the registry starts with.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_path: config_dir().join("settings.yml"),
            seed: Seed::default(),
        }
    }
}

#[inline]
fn config_dir() -> PathBuf {
    PathBuf::from(env::var("CONFIG_DIR").unwrap_or("./config".to_string()))
}

impl Config {
    pub fn load() -> Result<Config, ConfigurationError> {
        let config_file = util::find_first_subpath(
            config_dir(),
            &["settings.yml", "settings.yaml"],
            Path::exists,
        )
        .ok_or_else(|| ConfigurationError::NotFound(config_dir()))?;

        let file = File::open(&config_file)?;
        let mut config = Config::from_reader(BufReader::new(file))?;
        config.file_path = config_file;

        Ok(config)
    }

    pub fn from_reader(reader: impl Read) -> Result<Config, ConfigurationError> {
        let mut config: Config = serde_yaml::from_reader(reader)?;
        config.file_path = config_dir().join("settings.yml");
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigurationError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.file_path)?;
        let mut out = BufWriter::new(file);
        serde_yaml::to_writer(&mut out, self)?;
        out.flush()?;
        Ok(())
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_seed_defaults_to_sample_data() {
        let config = Config::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config.seed.users.len(), 3);
        assert_eq!(config.seed.courses.len(), 2);
    }

    #[test]
    fn seed_from_yaml() {
        let yaml = r#"
seed:
  users:
    - username: root
      email: root@school.org
      password: toor
      role: Admin
  courses:
    - name: Biology
      teacher_email: bio@school.org
      contents: [Cells]
"#;
        let config = Config::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(config.seed.users.len(), 1);
        assert_eq!(config.seed.users[0].role, Role::Admin);
        assert_eq!(config.seed.courses[0].name, "Biology");
        assert_eq!(config.seed.courses[0].contents, vec!["Cells"]);
    }

    #[test]
    fn yaml_round_trip_keeps_seed() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back = Config::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(back.seed.courses[1].name, "Physics");
        assert_eq!(back.seed.users[2].email, "teacher2@example.com");
    }
}
