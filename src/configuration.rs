use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Where the assets are found and where the documents go.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfiguration {
    /// A PNG image placed in the header of both documents.
    #[serde(default)]
    pub logo_file_path: Option<PathBuf>,
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        RenderConfiguration {
            logo_file_path: None,
            output_directory: default_output_directory(),
        }
    }
}

impl RenderConfiguration {
    pub fn from_path(configuration_file_path: &Path) -> Result<Self, RenderError> {
        let configuration_file_contents = std::fs::read_to_string(configuration_file_path)
            .map_err(|error| {
                RenderError::with_error("Failed to read the configuration file", &error)
            })?;
        let configuration: RenderConfiguration =
            serde_json::from_str(&configuration_file_contents).map_err(|error| {
                RenderError::with_error("Failed to parse the configuration file", &error)
            })?;

        Ok(configuration)
    }

    /// Reads the logo, if one is configured. The logo is optional, so a file which cannot be
    /// read is only reported and the documents are generated without it.
    pub fn load_logo(&self) -> Option<Vec<u8>> {
        let logo_file_path = self.logo_file_path.as_ref()?;
        match std::fs::read(logo_file_path) {
            Ok(logo) => Some(logo),
            Err(error) => {
                log::warn!("Unable to read the logo {:?}: {}", logo_file_path, error);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_their_defaults() {
        let configuration: RenderConfiguration = serde_json::from_str("{}").unwrap();
        assert_eq!(configuration, RenderConfiguration::default());

        let configuration: RenderConfiguration = serde_json::from_str(
            r#"{ "logoFilePath": "assets/logo.png", "outputDirectory": "out" }"#,
        )
        .unwrap();
        assert_eq!(
            configuration.logo_file_path,
            Some(PathBuf::from("assets/logo.png"))
        );
        assert_eq!(configuration.output_directory, PathBuf::from("out"));
    }

    #[test]
    fn unreadable_logo_is_skipped() {
        let configuration = RenderConfiguration {
            logo_file_path: Some(PathBuf::from("this/logo/does/not/exist.png")),
            ..Default::default()
        };
        assert_eq!(configuration.load_logo(), None);
        assert_eq!(RenderConfiguration::default().load_logo(), None);
    }

    #[test]
    fn missing_configuration_file_is_an_error() {
        let error =
            RenderConfiguration::from_path(Path::new("this/configuration/does/not/exist.json"))
                .unwrap_err();
        assert_eq!(error.context, "Failed to read the configuration file");
        assert!(error.source_error.is_some());
    }
}
