//! Scene files: a list of widgets to mount, written in TOML.
//!
//! ```toml
//! [[widget]]
//! kind = "checkbox"
//! label = "Accept terms"
//! size = "lg"
//!
//! [[widget]]
//! kind = "switch"
//! aria_label = "Wi-Fi"
//! checked = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toggles::{Checkbox, Size, Switch};

/// Scene used when no file is given.
pub const BUILTIN_SCENE: &str = r#"
[[widget]]
kind = "checkbox"
label = "Accept terms"
name = "terms"
value = "yes"
required = true

[[widget]]
kind = "checkbox"
label = "Select all"
checked = false
indeterminate = true

[[widget]]
kind = "checkbox"
label = "Locked option"
default_checked = true
disabled = true

[[widget]]
kind = "checkbox"
label = "Small print"
size = "sm"

[[widget]]
kind = "switch"
label = "Wi-Fi"
aria_label = "Wi-Fi"
default_checked = true

[[widget]]
kind = "switch"
label = "Airplane mode"
aria_label = "Airplane mode"
size = "lg"
checked = false
"#;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("widget #{index}: unknown kind '{kind}' (expected checkbox or switch)")]
    UnknownKind { index: usize, kind: String },

    #[error("scene has no widgets")]
    Empty,
}

/// Which control a scene entry mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Checkbox,
    Switch,
}

/// One `[[widget]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    pub kind: String,
    pub label: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub required: bool,
    pub size: Size,
    pub class_name: Option<String>,
    pub aria_label: Option<String>,
    pub disabled: bool,
    pub default_checked: bool,
    pub checked: Option<bool>,
    pub indeterminate: bool,
}

impl WidgetConfig {
    pub fn widget_kind(&self, index: usize) -> Result<WidgetKind, SceneError> {
        match self.kind.trim() {
            "checkbox" => Ok(WidgetKind::Checkbox),
            "switch" => Ok(WidgetKind::Switch),
            other => Err(SceneError::UnknownKind {
                index,
                kind: other.to_string(),
            }),
        }
    }

    /// Text shown next to the widget in the terminal preview.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.aria_label.as_deref())
            .unwrap_or("(unlabelled)")
    }

    /// Checkbox props for this entry. `checked` is the owner's current value
    /// when the entry is controlled.
    pub fn checkbox(&self, checked: Option<bool>, indeterminate: bool) -> Checkbox {
        let mut props = Checkbox::new()
            .checked_opt(checked)
            .default_checked(self.default_checked)
            .disabled(self.disabled)
            .size(self.size)
            .required(self.required)
            .indeterminate(indeterminate);
        if let Some(label) = &self.label {
            props = props.label(label);
        }
        if let Some(id) = &self.id {
            props = props.id(id);
        }
        if let Some(name) = &self.name {
            props = props.name(name);
        }
        if let Some(value) = &self.value {
            props = props.value(value);
        }
        if let Some(class_name) = &self.class_name {
            props = props.class_name(class_name);
        }
        props
    }

    pub fn switch(&self, checked: Option<bool>) -> Switch {
        let mut props = Switch::new()
            .checked_opt(checked)
            .default_checked(self.default_checked)
            .disabled(self.disabled)
            .size(self.size);
        if let Some(aria_label) = &self.aria_label {
            props = props.aria_label(aria_label);
        }
        if let Some(class_name) = &self.class_name {
            props = props.class_name(class_name);
        }
        props
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetConfig>,
}

impl Scene {
    /// Parse and validate a scene.
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(source)?;
        if scene.widgets.is_empty() {
            return Err(SceneError::Empty);
        }
        for (index, config) in scene.widgets.iter().enumerate() {
            config.widget_kind(index)?;
        }
        log::debug!("[scene] parsed {} widget(s)", scene.widgets.len());
        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let source = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn builtin() -> Result<Self, SceneError> {
        Self::parse(BUILTIN_SCENE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scene_parses() {
        let scene = Scene::builtin().unwrap();
        assert_eq!(scene.widgets.len(), 6);
        assert_eq!(scene.widgets[1].checked, Some(false));
        assert!(scene.widgets[1].indeterminate);
        assert_eq!(scene.widgets[5].size, Size::Lg);
    }

    #[test]
    fn test_shipped_scene_parses() {
        let scene = Scene::parse(include_str!("../scenes/settings.toml")).unwrap();
        assert_eq!(scene.widgets.len(), 5);
        assert_eq!(scene.widgets[2].id.as_deref(), Some("digests"));
    }

    #[test]
    fn test_defaults() {
        let scene = Scene::parse("[[widget]]\nkind = \"switch\"\n").unwrap();
        let config = &scene.widgets[0];
        assert_eq!(config.widget_kind(0).unwrap(), WidgetKind::Switch);
        assert_eq!(config.size, Size::Md);
        assert_eq!(config.checked, None);
        assert!(!config.disabled);
        assert_eq!(config.display_label(), "(unlabelled)");
    }

    #[test]
    fn test_unknown_kind() {
        let err = Scene::parse("[[widget]]\nkind = \"checkbox\"\n\n[[widget]]\nkind = \"radio\"\n")
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownKind { index: 1, ref kind } if kind == "radio"));
    }

    #[test]
    fn test_empty_scene() {
        assert!(matches!(Scene::parse(""), Err(SceneError::Empty)));
    }

    #[test]
    fn test_bad_size_is_a_parse_error() {
        let err = Scene::parse("[[widget]]\nkind = \"checkbox\"\nsize = \"xl\"\n").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_is_a_parse_error() {
        let err = Scene::parse("[[widget]]\nkind = \"checkbox\"\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Scene::load(Path::new("/nonexistent/scene.toml")).unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/scene.toml"));
    }

    #[test]
    fn test_checkbox_props_from_config() {
        let config = WidgetConfig {
            kind: "checkbox".into(),
            label: Some("Terms".into()),
            checked: Some(true),
            disabled: true,
            ..Default::default()
        };
        let props = config.checkbox(config.checked, true);
        assert_eq!(props.checked_value(), Some(true));
        assert!(props.is_indeterminate());
        assert!(props.is_disabled());
    }
}
