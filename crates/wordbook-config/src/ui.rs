use serde::{Deserialize, Serialize};
use wordbook_types::Theme;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct UiConfig {
    /// Overrides the detected platform color scheme when set
    pub color_scheme: Option<Theme>,
}
