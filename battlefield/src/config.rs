use crate::error::{BattlefieldError, BattlefieldResult};
use crate::grid::GridMapper;
use quadtree::TreeConstraint;
use serde::{Deserialize, Serialize};

/// Battlefield settings, loadable from TOML.
///
/// Distances are in metres. Every field has a default, so a config file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattlefieldConfig {
    /// Width of the nominal playing area, centred on the world origin.
    pub extent: f64,
    /// Movement below this distance does not re-index a unit.
    pub hysteresis: f64,
    /// Extra fraction of `extent` kept representable on each side.
    pub margin: f64,
    pub dynamic_index: TreeConstraint,
    pub static_index: TreeConstraint,
    pub motion_index: TreeConstraint,
}

impl Default for BattlefieldConfig {
    fn default() -> Self {
        Self {
            extent: 1_000_000.0,
            hysteresis: 1_000.0,
            margin: GridMapper::DEFAULT_MARGIN,
            dynamic_index: TreeConstraint::default(),
            static_index: TreeConstraint::default(),
            motion_index: TreeConstraint {
                max_depth: 8,
                leaf_limit: 32,
            },
        }
    }
}

impl BattlefieldConfig {
    pub fn from_toml_str(source: &str) -> BattlefieldResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BattlefieldResult<()> {
        if !(self.extent.is_finite() && self.extent > 0.0) {
            return Err(BattlefieldError::InvalidConfig(format!(
                "extent must be positive, got {}",
                self.extent
            )));
        }
        if !(self.hysteresis.is_finite() && self.hysteresis >= 0.0) {
            return Err(BattlefieldError::InvalidConfig(format!(
                "hysteresis must be non-negative, got {}",
                self.hysteresis
            )));
        }
        if !(self.margin >= 0.0 && self.margin < 1.0) {
            return Err(BattlefieldError::InvalidConfig(format!(
                "margin must be in [0, 1), got {}",
                self.margin
            )));
        }
        self.dynamic_index.validate()?;
        self.static_index.validate()?;
        self.motion_index.validate()?;
        Ok(())
    }

    pub fn grid(&self) -> GridMapper {
        GridMapper::new(self.extent, self.hysteresis, self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = BattlefieldConfig::from_toml_str(
            r#"
            extent = 4000000.0
            hysteresis = 2000.0

            [motion_index]
            max_depth = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.extent, 4_000_000.0);
        assert_eq!(config.hysteresis, 2_000.0);
        assert_eq!(config.margin, GridMapper::DEFAULT_MARGIN);
        assert_eq!(config.motion_index.max_depth, 6);
        assert_eq!(config.motion_index.leaf_limit, TreeConstraint::default().leaf_limit);
        assert_eq!(config.dynamic_index, TreeConstraint::default());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            BattlefieldConfig::from_toml_str("extent = -1.0"),
            Err(BattlefieldError::InvalidConfig(_))
        ));
        assert!(matches!(
            BattlefieldConfig::from_toml_str("margin = 1.5"),
            Err(BattlefieldError::InvalidConfig(_))
        ));
        assert!(matches!(
            BattlefieldConfig::from_toml_str("[dynamic_index]\nmax_depth = 40"),
            Err(BattlefieldError::Tree(_))
        ));
        assert!(matches!(
            BattlefieldConfig::from_toml_str("extent = \"wide\""),
            Err(BattlefieldError::Config(_))
        ));
    }
}
