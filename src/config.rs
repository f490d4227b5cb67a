//! Per-window options, resolved and validated once at construction.

use crate::constants::{
    DEFAULT_CORNER_SIZE, DEFAULT_CURSOR_PREFIX, DEFAULT_DRAG_THRESHOLD, DEFAULT_EDGE_SIZE,
    DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, DEFAULT_PART_PREFIX, DEFAULT_WINDOW_CLASS,
};
use crate::error::ConfigError;
use crate::geometry::{ZoneChecks, ZoneSizes};

/// Set of enabled axes, parsed from a specifier such as `"x"`, `"y"`, `"xy"`
/// or `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Axes {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Axes {
    pub const BOTH: Axes = Axes {
        horizontal: true,
        vertical: true,
    };
    pub const NONE: Axes = Axes {
        horizontal: false,
        vertical: false,
    };

    /// Parses an axis specifier. Case-insensitive; duplicates are allowed
    /// but the specifier may not be longer than two characters.
    pub fn parse(option: &'static str, spec: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidAxes {
            option,
            value: spec.to_string(),
        };
        if spec.chars().count() > 2 {
            return Err(invalid());
        }
        let mut axes = Axes::NONE;
        for ch in spec.chars() {
            match ch.to_ascii_lowercase() {
                'x' => axes.horizontal = true,
                'y' => axes.vertical = true,
                _ => return Err(invalid()),
            }
        }
        Ok(axes)
    }

    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }

    pub fn both(&self) -> bool {
        self.horizontal && self.vertical
    }
}

/// Class names used to locate a window's parts. A part's class is
/// `prefix + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub window: String,
    pub prefix: String,
    pub titlebar: String,
    pub title: String,
    pub minimize: String,
    pub maximize: String,
    pub close: String,
    pub content: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW_CLASS.to_string(),
            prefix: DEFAULT_PART_PREFIX.to_string(),
            titlebar: "titlebar".to_string(),
            title: "title".to_string(),
            minimize: "minimize".to_string(),
            maximize: "maximize".to_string(),
            close: "close".to_string(),
            content: "content".to_string(),
        }
    }
}

impl ClassNames {
    pub fn part(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub classes: ClassNames,
    pub drag: Axes,
    pub resize: Axes,
    /// Prefix of the hover marker class, e.g. `cursor-` gives `cursor-nw`.
    pub resize_cursor_prefix: Option<String>,
    pub corner_size: i32,
    pub edge_size: i32,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: Option<i32>,
    pub max_height: Option<i32>,
    /// Cells the cursor must travel after pressing the title bar before the
    /// window starts to follow.
    pub drag_threshold: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            classes: ClassNames::default(),
            drag: Axes::BOTH,
            resize: Axes::BOTH,
            resize_cursor_prefix: Some(DEFAULT_CURSOR_PREFIX.to_string()),
            corner_size: DEFAULT_CORNER_SIZE,
            edge_size: DEFAULT_EDGE_SIZE,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_width: None,
            max_height: None,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

impl WindowConfig {
    pub fn with_drag(mut self, spec: &str) -> Result<Self, ConfigError> {
        self.drag = Axes::parse("drag", spec)?;
        Ok(self)
    }

    pub fn with_resize(mut self, spec: &str) -> Result<Self, ConfigError> {
        self.resize = Axes::parse("resize", spec)?;
        Ok(self)
    }

    pub fn with_zone_sizes(mut self, corner: i32, edge: i32) -> Self {
        self.corner_size = corner;
        self.edge_size = edge;
        self
    }

    pub fn with_min_size(mut self, width: i32, height: i32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    pub fn with_max_size(mut self, width: Option<i32>, height: Option<i32>) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_cursor_prefix(mut self, prefix: Option<String>) -> Self {
        self.resize_cursor_prefix = prefix;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resize.any() {
            if self.corner_size <= 0 {
                return Err(ConfigError::NonPositiveZoneSize {
                    option: "corner size",
                    value: self.corner_size,
                });
            }
            if self.edge_size <= 0 {
                return Err(ConfigError::NonPositiveZoneSize {
                    option: "edge size",
                    value: self.edge_size,
                });
            }
            if self
                .resize_cursor_prefix
                .as_deref()
                .is_none_or(|p| p.trim().is_empty())
            {
                return Err(ConfigError::MissingCursorClass);
            }
        }
        if let Some(max) = self.max_width
            && self.min_width > max
        {
            return Err(ConfigError::InvertedBounds {
                dimension: "width",
                min: self.min_width,
                max,
            });
        }
        if let Some(max) = self.max_height
            && self.min_height > max
        {
            return Err(ConfigError::InvertedBounds {
                dimension: "height",
                min: self.min_height,
                max,
            });
        }
        Ok(())
    }

    pub fn zone_checks(&self) -> ZoneChecks {
        ZoneChecks {
            edges_x: self.resize.horizontal,
            edges_y: self.resize.vertical,
            corners: self.resize.both(),
        }
    }

    pub fn zone_sizes(&self) -> ZoneSizes {
        ZoneSizes {
            corner: self.corner_size,
            edge: self.edge_size,
        }
    }

    pub fn cursor_class(&self, tag: &str) -> Option<String> {
        self.resize_cursor_prefix
            .as_ref()
            .map(|prefix| format!("{prefix}{tag}"))
    }

    pub fn clamp_width(&self, width: i32) -> i32 {
        let width = width.max(self.min_width);
        self.max_width.map_or(width, |max| width.min(max))
    }

    pub fn clamp_height(&self, height: i32) -> i32 {
        let height = height.max(self.min_height);
        self.max_height.map_or(height, |max| height.min(max))
    }
}
