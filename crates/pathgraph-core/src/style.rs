//! Display attributes: [`Color`], [`NodeStyle`], [`EdgeStyle`] and the
//! [`Theme`] that supplies their defaults.
//!
//! These are the only fields of a graph that a path search is allowed to
//! write. They carry no algorithmic meaning.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

// ---------------------------------------------------------------------------
// Node / edge styles
// ---------------------------------------------------------------------------

/// How a node is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeStyle {
    pub color: Color,
    pub radius: f32,
}

/// How an edge (or a line along an edge) is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeStyle {
    pub color: Color,
    pub thickness: f32,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Default display attributes and the highlights applied by a search run.
///
/// Passed to the reset operation instead of living in global constants, so
/// a renderer can pick its own palette.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Theme {
    pub node_color: Color,
    pub node_radius: f32,
    pub edge_color: Color,
    pub edge_thickness: f32,
    pub source_color: Color,
    pub destination_color: Color,
    /// Added to `node_radius` for the source and destination nodes.
    pub endpoint_radius_bonus: f32,
    pub path_color: Color,
    /// Added to `edge_thickness` for path segments.
    pub path_thickness_bonus: f32,
    pub visited_color: Color,
    /// Added to `edge_thickness` for visited-edge lines.
    pub visited_thickness_bonus: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            node_color: Color::from_rgb(200, 200, 200),
            node_radius: 1.0,
            edge_color: Color::from_rgb(105, 105, 105),
            edge_thickness: 1.0,
            source_color: Color::from_rgb(50, 200, 50),
            destination_color: Color::from_rgb(200, 50, 50),
            endpoint_radius_bonus: 0.6,
            path_color: Color::from_rgb(80, 220, 200),
            path_thickness_bonus: 1.2,
            visited_color: Color::from_rgb(0, 255, 0),
            visited_thickness_bonus: 0.4,
        }
    }
}

impl Theme {
    /// Style of a node that is not involved in the current run.
    #[inline]
    pub fn node_default(&self) -> NodeStyle {
        NodeStyle {
            color: self.node_color,
            radius: self.node_radius,
        }
    }

    /// Style of an edge that is not involved in the current run.
    #[inline]
    pub fn edge_default(&self) -> EdgeStyle {
        EdgeStyle {
            color: self.edge_color,
            thickness: self.edge_thickness,
        }
    }

    #[inline]
    pub fn source_style(&self) -> NodeStyle {
        NodeStyle {
            color: self.source_color,
            radius: self.node_radius + self.endpoint_radius_bonus,
        }
    }

    #[inline]
    pub fn destination_style(&self) -> NodeStyle {
        NodeStyle {
            color: self.destination_color,
            radius: self.node_radius + self.endpoint_radius_bonus,
        }
    }

    /// Recolour `current` as lying on the final path; the radius is kept so
    /// the endpoints stay enlarged.
    #[inline]
    pub fn on_path_style(&self, current: NodeStyle) -> NodeStyle {
        NodeStyle {
            color: self.path_color,
            radius: current.radius,
        }
    }

    /// Line style for segments of the final path.
    #[inline]
    pub fn path_line(&self) -> EdgeStyle {
        EdgeStyle {
            color: self.path_color,
            thickness: self.edge_thickness + self.path_thickness_bonus,
        }
    }

    /// Line style for edges examined during the search.
    #[inline]
    pub fn visited_line(&self) -> EdgeStyle {
        EdgeStyle {
            color: self.visited_color,
            thickness: self.edge_thickness + self.visited_thickness_bonus,
        }
    }
}
