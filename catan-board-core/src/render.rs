//! Tile → visual state projection
//!
//! Everything here is a pure function of the tile and the viewport, so a
//! resize, pan or zoom is handled by simply rendering again.

use crate::config::{RenderConfig, Viewport};
use crate::coords::{hex_to_cartesian, midpoint, Cartesian, HexCoordinate};
use crate::tile::{PortKind, Tile, TileType};
use serde::Serialize;

/// Horizontal nudge of the number badge, relative to scale
const BADGE_NUDGE_X: f64 = 0.015;
/// Port badge nudges, relative to scale
const PORT_NUDGE_X: f64 = 0.045;
const PORT_NUDGE_Y: f64 = 0.01;

/// How far the hexagon's drawn box sits below its visual centre
fn center_correction(scale: f64) -> f64 {
    scale * (1.0 - 1.0 / 3f64.sqrt()) / 2.0
}

/// Everything a UI layer needs to draw one tile
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualState {
    pub coordinates: HexCoordinate,
    /// Top-left of the hexagon's box, in screen pixels
    pub position: Cartesian,
    /// Width and height of the hexagon's box
    pub size: f64,
    /// Background colour; `None` draws no background
    pub fill: Option<TileType>,
    pub badge: Option<BadgeLayout>,
    pub port: Option<PortOverlay>,
}

/// The circular number badge drawn on a tile
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeLayout {
    /// Offset from the tile position
    pub offset: Cartesian,
    pub diameter: f64,
    /// Badge is a clickable robber target
    pub highlighted: bool,
    pub content: BadgeContent,
}

impl BadgeLayout {
    /// The number face to show, given whether the pointer is over the badge
    ///
    /// A robber hides the number until hovered.
    pub fn visible_face(&self, hovered: bool) -> Option<&NumberFace> {
        match &self.content {
            BadgeContent::Number(face) => Some(face),
            BadgeContent::Robber { hidden } if hovered => hidden.as_ref(),
            BadgeContent::Robber { .. } => None,
        }
    }

    pub fn shows_robber(&self, hovered: bool) -> bool {
        match &self.content {
            BadgeContent::Number(_) => false,
            BadgeContent::Robber { hidden } => !(hovered && hidden.is_some()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BadgeContent {
    Number(NumberFace),
    /// Robber icon; `hidden` is revealed on hover
    Robber { hidden: Option<NumberFace> },
}

/// Dice number and its pips
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFace {
    pub number: i32,
    pub font_size: f64,
    pub line_height: f64,
    /// 6 and 8 are drawn in red
    pub hot: bool,
    pub pips: PipRow,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipRow {
    pub count: usize,
    pub diameter: f64,
    /// Gap between neighbouring pips
    pub spacing: f64,
    /// Vertical shift placing the row below the number
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortOverlay {
    /// Top-left of the port badge, in screen pixels
    pub position: Cartesian,
    pub diameter: f64,
    pub kind: PortKind,
    pub icon: &'static str,
}

impl Tile {
    /// Render with the default size ratios
    pub fn render(&self, viewport: Viewport) -> VisualState {
        self.render_with(viewport, &RenderConfig::default())
    }

    pub fn render_with(&self, viewport: Viewport, config: &RenderConfig) -> VisualState {
        let scale = viewport.scale;
        let displacement = hex_to_cartesian(self.coordinates());
        let position = Cartesian::new(
            viewport.trans_x + displacement.x * scale,
            viewport.trans_y + displacement.y * scale - center_correction(scale),
        );

        let fill = match self.tile_type() {
            TileType::Sea => None,
            other => Some(other),
        };

        VisualState {
            coordinates: self.coordinates(),
            position,
            size: config.tile_scale * scale,
            fill,
            badge: self.badge(scale, config),
            port: self.port_overlay(viewport, config),
        }
    }

    fn badge(&self, scale: f64, config: &RenderConfig) -> Option<BadgeLayout> {
        let content = match self.tile_type() {
            TileType::Sea => return None,
            TileType::Desert if self.has_robber() => BadgeContent::Robber { hidden: None },
            TileType::Desert => return None,
            _ if self.has_robber() => BadgeContent::Robber {
                hidden: self.number_face(scale, config),
            },
            _ => BadgeContent::Number(self.number_face(scale, config)?),
        };

        let sqrt3 = 3f64.sqrt();
        let diameter = config.number_circle_scale * scale;
        let apothem = scale / sqrt3;

        let x = -((apothem.powi(2) + scale.powi(2)).sqrt() - scale) / 2.0
            - BADGE_NUDGE_X * scale
            - diameter / 2.0
            + apothem;
        let y = -scale / (2.0 * sqrt3) - diameter / 2.0 - center_correction(scale);

        Some(BadgeLayout {
            offset: Cartesian::new(x, y),
            diameter,
            highlighted: self.is_highlighted(),
            content,
        })
    }

    fn number_face(&self, scale: f64, config: &RenderConfig) -> Option<NumberFace> {
        let number = self.number()?;
        let circle = config.number_circle_scale * scale;
        let pip = config.dot_scale * scale;
        Some(NumberFace {
            number,
            font_size: config.number_scale * scale,
            line_height: circle,
            hot: self.is_hot(),
            pips: PipRow {
                count: self.num_dots() as usize,
                diameter: pip,
                spacing: pip / 3.0,
                offset_y: -circle * 3.0 / 4.0,
            },
        })
    }

    fn port_overlay(&self, viewport: Viewport, config: &RenderConfig) -> Option<PortOverlay> {
        let port = self.port()?;
        let scale = viewport.scale;
        let center = hex_to_cartesian(midpoint(port.locations[0], port.locations[1]));
        let size = config.port_scale * scale;

        let x = viewport.trans_x + center.x * scale + 3f64.sqrt() * scale / 4.0 - size / 2.0
            + PORT_NUDGE_X * scale;
        let y = viewport.trans_y + center.y * scale + scale / 4.0 - size / 2.0
            + PORT_NUDGE_Y * scale;

        Some(PortOverlay {
            position: Cartesian::new(x, y),
            diameter: size,
            kind: port.kind,
            icon: port.kind.icon(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Port;

    const EPS: f64 = 1e-9;

    fn tile(tile_type: TileType, number: Option<i32>, robber: bool) -> Tile {
        Tile::new(HexCoordinate::ORIGIN, tile_type, number, robber, None)
    }

    fn face(state: &VisualState) -> &NumberFace {
        state.badge.as_ref().unwrap().visible_face(false).unwrap()
    }

    #[test]
    fn test_tile_position_and_size() {
        let t = Tile::new(HexCoordinate::new(1.0, 0.0, -1.0), TileType::Ore, Some(4), false, None);
        let state = t.render(Viewport::new(10.0, 20.0, 100.0));
        let correction = 100.0 * (1.0 - 1.0 / 3f64.sqrt()) / 2.0;
        assert!((state.position.x - (10.0 + 100.0 * 3f64.sqrt())).abs() < EPS);
        assert!((state.position.y - (20.0 - correction)).abs() < EPS);
        assert!((state.size - 95.0).abs() < EPS);
        assert_eq!(state.fill, Some(TileType::Ore));
    }

    #[test]
    fn test_badge_geometry() {
        let state = tile(TileType::Brick, Some(5), false).render(Viewport::new(0.0, 0.0, 60.0));
        let badge = state.badge.unwrap();
        let s = 60.0;
        let r3 = 3f64.sqrt();
        let x = -(((s / r3).powi(2) + s * s).sqrt() - s) / 2.0 - 0.015 * s - 0.3 * s / 2.0 + s / r3;
        let y = -s / (2.0 * r3) - 0.3 * s / 2.0 - s * (1.0 - 1.0 / r3) / 2.0;
        assert!((badge.offset.x - x).abs() < EPS);
        assert!((badge.offset.y - y).abs() < EPS);
        assert!((badge.diameter - 18.0).abs() < EPS);
        assert!(!badge.highlighted);
    }

    #[test]
    fn test_eight_is_hot() {
        let state = tile(TileType::Wheat, Some(8), false).render(Viewport::default());
        let f = face(&state);
        assert_eq!(f.number, 8);
        assert_eq!(f.pips.count, 5);
        assert!(f.hot);
        assert!((f.pips.diameter - 2.5).abs() < EPS);
        assert!((f.pips.spacing - 2.5 / 3.0).abs() < EPS);
        assert!((f.font_size - 17.5).abs() < EPS);
    }

    #[test]
    fn test_nine_is_not_hot() {
        let state = tile(TileType::Wheat, Some(9), false).render(Viewport::default());
        let f = face(&state);
        assert_eq!(f.pips.count, 4);
        assert!(!f.hot);
    }

    #[test]
    fn test_sea_has_no_badge_or_fill() {
        let state = tile(TileType::Sea, None, false).render(Viewport::default());
        assert!(state.badge.is_none());
        assert!(state.port.is_none());
        assert!(state.fill.is_none());
    }

    #[test]
    fn test_desert_without_robber_has_no_badge() {
        let state = tile(TileType::Desert, None, false).render(Viewport::default());
        assert!(state.badge.is_none());
        assert_eq!(state.fill, Some(TileType::Desert));
    }

    #[test]
    fn test_desert_robber_has_nothing_to_reveal() {
        let state = tile(TileType::Desert, None, true).render(Viewport::default());
        let badge = state.badge.unwrap();
        assert!(badge.shows_robber(false));
        assert!(badge.shows_robber(true));
        assert!(badge.visible_face(true).is_none());
    }

    #[test]
    fn test_robber_hides_number_until_hover() {
        let state = tile(TileType::Sheep, Some(6), true).render(Viewport::default());
        let badge = state.badge.unwrap();
        assert!(badge.shows_robber(false));
        assert!(badge.visible_face(false).is_none());
        assert!(!badge.shows_robber(true));
        let revealed = badge.visible_face(true).unwrap();
        assert_eq!(revealed.number, 6);
        assert!(revealed.hot);
    }

    #[test]
    fn test_highlight_is_reflected() {
        let mut t = tile(TileType::Wood, Some(3), false);
        t.highlight();
        assert!(t.render(Viewport::default()).badge.unwrap().highlighted);
        t.un_highlight();
        assert!(!t.render(Viewport::default()).badge.unwrap().highlighted);
    }

    #[test]
    fn test_port_overlay() {
        let port = Port {
            kind: PortKind::Wildcard,
            locations: [HexCoordinate::ORIGIN, HexCoordinate::ORIGIN],
        };
        let t = Tile::new(HexCoordinate::new(0.0, 3.0, -3.0), TileType::Sea, None, false, Some(port));
        let state = t.render(Viewport::new(0.0, 0.0, 100.0));
        let overlay = state.port.unwrap();
        assert!((overlay.diameter - 55.0).abs() < EPS);
        assert!((overlay.position.x - (25.0 * 3f64.sqrt() - 27.5 + 4.5)).abs() < EPS);
        assert!((overlay.position.y - (25.0 - 27.5 + 1.0)).abs() < EPS);
        assert_eq!(overlay.icon, "wildcard");
        assert!(state.badge.is_none());
    }

    #[test]
    fn test_render_is_idempotent() {
        let t = tile(TileType::Brick, Some(10), true);
        let vp = Viewport::new(-3.5, 7.25, 48.0);
        assert_eq!(t.render(vp), t.render(vp));
    }

    #[test]
    fn test_custom_config() {
        let config = RenderConfig {
            tile_scale: 1.0,
            ..RenderConfig::default()
        };
        let state = tile(TileType::Ore, Some(11), false).render_with(Viewport::default(), &config);
        assert!((state.size - 100.0).abs() < EPS);
    }
}
