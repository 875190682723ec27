use crate::{
    config::Config,
    error::Result,
    model::Model,
};
use geometry::Point;
use tile::{Outline, Tile};

// Renderer is whatever turns outlines into pixels. Outlines arrive in drawing order with
// coordinates in plane units; to_pixel maps them onto the configured raster.
pub trait Renderer {
    fn draw(&mut self, outline: Outline) -> Result<()>;
}

impl Renderer for Vec<Outline> {
    fn draw(&mut self, outline: Outline) -> Result<()> {
        self.push(outline);
        Ok(())
    }
}

// to_pixel maps a point of the plane onto a raster of the configured extent, the origin landing
// in the middle of the raster
pub fn to_pixel(config: &Config, point: &Point) -> (f64, f64) {
    (
        config.width as f64 / 2. + point.0 * config.scale,
        config.height as f64 / 2. + point.1 * config.scale,
    )
}

pub fn to_json(outlines: &[Outline]) -> Result<String> {
    Ok(serde_json::to_string(outlines)?)
}

impl Model {
    // outlines lists what render would draw: the tiles, or the dual when the config asks for it,
    // each inset by the configured margin
    pub fn outlines(&self) -> Result<Vec<Outline>> {
        let tiles: Vec<Tile> = if self.config.dual {
            self.dual()?.into_iter().map(Tile::from).collect()
        } else {
            self.tiles().cloned().map(Tile::from).collect()
        };
        let outlines = tiles
            .iter()
            .map(|tile| tile.outline(self.config.margin))
            .collect::<std::result::Result<Vec<Outline>, _>>()?;
        Ok(outlines)
    }

    // render hands every outline to renderer and returns how many were drawn
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> Result<usize> {
        let outlines = self.outlines()?;
        let count = outlines.len();
        for outline in outlines {
            renderer.draw(outline)?;
        }
        console::debug!("rendered {} outlines", count);
        Ok(count)
    }
}
