use crate::{
    config::Config,
    error::{Error, Result},
};
use geometry::Key;
use indexmap::{map::Entry, IndexMap};
use itertools::iproduct;
use std::ops::Range;
use tile::{RegularPolygon, Style, TileErr};

// Insert decides what happens when a polygon lands on a position which is already occupied
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Insert {
    Overwrite, // the new polygon replaces the old one, used while growing the motif
    KeepFirst, // the old polygon stays, used while replicating the motif
}

// Model is a tiling under construction. `shapes` is the motif in construction order, its indices
// are what later adjacency calls refer to. `lookup` holds at most one polygon per canonical
// position and is what gets rendered.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub(crate) config: Config,
    pub(crate) shapes: Vec<RegularPolygon>,
    pub(crate) lookup: IndexMap<Key, RegularPolygon>,
}

pub(crate) fn place_into(lookup: &mut IndexMap<Key, RegularPolygon>, polygon: RegularPolygon, policy: Insert) -> bool {
    match (lookup.entry(polygon.key()), policy) {
        (Entry::Vacant(entry), _) => {
            entry.insert(polygon);
            true
        },
        (Entry::Occupied(mut entry), Insert::Overwrite) => {
            entry.insert(polygon);
            true
        },
        (Entry::Occupied(_), Insert::KeepFirst) => false,
    }
}

impl Model {
    pub fn new(config: Config) -> Model {
        Model {
            config,
            shapes: Vec::default(),
            lookup: IndexMap::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // append adds polygon to the motif and returns its index. A polygon already in the lookup
    // at the same position is replaced there, though both stay in the motif.
    pub fn append(&mut self, polygon: RegularPolygon) -> usize {
        self.shapes.push(polygon.clone());
        self.place(polygon, Insert::Overwrite);
        self.shapes.len() - 1
    }

    // place inserts polygon into the lookup only, returning whether the lookup changed
    pub fn place(&mut self, polygon: RegularPolygon, policy: Insert) -> bool {
        place_into(&mut self.lookup, polygon, policy)
    }

    // style_for is the palette style of polygons with the given number of sides, used whenever
    // a polygon is added without a style of its own
    pub fn style_for(&self, sides: usize) -> Style {
        self.config.palette.style_for(sides)
    }

    // add glues a new polygon with the given number of sides onto edge `edge` of polygon `index`.
    // Without a style the polygon takes the palette's.
    pub fn add(&mut self, index: usize, edge: usize, sides: usize, style: impl Into<Option<Style>>) -> Result<usize> {
        let style = style.into().unwrap_or_else(|| self.style_for(sides));
        let parent = self.get(index).ok_or(Error::IndexOutOfBounds(index, self.shapes.len()))?;
        let polygon = parent.adjacent(sides, edge, style)?;
        Ok(self.append(polygon))
    }

    // add_all performs add for every index, edge pair (indexes in the outer loop) and returns the
    // range of indices created. Later pairs may refer to polygons created by earlier pairs of the
    // same call. Every pair is checked first so a failing call changes nothing.
    pub fn add_all<I, E>(&mut self, indexes: I, edges: E, sides: usize, style: impl Into<Option<Style>>) -> Result<Range<usize>>
    where
        I: IntoIterator<Item = usize>,
        E: IntoIterator<Item = usize>,
        E::IntoIter: Clone,
    {
        let pairs: Vec<(usize, usize)> = iproduct!(indexes, edges).collect();
        if sides < 3 {
            return Err(TileErr::TooFewSides(sides).into())
        }
        let start = self.shapes.len();
        for (placed, (index, edge)) in pairs.iter().enumerate() {
            let parent_sides = match self.get(*index) {
                Some(parent) => parent.sides(),
                None if *index < start + placed => sides,
                None => return Err(Error::IndexOutOfBounds(*index, start + placed)),
            };
            if *edge >= parent_sides {
                return Err(TileErr::EdgeOutOfBounds(*edge, parent_sides).into())
            }
        }

        let style = style.into().unwrap_or_else(|| self.style_for(sides));
        for (index, edge) in pairs {
            self.add(index, edge, sides, style.clone())?;
        }
        Ok(start..self.shapes.len())
    }

    pub fn get(&self, index: usize) -> Option<&RegularPolygon> {
        self.shapes.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn lookup_len(&self) -> usize {
        self.lookup.len()
    }

    pub fn shapes(&self) -> &[RegularPolygon] {
        &self.shapes
    }

    // tiles iterates the deduplicated polygons in the order their positions were first filled
    pub fn tiles(&self) -> impl Iterator<Item = &RegularPolygon> {
        self.lookup.values()
    }
}
