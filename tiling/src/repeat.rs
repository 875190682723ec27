use crate::{
    error::{Error, Result},
    model::{place_into, Insert, Model},
};
use geometry::{GeometryErr, Key, Point, ORIGIN};
use std::collections::{hash_map::Entry, HashMap, VecDeque};

// Visit records a lattice point reached by the replicator and the largest number of steps that
// were still left when it was reached
#[derive(Clone, Debug)]
struct Visit {
    point: Point,
    depth: usize,
}

impl Model {
    // repeat translates the motif along every combination of the generators (the centers of the
    // motif polygons at the given indices) until the viewport is covered, returning the number of
    // generator steps that were needed
    pub fn repeat(&mut self, generators: &[usize]) -> Result<usize> {
        self.replicate(generators).map(|(depth, _)| depth)
    }

    // replicate is repeat, also returning the lattice points the motif was copied onto
    fn replicate(&mut self, generators: &[usize]) -> Result<(usize, Vec<Point>)> {
        if generators.is_empty() {
            return Err(Error::NoGenerators)
        }
        let generators = generators
            .iter()
            .map(|index| self.get(*index).map(|polygon| polygon.center()).ok_or(Error::IndexOutOfBounds(*index, self.len())))
            .collect::<Result<Vec<Point>>>()?;

        let viewport = self.config.viewport();
        let mut memo: HashMap<Key, Visit> = HashMap::default();
        for depth in 0..=self.config.max_depth {
            self.explore(&generators, depth, &mut memo)?;
            console::debug!("repeat pass {}: {} lattice points, {} tiles", depth, memo.len(), self.lookup.len());
            if viewport.covered_by(memo.values().map(|visit| &visit.point)) {
                console::log!("viewport covered after {} steps with {} tiles", depth, self.lookup.len());
                return Ok((depth, memo.into_values().map(|visit| visit.point).collect()))
            }
        }
        console::err!("viewport not covered after {} steps", self.config.max_depth);
        Err(Error::CoverageNotReached(self.config.max_depth))
    }

    // explore walks the lattice outward from the origin, at most depth generator steps, copying
    // the motif onto each lattice point the first time it is reached. Points already reached with
    // at least as many steps to spare are not walked again.
    fn explore(&mut self, generators: &[Point], depth: usize, memo: &mut HashMap<Key, Visit>) -> Result<()> {
        let mut worklist = VecDeque::from(vec![(ORIGIN, depth)]);
        while let Some((point, depth)) = worklist.pop_front() {
            let key = point.key().ok_or(GeometryErr::Unrepresentable(point))?;
            match memo.entry(key) {
                Entry::Occupied(mut entry) => {
                    if entry.get().depth >= depth {
                        continue
                    }
                    entry.get_mut().depth = depth;
                },
                Entry::Vacant(entry) => {
                    entry.insert(Visit { point, depth });
                    self.add_repeats(&point)?;
                },
            }
            if depth == 0 {
                continue
            }
            for generator in generators.iter() {
                worklist.push_back((&point + generator, depth - 1));
            }
        }
        Ok(())
    }

    // add_repeats copies every motif polygon shifted by offset, never displacing a polygon
    // already in place
    fn add_repeats(&mut self, offset: &Point) -> Result<()> {
        let Model { shapes, lookup, .. } = self;
        for polygon in shapes.iter() {
            place_into(lookup, polygon.translate(offset)?, Insert::KeepFirst);
        }
        Ok(())
    }
}
