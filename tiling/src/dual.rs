use crate::{error::Result, model::Model};
use geometry::{GeometryErr, Key, Point};
use indexmap::IndexMap;
use tile::{DualPolygon, RegularPolygon};

impl Model {
    // dual connects the centers of the polygons around every vertex shared by at least three of
    // them. Each dual polygon winds counter-clockwise around its vertex, has as many sides as the
    // vertex has polygons and takes its style from the palette by that count.
    pub fn dual(&self) -> Result<Vec<DualPolygon>> {
        let mut vertices: IndexMap<Key, (Point, Vec<&RegularPolygon>)> = IndexMap::default();
        for polygon in self.tiles() {
            let points = polygon.points(0.);
            for point in points[..points.len() - 1].iter() {
                let key = point.key().ok_or(GeometryErr::Unrepresentable(*point))?;
                vertices.entry(key).or_insert_with(|| (*point, vec![])).1.push(polygon);
            }
        }

        let mut skipped = 0;
        let mut duals = Vec::with_capacity(vertices.len());
        for (vertex, polygons) in vertices.values() {
            if polygons.len() < 3 {
                skipped += 1;
                continue
            }
            let mut centers: Vec<(f64, Point)> = polygons
                .iter()
                .map(|polygon| ((polygon.center() - *vertex).arg(), polygon.center()))
                .collect();
            centers.sort_by(|(a, _), (b, _)| a.total_cmp(b));
            let style = self.config.palette.style_for(centers.len());
            duals.push(DualPolygon::new(centers.into_iter().map(|(_, center)| center).collect(), style)?);
        }
        console::debug!("dual: {} polygons, {} vertices on the boundary skipped", duals.len(), skipped);
        Ok(duals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{config, trihexagonal, truncated_square};
    use geometry::{signed_area, ORIGIN};
    use itertools::Itertools;
    use tile::{Palette, Style, ORANGE};

    #[test]
    fn test_dual_square_corner() {
        let mut model = Model::default();
        model.append(RegularPolygon::new(4, ORIGIN, 0., Style::default()).unwrap());
        let right = model.add(0, 0, 4, Style::default()).unwrap();
        model.add(0, 1, 4, Style::default()).unwrap();
        model.add(right, 3, 4, Style::default()).unwrap();

        let duals = model.dual().unwrap();
        assert_eq!(1, duals.len());
        assert_eq!(4, duals[0].sides());
        let expected = vec![Point(0., 0.), Point(1., 0.), Point(1., 1.), Point(0., 1.), Point(0., 0.)];
        assert_eq!(expected, duals[0].points(0.).unwrap());
        assert_eq!(&Palette::default().style_for(4), duals[0].style());
    }

    #[test]
    fn test_dual_too_few_polygons() {
        let mut model = Model::default();
        model.append(RegularPolygon::new(4, ORIGIN, 0., Style::default()).unwrap());
        model.add(0, 0, 4, Style::default()).unwrap();
        assert!(model.dual().unwrap().is_empty());
    }

    #[test]
    fn test_dual_trihexagonal() {
        let (mut model, hexagons) = trihexagonal(config(2));
        model.repeat(&hexagons.collect_vec()).unwrap();
        let duals = model.dual().unwrap();
        let counts = duals.iter().map(DualPolygon::sides).counts();
        assert_eq!(Some(&132), counts.get(&4));
        assert_eq!(Some(&24), counts.get(&3));
        assert_eq!(156, duals.len());
        for dual in duals.iter() {
            assert!(signed_area(&dual.points(0.).unwrap()) > 0.);
            if dual.sides() == 4 {
                assert_eq!(ORANGE, dual.style().fill);
            }
        }
    }

    #[test]
    fn test_dual_truncated_square() {
        // every vertex of 4.8.8 joins a square and two octagons
        let (mut model, octagons) = truncated_square(config(2));
        model.repeat(&octagons.collect_vec()).unwrap();
        let duals = model.dual().unwrap();
        assert_eq!(72, duals.len());
        assert!(duals.iter().all(|dual| dual.sides() == 3));
    }

    #[test]
    fn test_dual_palette() {
        let mut config = config(2);
        config.palette = Palette(vec![tile::WHITE]);
        let (mut model, hexagons) = trihexagonal(config);
        model.repeat(&hexagons.collect_vec()).unwrap();
        assert!(model.dual().unwrap().iter().all(|dual| dual.style().fill == tile::WHITE));
    }
}
