//! Rectangles from Well-Known Text geometries.
use std::str::FromStr;

use wkt::types::{Coord, LineString, Polygon};
use wkt::{Geometry, Wkt};

use crate::utils::rectangles_from_coordinates;
use crate::{Coordinate, RTreeError, Rectangle, Result};

/// Parse `text` into its top-level geometries.
pub fn parse_wkt(text: &str) -> Result<Vec<Geometry<f64>>> {
    let parsed: Wkt<f64> = Wkt::from_str(text).map_err(|e| RTreeError::Wkt(e.to_string()))?;
    Ok(parsed.items)
}

/// The envelope of every non-empty geometry in `text`.
pub fn envelopes(text: &str) -> Result<Vec<Rectangle>> {
    Ok(parse_wkt(text)?
        .iter()
        .map(|geometry| {
            let mut paths = Vec::new();
            collect_paths(geometry, &mut paths);
            let coords: Vec<Coordinate> = paths.into_iter().flatten().collect();
            Rectangle::of(&coords)
        })
        .filter(|rect| !rect.is_empty())
        .collect())
}

/// One rectangle per line segment of every linestring and polygon ring in
/// `text`. Points contribute nothing.
pub fn segment_envelopes(text: &str) -> Result<Vec<Rectangle>> {
    let mut paths = Vec::new();
    for geometry in parse_wkt(text)?.iter() {
        collect_paths(geometry, &mut paths);
    }
    Ok(paths
        .iter()
        .flat_map(|path| rectangles_from_coordinates(path))
        .collect())
}

fn collect_paths(geometry: &Geometry<f64>, paths: &mut Vec<Vec<Coordinate>>) {
    match geometry {
        Geometry::Point(point) => paths.extend(point.0.as_ref().map(|c| vec![coordinate(c)])),
        Geometry::LineString(line) => paths.push(line_coordinates(line)),
        Geometry::Polygon(polygon) => push_rings(polygon, paths),
        Geometry::MultiPoint(points) => paths.extend(
            points
                .0
                .iter()
                .filter_map(|p| p.0.as_ref().map(|c| vec![coordinate(c)])),
        ),
        Geometry::MultiLineString(lines) => {
            paths.extend(lines.0.iter().map(line_coordinates));
        }
        Geometry::MultiPolygon(polygons) => {
            for polygon in &polygons.0 {
                push_rings(polygon, paths);
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in &collection.0 {
                collect_paths(inner, paths);
            }
        }
    }
}

fn push_rings(polygon: &Polygon<f64>, paths: &mut Vec<Vec<Coordinate>>) {
    paths.extend(polygon.0.iter().map(line_coordinates));
}

fn line_coordinates(line: &LineString<f64>) -> Vec<Coordinate> {
    line.0.iter().map(coordinate).collect()
}

fn coordinate(coord: &Coord<f64>) -> Coordinate {
    Coordinate::new(coord.x, coord.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_envelope() {
        let rects = envelopes("POLYGON((0 0, 10 0, 10 5, 0 5, 0 0))").unwrap();
        assert_eq!(rects, vec![Rectangle::new((0., 0.).into(), (10., 5.).into())]);
    }

    #[test]
    fn test_collection_envelope() {
        let rects =
            envelopes("GEOMETRYCOLLECTION(POINT(-3 4), LINESTRING(1 1, 2 8))").unwrap();
        assert_eq!(rects, vec![Rectangle::new((-3., 1.).into(), (2., 8.).into())]);
    }

    #[test]
    fn test_segment_envelopes() {
        let rects = segment_envelopes("LINESTRING(0 0, 4 2, 1 5)").unwrap();
        assert_eq!(
            rects,
            vec![
                Rectangle::new((0., 0.).into(), (4., 2.).into()),
                Rectangle::new((1., 2.).into(), (4., 5.).into()),
            ]
        );
        assert!(segment_envelopes("POINT(1 1)").unwrap().is_empty());
    }

    #[test]
    fn test_bad_wkt() {
        assert!(matches!(envelopes("POLYGON((0 0, 1"), Err(RTreeError::Wkt(_))));
    }
}
