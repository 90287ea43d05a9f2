// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! simgeom CLI entrypoint.
//!
//! Runs the geometry kernel from the command line: convex hulls, minimum
//! bounding rectangles, containment, segment distance, rotations and
//! bearings.
//!
//! # Usage
//! ```text
//! simgeom [--format table|json] [--precision N] [-v] <command> [args]
//! ```
//!
//! Vectors are written `x,y,z` or `(x, y, z)`. Commands that take a point set
//! accept vectors as arguments or `--file` pointing at a JSON array of
//! `[x, y, z]` triples. The CLI exits with code `0` on success and non-zero
//! on error.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod output;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use simgeom_geom::{closest_approach, distance_to_point, minimum_bounding_rectangle, Polygon};
use simgeom_math::angles::{bearing, bounded_positive_angle_degrees};
use simgeom_math::{Quat, Vec3};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::output::OutputOptions;
use crate::report::{Field, Report};

#[derive(Parser, Debug)]
#[command(author, version, about = "simgeom geometry kernel CLI")]
struct Cli {
    #[command(flatten)]
    output: OutputOptions,
    /// Log fallbacks and diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

/// A point set given inline or through a JSON file.
#[derive(clap::Args, Debug)]
struct PointSet {
    /// Points as `x,y,z`
    #[arg(allow_hyphen_values = true, conflicts_with = "file")]
    points: Vec<Vec3>,
    /// JSON file holding an array of `[x, y, z]` triples
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convex hull of a point set (counter-clockwise)
    Hull(PointSet),
    /// Minimum-area bounding rectangle of a point set
    Mbr(PointSet),
    /// Test whether a point lies inside a polygon
    Contains {
        /// Point to test
        #[arg(long, allow_hyphen_values = true)]
        point: Vec3,
        /// Test against the convex hull instead of the vertices as given
        #[arg(long)]
        hull: bool,
        #[command(flatten)]
        polygon: PointSet,
    },
    /// Minimum distance between two segments, with the closest points
    SegmentDistance {
        /// First segment start
        #[arg(allow_hyphen_values = true)]
        a_start: Vec3,
        /// First segment end
        #[arg(allow_hyphen_values = true)]
        a_end: Vec3,
        /// Second segment start
        #[arg(allow_hyphen_values = true)]
        b_start: Vec3,
        /// Second segment end
        #[arg(allow_hyphen_values = true)]
        b_end: Vec3,
    },
    /// Distance from a point to a segment
    PointDistance {
        /// Segment start
        #[arg(allow_hyphen_values = true)]
        start: Vec3,
        /// Segment end
        #[arg(allow_hyphen_values = true)]
        end: Vec3,
        /// Query point
        #[arg(allow_hyphen_values = true)]
        point: Vec3,
    },
    /// Rotate a vector about an axis
    Rotate {
        /// Rotation axis (normalized internally)
        #[arg(long, allow_hyphen_values = true)]
        axis: Vec3,
        /// Rotation angle in degrees, counter-clockwise about the axis
        #[arg(long, allow_hyphen_values = true)]
        degrees: f64,
        /// Vector to rotate
        #[arg(allow_hyphen_values = true)]
        vector: Vec3,
    },
    /// Navigation bearing of a velocity: degrees clockwise from +Y, in (0, 360]
    Bearing {
        /// Velocity vector
        #[arg(allow_hyphen_values = true)]
        velocity: Vec3,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = match cli.command {
        Command::Hull(set) => hull(&set.resolve()?),
        Command::Mbr(set) => mbr(&set.resolve()?)?,
        Command::Contains {
            point,
            hull,
            polygon,
        } => contains(&polygon.resolve()?, &point, hull),
        Command::SegmentDistance {
            a_start,
            a_end,
            b_start,
            b_end,
        } => segment_distance(&a_start, &a_end, &b_start, &b_end),
        Command::PointDistance { start, end, point } => point_distance(&start, &end, &point),
        Command::Rotate {
            axis,
            degrees,
            vector,
        } => rotate(axis, degrees, vector),
        Command::Bearing { velocity } => Report::new().with(
            "bearing_degrees",
            Field::Number(bounded_positive_angle_degrees(bearing(&velocity).to_degrees())),
        ),
    };

    println!("{}", report.render(&cli.output)?);
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

impl PointSet {
    fn resolve(self) -> Result<Vec<Vec3>> {
        let points = match self.file {
            Some(path) => read_points(&path)?,
            None => self.points,
        };
        if points.is_empty() {
            bail!("no points given; pass vectors or --file");
        }
        Ok(points)
    }
}

fn read_points(path: &Path) -> Result<Vec<Vec3>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let points: Vec<Vec3> = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of [x, y, z]", path.display()))?;
    debug!(count = points.len(), path = %path.display(), "loaded points");
    Ok(points)
}

fn hull(points: &[Vec3]) -> Report {
    let hull = Polygon::convex_hull(points);
    Report::new()
        .with("vertex_count", Field::Count(hull.len()))
        .with("vertices", Field::Points(hull.into_points()))
}

fn mbr(points: &[Vec3]) -> Result<Report> {
    let Some(rect) = minimum_bounding_rectangle(points) else {
        bail!("no bounding rectangle exists for these points");
    };
    Ok(Report::new()
        .with("area", Field::Number(rect.area))
        .with("corners", Field::Points(rect.polygon.into_points())))
}

fn contains(vertices: &[Vec3], point: &Vec3, use_hull: bool) -> Report {
    let polygon = if use_hull {
        Polygon::convex_hull(vertices)
    } else {
        Polygon::from_points(vertices)
    };
    Report::new().with("inside", Field::Flag(polygon.contains(point)))
}

fn segment_distance(a_start: &Vec3, a_end: &Vec3, b_start: &Vec3, b_end: &Vec3) -> Report {
    let approach = closest_approach(a_start, a_end, b_start, b_end);
    Report::new()
        .with("distance", Field::Number(approach.distance))
        .with("first_point", Field::Point(approach.first_point))
        .with("second_point", Field::Point(approach.second_point))
        .with("region", Field::Text(format!("{:?}", approach.region)))
}

fn point_distance(start: &Vec3, end: &Vec3, point: &Vec3) -> Report {
    let d = distance_to_point(start, end, &end.sub(start), point);
    Report::new().with("distance", Field::Number(d))
}

fn rotate(axis: Vec3, degrees: f64, vector: Vec3) -> Report {
    let q = Quat::from_axis_angle(axis, degrees.to_radians());
    Report::new()
        .with("rotated", Field::Point(q.rotate(vector)))
        .with("quaternion", Field::Text(q.to_string()))
}
