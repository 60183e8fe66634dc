//! Spherical Coordinate Conversion Tool
//!
//! Converts points between spherical and Cartesian coordinates and applies
//! axis-angle rotations to spherical points.
//!
//! Usage:
//!   cargo run --bin sphere_convert -- to-cartesian --radius 1 --theta 90 --phi 90 --degrees
//!   cargo run --bin sphere_convert -- from-cartesian 1 0 0 --degrees
//!   cargo run --bin sphere_convert -- --json rotate --radius 1 --theta 90 --phi 0 --axis 0 1 0 --angle 90 --degrees

use clap::{ArgAction, Parser, Subcommand};
use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::Serialize;
use spherevec::{Radian, SphereVector, SphericalError};

/// Type alias for the error type used throughout this binary
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Spherical Coordinate Conversion Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts between spherical and Cartesian coordinates",
    long_about = None
)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a spherical coordinate to a Cartesian vector
    ToCartesian {
        #[command(flatten)]
        point: SphericalArgs,
    },

    /// Convert a Cartesian vector to a spherical coordinate
    FromCartesian {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,

        /// Report angles in degrees
        #[arg(short, long, action = ArgAction::SetTrue)]
        degrees: bool,
    },

    /// Rotate a spherical coordinate around the origin
    Rotate {
        #[command(flatten)]
        point: SphericalArgs,

        /// Rotation axis as three components
        #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["X", "Y", "Z"])]
        axis: Vec<f64>,

        /// Rotation angle (right-handed about the axis)
        #[arg(long, allow_negative_numbers = true)]
        angle: f64,
    },
}

#[derive(clap::Args, Debug)]
struct SphericalArgs {
    /// Distance from the origin
    #[arg(long, allow_negative_numbers = true)]
    radius: f64,

    /// Polar angle from +Y
    #[arg(long, allow_negative_numbers = true)]
    theta: f64,

    /// Azimuth around +Y, from +Z towards +X
    #[arg(long, allow_negative_numbers = true)]
    phi: f64,

    /// Angles are given (and reported) in degrees instead of radians
    #[arg(short, long, action = ArgAction::SetTrue)]
    degrees: bool,
}

impl SphericalArgs {
    fn angle(&self, value: f64) -> Radian {
        if self.degrees {
            Radian::from_degrees(value)
        } else {
            Radian::new(value)
        }
    }

    fn sphere_vector(&self) -> SphereVector {
        SphereVector::new(self.radius, self.angle(self.theta), self.angle(self.phi))
    }
}

#[derive(Serialize)]
struct CartesianOutput {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Vector3<f64>> for CartesianOutput {
    fn from(v: Vector3<f64>) -> Self {
        CartesianOutput {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

#[derive(Serialize)]
struct SphericalOutput {
    radius: f64,
    theta: f64,
    phi: f64,
    unit: &'static str,
}

impl SphericalOutput {
    fn new(sv: &SphereVector, degrees: bool) -> Self {
        if degrees {
            SphericalOutput {
                radius: sv.radius,
                theta: sv.theta.degrees(),
                phi: sv.phi.degrees(),
                unit: "deg",
            }
        } else {
            SphericalOutput {
                radius: sv.radius,
                theta: sv.theta.radians(),
                phi: sv.phi.radians(),
                unit: "rad",
            }
        }
    }
}

fn render_cartesian(v: Vector3<f64>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&CartesianOutput::from(v))?);
    }
    Ok(format!("x: {}\ny: {}\nz: {}", v.x, v.y, v.z))
}

fn render_spherical(sv: &SphereVector, degrees: bool, json: bool) -> Result<String> {
    let output = SphericalOutput::new(sv, degrees);
    if json {
        return Ok(serde_json::to_string(&output)?);
    }
    Ok(format!(
        "radius: {}\ntheta: {} {}\nphi: {} {}",
        output.radius, output.theta, output.unit, output.phi, output.unit
    ))
}

/// Builds the rotation for the `rotate` subcommand
fn axis_rotation(axis: &[f64], angle: Radian) -> Result<UnitQuaternion<f64>> {
    let &[x, y, z] = axis else {
        return Err(format!("expected 3 axis components, got {}", axis.len()).into());
    };
    let axis = Unit::try_new(Vector3::new(x, y, z), 0.0).ok_or(SphericalError::DegenerateVector)?;
    Ok(UnitQuaternion::from_axis_angle(&axis, angle.radians()))
}

/// Executes a parsed command and returns the text to print
fn run(args: &Args) -> Result<String> {
    match &args.command {
        Command::ToCartesian { point } => {
            render_cartesian(point.sphere_vector().to_cartesian(), args.json)
        }
        Command::FromCartesian { x, y, z, degrees } => {
            let sv = SphereVector::try_from_cartesian(&Vector3::new(*x, *y, *z))?;
            render_spherical(&sv, *degrees, args.json)
        }
        Command::Rotate { point, axis, angle } => {
            let rotation = axis_rotation(axis, point.angle(*angle))?;
            let rotated = point.sphere_vector() * rotation;
            render_spherical(&rotated, point.degrees, args.json)
        }
    }
}

fn main() {
    let args = Args::parse();
    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
