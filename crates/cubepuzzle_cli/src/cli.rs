use std::io::{Read, Write};

use cubepuzzle::prelude::*;
use eyre::{Context, Result};
use serde::Serialize;

/// Apply rotations to a 3x3x3 cube and print its faces.
///
/// Each rotation is written as `AXIS,QUARTER_TURNS[,START[,END]]`, where
/// `AXIS` is `x`, `y`, or `z`, `QUARTER_TURNS` counts counterclockwise quarter
/// turns viewed from the positive end of the axis, and `START..=END` selects
/// layers in the range -1 to 1. `START` defaults to 1 and `END` defaults to
/// `START`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Rotations to apply, in order (such as `x,1` or `y,-1,-1,1`).
    #[arg(value_parser = parse_rotation, value_name = "ROTATION")]
    pub rotations: Vec<Rotation>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Net)]
    pub format: OutputFormat,

    /// Piece list to start from, as written by `--format pieces`; use '-' for
    /// stdin. If omitted, the cube starts solved.
    #[arg(long, value_parser)]
    pub from: Option<clio::Input>,
}

#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Cross-shaped text net.
    #[default]
    Net,
    /// Color codes of each face as JSON.
    Faces,
    /// Piece list as JSON.
    Pieces,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let mut cube = match args.from {
        Some(input) => read_piece_list(input)?,
        None => Cube::new(),
    };

    log::debug!("applying {} rotations", args.rotations.len());
    cube.turn_all(&args.rotations);

    match args.format {
        OutputFormat::Net => {
            println!("{cube}");
            Ok(())
        }
        OutputFormat::Faces => write_json_output(&FacesOutput::new(&cube)),
        OutputFormat::Pieces => write_json_output(&cube),
    }
}

/// Reads a piece list as written by `--format pieces`.
fn read_piece_list(mut input: impl Read) -> Result<Cube> {
    let mut buffer = String::new();
    input
        .read_to_string(&mut buffer)
        .context("error reading piece list")?;
    serde_json::from_str(&buffer).context("error deserializing piece list")
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    write_json(std::io::stdout(), value).context("error writing to stdout")?;
    println!();
    Ok(())
}

fn write_json<T: Serialize>(writer: impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(writer, value).context("error serializing data")
}

/// Flattened cube as numeric color codes (see [`Face::code()`]).
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct FacesOutput {
    solved: bool,
    faces: FaceCodes,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
struct FaceCodes {
    r: [[u8; 3]; 3],
    l: [[u8; 3]; 3],
    u: [[u8; 3]; 3],
    d: [[u8; 3]; 3],
    f: [[u8; 3]; 3],
    b: [[u8; 3]; 3],
}

impl FacesOutput {
    fn new(cube: &Cube) -> Self {
        let flat = cube.flatten();
        Self {
            solved: cube.is_solved(),
            faces: FaceCodes {
                r: flat[Face::R].codes(),
                l: flat[Face::L].codes(),
                u: flat[Face::U].codes(),
                d: flat[Face::D].codes(),
                f: flat[Face::F].codes(),
                b: flat[Face::B].codes(),
            },
        }
    }
}

/// Error produced when parsing a rotation argument.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseRotationError {
    /// Wrong number of comma-separated fields
    #[error("expected `AXIS,QUARTER_TURNS[,START[,END]]`; got {0:?}")]
    WrongFieldCount(String),
    /// Invalid axis
    #[error(transparent)]
    Axis(#[from] ParseAxisError),
    /// Invalid integer
    #[error("invalid {field} {value:?}")]
    Int {
        /// Name of the field.
        field: &'static str,
        /// Text that failed to parse.
        value: String,
    },
    /// Layer outside the cube
    #[error("layer {0} is outside the range -1 to 1")]
    LayerOutOfRange(i8),
}

fn parse_rotation(s: &str) -> Result<Rotation, ParseRotationError> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    let [axis, quarter_turns, layers @ ..] = fields.as_slice() else {
        return Err(ParseRotationError::WrongFieldCount(s.to_owned()));
    };

    let axis: Axis = axis.parse()?;
    let quarter_turns: i32 = quarter_turns.parse().map_err(|_| ParseRotationError::Int {
        field: "quarter turn count",
        value: quarter_turns.to_string(),
    })?;
    let parse_layer = |value: &str| -> Result<i8, ParseRotationError> {
        let layer: i8 = value.parse().map_err(|_| ParseRotationError::Int {
            field: "layer",
            value: value.to_owned(),
        })?;
        match layer {
            -1..=1 => Ok(layer),
            _ => Err(ParseRotationError::LayerOutOfRange(layer)),
        }
    };
    let (start, end) = match layers {
        [] => (1, 1),
        [start] => {
            let start = parse_layer(*start)?;
            (start, start)
        }
        [start, end] => (parse_layer(*start)?, parse_layer(*end)?),
        _ => return Err(ParseRotationError::WrongFieldCount(s.to_owned())),
    };

    Ok(Rotation::new(axis, quarter_turns).with_layers(start, end))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("x,1"), Ok(Rotation::new(Axis::X, 1)));
        assert_eq!(
            parse_rotation("y, -1, 0"),
            Ok(Rotation::slice(Axis::Y, -1, 0)),
        );
        assert_eq!(
            parse_rotation("2,2,-1,1"),
            Ok(Rotation::whole_cube(Axis::Z, 2)),
        );
        assert_eq!(
            parse_rotation("x"),
            Err(ParseRotationError::WrongFieldCount("x".to_owned())),
        );
        assert_eq!(
            parse_rotation("w,1"),
            Err(ParseRotationError::Axis(ParseAxisError("w".to_owned()))),
        );
        assert_eq!(
            parse_rotation("x,1,2"),
            Err(ParseRotationError::LayerOutOfRange(2)),
        );
        assert!(matches!(
            parse_rotation("x,half"),
            Err(ParseRotationError::Int { .. }),
        ));
    }

    #[test]
    fn test_faces_output() {
        let mut cube = Cube::new();
        let output = FacesOutput::new(&cube);
        assert!(output.solved);
        assert_eq!(output.faces.r, [[1; 3]; 3]);
        assert_eq!(output.faces.b, [[6; 3]; 3]);

        cube.turn(&Rotation::new(Axis::X, 1));
        let output = FacesOutput::new(&cube);
        assert!(!output.solved);
        assert_eq!(output.faces.f[0], [5, 5, 3]);
    }

    #[test]
    fn test_piece_list_roundtrip() {
        let mut cube = Cube::new();
        cube.turn_all(&[
            Rotation::face_twist(Face::R, TwistDirection::Cw),
            Rotation::slice(Axis::Y, 1, 0),
            Rotation::whole_cube(Axis::Z, -1),
        ]);

        let mut written = vec![];
        write_json(&mut written, &cube).expect("error writing piece list");
        let read = read_piece_list(written.as_slice()).expect("error reading piece list");
        assert_eq!(read, cube);
    }

    #[test]
    fn test_read_piece_list_rejects_forged_stickers() {
        let mut written = vec![];
        write_json(&mut written, &Cube::new()).expect("error writing piece list");
        let mut pieces: serde_json::Value =
            serde_json::from_slice(&written).expect("error parsing piece list");
        // Give the right center the left color.
        for piece in pieces.as_array_mut().expect("expected piece list") {
            if piece["home"] == serde_json::json!([1, 0, 0]) {
                piece["identity"] = serde_json::json!([2, 0, 0]);
            }
        }
        let forged = pieces.to_string();

        let err = read_piece_list(forged.as_bytes()).expect_err("forged piece list was accepted");
        assert!(
            err.chain().any(|e| e.to_string().contains("belong to another piece")),
            "{err:?}",
        );

        assert!(read_piece_list("not json".as_bytes()).is_err());
    }

    #[test]
    fn test_args() {
        use clap::Parser;

        let args = Args::try_parse_from(["cubepuzzle", "--format", "faces", "x,1", "y,-1,-1,1"])
            .expect("error parsing arguments");
        assert_eq!(args.format, OutputFormat::Faces);
        assert_eq!(
            args.rotations,
            vec![Rotation::new(Axis::X, 1), Rotation::whole_cube(Axis::Y, -1)],
        );
        assert!(args.from.is_none());
    }
}
