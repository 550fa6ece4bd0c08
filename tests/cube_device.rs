#![allow(missing_docs)]
//! Host-level tests for the cube device against a recording strand.

use core::convert::Infallible;

use cube_kit::{
    Error,
    cube::{Cube, UpdateMode},
    frame::colors,
    geometry::{Axis, CubeGeometry},
};
use smart_leds::{RGB8, SmartLedsWrite};

#[derive(Default)]
struct RecordingStrand {
    writes: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for RecordingStrand {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.writes
            .push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

struct BrokenStrand;

impl SmartLedsWrite for BrokenStrand {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        Err(())
    }
}

fn small_cube() -> Cube<RecordingStrand, 27> {
    let geometry = CubeGeometry::uniform(3).expect("valid side");
    Cube::new(geometry, RecordingStrand::default()).expect("frame fits")
}

fn lit(cube: &Cube<RecordingStrand, 27>, color: RGB8) -> Vec<usize> {
    cube.frame()
        .iter()
        .enumerate()
        .filter(|(_, led)| **led == color)
        .map(|(index, _)| index)
        .collect()
}

#[test]
fn new_rejects_mismatched_frame() {
    let geometry = CubeGeometry::uniform(4).expect("valid side");
    let result = Cube::<_, 27>::new(geometry, RecordingStrand::default());
    assert!(matches!(
        result,
        Err(Error::FrameLength {
            expected: 64,
            actual: 27
        })
    ));
}

#[test]
fn new_cube_is_dark_and_unwritten() {
    let cube = small_cube();
    assert_eq!(cube.update_mode(), UpdateMode::Auto);
    assert!(cube.frame().iter().all(|led| *led == colors::BLACK));
    assert!(cube.strand().writes.is_empty());
}

#[test]
fn auto_mode_writes_after_every_change() {
    let mut cube = small_cube();
    cube.set_all(colors::RED).expect("write");
    cube.set_pixel(4, colors::BLUE).expect("write");

    let writes = &cube.strand().writes;
    assert_eq!(writes.len(), 2);
    assert!(writes[0].iter().all(|led| *led == colors::RED));
    assert_eq!(writes[1].len(), 27);
    assert_eq!(writes[1][4], colors::BLUE);
}

#[test]
fn manual_mode_waits_for_show() {
    let mut cube = small_cube();
    cube.set_update_mode(UpdateMode::Manual);
    cube.set_xyz(0, 1, 0, colors::GREEN).expect("buffered");
    assert!(cube.strand().writes.is_empty());
    assert_eq!(cube.pixel(5), Some(colors::GREEN));

    cube.show().expect("write");
    let strand = cube.into_strand();
    assert_eq!(strand.writes.len(), 1);
    assert_eq!(strand.writes[0][5], colors::GREEN);
}

#[test]
fn off_cube_writes_are_discarded() {
    let mut cube = small_cube();
    cube.set_update_mode(UpdateMode::Manual);
    cube.set_xyz(3, 0, 0, colors::WHITE).expect("discarded");
    cube.set_xyz(0, 0, -1, colors::WHITE).expect("discarded");
    cube.set_pixel(27, colors::WHITE).expect("discarded");
    cube.set_pixel(1000, colors::WHITE).expect("discarded");
    assert!(lit(&cube, colors::WHITE).is_empty());
    assert_eq!(cube.pixel(27), None);
}

#[test]
fn set_plane_colors_one_layer() {
    let mut cube = small_cube();
    cube.set_update_mode(UpdateMode::Manual);
    cube.set_plane(1, Axis::Xy, colors::BLUE).expect("buffered");
    assert_eq!(lit(&cube, colors::BLUE), (9..18).collect::<Vec<_>>());
}

#[test]
fn set_plane_colors_vertical_slice() {
    let mut cube = small_cube();
    cube.set_update_mode(UpdateMode::Manual);
    cube.set_plane(0, Axis::Yz, colors::RED).expect("buffered");
    let mut expected = vec![0, 17, 18, 5, 16, 23, 6, 15, 24];
    expected.sort_unstable();
    assert_eq!(lit(&cube, colors::RED), expected);
}

#[test]
fn set_plane_off_cube_changes_nothing() {
    let mut cube = small_cube();
    cube.set_plane(3, Axis::Xz, colors::RED).expect("write");
    assert!(lit(&cube, colors::RED).is_empty());
    // Auto mode still refreshes the strand.
    assert_eq!(cube.strand().writes.len(), 1);
}

#[test]
fn clear_turns_everything_off() {
    let mut cube = small_cube();
    cube.set_all(colors::YELLOW).expect("write");
    cube.clear().expect("write");
    assert!(cube.frame().iter().all(|led| *led == colors::BLACK));
}

#[test]
fn map_pixel_matches_geometry() {
    let cube = small_cube();
    assert_eq!(cube.map_pixel(0, 0, 1), 17);
    assert_eq!(cube.map_pixel(0, 0, 3), 27);
    assert_eq!(cube.map_pixel(0, 0, 1), cube.geometry().map(0, 0, 1));
}

#[test]
fn composite_cube_drives_512_leds() {
    let geometry = CubeGeometry::composite(None).expect("valid");
    let mut cube = Cube::<_, 512>::new(geometry, RecordingStrand::default()).expect("fits");
    cube.set_xyz(3, 3, 0, colors::GREEN).expect("write");
    assert_eq!(cube.pixel(256), Some(colors::GREEN));
    assert_eq!(cube.strand().writes[0].len(), 512);
}

#[test]
fn strand_failure_is_reported() {
    let geometry = CubeGeometry::uniform(3).expect("valid side");
    let mut cube = Cube::<_, 27>::new(geometry, BrokenStrand).expect("frame fits");
    assert_eq!(cube.set_all(colors::RED), Err(Error::StrandWrite));

    cube.set_update_mode(UpdateMode::Manual);
    assert_eq!(cube.set_all(colors::RED), Ok(()));
    assert_eq!(cube.show(), Err(Error::StrandWrite));
}
